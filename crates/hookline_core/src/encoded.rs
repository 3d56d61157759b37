//! Request-ready file payloads.

use serde::{Deserialize, Serialize};

/// A file converted into something the generative service accepts.
///
/// Small files travel inline as base64; large files are uploaded first and referenced
/// by URI. Exactly one representation exists per part.
///
/// # Examples
///
/// ```
/// use hookline_core::EncodedPart;
///
/// let part = EncodedPart::Remote {
///     uri: "https://example.com/v1beta/files/abc".to_string(),
///     mime_type: "video/mp4".to_string(),
/// };
/// assert!(!part.is_inline());
/// assert_eq!(part.mime_type(), "video/mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EncodedPart {
    /// Base64-encoded bytes embedded in the request
    Inline {
        /// Base64 payload (standard alphabet, padded)
        data: String,
        /// MIME type of the decoded bytes
        mime_type: String,
    },
    /// Reference to a file already uploaded to the service
    Remote {
        /// URI returned by the file service once processing finished
        uri: String,
        /// MIME type of the uploaded file
        mime_type: String,
    },
}

impl EncodedPart {
    /// MIME type of the underlying file.
    pub fn mime_type(&self) -> &str {
        match self {
            EncodedPart::Inline { mime_type, .. } | EncodedPart::Remote { mime_type, .. } => {
                mime_type
            }
        }
    }

    /// True for inline base64 parts.
    pub fn is_inline(&self) -> bool {
        matches!(self, EncodedPart::Inline { .. })
    }
}
