//! Provider-neutral request and file types.

use hookline_core::EncodedPart;
use serde::{Deserialize, Serialize};

/// One element of the ordered request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPart {
    /// Instruction text
    Text {
        /// The text
        text: String,
    },
    /// Encoded file
    #[from]
    Media(EncodedPart),
}

impl ContentPart {
    /// Build a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// The text, for text parts.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text { text } => Some(text),
            ContentPart::Media(_) => None,
        }
    }
}

/// How the service is asked to shape its reply.
///
/// The hosted service rejects requests that combine a response schema with the
/// search tool, so a request carries exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract", rename_all = "snake_case")]
pub enum ResponseContract {
    /// JSON output constrained to the given schema
    StrictSchema {
        /// Schema in the service's OpenAPI subset
        schema: serde_json::Value,
    },
    /// Free text (expected to be JSON) with live search enabled
    SearchAugmented,
}

impl ResponseContract {
    /// The schema, when the strict path is used.
    pub fn schema(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseContract::StrictSchema { schema } => Some(schema),
            ResponseContract::SearchAugmented => None,
        }
    }

    /// Whether the search tool is engaged.
    pub fn uses_search(&self) -> bool {
        matches!(self, ResponseContract::SearchAugmented)
    }
}

/// A single outbound generation request.
///
/// # Examples
///
/// ```
/// use hookline_interface::{ContentPart, ResponseContract, ServiceRequest};
///
/// let request = ServiceRequest {
///     parts: vec![ContentPart::text("Find trends")],
///     system_instruction: "Reply with JSON".to_string(),
///     contract: ResponseContract::SearchAugmented,
/// };
///
/// assert!(request.contract.uses_search());
/// assert!(request.contract.schema().is_none());
/// assert_eq!(request.media_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Prompt text first, then file parts in input order
    pub parts: Vec<ContentPart>,
    /// System instruction text
    pub system_instruction: String,
    /// Reply shaping
    pub contract: ResponseContract,
}

impl ServiceRequest {
    /// Number of file parts in the payload.
    pub fn media_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, ContentPart::Media(_)))
            .count()
    }
}

/// Processing state of an uploaded file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileState {
    /// Still being processed; not usable yet
    Processing,
    /// Ready to be referenced
    Active,
    /// Processing failed permanently
    Failed,
    /// Any state this client does not know
    #[serde(other)]
    StateUnspecified,
}

/// A file known to the service's file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Resource name used for status checks (e.g. "files/abc123")
    pub name: String,
    /// URI used to reference the file in a generation request
    #[serde(default)]
    pub uri: String,
    /// MIME type recorded by the service
    #[serde(default)]
    pub mime_type: String,
    /// Processing state
    #[serde(default = "unspecified")]
    pub state: FileState,
}

fn unspecified() -> FileState {
    FileState::StateUnspecified
}
