//! Input files selected by the user.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Broad media category of an input file.
///
/// # Examples
///
/// ```
/// use hookline_core::MediaKind;
///
/// assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
/// assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
/// assert_eq!(MediaKind::from_mime("application/pdf"), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    #[display("image")]
    Image,
    /// Video clip
    #[display("video")]
    Video,
}

impl MediaKind {
    /// Classify a MIME type, returning `None` for anything that is not image or video.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let top = mime.split('/').next()?.trim().to_ascii_lowercase();
        match top.as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// Raw bytes of one selected file plus its declared media type.
///
/// The core never mutates an `InputFile`; `Bytes` makes handing the payload to an
/// upload body a reference-count bump rather than a copy.
///
/// # Examples
///
/// ```
/// use hookline_core::{InputFile, MediaKind};
///
/// let file = InputFile::new("cover.jpg", "image/jpeg", MediaKind::Image, vec![0xFF, 0xD8]);
/// assert_eq!(file.size(), 2);
/// assert_eq!(file.name(), "cover.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct InputFile {
    /// Display name (usually the file name)
    name: String,
    /// Declared MIME type, e.g. "image/png"
    mime_type: String,
    /// Image or video
    #[getter(skip)]
    kind: MediaKind,
    /// File contents
    bytes: Bytes,
}

impl InputFile {
    /// Wrap raw bytes as an input file.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        kind: MediaKind,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            kind,
            bytes: bytes.into(),
        }
    }

    /// Media category.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
