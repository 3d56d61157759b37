//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not supplied
    #[display("Gemini API key is empty")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request could not be sent or its body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The resumable upload handshake did not return an upload URL
    #[display("Upload handshake returned no upload URL")]
    MissingUploadUrl,
    /// The response carried no candidate text
    #[display("Response contained no text: {}", _0)]
    EmptyResponse(String),
    /// The response body did not match the expected wire format
    #[display("Invalid response body: {}", _0)]
    InvalidResponse(String),
}

impl GeminiErrorKind {
    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use hookline_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 413,
///     message: "Payload too large".to_string(),
/// });
/// assert_eq!(err.kind.status_code(), Some(413));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
