//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, GeminiError, JsonError};

/// Every error a Hookline component can raise.
///
/// # Examples
///
/// ```
/// use hookline_error::{HooklineError, AnalysisError};
///
/// let err: HooklineError = AnalysisError::validation("no files selected").into();
/// assert!(format!("{}", err).contains("no files selected"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HooklineErrorKind {
    /// Analysis pipeline error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON rendering error
    #[from(JsonError)]
    Json(JsonError),
}

/// Hookline error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hookline Error: {}", _0)]
pub struct HooklineError(Box<HooklineErrorKind>);

impl HooklineError {
    /// Create a new error from a kind.
    pub fn new(kind: HooklineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HooklineErrorKind {
        &self.0
    }

    /// HTTP status code reported by the provider, if this is a provider HTTP failure.
    pub fn status_code(&self) -> Option<u16> {
        match self.kind() {
            HooklineErrorKind::Gemini(e) => e.kind.status_code(),
            _ => None,
        }
    }

    /// Short message suitable for showing to an end user.
    ///
    /// ```
    /// use hookline_error::{HooklineError, GeminiError, GeminiErrorKind};
    ///
    /// let err: HooklineError = GeminiError::new(GeminiErrorKind::ApiRequest("reset".into())).into();
    /// assert_eq!(err.user_message(), "connection failed");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            HooklineErrorKind::Analysis(e) => e.user_message(),
            HooklineErrorKind::Gemini(e) if e.kind.status_code() == Some(413) => {
                "file too large for connection".to_string()
            }
            HooklineErrorKind::Gemini(_) => "connection failed".to_string(),
            HooklineErrorKind::Config(e) => e.message.clone(),
            HooklineErrorKind::Json(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to HooklineErrorKind
impl<T> From<T> for HooklineError
where
    T: Into<HooklineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hookline operations.
pub type HooklineResult<T> = std::result::Result<T, HooklineError>;
