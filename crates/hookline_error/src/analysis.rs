//! Analysis pipeline errors.

/// Failure categories of a single analysis request.
///
/// Each variant maps to one user-facing category via [`AnalysisErrorKind::user_message`].
/// Validation failures are raised before any network traffic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// A precondition of the request was not met
    #[display("Validation failed: {}", _0)]
    Validation(String),
    /// Reading, uploading or polling an input file failed
    #[display("Encoding failed: {}", _0)]
    Encoding(String),
    /// A wall-clock budget was exceeded
    #[display("Timed out: {}", _0)]
    Timeout(String),
    /// The generative service call failed
    #[display("Transport failed: {}", message)]
    Transport {
        /// HTTP status code, when the service answered at all
        status_code: Option<u16>,
        /// Diagnostic message (not shown to end users)
        message: String,
    },
    /// The reply was not valid structured data
    #[display("Parse failed: {}", _0)]
    Parse(String),
    /// Trend extraction yielded nothing
    #[display("Not found: {}", _0)]
    NotFound(String),
}

impl AnalysisErrorKind {
    /// Short message suitable for showing to an end user.
    ///
    /// Raw service bodies never appear here.
    ///
    /// # Examples
    ///
    /// ```
    /// use hookline_error::AnalysisErrorKind;
    ///
    /// let kind = AnalysisErrorKind::Transport {
    ///     status_code: Some(413),
    ///     message: "Request Entity Too Large".to_string(),
    /// };
    /// assert_eq!(kind.user_message(), "file too large for connection");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            AnalysisErrorKind::Validation(reason) => reason.clone(),
            AnalysisErrorKind::Encoding(reason) => reason.clone(),
            AnalysisErrorKind::Timeout(_) => "request timed out".to_string(),
            AnalysisErrorKind::Transport {
                status_code: Some(413),
                ..
            } => "file too large for connection".to_string(),
            AnalysisErrorKind::Transport { .. } => "connection failed".to_string(),
            AnalysisErrorKind::Parse(_) => "the service reply could not be read".to_string(),
            AnalysisErrorKind::NotFound(_) => "no trends found".to_string(),
        }
    }
}

/// Analysis error with source location tracking.
///
/// # Examples
///
/// ```
/// use hookline_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::Validation("no files".to_string()));
/// assert!(format!("{}", err).contains("no files"));
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The kind of error that occurred
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a validation failure.
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::new(AnalysisErrorKind::Validation(reason.into()))
    }

    /// Shorthand for an encoding failure.
    #[track_caller]
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::new(AnalysisErrorKind::Encoding(reason.into()))
    }

    /// Shorthand for a timeout.
    #[track_caller]
    pub fn timeout(reason: impl Into<String>) -> Self {
        Self::new(AnalysisErrorKind::Timeout(reason.into()))
    }

    /// Shorthand for a parse failure.
    #[track_caller]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::new(AnalysisErrorKind::Parse(reason.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AnalysisErrorKind {
        &self.kind
    }

    /// Short message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        self.kind.user_message()
    }

    /// True when the request was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, AnalysisErrorKind::Validation(_))
    }

    /// True for both generation and polling timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, AnalysisErrorKind::Timeout(_))
    }
}

/// Result type for the analysis pipeline.
pub type EngineResult<T> = std::result::Result<T, AnalysisError>;
