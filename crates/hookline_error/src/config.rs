//! Configuration error types.

/// Configuration error with source location.
///
/// Raised while building, reading or deserializing `hookline.toml` layers.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {}{} at line {} in {}", message, origin_suffix(source_path.as_deref()), line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Configuration file involved, when known
    pub source_path: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

fn origin_suffix(path: Option<&str>) -> String {
    path.map(|p| format!(" ({})", p)).unwrap_or_default()
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use hookline_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field");
    /// assert!(err.message.contains("Missing required"));
    /// assert!(err.source_path.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            source_path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the configuration file this error came from.
    ///
    /// ```
    /// use hookline_error::ConfigError;
    ///
    /// let err = ConfigError::new("bad value").with_source_path("hookline.toml");
    /// assert!(format!("{}", err).contains("(hookline.toml)"));
    /// ```
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }
}
