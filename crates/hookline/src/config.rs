//! Layered configuration for Hookline.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from hookline.toml)
//! - `~/.config/hookline/hookline.toml`
//! - `./hookline.toml`
//!
//! Every key is optional in the override files.

use config::{Config, File, FileFormat};
use hookline_engine::{EncoderSettings, OrchestratorSettings};
use hookline_error::{ConfigError, HooklineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../hookline.toml");

/// `[service]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Model identifier
    pub model: String,
    /// REST base URL
    pub base_url: String,
    /// Files API upload endpoint
    pub upload_base_url: String,
    /// Generation call timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            upload_base_url: "https://generativelanguage.googleapis.com/upload/v1beta/files"
                .to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// `[limits]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Combined input size ceiling in bytes
    pub max_total_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_total_bytes: hookline_engine::DEFAULT_MAX_TOTAL_BYTES,
        }
    }
}

/// Complete Hookline configuration.
///
/// # Example
///
/// ```no_run
/// use hookline::HooklineConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HooklineConfig::load()?;
/// println!("Using {}", config.service.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooklineConfig {
    /// Service endpoint and model
    pub service: ServiceConfig,
    /// Encoding thresholds and polling
    pub encoding: EncoderSettings,
    /// Request limits
    pub limits: LimitsConfig,
}

impl HooklineConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// Missing override files are skipped silently.
    #[instrument]
    pub fn load() -> HooklineResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/hookline/hookline.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("hookline").required(false));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;
        Self::deserialize_from(config, None)
    }

    /// Load bundled defaults overlaid with a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> HooklineResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ConfigError::new(format!("Failed to read configuration: {}", e))
                    .with_source_path(path.display().to_string())
            })?;
        Self::deserialize_from(config, Some(path))
    }

    /// Parse configuration from a TOML string on top of the bundled defaults.
    pub fn from_toml_str(toml: &str) -> HooklineResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;
        Self::deserialize_from(config, None)
    }

    fn deserialize_from(config: Config, path: Option<&Path>) -> HooklineResult<Self> {
        config.try_deserialize().map_err(|e| {
            let err = ConfigError::new(format!("Failed to parse configuration: {}", e));
            match path {
                Some(path) => err.with_source_path(path.display().to_string()).into(),
                None => err.into(),
            }
        })
    }

    /// Orchestrator limits from `[service]` and `[limits]`.
    pub fn orchestrator_settings(&self) -> HooklineResult<OrchestratorSettings> {
        OrchestratorSettings::builder()
            .request_timeout_secs(self.service.request_timeout_secs)
            .max_total_bytes(self.limits.max_total_bytes)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid limits: {}", e)).into())
    }

    /// Gemini endpoint settings from `[service]`.
    #[cfg(feature = "gemini")]
    pub fn gemini_settings(&self) -> hookline_models::GeminiSettings {
        hookline_models::GeminiSettings {
            model: self.service.model.clone(),
            base_url: self.service.base_url.clone(),
            upload_url: self.service.upload_base_url.clone(),
        }
    }

    /// Build an orchestrator backed by Gemini for both generation and uploads.
    #[cfg(feature = "gemini")]
    pub fn gemini_orchestrator(
        &self,
        api_key: impl Into<String>,
    ) -> HooklineResult<hookline_engine::Orchestrator> {
        use hookline_engine::{ContentEncoder, Orchestrator};
        use std::sync::Arc;

        let client = Arc::new(hookline_models::GeminiClient::with_settings(
            api_key,
            self.gemini_settings(),
        )?);
        let encoder = ContentEncoder::new(client.clone(), self.encoding.clone());
        Ok(Orchestrator::new(
            client,
            encoder,
            self.orchestrator_settings()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_code_defaults() {
        let config = HooklineConfig::from_toml_str("").unwrap();
        assert_eq!(config, HooklineConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = HooklineConfig::from_toml_str(
            "[service]\nmodel = \"gemini-2.5-pro\"\n[encoding]\nmax_poll_attempts = 5\n",
        )
        .unwrap();
        assert_eq!(config.service.model, "gemini-2.5-pro");
        assert_eq!(config.service.request_timeout_secs, 60);
        assert_eq!(*config.encoding.max_poll_attempts(), 5);
        assert_eq!(*config.encoding.poll_interval_ms(), 2000);
    }

    #[test]
    fn limits_feed_orchestrator_settings() {
        let config = HooklineConfig::from_toml_str(
            "[service]\nrequest_timeout_secs = 90\n[limits]\nmax_total_bytes = 1024\n",
        )
        .unwrap();
        let settings = config.orchestrator_settings().unwrap();
        assert_eq!(*settings.request_timeout_secs(), 90);
        assert_eq!(*settings.max_total_bytes(), 1024);
    }
}
