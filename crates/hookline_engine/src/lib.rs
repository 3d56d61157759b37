//! Request pipeline for Hookline.
//!
//! This crate turns a mode, a platform, optional targeting and a set of media files
//! into one call against a [`GenerativeService`](hookline_interface::GenerativeService)
//! and reads the reply back into an [`AnalysisOutcome`](hookline_core::AnalysisOutcome).
//!
//! # Components
//!
//! - **Prompt composer** ([`compose`]): pure string assembly per mode
//! - **Mode strategies** ([`ModeStrategy`]): preconditions, payload layout and response contract
//! - **Content encoder** ([`ContentEncoder`]): inline base64 or upload-and-poll
//! - **Orchestrator** ([`Orchestrator`]): validation, timeout and error mapping
//! - **Normalizer** ([`normalize`]): fence stripping and trend fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hookline_engine::{ContentEncoder, EncoderSettings, Orchestrator, OrchestratorSettings};
//! use hookline_models::GeminiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?);
//! let encoder = ContentEncoder::new(client.clone(), EncoderSettings::default());
//! let orchestrator = Orchestrator::new(client, encoder, OrchestratorSettings::default());
//!
//! let config = RequestConfig::builder().niche("Vegan Cooking").build()?;
//! let outcome = orchestrator
//!     .run(&[], OperationMode::TrendHunter, PlatformTarget::Instagram, &config)
//!     .await?;
//! println!("{} trends", outcome.as_trends().map_or(0, |t| t.len()));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod encoder;
mod normalizer;
mod orchestrator;
mod prompt;
mod schema;
mod strategy;

pub use encoder::{
    ContentEncoder, DEFAULT_INLINE_THRESHOLD, EncoderSettings, EncoderSettingsBuilder,
    EncoderSettingsBuilderError, UploadState,
};
pub use normalizer::{normalize, parse_analysis, parse_trends, strip_fence};
pub use orchestrator::{
    DEFAULT_MAX_TOTAL_BYTES, Orchestrator, OrchestratorSettings, OrchestratorSettingsBuilder,
    OrchestratorSettingsBuilderError, classify,
};
pub use prompt::{PromptContext, SYSTEM_INSTRUCTION, compose};
pub use schema::analysis_schema;
pub use strategy::{
    CompetitorSpyStrategy, GenerateStrategy, ModeStrategy, RefineStrategy, TREND_COUNT,
    TrendHunterStrategy, strategy_for,
};
