//! Hookline - AI metadata for social media content
//!
//! Hookline takes images, videos or draft text, sends them to a hosted generative
//! model with a mode-specific prompt and returns captions, tiered hashtags and a
//! virality score, or a list of current trends in a niche.
//!
//! # Modes
//!
//! - **Generate**: metadata for new content
//! - **Refine**: polish a draft without changing its meaning
//! - **Competitor Spy**: extract the formula shared by several competitor posts
//! - **Trend Hunter**: five live trends in a niche
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hookline::{HooklineConfig, OperationMode, PlatformTarget, RequestConfig, load_input_files};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HooklineConfig::load()?;
//!     let orchestrator = config.gemini_orchestrator(std::env::var("GEMINI_API_KEY")?)?;
//!
//!     let files = load_input_files(&["latte.jpg"]).await?;
//!     let request = RequestConfig::builder().goal("Viral Growth").build()?;
//!     let outcome = orchestrator
//!         .run(&files, OperationMode::Generate, PlatformTarget::Instagram, &request)
//!         .await?;
//!     println!("{}", hookline::render_human(&outcome));
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini client (default)
//! - `observability` - OpenTelemetry span export
//!
//! # Architecture
//!
//! - `hookline_error` - Error types
//! - `hookline_core` - Modes, platforms, inputs and results
//! - `hookline_interface` - Service traits and request types
//! - `hookline_models` - Gemini REST client
//! - `hookline_engine` - Prompt composition, encoding, orchestration, normalization
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod input;
mod render;

pub use config::{HooklineConfig, LimitsConfig, ServiceConfig};
pub use input::{check_total_size, load_input_file, load_input_files};
pub use render::{render_human, render_json};

// Re-export core crates (always available)
pub use hookline_core::*;
pub use hookline_engine::*;
pub use hookline_error::*;
pub use hookline_interface::*;

// Re-export optional crates based on features
#[cfg(feature = "gemini")]
pub use hookline_models::*;

#[cfg(feature = "observability")]
pub mod observability;
