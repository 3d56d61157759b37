//! Error types for the Hookline library.
//!
//! This crate provides the foundation error types used throughout the Hookline workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The analysis pipeline reports failures as [`AnalysisError`], whose kinds form the
//! user-facing taxonomy (validation, encoding, timeout, transport, parse, not found).
//! Provider clients report [`GeminiError`], which the pipeline classifies.
//!
//! # Examples
//!
//! ```
//! use hookline_error::{HooklineResult, ConfigError};
//!
//! fn fetch_data() -> HooklineResult<String> {
//!     Err(ConfigError::new("model name is empty"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod gemini;
mod json;

pub use analysis::{AnalysisError, AnalysisErrorKind, EngineResult};
pub use config::ConfigError;
pub use error::{HooklineError, HooklineErrorKind, HooklineResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
