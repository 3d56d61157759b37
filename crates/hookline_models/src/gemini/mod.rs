//! Google Gemini REST API client.
//!
//! - [`GeminiClient`] calls `models/{model}:generateContent` and the Files API
//! - `protocol` holds the JSON wire types and the conversion from a
//!   provider-neutral [`ServiceRequest`](hookline_interface::ServiceRequest)

mod client;
mod protocol;

pub use client::{ApiKey, GeminiClient, GeminiSettings};
pub use protocol::{
    Candidate, Content, FileData, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, GoogleSearch, InlineData, Part, Tool,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, hookline_error::GeminiError>;
