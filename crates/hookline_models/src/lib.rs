//! Generative service integrations for Hookline.
//!
//! Each provider lives behind its own feature flag. Providers implement the
//! [`GenerativeService`](hookline_interface::GenerativeService) and
//! [`FileService`](hookline_interface::FileService) traits.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (default)
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use hookline_models::GeminiClient;
//! use hookline_interface::{ContentPart, GenerativeService, ResponseContract, ServiceRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?;
//! let request = ServiceRequest {
//!     parts: vec![ContentPart::text("What is trending in vegan cooking?")],
//!     system_instruction: "Reply with JSON only.".to_string(),
//!     contract: ResponseContract::SearchAugmented,
//! };
//! let text = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    ApiKey, Candidate, Content, FileData, GeminiClient, GeminiResult, GeminiSettings,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleSearch, InlineData,
    Part, Tool,
};
