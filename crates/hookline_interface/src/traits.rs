//! Trait definitions for the external services.

use crate::{ServiceRequest, UploadedFile};
use async_trait::async_trait;
use hookline_core::InputFile;
use hookline_error::HooklineResult;

/// A hosted generative model: ordered parts in, reply text out.
///
/// Implementations perform exactly one round trip per call and never retry.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Send one request and return the concatenated reply text.
    async fn generate(&self, req: &ServiceRequest) -> HooklineResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// The service's file upload sub-protocol.
///
/// Uploaded files are processed asynchronously; callers poll [`FileService::status`]
/// until the file leaves the processing state.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Submit the file's bytes under its display name and MIME type.
    async fn upload(&self, file: &InputFile) -> HooklineResult<UploadedFile>;

    /// Fetch the current processing state of a previously uploaded file.
    async fn status(&self, name: &str) -> HooklineResult<UploadedFile>;
}
