//! REST client for `generateContent` and the Files API.
//!
//! Each call is a single HTTP round trip. Retries, timeouts and polling belong to the
//! caller; the client only translates between the provider-neutral traits and the wire.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use hookline_core::InputFile;
use hookline_error::{GeminiError, GeminiErrorKind, HooklineResult};
use hookline_interface::{FileService, GenerativeService, ServiceRequest, UploadedFile};

use super::GeminiResult;
use super::protocol::{ErrorEnvelope, FileEnvelope, GenerateContentRequest, GenerateContentResponse};

/// TCP and TLS handshake budget. Whole-call budgets are applied by the caller.
const CONNECT_TIMEOUT_SECS: u64 = 30;

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

//
// ─── API KEY ────────────────────────────────────────────────────────────────────
//

/// Gemini API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank input.
    pub fn new(key: impl Into<String>) -> GeminiResult<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        Ok(Self(key))
    }

    /// The raw key, for request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

//
// ─── SETTINGS ───────────────────────────────────────────────────────────────────
//

/// Endpoint and model selection.
///
/// Deserializes from the `[service]` table of `hookline.toml`; missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// Model identifier, with or without the `models/` prefix
    pub model: String,
    /// REST base URL
    pub base_url: String,
    /// Resumable upload endpoint of the Files API
    pub upload_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            upload_url: "https://generativelanguage.googleapis.com/upload/v1beta/files"
                .to_string(),
        }
    }
}

impl GeminiSettings {
    fn model_path(&self) -> String {
        let model = self.model.trim();
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model_path()
        )
    }

    fn file_url(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

//
// ─── CLIENT ─────────────────────────────────────────────────────────────────────
//

/// Client for the Google Gemini REST API.
///
/// Implements both [`GenerativeService`] and [`FileService`] over one shared
/// connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.settings.model)
            .field("base_url", &self.settings.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the default model and endpoints.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hookline_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new("my-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new", skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> HooklineResult<Self> {
        Self::with_settings(api_key, GeminiSettings::default())
    }

    /// Create a client with explicit model and endpoint settings.
    #[instrument(name = "gemini_client_with_settings", skip(api_key))]
    pub fn with_settings(
        api_key: impl Into<String>,
        settings: GeminiSettings,
    ) -> HooklineResult<Self> {
        Self::new_internal(api_key.into(), settings).map_err(Into::into)
    }

    fn new_internal(api_key: String, settings: GeminiSettings) -> GeminiResult<Self> {
        let api_key = ApiKey::new(api_key)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("hookline/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key,
            settings,
        })
    }

    /// Active settings.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    #[instrument(skip(self, req), fields(model = %self.settings.model, parts = req.parts.len()))]
    async fn generate_internal(&self, req: &ServiceRequest) -> GeminiResult<String> {
        let body = GenerateContentRequest::from_service_request(req);
        debug!(
            search = req.contract.uses_search(),
            media = req.media_count(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.settings.generate_url())
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response).await?;

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        match reply.text() {
            Some(text) => {
                debug!(chars = text.len(), "Received reply text");
                Ok(text)
            }
            None => {
                let reason = reply.empty_reason();
                warn!(%reason, "Reply carried no text");
                Err(GeminiError::new(GeminiErrorKind::EmptyResponse(reason)))
            }
        }
    }

    #[instrument(skip(self, file), fields(name = %file.name(), mime = %file.mime_type(), size = file.size()))]
    async fn upload_internal(&self, file: &InputFile) -> GeminiResult<UploadedFile> {
        let start = self
            .http
            .post(&self.settings.upload_url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", file.size().to_string())
            .header("X-Goog-Upload-Header-Content-Type", file.mime_type().as_str())
            .json(&serde_json::json!({ "file": { "display_name": file.name() } }))
            .send()
            .await
            .map_err(request_error)?;
        let start = check_status(start).await?;

        let session_url = start
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingUploadUrl))?;
        debug!("Upload session opened");

        let finish = self
            .http
            .post(session_url)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(file.bytes().clone())
            .send()
            .await
            .map_err(request_error)?;
        let finish = check_status(finish).await?;

        let envelope: FileEnvelope = finish
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;
        debug!(file = %envelope.file.name, state = %envelope.file.state, "Upload finalized");
        Ok(envelope.file)
    }

    #[instrument(skip(self))]
    async fn status_internal(&self, name: &str) -> GeminiResult<UploadedFile> {
        let response = self
            .http
            .get(self.settings.file_url(name))
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .await
            .map_err(request_error)?;
        let response = check_status(response).await?;

        let file: UploadedFile = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;
        debug!(state = %file.state, "File status");
        Ok(file)
    }
}

#[track_caller]
fn request_error(e: reqwest::Error) -> GeminiError {
    GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
}

/// Turn a non-2xx response into `HttpError`, preferring the service's own message.
async fn check_status(response: reqwest::Response) -> GeminiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    warn!(status = status.as_u16(), %message, "Gemini request rejected");
    Err(GeminiError::new(GeminiErrorKind::HttpError {
        status_code: status.as_u16(),
        message,
    }))
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate(&self, req: &ServiceRequest) -> HooklineResult<String> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl FileService for GeminiClient {
    async fn upload(&self, file: &InputFile) -> HooklineResult<UploadedFile> {
        self.upload_internal(file).await.map_err(Into::into)
    }

    async fn status(&self, name: &str) -> HooklineResult<UploadedFile> {
        self.status_internal(name).await.map_err(Into::into)
    }
}
