//! Request orchestration.
//!
//! One call to [`Orchestrator::run`] validates the inputs, encodes the files, builds a
//! single [`ServiceRequest`], sends it under a wall-clock timeout and normalizes the
//! reply. Nothing is retried.
//!
//! # Exclusivity
//!
//! The hosted service rejects a request that combines a response schema with its
//! search tool. Every request therefore carries exactly one [`ResponseContract`],
//! chosen by the mode's strategy.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use hookline_core::{AnalysisOutcome, InputFile, OperationMode, PlatformTarget, RequestConfig};
use hookline_error::{
    AnalysisError, AnalysisErrorKind, EngineResult, GeminiErrorKind, HooklineError,
    HooklineErrorKind,
};
use hookline_interface::{
    GenerativeService, ProgressEvent, ProgressObserver, ServiceRequest, TracingObserver,
};

use crate::encoder::ContentEncoder;
use crate::normalizer::normalize;
use crate::prompt::{PromptContext, SYSTEM_INSTRUCTION};
use crate::strategy::strategy_for;

/// 100 MiB.
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 100 * 1024 * 1024;

/// Request-level limits.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
#[serde(default)]
pub struct OrchestratorSettings {
    /// Wall-clock budget of the generation call, in seconds
    request_timeout_secs: u64,
    /// Combined input size ceiling
    max_total_bytes: u64,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 60,
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
        }
    }
}

impl OrchestratorSettings {
    /// Creates a new settings builder.
    pub fn builder() -> OrchestratorSettingsBuilder {
        OrchestratorSettingsBuilder::default()
    }

    /// Generation call timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Runs analysis requests against a generative service.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use hookline_engine::{ContentEncoder, EncoderSettings, Orchestrator, OrchestratorSettings};
///
/// let client = Arc::new(GeminiClient::new(api_key)?);
/// let encoder = ContentEncoder::new(client.clone(), EncoderSettings::default());
/// let orchestrator = Orchestrator::new(client, encoder, OrchestratorSettings::default());
///
/// let outcome = orchestrator
///     .run(&files, OperationMode::Generate, PlatformTarget::Instagram, &config)
///     .await?;
/// ```
#[derive(Clone)]
pub struct Orchestrator {
    service: Arc<dyn GenerativeService>,
    encoder: ContentEncoder,
    settings: OrchestratorSettings,
    observer: Arc<dyn ProgressObserver>,
    today: Option<NaiveDate>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("provider", &self.service.provider_name())
            .field("model", &self.service.model_name())
            .field("encoder", &self.encoder)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Create an orchestrator that reports progress through `tracing`.
    pub fn new(
        service: Arc<dyn GenerativeService>,
        encoder: ContentEncoder,
        settings: OrchestratorSettings,
    ) -> Self {
        Self {
            service,
            encoder,
            settings,
            observer: Arc::new(TracingObserver),
            today: None,
        }
    }

    /// Report lifecycle events to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Use a fixed date in prompts instead of the local calendar date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Active settings.
    pub fn settings(&self) -> &OrchestratorSettings {
        &self.settings
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Reject requests whose preconditions fail, before any encoding or network call.
    pub fn validate(
        &self,
        files: &[InputFile],
        mode: OperationMode,
        config: &RequestConfig,
    ) -> EngineResult<()> {
        strategy_for(mode).validate(files, config)?;

        let total: u64 = files.iter().map(InputFile::size).sum();
        if total > self.settings.max_total_bytes {
            return Err(AnalysisError::validation(format!(
                "selected files total {} bytes, above the {} byte limit",
                total, self.settings.max_total_bytes
            )));
        }
        Ok(())
    }

    /// Validate, encode and assemble the outbound request without sending it.
    #[instrument(skip(self, files, config), fields(files = files.len()))]
    pub async fn build_request(
        &self,
        files: &[InputFile],
        mode: OperationMode,
        platform: PlatformTarget,
        config: &RequestConfig,
    ) -> EngineResult<ServiceRequest> {
        self.validate(files, mode, config)?;
        self.assemble(files, mode, platform, config).await
    }

    async fn assemble(
        &self,
        files: &[InputFile],
        mode: OperationMode,
        platform: PlatformTarget,
        config: &RequestConfig,
    ) -> EngineResult<ServiceRequest> {
        let strategy = strategy_for(mode);

        let encoded = if strategy.sends_files() {
            self.encoder
                .encode_batch(files, self.observer.as_ref())
                .await?
        } else {
            Vec::new()
        };

        let ctx = PromptContext {
            platform,
            config,
            date: self.today(),
            input_count: files.len(),
        };
        let prompt = strategy.compose_prompt(&ctx);
        debug!(prompt_chars = prompt.len(), "Prompt composed");

        Ok(ServiceRequest {
            parts: strategy.build_parts(prompt, encoded),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            contract: strategy.response_contract(config),
        })
    }

    /// Run one request end to end.
    ///
    /// Dropping the returned future cancels any upload polling or in-flight call.
    #[instrument(skip(self, files, config), fields(files = files.len(), model = %self.service.model_name()))]
    pub async fn run(
        &self,
        files: &[InputFile],
        mode: OperationMode,
        platform: PlatformTarget,
        config: &RequestConfig,
    ) -> EngineResult<AnalysisOutcome> {
        self.validate(files, mode, config)?;
        self.observer.on_event(&ProgressEvent::Started { mode });

        let request = self.assemble(files, mode, platform, config).await?;
        info!(
            parts = request.parts.len(),
            media = request.media_count(),
            search = request.contract.uses_search(),
            "Calling generative service"
        );

        self.observer.on_event(&ProgressEvent::CallingService);
        let text = self.send(&request).await?;

        self.observer.on_event(&ProgressEvent::Normalizing);
        let outcome = normalize(mode, &text)?;

        self.observer.on_event(&ProgressEvent::Done);
        Ok(outcome)
    }

    async fn send(&self, request: &ServiceRequest) -> EngineResult<String> {
        let budget = self.settings.request_timeout();
        match tokio::time::timeout(budget, self.service.generate(request)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(classify(e)),
            Err(_) => {
                error!(timeout_secs = budget.as_secs(), "Generation call timed out");
                Err(AnalysisError::timeout(format!(
                    "no reply within {} seconds",
                    budget.as_secs()
                )))
            }
        }
    }
}

/// Map a service failure onto the analysis taxonomy.
#[track_caller]
pub fn classify(err: HooklineError) -> AnalysisError {
    error!(error = %err, "Generation call failed");
    match err.kind() {
        HooklineErrorKind::Analysis(inner) => inner.clone(),
        HooklineErrorKind::Gemini(inner) => match &inner.kind {
            GeminiErrorKind::EmptyResponse(reason) => {
                AnalysisError::parse(format!("empty reply: {}", reason))
            }
            kind => AnalysisError::new(AnalysisErrorKind::Transport {
                status_code: kind.status_code(),
                message: kind.to_string(),
            }),
        },
        other => AnalysisError::new(AnalysisErrorKind::Transport {
            status_code: None,
            message: other.to_string(),
        }),
    }
}
