//! Content encoding: inline base64 for small files, upload-and-poll for large ones.
//!
//! The inline/upload decision is made here and nowhere else. Uploads are tracked with
//! [`UploadState`]; running out of status checks is its own terminal state and
//! surfaces as a timeout. Every upload and status call runs under its own
//! wall-clock budget, so a stalled call cannot hold the request open.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use hookline_core::{EncodedPart, InputFile};
use hookline_error::{AnalysisError, EngineResult, HooklineError, HooklineResult};
use hookline_interface::{FileService, FileState, ProgressEvent, ProgressObserver, UploadedFile};

/// 20 MiB.
pub const DEFAULT_INLINE_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Encoding thresholds and polling cadence.
///
/// Deserializes from the `[encoding]` table of `hookline.toml`.
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
pub struct EncoderSettings {
    /// Files of this size or larger are uploaded instead of inlined
    inline_threshold_bytes: u64,
    /// Delay before each status check, in milliseconds
    poll_interval_ms: u64,
    /// Status checks allowed before giving up
    max_poll_attempts: u32,
    /// Budget of a single upload or status call, in seconds
    call_timeout_secs: u64,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            inline_threshold_bytes: DEFAULT_INLINE_THRESHOLD,
            poll_interval_ms: 2_000,
            max_poll_attempts: 30,
            call_timeout_secs: 60,
        }
    }
}

impl EncoderSettings {
    /// Creates a new settings builder.
    pub fn builder() -> EncoderSettingsBuilder {
        EncoderSettingsBuilder::default()
    }

    /// Delay between status checks.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Budget of a single upload or status call.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Whether a file of `size` bytes goes through the upload path.
    pub fn should_upload(&self, size: u64) -> bool {
        size >= self.inline_threshold_bytes
    }
}

/// Lifecycle of one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    /// The upload call returned
    Submitted(UploadedFile),
    /// The service is still processing; `checks` status calls made so far
    Processing {
        /// Latest known file record
        file: UploadedFile,
        /// Status checks made so far
        checks: u32,
    },
    /// Ready to reference
    Active(UploadedFile),
    /// The service gave up on the file
    Failed(UploadedFile),
    /// Status checks ran out while the file was still processing
    TimedOut {
        /// Resource name of the file
        name: String,
        /// Status checks made
        checks: u32,
    },
}

impl UploadState {
    /// Classify a file record after `checks` status calls.
    pub fn from_record(file: UploadedFile, checks: u32) -> Self {
        match file.state {
            FileState::Active => UploadState::Active(file),
            FileState::Failed => UploadState::Failed(file),
            FileState::Processing | FileState::StateUnspecified => {
                UploadState::Processing { file, checks }
            }
        }
    }

    /// Whether the state machine has stopped.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadState::Active(_) | UploadState::Failed(_) | UploadState::TimedOut { .. }
        )
    }
}

/// Encodes input files into request parts.
#[derive(Clone)]
pub struct ContentEncoder {
    files: Arc<dyn FileService>,
    settings: EncoderSettings,
}

impl std::fmt::Debug for ContentEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEncoder")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ContentEncoder {
    /// Create an encoder that uploads large files through `files`.
    pub fn new(files: Arc<dyn FileService>, settings: EncoderSettings) -> Self {
        Self { files, settings }
    }

    /// Active settings.
    pub fn settings(&self) -> &EncoderSettings {
        &self.settings
    }

    /// Encode one file.
    pub async fn encode(&self, file: &InputFile) -> EngineResult<EncodedPart> {
        self.encode_with(file, 0, 1, &hookline_interface::NoopObserver)
            .await
    }

    /// Encode every file, concurrently, returning parts in input order.
    ///
    /// The first failure aborts the batch; uploads still in flight are dropped.
    #[instrument(skip_all, fields(count = files.len()))]
    pub async fn encode_batch(
        &self,
        files: &[InputFile],
        observer: &dyn ProgressObserver,
    ) -> EngineResult<Vec<EncodedPart>> {
        let total = files.len();
        try_join_all(
            files
                .iter()
                .enumerate()
                .map(|(index, file)| self.encode_with(file, index, total, observer)),
        )
        .await
    }

    async fn encode_with(
        &self,
        file: &InputFile,
        index: usize,
        total: usize,
        observer: &dyn ProgressObserver,
    ) -> EngineResult<EncodedPart> {
        observer.on_event(&ProgressEvent::Encoding { index, total });
        if self.settings.should_upload(file.size()) {
            observer.on_event(&ProgressEvent::Uploading {
                index,
                name: file.name().clone(),
            });
            return self.upload(file, observer).await;
        }

        debug!(name = %file.name(), size = file.size(), "Encoding inline");
        Ok(EncodedPart::Inline {
            data: STANDARD.encode(file.bytes()),
            mime_type: file.mime_type().clone(),
        })
    }

    #[instrument(skip(self, file, observer), fields(name = %file.name(), size = file.size()))]
    async fn upload(
        &self,
        file: &InputFile,
        observer: &dyn ProgressObserver,
    ) -> EngineResult<EncodedPart> {
        let submitted = self
            .bounded("upload failed", file, self.files.upload(file))
            .await?;
        info!(resource = %submitted.name, "Upload submitted");

        let mut state = UploadState::Submitted(submitted);
        loop {
            state = match state {
                UploadState::Submitted(record) => UploadState::from_record(record, 0),
                UploadState::Processing { file: record, checks }
                    if checks >= self.settings.max_poll_attempts =>
                {
                    UploadState::TimedOut {
                        name: record.name,
                        checks,
                    }
                }
                UploadState::Processing { file: record, checks } => {
                    tokio::time::sleep(self.settings.poll_interval()).await;
                    observer.on_event(&ProgressEvent::Polling {
                        name: file.name().clone(),
                        attempt: checks + 1,
                    });
                    let latest = self
                        .bounded("status check failed", file, self.files.status(&record.name))
                        .await?;
                    UploadState::from_record(latest, checks + 1)
                }
                UploadState::Active(record) => {
                    info!(uri = %record.uri, "Upload active");
                    let mime_type = if record.mime_type.is_empty() {
                        file.mime_type().clone()
                    } else {
                        record.mime_type
                    };
                    return Ok(EncodedPart::Remote {
                        uri: record.uri,
                        mime_type,
                    });
                }
                UploadState::Failed(record) => {
                    warn!(resource = %record.name, "Service failed to process upload");
                    return Err(AnalysisError::encoding(format!(
                        "upload failed: {} could not be processed",
                        file.name()
                    )));
                }
                UploadState::TimedOut { name, checks } => {
                    warn!(resource = %name, checks, "Upload still processing after last check");
                    return Err(AnalysisError::timeout(format!(
                        "{} still processing after {} status checks",
                        file.name(),
                        checks
                    )));
                }
            };
        }
    }

    async fn bounded<T>(
        &self,
        stage: &str,
        file: &InputFile,
        call: impl Future<Output = HooklineResult<T>>,
    ) -> EngineResult<T> {
        let budget = self.settings.call_timeout();
        match tokio::time::timeout(budget, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(wrap_failure(stage, file, &e)),
            Err(_) => {
                warn!(
                    name = %file.name(),
                    stage,
                    timeout_secs = budget.as_secs(),
                    "File service call timed out"
                );
                Err(AnalysisError::timeout(format!(
                    "{}: {} got no reply within {} seconds",
                    stage,
                    file.name(),
                    budget.as_secs()
                )))
            }
        }
    }
}

#[track_caller]
fn wrap_failure(stage: &str, file: &InputFile, err: &HooklineError) -> AnalysisError {
    warn!(error = %err, name = %file.name(), stage, "Upload step failed");
    match err.status_code() {
        Some(status) => AnalysisError::encoding(format!(
            "{}: {} (HTTP {})",
            stage,
            file.name(),
            status
        )),
        None => AnalysisError::encoding(format!("{}: {}", stage, file.name())),
    }
}
