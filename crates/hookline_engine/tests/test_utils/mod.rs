//! Test utilities for Hookline engine tests.
//!
//! Mock generative and file services that record what they were asked to do.

#![allow(dead_code)]

use async_trait::async_trait;
use hookline_core::{InputFile, MediaKind};
use hookline_error::{GeminiError, GeminiErrorKind, HooklineError, HooklineResult};
use hookline_interface::{
    FileService, FileState, GenerativeService, ProgressEvent, ProgressObserver, ServiceRequest,
    UploadedFile,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

//
// ─── GENERATIVE SERVICE ─────────────────────────────────────────────────────────
//

/// Behavior configuration for mock replies.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always reply with the given text
    Reply(String),
    /// Always fail with the given provider error
    Error(GeminiErrorKind),
    /// Sleep for the given duration, then reply
    Delay(Duration, String),
}

/// Mock generative service.
#[derive(Clone)]
pub struct MockGenerativeService {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<ServiceRequest>>>,
}

impl MockGenerativeService {
    /// Reply with `text` on every call.
    pub fn new_reply(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Reply(text.into()))
    }

    /// Fail with `error` on every call.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Reply with `text` after `delay`.
    pub fn new_delayed(delay: Duration, text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Delay(delay, text.into()))
    }

    /// Custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate() calls.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ServiceRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ServiceRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeService for MockGenerativeService {
    async fn generate(&self, req: &ServiceRequest) -> HooklineResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(HooklineError::from(GeminiError::new(kind.clone()))),
            MockBehavior::Delay(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

//
// ─── FILE SERVICE ───────────────────────────────────────────────────────────────
//

/// Mock file store.
///
/// `upload` returns a PROCESSING record; each `status` call returns the next state
/// from the script, repeating the last one once the script runs out.
#[derive(Clone)]
pub struct MockFileService {
    script: Vec<FileState>,
    upload_error: Option<GeminiErrorKind>,
    status_error: Option<GeminiErrorKind>,
    upload_stalls: bool,
    uploads: Arc<Mutex<Vec<String>>>,
    status_calls: Arc<Mutex<usize>>,
}

impl MockFileService {
    /// Status checks follow `script`.
    pub fn new_script(script: Vec<FileState>) -> Self {
        Self {
            script,
            upload_error: None,
            status_error: None,
            upload_stalls: false,
            uploads: Arc::new(Mutex::new(Vec::new())),
            status_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Becomes active on the first status check.
    pub fn new_active() -> Self {
        Self::new_script(vec![FileState::Active])
    }

    /// The upload call itself fails.
    pub fn new_upload_error(error: GeminiErrorKind) -> Self {
        Self {
            upload_error: Some(error),
            ..Self::new_active()
        }
    }

    /// Uploads succeed but every status check fails.
    pub fn new_status_error(error: GeminiErrorKind) -> Self {
        Self {
            status_error: Some(error),
            ..Self::new_active()
        }
    }

    /// The upload call never returns.
    pub fn new_stalled_upload() -> Self {
        Self {
            upload_stalls: true,
            ..Self::new_active()
        }
    }

    /// Display names of uploaded files, in call order.
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    /// Number of status() calls.
    pub fn status_calls(&self) -> usize {
        *self.status_calls.lock().unwrap()
    }

    fn record(name: &str, state: FileState) -> UploadedFile {
        UploadedFile {
            name: format!("files/{}", name),
            uri: format!("https://files.example/{}", name),
            mime_type: "video/mp4".to_string(),
            state,
        }
    }
}

#[async_trait]
impl FileService for MockFileService {
    async fn upload(&self, file: &InputFile) -> HooklineResult<UploadedFile> {
        self.uploads.lock().unwrap().push(file.name().clone());
        if let Some(kind) = &self.upload_error {
            return Err(GeminiError::new(kind.clone()).into());
        }
        if self.upload_stalls {
            std::future::pending::<()>().await;
        }
        Ok(Self::record(file.name(), FileState::Processing))
    }

    async fn status(&self, name: &str) -> HooklineResult<UploadedFile> {
        let index = {
            let mut calls = self.status_calls.lock().unwrap();
            *calls += 1;
            *calls - 1
        };
        if let Some(kind) = &self.status_error {
            return Err(GeminiError::new(kind.clone()).into());
        }
        let state = self
            .script
            .get(index)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(FileState::Processing);
        let short = name.trim_start_matches("files/");
        Ok(Self::record(short, state))
    }
}

//
// ─── OBSERVER ───────────────────────────────────────────────────────────────────
//

/// Records every progress event.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_event(&self, event: &ProgressEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

//
// ─── FIXTURES ───────────────────────────────────────────────────────────────────
//

pub fn image(name: &str, size: usize) -> InputFile {
    InputFile::new(name, "image/png", MediaKind::Image, vec![7u8; size])
}

pub fn video(name: &str, size: usize) -> InputFile {
    InputFile::new(name, "video/mp4", MediaKind::Video, vec![0u8; size])
}

pub const ANALYSIS_REPLY: &str = r##"{
    "visualAudit": {"summary": "A latte on a windowsill", "hookIdentified": "Steam curl", "psychologyCheck": "Calm"},
    "strategy": {"headline": "Slow mornings", "caption": "Coffee first.", "cta": "Save this"},
    "seo": {"hiddenKeywords": ["latte art"], "hashtags": {"broad": ["#coffee"], "niche": ["#latteart"], "specific": ["#windowsillcoffee"]}},
    "virality": {"score": 82, "gapAnalysis": "Add a face in frame"}
}"##;

pub fn trends_reply(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"headline": "Trend {i}", "whyItsHot": "Because {i}", "contentIdea": "Idea {i}"}}"#
            )
        })
        .collect();
    format!(r#"{{"trends": [{}]}}"#, items.join(","))
}
