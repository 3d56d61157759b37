//! Coarse lifecycle hooks for progress feedback.

use hookline_core::OperationMode;

/// Phases of one analysis request.
///
/// Events carry no timing assumptions; presentation layers decide how to display them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ProgressEvent {
    /// Preconditions passed, work is starting
    #[display("Starting {} request", mode)]
    Started {
        /// Requested mode
        mode: OperationMode,
    },
    /// A file is being encoded
    #[display("Encoding file {} of {}", index + 1, total)]
    Encoding {
        /// Zero-based position in the input list
        index: usize,
        /// Number of files being encoded
        total: usize,
    },
    /// A large file is being uploaded
    #[display("Uploading {}", name)]
    Uploading {
        /// Zero-based position in the input list
        index: usize,
        /// Display name of the file
        name: String,
    },
    /// Waiting for the service to finish processing an upload
    #[display("Waiting for {} to process (check {})", name, attempt)]
    Polling {
        /// Display name of the file
        name: String,
        /// One-based status check number
        attempt: u32,
    },
    /// The generation request is in flight
    #[display("Calling the generative service")]
    CallingService,
    /// The reply is being parsed
    #[display("Reading the reply")]
    Normalizing,
    /// The request finished successfully
    #[display("Done")]
    Done,
}

/// Receives [`ProgressEvent`]s from the pipeline.
pub trait ProgressObserver: Send + Sync {
    /// Called once per lifecycle step.
    fn on_event(&self, event: &ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_event(&self, _event: &ProgressEvent) {}
}

/// Logs every event through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_event(&self, event: &ProgressEvent) {
        tracing::info!(progress = %event, "Analysis progress");
    }
}
