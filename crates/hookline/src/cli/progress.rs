//! Progress lines on stderr.

use hookline::{ProgressEvent, ProgressObserver};

/// Prints each lifecycle event as one line on stderr.
#[derive(Debug, Default)]
pub struct StderrProgress;

impl ProgressObserver for StderrProgress {
    fn on_event(&self, event: &ProgressEvent) {
        eprintln!("> {}", event);
    }
}
