//! Trait definitions for the Hookline library.
//!
//! This crate defines the seams between the analysis pipeline and the outside world:
//! the generative service, the file upload service and progress reporting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;
mod types;

pub use progress::{NoopObserver, ProgressEvent, ProgressObserver, TracingObserver};
pub use traits::{FileService, GenerativeService};
pub use types::{ContentPart, FileState, ResponseContract, ServiceRequest, UploadedFile};
