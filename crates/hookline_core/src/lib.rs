//! Core data types for the Hookline library.
//!
//! This crate provides the request and result types shared by every Hookline crate:
//! operating modes, platform targets, the optional targeting configuration, input files,
//! encoded payload parts and the structured analysis results.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod encoded;
mod media;
mod mode;
mod platform;
mod request_config;
mod result;

pub use encoded::EncodedPart;
pub use media::{InputFile, MediaKind};
pub use mode::OperationMode;
pub use platform::PlatformTarget;
pub use request_config::{RequestConfig, RequestConfigBuilder, RequestConfigBuilderError};
pub use result::{
    AnalysisOutcome, AnalysisResult, CompetitorInsights, Hashtags, Seo, Strategy, TrendItem,
    Virality, VisualAudit,
};
