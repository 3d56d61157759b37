//! Operating modes.

use serde::{Deserialize, Serialize};

/// What the user wants out of a request.
///
/// The mode determines the required inputs, the prompt template and the response shape.
///
/// # Examples
///
/// ```
/// use hookline_core::OperationMode;
///
/// assert_eq!(format!("{}", OperationMode::CompetitorSpy), "Competitor Spy");
/// assert!(OperationMode::TrendHunter.always_searches());
/// assert!(!OperationMode::Refine.uses_files());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    /// Create captions, hashtags and a virality score for new content
    #[display("Generate")]
    Generate,
    /// Polish an existing draft without changing its meaning
    #[display("Refine")]
    Refine,
    /// Extract the common formula behind several competitor posts
    #[display("Competitor Spy")]
    CompetitorSpy,
    /// Find currently trending topics in a niche
    #[display("Trend Hunter")]
    TrendHunter,
}

impl OperationMode {
    /// Whether file parts are attached to the outbound request in this mode.
    pub fn uses_files(&self) -> bool {
        matches!(self, OperationMode::Generate | OperationMode::CompetitorSpy)
    }

    /// Whether this mode engages live search regardless of the user's toggle.
    pub fn always_searches(&self) -> bool {
        matches!(self, OperationMode::TrendHunter)
    }
}
