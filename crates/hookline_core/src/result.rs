//! Structured results returned by the generative service.
//!
//! Field names follow the camelCase JSON contract the service is asked to produce.
//! The four top-level sections of [`AnalysisResult`] are required; fields inside a
//! section default to empty so a loosely formatted search-path reply still renders.

use serde::{Deserialize, Serialize};

/// First impression of the submitted visuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualAudit {
    /// What the content shows
    pub summary: String,
    /// The scroll-stopping hook, if any
    pub hook_identified: String,
    /// Emotional/psychological read of the content
    pub psychology_check: String,
}

/// Publishing copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Strategy {
    /// Short headline or on-screen text
    pub headline: String,
    /// Full caption (in Refine mode: exactly the refined text)
    pub caption: String,
    /// Call to action
    pub cta: String,
}

/// Hashtags grouped by reach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hashtags {
    /// High-volume tags
    pub broad: Vec<String>,
    /// Community tags
    pub niche: Vec<String>,
    /// Content-specific tags
    pub specific: Vec<String>,
}

/// Discoverability metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    /// Keywords for alt text and search
    pub hidden_keywords: Vec<String>,
    /// Hashtag tiers
    pub hashtags: Hashtags,
}

/// Predicted performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Virality {
    /// Score from 0 to 100
    pub score: f64,
    /// What keeps the content from scoring higher
    pub gap_analysis: String,
    /// Live trend the content can ride, when search was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_detected: Option<String>,
    /// One-line mood description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
}

/// Shared pattern behind a set of competitor posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitorInsights {
    /// Recurring visual look
    pub visual_theme: String,
    /// How the posts drive action
    pub cta_strategy: String,
    /// Reusable content formula
    pub formula: String,
}

/// Full analysis for Generate, Refine and Competitor Spy modes.
///
/// # Examples
///
/// ```
/// use hookline_core::AnalysisResult;
///
/// let json = r##"{
///     "visualAudit": {"summary": "s", "hookIdentified": "h", "psychologyCheck": "p"},
///     "strategy": {"headline": "H", "caption": "C", "cta": "Follow"},
///     "seo": {"hiddenKeywords": ["k"], "hashtags": {"broad": ["#a"], "niche": [], "specific": []}},
///     "virality": {"score": 82, "gapAnalysis": "g"}
/// }"##;
///
/// let result: AnalysisResult = serde_json::from_str(json).unwrap();
/// assert_eq!(result.virality.score, 82.0);
/// assert!(result.competitor_insights.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Visual audit section
    pub visual_audit: VisualAudit,
    /// Copy section
    pub strategy: Strategy,
    /// Discoverability section
    pub seo: Seo,
    /// Performance section
    pub virality: Virality,
    /// Present for Competitor Spy requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_insights: Option<CompetitorInsights>,
}

/// One trending topic found in Trend Hunter mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendItem {
    /// Name of the trend
    pub headline: String,
    /// Why it is gaining traction right now
    #[serde(default)]
    pub why_its_hot: String,
    /// Concrete post idea riding the trend
    pub content_idea: String,
}

/// What a request produced, by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Generate, Refine and Competitor Spy
    Analysis(AnalysisResult),
    /// Trend Hunter, in the order the service listed them
    Trends(Vec<TrendItem>),
}

impl AnalysisOutcome {
    /// The analysis, if this outcome is one.
    pub fn as_analysis(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Analysis(result) => Some(result),
            AnalysisOutcome::Trends(_) => None,
        }
    }

    /// The trend list, if this outcome is one.
    pub fn as_trends(&self) -> Option<&[TrendItem]> {
        match self {
            AnalysisOutcome::Trends(items) => Some(items),
            AnalysisOutcome::Analysis(_) => None,
        }
    }
}
