//! Optional targeting and context for a request.

use serde::{Deserialize, Serialize};

/// Optional targeting/context fields of a request.
///
/// Every field defaults to empty (or `false`). Empty fields are left out of the
/// composed prompt entirely.
///
/// # Examples
///
/// ```
/// use hookline_core::RequestConfig;
///
/// let config = RequestConfig::builder()
///     .goal("Viral Growth")
///     .style("Authentic")
///     .geography("Berlin")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.goal(), "Viral Growth");
/// assert!(config.audience().is_empty());
/// assert!(!config.live_trends());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into))]
#[serde(default, rename_all = "camelCase")]
pub struct RequestConfig {
    /// What the post should achieve (e.g. "Viral Growth")
    goal: String,
    /// Tone of voice (e.g. "Authentic")
    style: String,
    /// Keywords to weave into a refined draft
    keywords: String,
    /// Draft text for Refine mode
    original_text: String,
    /// Target region
    geography: String,
    /// Target audience description
    audience: String,
    /// Output language
    language: String,
    /// Demographic detail (age range, interests)
    demographics: String,
    /// Brand rules the output must never violate
    brand_guidelines: String,
    /// Niche for Trend Hunter mode
    niche: String,
    /// Engage live search for current trends
    #[getter(skip)]
    live_trends: bool,
}

impl RequestConfig {
    /// Creates a new request config builder.
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::default()
    }

    /// Whether live-trend augmentation was requested.
    pub fn live_trends(&self) -> bool {
        self.live_trends
    }

    /// Targeting fields in prompt order, paired with their labels.
    ///
    /// Blank fields are skipped.
    ///
    /// ```
    /// use hookline_core::RequestConfig;
    ///
    /// let config = RequestConfig::builder()
    ///     .language("German")
    ///     .geography("Austria")
    ///     .build()
    ///     .unwrap();
    ///
    /// let lines: Vec<_> = config.targeting().collect();
    /// assert_eq!(lines, vec![("Geography", "Austria"), ("Language", "German")]);
    /// ```
    pub fn targeting(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Geography", self.geography.as_str()),
            ("Audience", self.audience.as_str()),
            ("Language", self.language.as_str()),
            ("Demographics", self.demographics.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
    }
}
