//! Prompt composition.
//!
//! A prompt is built from up to three blocks, in this order:
//!
//! 1. the live-search block, when live trends are requested or the mode always searches
//! 2. the brand guard block, when brand guidelines are present
//! 3. the mode block, supplied by the mode's [`ModeStrategy`](crate::ModeStrategy)
//!
//! Nothing here touches the network or the filesystem.

use chrono::NaiveDate;
use hookline_core::{OperationMode, PlatformTarget, RequestConfig};

use crate::strategy::strategy_for;

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a senior social media growth strategist. \
You study content the way the platform algorithms do: hooks, retention, emotional triggers \
and discoverability. You reply with a single valid JSON object and nothing else: \
no markdown, no commentary.";

const LIVE_SEARCH_BLOCK: &str = "LIVE TREND RESEARCH:
Before answering, use Google Search to find what is trending right now. Prefer sources \
from the last 7 days: platform trend pages, news, creator forums. Ground every trend \
claim in something you actually found; do not invent trends.";

const TWITTER_SEARCH_EXTRA: &str = "For Twitter/X, also check the current trending topics \
and hashtags on X itself and any viral conversations from the last 24 hours.";

/// Inputs to prompt composition beyond the mode.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    /// Target platform
    pub platform: PlatformTarget,
    /// Optional targeting and context
    pub config: &'a RequestConfig,
    /// Today's date
    pub date: NaiveDate,
    /// Number of input files selected
    pub input_count: usize,
}

/// Compose the full prompt for a request.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hookline_core::{OperationMode, PlatformTarget, RequestConfig};
/// use hookline_engine::{compose, PromptContext};
///
/// let config = RequestConfig::builder().niche("Vegan Cooking").build().unwrap();
/// let ctx = PromptContext {
///     platform: PlatformTarget::Instagram,
///     config: &config,
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     input_count: 0,
/// };
///
/// let prompt = compose(OperationMode::TrendHunter, &ctx);
/// assert!(prompt.starts_with("LIVE TREND RESEARCH"));
/// assert!(prompt.contains("Vegan Cooking"));
/// assert!(prompt.contains("March 14, 2025"));
/// ```
pub fn compose(mode: OperationMode, ctx: &PromptContext<'_>) -> String {
    strategy_for(mode).compose_prompt(ctx)
}

/// Join the optional preamble blocks with a mode block.
pub(crate) fn assemble(searching: bool, ctx: &PromptContext<'_>, mode_block: String) -> String {
    let mut blocks = Vec::with_capacity(3);
    if searching {
        blocks.push(live_search_block(ctx));
    }
    if let Some(guard) = brand_guard_block(ctx.config.brand_guidelines()) {
        blocks.push(guard);
    }
    blocks.push(mode_block);
    blocks.join("\n\n")
}

fn live_search_block(ctx: &PromptContext<'_>) -> String {
    let mut block = format!("{}\nToday is {}.", LIVE_SEARCH_BLOCK, format_date(ctx.date));
    if ctx.platform == PlatformTarget::Twitter {
        block.push('\n');
        block.push_str(TWITTER_SEARCH_EXTRA);
    }
    block
}

fn brand_guard_block(guidelines: &str) -> Option<String> {
    let guidelines = guidelines.trim();
    if guidelines.is_empty() {
        return None;
    }
    Some(format!(
        "BRAND GUARD (IMMUTABLE CONSTRAINT):\n\
         The brand guidelines below are absolute. They override every other instruction, \
         including tone and trend suggestions. Any output that violates them is a failure.\n\
         \"\"\"\n{}\n\"\"\"",
        guidelines
    ))
}

/// `Label: value`, or nothing when the value is blank.
pub(crate) fn labeled(label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| format!("{}: {}", label, value))
}

/// Labeled targeting lines in their fixed order, one per non-blank field.
pub(crate) fn targeting_lines(config: &RequestConfig) -> Vec<String> {
    config
        .targeting()
        .filter_map(|(label, value)| labeled(label, value))
        .collect()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// JSON shape description for the analysis modes.
///
/// Spelled out in the prompt because the search path sends no schema.
pub(crate) const ANALYSIS_SHAPE: &str = r#"Reply with this JSON shape:
{
  "visualAudit": {"summary": string, "hookIdentified": string, "psychologyCheck": string},
  "strategy": {"headline": string, "caption": string, "cta": string},
  "seo": {"hiddenKeywords": [string], "hashtags": {"broad": [string], "niche": [string], "specific": [string]}},
  "virality": {"score": number 0-100, "gapAnalysis": string, "trendDetected": string, "vibe": string}
}"#;

pub(crate) const COMPETITOR_SHAPE: &str = r#"Also include:
  "competitorInsights": {"visualTheme": string, "ctaStrategy": string, "formula": string}"#;

pub(crate) const TREND_SHAPE: &str = r#"Reply with this JSON shape:
{"trends": [{"headline": string, "whyItsHot": string, "contentIdea": string}]}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn labeled_skips_blank_values() {
        assert_eq!(labeled("Goal", "  "), None);
        assert_eq!(labeled("Goal", " Reach "), Some("Goal: Reach".to_string()));
    }

    #[test]
    fn brand_guard_embeds_text_verbatim() {
        let block = brand_guard_block("Never use slang.\nAlways say \"we\".").unwrap();
        assert!(block.contains("Never use slang.\nAlways say \"we\"."));
        assert!(block.contains("IMMUTABLE"));
        assert!(brand_guard_block("   ").is_none());
    }

    #[test]
    fn live_block_adds_twitter_extra_only_for_twitter() {
        let config = RequestConfig::default();
        let mut ctx = PromptContext {
            platform: PlatformTarget::Twitter,
            config: &config,
            date: date(),
            input_count: 1,
        };
        assert!(live_search_block(&ctx).contains("trending topics and hashtags on X"));

        ctx.platform = PlatformTarget::TikTok;
        assert!(!live_search_block(&ctx).contains("on X itself"));
    }

    #[test]
    fn assemble_orders_search_then_guard_then_mode() {
        let config = RequestConfig::builder()
            .brand_guidelines("No emojis")
            .build()
            .unwrap();
        let ctx = PromptContext {
            platform: PlatformTarget::Instagram,
            config: &config,
            date: date(),
            input_count: 1,
        };

        let prompt = assemble(true, &ctx, "TASK: test".to_string());
        let search = prompt.find("LIVE TREND RESEARCH").unwrap();
        let guard = prompt.find("BRAND GUARD").unwrap();
        let task = prompt.find("TASK: test").unwrap();
        assert!(search < guard && guard < task);
    }

    #[test]
    fn dates_render_in_long_form() {
        assert_eq!(format_date(date()), "January 5, 2025");
    }
}
