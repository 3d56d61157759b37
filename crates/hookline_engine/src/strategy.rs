//! Per-mode request strategies.
//!
//! Every [`OperationMode`] has one [`ModeStrategy`] that owns its preconditions, its
//! prompt block, its payload layout and its response contract. The orchestrator never
//! branches on the mode itself.

use hookline_core::{EncodedPart, InputFile, OperationMode, RequestConfig};
use hookline_error::{AnalysisError, EngineResult};
use hookline_interface::{ContentPart, ResponseContract};

use crate::prompt::{
    ANALYSIS_SHAPE, COMPETITOR_SHAPE, PromptContext, TREND_SHAPE, assemble, format_date, labeled,
    targeting_lines,
};
use crate::schema::analysis_schema;

/// Mode-specific behaviour of one request.
pub trait ModeStrategy: Send + Sync {
    /// The mode this strategy implements.
    fn mode(&self) -> OperationMode;

    /// Check the mode's preconditions. Runs before any network call.
    fn validate(&self, files: &[InputFile], config: &RequestConfig) -> EngineResult<()>;

    /// The mode-specific prompt block.
    fn instructions(&self, ctx: &PromptContext<'_>) -> String;

    /// Whether the request engages live search.
    fn engages_search(&self, config: &RequestConfig) -> bool {
        config.live_trends()
    }

    /// Whether encoded files are attached to the request.
    fn sends_files(&self) -> bool {
        self.mode().uses_files()
    }

    /// Full prompt: preamble blocks followed by [`ModeStrategy::instructions`].
    fn compose_prompt(&self, ctx: &PromptContext<'_>) -> String {
        assemble(
            self.engages_search(ctx.config),
            ctx,
            self.instructions(ctx),
        )
    }

    /// Ordered payload: the prompt first, then file parts in input order.
    fn build_parts(&self, prompt: String, encoded: Vec<EncodedPart>) -> Vec<ContentPart> {
        let mut parts = Vec::with_capacity(encoded.len() + 1);
        parts.push(ContentPart::text(prompt));
        if self.sends_files() {
            parts.extend(encoded.into_iter().map(ContentPart::from));
        }
        parts
    }

    /// Strict schema or search, never both.
    fn response_contract(&self, config: &RequestConfig) -> ResponseContract {
        if self.engages_search(config) {
            ResponseContract::SearchAugmented
        } else {
            ResponseContract::StrictSchema {
                schema: analysis_schema(),
            }
        }
    }
}

/// The strategy for a mode.
pub fn strategy_for(mode: OperationMode) -> &'static dyn ModeStrategy {
    match mode {
        OperationMode::Generate => &GenerateStrategy,
        OperationMode::Refine => &RefineStrategy,
        OperationMode::CompetitorSpy => &CompetitorSpyStrategy,
        OperationMode::TrendHunter => &TrendHunterStrategy,
    }
}

/// Captions, hashtags and a score for new content.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateStrategy;

impl ModeStrategy for GenerateStrategy {
    fn mode(&self) -> OperationMode {
        OperationMode::Generate
    }

    fn validate(&self, files: &[InputFile], _config: &RequestConfig) -> EngineResult<()> {
        if files.is_empty() {
            return Err(AnalysisError::validation(
                "select at least one image or video to generate metadata",
            ));
        }
        Ok(())
    }

    fn instructions(&self, ctx: &PromptContext<'_>) -> String {
        let mut lines = vec![format!(
            "TASK: Analyze the attached content and write {} publishing metadata.",
            ctx.platform
        )];
        lines.push(format!("Platform: {}", ctx.platform));
        lines.extend(labeled("Goal", ctx.config.goal()));
        lines.extend(labeled("Style", ctx.config.style()));
        lines.extend(targeting_lines(ctx.config));
        lines.push(String::new());
        lines.push(
            "Audit the first second of the content for its hook, write a caption and CTA \
             native to the platform, tier the hashtags from broad to specific and score \
             the viral potential from 0 to 100 with an honest gap analysis."
                .to_string(),
        );
        lines.push(ANALYSIS_SHAPE.to_string());
        lines.join("\n")
    }
}

/// Polish a draft without changing its meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefineStrategy;

impl ModeStrategy for RefineStrategy {
    fn mode(&self) -> OperationMode {
        OperationMode::Refine
    }

    fn validate(&self, _files: &[InputFile], config: &RequestConfig) -> EngineResult<()> {
        if config.original_text().trim().is_empty() {
            return Err(AnalysisError::validation("enter the text you want to refine"));
        }
        Ok(())
    }

    fn instructions(&self, ctx: &PromptContext<'_>) -> String {
        let mut lines = vec![
            "TASK: Refine the draft below for readability, rhythm and engagement.".to_string(),
            "Preserve 100% of the original meaning. Do not add claims, drop facts or change \
             the point of view."
                .to_string(),
            "The strategy.caption field must be exactly the refined text.".to_string(),
        ];
        lines.extend(labeled("Keywords to weave in naturally", ctx.config.keywords()));
        lines.push(format!(
            "Original text:\n\"\"\"\n{}\n\"\"\"",
            ctx.config.original_text()
        ));
        lines.push(ANALYSIS_SHAPE.to_string());
        lines.join("\n")
    }
}

/// Shared formula behind several competitor posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompetitorSpyStrategy;

impl ModeStrategy for CompetitorSpyStrategy {
    fn mode(&self) -> OperationMode {
        OperationMode::CompetitorSpy
    }

    fn validate(&self, files: &[InputFile], _config: &RequestConfig) -> EngineResult<()> {
        if files.is_empty() {
            return Err(AnalysisError::validation(
                "select at least one competitor post to analyze",
            ));
        }
        Ok(())
    }

    fn instructions(&self, ctx: &PromptContext<'_>) -> String {
        let mut lines = vec![
            format!(
                "TASK: The {} attached items are successful competitor posts on {}.",
                ctx.input_count, ctx.platform
            ),
            "Do not review them one by one. Extract the pattern they share: the recurring \
             visual theme, how they drive action and the reusable formula behind their \
             performance. Then write metadata for a new post that applies that formula."
                .to_string(),
        ];
        lines.extend(labeled("Goal", ctx.config.goal()));
        lines.extend(labeled("Style", ctx.config.style()));
        lines.extend(targeting_lines(ctx.config));
        lines.push(ANALYSIS_SHAPE.to_string());
        lines.push(COMPETITOR_SHAPE.to_string());
        lines.join("\n")
    }
}

/// Current trends in a niche.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendHunterStrategy;

/// Number of trends requested per hunt.
pub const TREND_COUNT: usize = 5;

impl ModeStrategy for TrendHunterStrategy {
    fn mode(&self) -> OperationMode {
        OperationMode::TrendHunter
    }

    fn validate(&self, _files: &[InputFile], config: &RequestConfig) -> EngineResult<()> {
        if config.niche().trim().is_empty() {
            return Err(AnalysisError::validation("enter a niche to hunt trends in"));
        }
        Ok(())
    }

    fn instructions(&self, ctx: &PromptContext<'_>) -> String {
        format!(
            "TASK: Today is {}. Find exactly {} trends that are rising right now in the \
             niche \"{}\".\nFor each, explain why it is hot at this moment and give one \
             concrete content idea a creator could post this week.\n{}",
            format_date(ctx.date),
            TREND_COUNT,
            ctx.config.niche().trim(),
            TREND_SHAPE
        )
    }

    fn engages_search(&self, _config: &RequestConfig) -> bool {
        true
    }

    fn sends_files(&self) -> bool {
        false
    }
}
