//! Output rendering for the command-line presentation layer.

use hookline_core::{AnalysisOutcome, AnalysisResult, TrendItem};
use hookline_error::{HooklineResult, JsonError};
use std::fmt::Write as _;

/// Pretty-printed JSON.
pub fn render_json(outcome: &AnalysisOutcome) -> HooklineResult<String> {
    serde_json::to_string_pretty(outcome)
        .map_err(|e| JsonError::new(format!("Failed to render result: {}", e)).into())
}

/// Plain-text report.
pub fn render_human(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Analysis(result) => render_analysis(result),
        AnalysisOutcome::Trends(items) => render_trends(items),
    }
}

fn tags(list: &[String]) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(" ")
    }
}

fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let audit = &result.visual_audit;
    let _ = writeln!(out, "VISUAL AUDIT");
    let _ = writeln!(out, "  Summary:    {}", audit.summary);
    let _ = writeln!(out, "  Hook:       {}", audit.hook_identified);
    let _ = writeln!(out, "  Psychology: {}", audit.psychology_check);

    let strategy = &result.strategy;
    let _ = writeln!(out, "\nSTRATEGY");
    let _ = writeln!(out, "  Headline: {}", strategy.headline);
    let _ = writeln!(out, "  Caption:\n{}", indent(&strategy.caption, 4));
    let _ = writeln!(out, "  CTA:      {}", strategy.cta);

    let seo = &result.seo;
    let _ = writeln!(out, "\nSEO");
    let _ = writeln!(out, "  Keywords: {}", seo.hidden_keywords.join(", "));
    let _ = writeln!(out, "  Broad:    {}", tags(&seo.hashtags.broad));
    let _ = writeln!(out, "  Niche:    {}", tags(&seo.hashtags.niche));
    let _ = writeln!(out, "  Specific: {}", tags(&seo.hashtags.specific));

    let virality = &result.virality;
    let _ = writeln!(out, "\nVIRALITY");
    let _ = writeln!(out, "  Score: {:.0}/100", virality.score);
    let _ = writeln!(out, "  Gap:   {}", virality.gap_analysis);
    if let Some(trend) = &virality.trend_detected {
        let _ = writeln!(out, "  Trend: {}", trend);
    }
    if let Some(vibe) = &virality.vibe {
        let _ = writeln!(out, "  Vibe:  {}", vibe);
    }

    if let Some(insights) = &result.competitor_insights {
        let _ = writeln!(out, "\nCOMPETITOR INSIGHTS");
        let _ = writeln!(out, "  Visual theme: {}", insights.visual_theme);
        let _ = writeln!(out, "  CTA strategy: {}", insights.cta_strategy);
        let _ = writeln!(out, "  Formula:      {}", insights.formula);
    }
    out
}

fn render_trends(items: &[TrendItem]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}. {}", i + 1, item.headline);
        if !item.why_its_hot.is_empty() {
            let _ = writeln!(out, "   Why now: {}", item.why_its_hot);
        }
        let _ = writeln!(out, "   Idea:    {}", item.content_idea);
    }
    out
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
