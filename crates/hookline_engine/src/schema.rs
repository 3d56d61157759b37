//! Response schema for the strict output path.
//!
//! Mirrors [`AnalysisResult`](hookline_core::AnalysisResult) in the OpenAPI subset the
//! service accepts (`OBJECT`, `ARRAY`, `STRING`, `NUMBER`).

use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Schema of an analysis reply.
///
/// `visualAudit`, `strategy`, `seo` and `virality` are required; `competitorInsights`
/// is optional.
///
/// # Examples
///
/// ```
/// let schema = hookline_engine::analysis_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["properties"]["virality"]["properties"]["score"]["type"], "NUMBER");
/// ```
pub fn analysis_schema() -> Value {
    object(
        json!({
            "visualAudit": object(
                json!({
                    "summary": string(),
                    "hookIdentified": string(),
                    "psychologyCheck": string(),
                }),
                &["summary", "hookIdentified", "psychologyCheck"],
            ),
            "strategy": object(
                json!({
                    "headline": string(),
                    "caption": string(),
                    "cta": string(),
                }),
                &["headline", "caption", "cta"],
            ),
            "seo": object(
                json!({
                    "hiddenKeywords": string_list(),
                    "hashtags": object(
                        json!({
                            "broad": string_list(),
                            "niche": string_list(),
                            "specific": string_list(),
                        }),
                        &["broad", "niche", "specific"],
                    ),
                }),
                &["hiddenKeywords", "hashtags"],
            ),
            "virality": object(
                json!({
                    "score": { "type": "NUMBER" },
                    "gapAnalysis": string(),
                    "trendDetected": string(),
                    "vibe": string(),
                }),
                &["score", "gapAnalysis"],
            ),
            "competitorInsights": object(
                json!({
                    "visualTheme": string(),
                    "ctaStrategy": string(),
                    "formula": string(),
                }),
                &["visualTheme", "ctaStrategy", "formula"],
            ),
        }),
        &["visualAudit", "strategy", "seo", "virality"],
    )
}
