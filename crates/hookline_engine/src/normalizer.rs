//! Reply normalization.
//!
//! The service is asked for bare JSON but sometimes wraps it in a markdown fence,
//! particularly on the search path where no schema constrains the output.

use hookline_core::{AnalysisOutcome, AnalysisResult, OperationMode, TrendItem};
use hookline_error::{AnalysisError, AnalysisErrorKind, EngineResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Remove one enclosing markdown code fence, with or without a language tag.
///
/// Only the leading and trailing fence are touched; the content between them is
/// returned unchanged apart from surrounding whitespace. Text without a complete
/// fence is returned trimmed.
///
/// # Examples
///
/// ```
/// use hookline_engine::strip_fence;
///
/// assert_eq!(strip_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_fence("```json {\"a\":1} ```"), "{\"a\":1}");
/// assert_eq!(strip_fence("  {\"a\":1}  "), "{\"a\":1}");
/// ```
pub fn strip_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(inner) = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return text;
    };

    let tag_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || "_+-.".contains(c)))
        .unwrap_or(inner.len());
    let after_tag = &inner[tag_len..];
    let body = if tag_len > 0 && after_tag.starts_with(char::is_whitespace) {
        after_tag
    } else {
        inner
    };
    body.trim()
}

/// Turn raw reply text into the outcome for `mode`.
///
/// Trend Hunter replies become a list of [`TrendItem`]; every other mode yields an
/// [`AnalysisResult`].
pub fn normalize(mode: OperationMode, raw: &str) -> EngineResult<AnalysisOutcome> {
    match mode {
        OperationMode::TrendHunter => parse_trends(raw).map(AnalysisOutcome::from),
        _ => parse_analysis(raw).map(AnalysisOutcome::from),
    }
}

/// Parse an analysis reply.
///
/// A missing required section is a parse error. Fields inside a section are not
/// checked beyond their JSON types.
pub fn parse_analysis(raw: &str) -> EngineResult<AnalysisResult> {
    let cleaned = strip_fence(raw);
    serde_json::from_str(cleaned).map_err(|e| {
        warn!(error = %e, length = cleaned.len(), "Analysis reply did not parse");
        AnalysisError::parse(format!("analysis reply: {}", e))
    })
}

/// Parse a trend reply.
///
/// Accepts `{"trends": [...]}`. A reply with no `trends` key (or a null one) but a top-level
/// `headline` and `contentIdea` is read as a single trend. Anything else, or an empty
/// list, is [`AnalysisErrorKind::NotFound`].
///
/// # Examples
///
/// ```
/// use hookline_engine::parse_trends;
///
/// let items = parse_trends(r#"{"headline": "H", "contentIdea": "C"}"#).unwrap();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].content_idea, "C");
///
/// assert!(parse_trends("{}").is_err());
/// ```
pub fn parse_trends(raw: &str) -> EngineResult<Vec<TrendItem>> {
    let cleaned = strip_fence(raw);
    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        warn!(error = %e, length = cleaned.len(), "Trend reply did not parse");
        AnalysisError::parse(format!("trend reply: {}", e))
    })?;

    let items = match value.get("trends").filter(|list| !list.is_null()) {
        Some(list) => serde_json::from_value::<Vec<TrendItem>>(list.clone())
            .map_err(|e| AnalysisError::parse(format!("trend list: {}", e)))?,
        None => match single_trend(&value) {
            Some(item) => {
                debug!("Reply held a single top-level trend");
                vec![item]
            }
            None => Vec::new(),
        },
    };

    if items.is_empty() {
        return Err(AnalysisError::new(AnalysisErrorKind::NotFound(
            "reply contained no trends".to_string(),
        )));
    }
    Ok(items)
}

fn single_trend(value: &Value) -> Option<TrendItem> {
    let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
    Some(TrendItem {
        headline: field("headline")?,
        content_idea: field("contentIdea")?,
        why_its_hot: field("whyItsHot").unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_and_bare_json_parse_alike() {
        let fenced: Value = serde_json::from_str(strip_fence("```json {\"a\":1} ```")).unwrap();
        let bare: Value = serde_json::from_str("{\"a\":1}").unwrap();
        assert_eq!(fenced, bare);
    }

    #[test]
    fn fence_without_tag_is_stripped() {
        assert_eq!(strip_fence("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn interior_backticks_survive() {
        let raw = "```json\n{\"code\": \"use ``` here\"}\n```";
        assert_eq!(strip_fence(raw), "{\"code\": \"use ``` here\"}");
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        assert_eq!(strip_fence("```json\n{}"), "```json\n{}");
    }

    #[test]
    fn trends_container_keeps_order() {
        let raw = r#"{"trends":[
            {"headline":"A","whyItsHot":"1","contentIdea":"a"},
            {"headline":"B","whyItsHot":"2","contentIdea":"b"}
        ]}"#;
        let items = parse_trends(raw).unwrap();
        let heads: Vec<_> = items.iter().map(|t| t.headline.as_str()).collect();
        assert_eq!(heads, vec!["A", "B"]);
    }

    #[test]
    fn empty_trend_list_is_not_found() {
        let err = parse_trends(r#"{"trends": []}"#).unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::NotFound(_)));
    }

    #[test]
    fn null_trends_falls_back_to_single_trend() {
        let items =
            parse_trends(r#"{"trends": null, "headline": "H", "contentIdea": "C"}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].headline, "H");

        let err = parse_trends(r#"{"trends": null}"#).unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::NotFound(_)));
    }

    #[test]
    fn headline_alone_is_not_a_trend() {
        let err = parse_trends(r#"{"headline": "H"}"#).unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::NotFound(_)));
    }

    #[test]
    fn invalid_json_is_parse_error_not_not_found() {
        let err = parse_trends("Here are some trends!").unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::Parse(_)));
    }

    #[test]
    fn analysis_missing_section_is_parse_error() {
        let err = parse_analysis(r#"{"strategy": {}, "seo": {}, "virality": {}}"#).unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::Parse(_)));
    }
}
