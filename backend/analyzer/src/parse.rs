//! Turning a raw LLM reply into a validated [`AnalysisResult`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use slacknote_core::{AnalysisError, AnalysisResult, MAX_GLOSSARY_ENTRIES, MAX_TAGS};

/// A fence wrapping the entire reply; the greedy capture keeps backtick runs
/// inside the payload.
static WRAPPING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*)```\z").unwrap());

/// The first fenced markdown block anywhere in the reply.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)```").unwrap());

/// Strip markdown code-fence wrapping from an LLM reply.
///
/// A reply that already parses as JSON is returned trimmed. Otherwise a fence
/// around the whole reply is removed, then the first fenced block is tried,
/// and finally the trimmed input is returned as is.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return trimmed;
    }

    [&*WRAPPING_FENCE, &*FENCED_BLOCK]
        .iter()
        .find_map(|re| re.captures(trimmed).and_then(|caps| caps.get(1)))
        .map(|inner| inner.as_str().trim())
        .unwrap_or(trimmed)
}

/// Parse and validate an analysis reply.
///
/// `category`, `tags` and `summary` are required; `glossary` defaults to empty.
/// Lists longer than their limits are truncated.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let json = strip_code_fences(raw);
    if json.is_empty() {
        return Err(AnalysisError::MalformedResponse("empty response".into()));
    }

    let mut result: AnalysisResult = serde_json::from_str(json)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    result.summary = result.summary.trim().to_string();
    if result.summary.is_empty() {
        return Err(AnalysisError::MalformedResponse("summary is empty".into()));
    }

    result.tags = result
        .tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if result.tags.len() > MAX_TAGS {
        warn!(count = result.tags.len(), "Too many tags, keeping the first {}", MAX_TAGS);
        result.tags.truncate(MAX_TAGS);
    }

    result
        .glossary
        .retain(|g| !g.term.trim().is_empty() && !g.definition.trim().is_empty());
    if result.glossary.len() > MAX_GLOSSARY_ENTRIES {
        warn!(
            count = result.glossary.len(),
            "Too many glossary entries, keeping the first {}", MAX_GLOSSARY_ENTRIES
        );
        result.glossary.truncate(MAX_GLOSSARY_ENTRIES);
    }

    Ok(result)
}
