//! Log Redaction
//!
//! Scrubs API keys and access tokens from strings prior to logging. Error
//! bodies returned by Gemini and Notion can echo request details back.

use regex::Regex;
use std::sync::LazyLock;

static BEARER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").unwrap());
static GOOGLE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AIza[0-9A-Za-z\-_]{35}").unwrap());
static NOTION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:secret|ntn)_[A-Za-z0-9]{20,}").unwrap());
static KEY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&]key=)[^&\s]+").unwrap());

/// Redacts credentials in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let mut redacted = BEARER_RE.replace_all(input, "Bearer [REDACTED_TOKEN]").to_string();
    redacted = GOOGLE_KEY_RE.replace_all(&redacted, "[REDACTED_KEY]").to_string();
    redacted = NOTION_TOKEN_RE.replace_all(&redacted, "[REDACTED_TOKEN]").to_string();
    redacted = KEY_PARAM_RE.replace_all(&redacted, "${1}[REDACTED_KEY]").to_string();
    redacted
}
