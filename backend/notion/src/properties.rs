//! Mapping an [`AnalysisResult`] onto Notion page properties.

use serde_json::{json, Value};

use slacknote_core::{AnalysisResult, GlossaryEntry};

/// Notion rejects text objects longer than this many characters.
pub const MAX_TEXT_CHARS: usize = 2000;

/// Column names of the target database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub title: String,
    pub category: String,
    pub tags: String,
    pub glossary: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            title: "이름".to_string(),
            category: "카테고리".to_string(),
            tags: "태그".to_string(),
            glossary: "용어 설명".to_string(),
        }
    }
}

impl ColumnNames {
    /// Remediation shown when a page cannot be created.
    pub fn mismatch_hint(&self) -> String {
        format!(
            "check that the Notion database columns are named '{}', '{}', '{}', '{}'",
            self.title, self.category, self.tags, self.glossary
        )
    }
}

/// One `📌 term: definition` line per glossary entry.
pub fn format_glossary(glossary: &[GlossaryEntry]) -> String {
    glossary
        .iter()
        .map(|g| format!("📌 {}: {}", g.term, g.definition))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the `properties` object of a create-page request.
pub fn build_properties(analysis: &AnalysisResult, columns: &ColumnNames) -> Value {
    let tags: Vec<Value> = analysis
        .tags
        .iter()
        .map(|t| json!({ "name": t }))
        .collect();

    let mut properties = serde_json::Map::new();
    properties.insert(
        columns.title.clone(),
        json!({ "title": text_objects(&analysis.summary) }),
    );
    properties.insert(
        columns.category.clone(),
        json!({ "select": { "name": analysis.category.label() } }),
    );
    properties.insert(columns.tags.clone(), json!({ "multi_select": tags }));
    properties.insert(
        columns.glossary.clone(),
        json!({ "rich_text": text_objects(&format_glossary(&analysis.glossary)) }),
    );
    Value::Object(properties)
}

/// Split text into rich-text objects that respect [`MAX_TEXT_CHARS`].
fn text_objects(content: &str) -> Vec<Value> {
    if content.is_empty() {
        return vec![json!({ "text": { "content": "" } })];
    }
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(MAX_TEXT_CHARS)
        .map(|chunk| json!({ "text": { "content": chunk.iter().collect::<String>() } }))
        .collect()
}
