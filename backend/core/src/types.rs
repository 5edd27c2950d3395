use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of keyword tags kept from an analysis.
pub const MAX_TAGS: usize = 3;

/// Maximum number of glossary entries kept from an analysis.
pub const MAX_GLOSSARY_ENTRIES: usize = 2;

/// The fixed set of categories a message can be filed under.
///
/// Labels match the select options of the target Notion database. English
/// names are accepted when parsing but the canonical label is always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "개발", alias = "Development")]
    Development,
    #[serde(rename = "비즈니스", alias = "Business")]
    Business,
    #[serde(rename = "일반", alias = "General")]
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ai,
        Category::Development,
        Category::Business,
        Category::General,
    ];

    /// The label stored in the database select column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Development => "개발",
            Category::Business => "비즈니스",
            Category::General => "일반",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A term explained alongside the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

/// Structured result of analyzing one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub tags: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub glossary: Vec<GlossaryEntry>,
}

/// Identifier of a record created by a [`RecordWriter`](crate::RecordWriter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
