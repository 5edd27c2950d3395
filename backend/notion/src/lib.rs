//! `slacknote-notion`: files analysis results as pages in a Notion database.

pub mod client;
pub mod properties;
pub mod writer;

pub use client::NotionClient;
pub use properties::{build_properties, format_glossary, ColumnNames};
pub use writer::NotionWriter;
