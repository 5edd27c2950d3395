pub mod error;
pub mod pipeline;
pub mod traits;
pub mod types;

pub use error::{AnalysisError, WriteError};
pub use pipeline::{Pipeline, PipelineOutcome, SkipReason};
pub use traits::{LlmProvider, LlmRequest, LlmResponse, RecordWriter, TextAnalyzer};
pub use types::{
    AnalysisResult, Category, GlossaryEntry, RecordId, MAX_GLOSSARY_ENTRIES, MAX_TAGS,
};
