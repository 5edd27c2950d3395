//! Analyze-then-write pipeline run once per incoming message.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::error::{AnalysisError, WriteError};
use crate::traits::{RecordWriter, TextAnalyzer};
use crate::types::{AnalysisResult, RecordId};

/// Why a message was not processed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoText,
}

/// What happened to one message.
#[derive(Debug)]
pub enum PipelineOutcome {
    Skipped(SkipReason),
    AnalysisFailed(AnalysisError),
    WriteFailed {
        analysis: AnalysisResult,
        error: WriteError,
    },
    Written {
        analysis: AnalysisResult,
        record_id: RecordId,
    },
}

impl PipelineOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PipelineOutcome::Written { .. })
    }
}

/// Runs analysis and, if it succeeds, writes the result.
///
/// Failures are logged and reported through [`PipelineOutcome`]; nothing is
/// retried and nothing propagates to the caller.
pub struct Pipeline {
    analyzer: Arc<dyn TextAnalyzer>,
    writer: Arc<dyn RecordWriter>,
}

impl Pipeline {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, writer: Arc<dyn RecordWriter>) -> Self {
        Self { analyzer, writer }
    }

    pub async fn process(&self, text: Option<&str>) -> PipelineOutcome {
        let text = match text.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                debug!("Message has no text, skipping");
                return PipelineOutcome::Skipped(SkipReason::NoText);
            }
        };

        let start = Instant::now();

        let analysis = match self.analyzer.analyze(text).await {
            Ok(analysis) => analysis,
            Err(AnalysisError::EmptyText) => {
                return PipelineOutcome::Skipped(SkipReason::NoText);
            }
            Err(e) => {
                error!(error = %e, "Analysis failed, nothing will be written");
                return PipelineOutcome::AnalysisFailed(e);
            }
        };

        info!(
            category = %analysis.category,
            tags = ?analysis.tags,
            glossary_entries = analysis.glossary.len(),
            "Message analyzed"
        );

        match self.writer.write(&analysis).await {
            Ok(record_id) => {
                info!(
                    record_id = %record_id,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Record saved"
                );
                PipelineOutcome::Written {
                    analysis,
                    record_id,
                }
            }
            Err(error) => {
                error!(error = %error.message, hint = %error.hint, "Saving record failed");
                PipelineOutcome::WriteFailed { analysis, error }
            }
        }
    }
}
