use thiserror::Error;

/// Why a message could not be turned into an [`AnalysisResult`](crate::AnalysisResult).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no text to analyze")]
    EmptyText,

    #[error("LLM provider error ({provider}): {message}")]
    Service { provider: String, message: String },

    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

/// Failure to create a record in the external database.
#[derive(Debug, Error)]
#[error("record write failed: {message} (hint: {hint})")]
pub struct WriteError {
    pub message: String,
    /// Remediation shown next to the failure, usually a schema mismatch.
    pub hint: String,
}

impl WriteError {
    pub fn new(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: hint.into(),
        }
    }
}
