use anyhow::Result;
use async_trait::async_trait;

use crate::error::{AnalysisError, WriteError};
use crate::types::{AnalysisResult, RecordId};

/// Trait for LLM providers used by the analyzer.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}

/// Turns free text into a structured [`AnalysisResult`].
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Persists an [`AnalysisResult`] as a new record in an external store.
#[async_trait]
pub trait RecordWriter: Send + Sync {
    async fn write(&self, analysis: &AnalysisResult) -> Result<RecordId, WriteError>;
}
