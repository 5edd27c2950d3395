use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use slacknote_core::{AnalysisError, AnalysisResult, LlmProvider, LlmRequest, TextAnalyzer};
use slacknote_logging::redact_sensitive_data;

use crate::parse::parse_analysis;
use crate::prompt::{build_prompt, system_prompt};
use crate::providers::gemini::DEFAULT_MODEL;

/// Generation settings for analysis requests.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1024,
            temperature: 0.2,
        }
    }
}

/// [`TextAnalyzer`] that asks an LLM provider for a JSON analysis.
pub struct LlmAnalyzer {
    provider: Arc<dyn LlmProvider>,
    settings: AnalyzerSettings,
}

impl LlmAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: AnalyzerSettings) -> Self {
        Self { provider, settings }
    }
}

#[async_trait]
impl TextAnalyzer for LlmAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        let request = LlmRequest {
            model: self.settings.model.clone(),
            system_prompt: system_prompt(),
            user_prompt: build_prompt(text),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        info!(
            provider = %self.provider.name(),
            model = %request.model,
            chars = text.chars().count(),
            "Analyzing message"
        );

        let response =
            self.provider
                .complete(&request)
                .await
                .map_err(|e| AnalysisError::Service {
                    provider: self.provider.name().to_string(),
                    message: redact_sensitive_data(&format!("{e:#}")),
                })?;

        debug!(
            provider = %response.provider,
            model = %response.model,
            tokens = response.tokens_used,
            latency_ms = response.latency_ms,
            "Provider responded"
        );

        parse_analysis(&response.content)
    }
}
