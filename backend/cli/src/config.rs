use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use slacknote_analyzer::providers::gemini::DEFAULT_MODEL;
use slacknote_channels::DEFAULT_WEBHOOK_PATH;
use slacknote_notion::ColumnNames;

/// Error returned when the environment cannot produce a usable config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required env var \"{0}\"")]
    MissingEnvVar(String),

    #[error("Invalid value for env var \"{var_name}\": {value}")]
    InvalidValue { var_name: String, value: String },
}

/// slacknote runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model identifier
    pub gemini_model: String,
    /// Notion integration token
    pub notion_token: String,
    /// Target Notion database id
    pub notion_database_id: String,
    pub columns: ColumnNames,

    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Path the Slack Events API posts to
    pub slack_webhook_path: String,

    /// Directory for NDJSON log files
    pub log_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Timeout applied to outbound Gemini and Notion requests
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let optional = |name: &str| env.get(name).filter(|v| !v.trim().is_empty()).cloned();
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let parsed = |name: &str, default: u64| -> Result<u64, ConfigError> {
            match optional(name) {
                Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var_name: name.to_string(),
                    value,
                }),
                None => Ok(default),
            }
        };

        let defaults = ColumnNames::default();
        let port = parsed("SLACKNOTE_PORT", 5000)?;
        let port = u16::try_from(port).map_err(|_| ConfigError::InvalidValue {
            var_name: "SLACKNOTE_PORT".to_string(),
            value: port.to_string(),
        })?;

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            notion_token: required("NOTION_TOKEN")?,
            notion_database_id: required("NOTION_DB_ID")?,
            columns: ColumnNames {
                title: optional("NOTION_TITLE_COLUMN").unwrap_or(defaults.title),
                category: optional("NOTION_CATEGORY_COLUMN").unwrap_or(defaults.category),
                tags: optional("NOTION_TAGS_COLUMN").unwrap_or(defaults.tags),
                glossary: optional("NOTION_GLOSSARY_COLUMN").unwrap_or(defaults.glossary),
            },
            bind_address: optional("SLACKNOTE_BIND").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            slack_webhook_path: optional("SLACK_WEBHOOK_PATH")
                .unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string()),
            log_dir: optional("SLACKNOTE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_level: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            http_timeout: Duration::from_secs(parsed("SLACKNOTE_HTTP_TIMEOUT_SECS", 60)?),
        })
    }
}
