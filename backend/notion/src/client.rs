use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Minimal Notion API client: creates pages in a database.
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    token: String,
    base_url: String,
}

#[derive(Deserialize)]
struct CreatedPage {
    id: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Notion HTTP client")?;
        Ok(self)
    }

    /// Create a page in `database_id` and return its id.
    pub async fn create_page(&self, database_id: &str, properties: Value) -> Result<String> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        debug!(database_id = %database_id, "Creating Notion page");

        let res = self
            .client
            .post(format!("{}/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .context("Notion HTTP request failed")?;

        let status = res.status();
        if !status.is_success() {
            let err = res.text().await.unwrap_or_default();
            debug!(status = %status, "Notion pages.create rejected");
            anyhow::bail!("Notion returned {}: {}", status, err);
        }

        let page: CreatedPage = res
            .json()
            .await
            .context("Failed to parse Notion response")?;
        Ok(page.id)
    }
}
