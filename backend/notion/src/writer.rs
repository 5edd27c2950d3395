use async_trait::async_trait;
use tracing::info;

use slacknote_core::{AnalysisResult, RecordId, RecordWriter, WriteError};
use slacknote_logging::redact_sensitive_data;

use crate::client::NotionClient;
use crate::properties::{build_properties, ColumnNames};

/// [`RecordWriter`] that files each analysis as a page in one Notion database.
pub struct NotionWriter {
    client: NotionClient,
    database_id: String,
    columns: ColumnNames,
}

impl NotionWriter {
    pub fn new(client: NotionClient, database_id: impl Into<String>, columns: ColumnNames) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            columns,
        }
    }
}

#[async_trait]
impl RecordWriter for NotionWriter {
    async fn write(&self, analysis: &AnalysisResult) -> Result<RecordId, WriteError> {
        let properties = build_properties(analysis, &self.columns);

        let page_id = self
            .client
            .create_page(&self.database_id, properties)
            .await
            .map_err(|e| {
                WriteError::new(
                    redact_sensitive_data(&format!("{e:#}")),
                    self.columns.mismatch_hint(),
                )
            })?;

        info!(page_id = %page_id, "Saved analysis to Notion");
        Ok(RecordId::new(page_id))
    }
}
