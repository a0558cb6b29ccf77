//! List handler for QMS MCP server

use crate::QmsServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl QmsServerHandler {
    /// Handles list/filter operations - applies filters and formats results for display.
    pub async fn handle_list(
        &self,
        domain: String,
        status: Option<String>,
        keyword: Option<String>,
    ) -> McpResult<String> {
        let domain = validation::parse_domain(&domain)?;

        let data = self.lock_data()?;
        let mut records = data.list_all(domain);
        drop(data);

        // Apply additional filters in sequence
        if let Some(ref status_filter) = status {
            formatting::apply_status_filter(&mut records, status_filter, &self.normalizer);
        }

        if let Some(ref keyword_filter) = keyword {
            formatting::apply_keyword_filter(&mut records, keyword_filter);
        }

        tracing::debug!(domain = domain.table_name(), matched = records.len(), "list");
        Ok(formatting::format_records(domain, &records))
    }
}
