//! Taxonomy listing handler for QMS MCP server

use crate::QmsServerHandler;
use crate::formatting;
use crate::taxonomy::TaxonomyKind;
use crate::validation;
use mcp_attr::Result as McpResult;

impl QmsServerHandler {
    /// Lists one taxonomy's closed set, or all of them.
    pub async fn handle_taxonomies(&self, taxonomy: Option<String>) -> McpResult<String> {
        let kinds = match taxonomy.as_deref() {
            Some(name) => vec![validation::parse_taxonomy(name)?],
            None => TaxonomyKind::ALL.to_vec(),
        };

        let sections: Vec<String> = kinds
            .into_iter()
            .map(formatting::format_taxonomy)
            .collect();
        Ok(sections.join("\n").trim_end().to_string())
    }
}
