//! Normalize and compare handlers for QMS MCP server

use crate::QmsServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl QmsServerHandler {
    /// Resolves a raw status string to its canonical value, reporting default substitution.
    pub async fn handle_normalize_status(
        &self,
        taxonomy: String,
        value: Option<String>,
    ) -> McpResult<String> {
        let kind = validation::parse_taxonomy(&taxonomy)?;
        let raw = value.as_deref();
        let status = self.normalizer.normalize(kind, raw);

        let mut response = format!(
            "{}: {} -> {}",
            kind,
            raw.map(|r| format!("'{}'", r))
                .unwrap_or_else(|| "(none)".to_string()),
            formatting::format_status(status)
        );

        match raw {
            None => response.push_str("\nNo value given; using the default."),
            Some(r) if self.normalizer.lookup_kind(kind, r).is_none() => {
                tracing::debug!(taxonomy = %kind, raw = r, "unrecognized status");
                response.push_str("\nValue not recognized; using the default.");
            }
            Some(_) => {}
        }

        Ok(response)
    }

    /// Compares two raw strings as statuses of one taxonomy.
    pub async fn handle_status_equals(
        &self,
        taxonomy: String,
        a: String,
        b: String,
    ) -> McpResult<String> {
        let kind = validation::parse_taxonomy(&taxonomy)?;
        let equal = self.normalizer.equals(kind, &a, &b);

        let mut response = format!("{}\n", equal);
        for side in [&a, &b] {
            let resolved = match self.normalizer.lookup_kind(kind, side) {
                Some(status) => formatting::format_status(status),
                None => "not recognized".to_string(),
            };
            response.push_str(&format!("- '{}' -> {}\n", side, resolved));
        }

        Ok(response.trim_end().to_string())
    }
}
