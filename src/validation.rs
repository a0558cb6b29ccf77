//! Validation helper functions for QMS MCP server
//!
//! This module turns tool parameters (taxonomy names, domain names, status
//! values for writes, record ids) into typed values, producing public
//! `INVALID_PARAMS` errors for anything it cannot accept.

use crate::records::Domain;
use crate::taxonomy::{CanonicalStatus, StatusNormalizer, TaxonomyKind};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a taxonomy name parameter
pub fn parse_taxonomy(name: &str) -> McpResult<TaxonomyKind> {
    name.parse::<TaxonomyKind>()
        .map_err(|e| invalid_params(e.to_string()))
}

/// Parse and validate a domain name parameter
pub fn parse_domain(name: &str) -> McpResult<Domain> {
    name.parse::<Domain>().map_err(|e| invalid_params(e.to_string()))
}

/// Strictly resolve a status value that is about to be written
///
/// Reads fall back to the taxonomy default; writes coming from a caller must
/// name a real member, otherwise a typo would silently become the default.
///
/// # Arguments
/// * `normalizer` - Lookup tables
/// * `kind` - Taxonomy of the target field
/// * `raw` - Value supplied by the caller, in any case or delimiter style
pub fn parse_status_value(
    normalizer: &StatusNormalizer,
    kind: TaxonomyKind,
    raw: &str,
) -> McpResult<CanonicalStatus> {
    normalizer.lookup_kind(kind, raw).ok_or_else(|| {
        invalid_params(format!(
            "Invalid {} '{}'. Valid values: {}",
            kind,
            raw,
            valid_values(kind)
        ))
    })
}

/// Comma-separated storage strings of every member of a taxonomy
pub fn valid_values(kind: TaxonomyKind) -> String {
    kind.members()
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalize a record id by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use qms_mcp::validation::normalize_record_id;
/// assert_eq!(normalize_record_id(" CAPA-001 "), "CAPA-001");
/// ```
pub fn normalize_record_id(id: &str) -> String {
    id.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values_lists_storage_strings() {
        assert_eq!(
            valid_values(TaxonomyKind::DocumentCheckoutStatus),
            "available, checked_out"
        );
    }

    #[test]
    fn test_parse_status_value_is_strict() {
        let normalizer = StatusNormalizer::new();
        assert!(parse_status_value(&normalizer, TaxonomyKind::CapaStatus, "VERIFIED").is_ok());
        assert!(parse_status_value(&normalizer, TaxonomyKind::CapaStatus, "done").is_err());
    }
}
