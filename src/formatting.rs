//! Formatting helper functions for QMS MCP server
//!
//! This module contains filtering and formatting logic for tool output.

use crate::records::{Domain, Record, UPDATED_AT_FIELD};
use crate::taxonomy::{CanonicalStatus, StatusNormalizer, TaxonomyKind};

/// Keep records whose primary status equals `status`
///
/// Comparison uses the normalizer's status equality, so `"In Progress"`,
/// `"in-progress"` and `"IN_PROGRESS"` select the same records and an
/// unrecognized filter selects nothing.
pub fn apply_status_filter(records: &mut Vec<Record>, status: &str, normalizer: &StatusNormalizer) {
    records.retain(|record| {
        let current = record.primary_status();
        normalizer.equals(current.kind(), current.as_str(), status)
    });
}

/// Apply keyword filtering (case-insensitive search in id and title)
pub fn apply_keyword_filter(records: &mut Vec<Record>, keyword: &str) {
    records.retain(|record| record.matches_keyword(keyword));
}

/// Format records of one domain into a display string
pub fn format_records(domain: Domain, records: &[Record]) -> String {
    if records.is_empty() {
        return format!("No {} records found", domain);
    }

    let mut result = format!("Found {} {} record(s):\n\n", records.len(), domain);
    for record in records {
        result.push_str(&format!(
            "- [{}] {}\n",
            record.id,
            record.title().unwrap_or("(untitled)")
        ));
        for (field, status) in &record.statuses {
            result.push_str(&format!("  {}: {} ({})", field, status.label(), status.as_str()));
            if let Some(stored) = record.unrecognized_text(field) {
                result.push_str(&format!(" [stored: '{}']", stored));
            }
            result.push('\n');
        }
        if let Some(updated) = record.fields.get(UPDATED_AT_FIELD) {
            match updated.as_str() {
                Some(date) => result.push_str(&format!("  Updated: {}\n", date)),
                None => result.push_str(&format!("  Updated: {}\n", updated)),
            }
        }
    }

    result
}

/// Describe one resolved value, e.g. `pending-verification (Pending Verification)`
pub fn format_status(status: CanonicalStatus) -> String {
    format!("{} ({})", status.as_str(), status.label())
}

/// List the members of a taxonomy with its default marked
pub fn format_taxonomy(kind: TaxonomyKind) -> String {
    let default = kind.default_status();
    let mut result = format!("{} (default: {})\n", kind, default.as_str());
    for member in kind.members() {
        result.push_str(&format!("  - {}\n", format_status(member)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_taxonomy_marks_default() {
        let text = format_taxonomy(TaxonomyKind::ComplaintStatus);
        assert!(text.starts_with("complaint_status (default: New)"));
        assert!(text.contains("  - Under_Investigation (Under Investigation)"));
    }

    #[test]
    fn test_format_records_empty() {
        assert_eq!(format_records(Domain::Capa, &[]), "No CAPA records found");
    }
}
