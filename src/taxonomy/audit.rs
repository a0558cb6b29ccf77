//! Audit status

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Status of an internal or third-party audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuditStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl Taxonomy for AuditStatus {
    const KIND: TaxonomyKind = TaxonomyKind::AuditStatus;

    const ALL: &'static [Self] = &[
        AuditStatus::Scheduled,
        AuditStatus::InProgress,
        AuditStatus::Completed,
        AuditStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Scheduled => "scheduled",
            AuditStatus::InProgress => "in-progress",
            AuditStatus::Completed => "completed",
            AuditStatus::Cancelled => "cancelled",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AuditStatus::Scheduled => "Scheduled",
            AuditStatus::InProgress => "In Progress",
            AuditStatus::Completed => "Completed",
            AuditStatus::Cancelled => "Cancelled",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.audit_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Audit(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Audit(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
