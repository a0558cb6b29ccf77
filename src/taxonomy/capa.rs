//! CAPA (corrective and preventive action) status

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Lifecycle status of a CAPA record
///
/// Stored as lower kebab-case (`"pending-verification"`), displayed in
/// Title Case (`"Pending Verification"`). Unrecognized input falls back to
/// `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapaStatus {
    /// Raised, nobody working on it yet
    #[default]
    Open,
    /// Root cause analysis or actions under way
    InProgress,
    /// Actions done, effectiveness check outstanding
    PendingVerification,
    /// Closed out by the owner
    Closed,
    /// Effectiveness confirmed by QA
    Verified,
    /// Withdrawn without action
    Cancelled,
}

impl Taxonomy for CapaStatus {
    const KIND: TaxonomyKind = TaxonomyKind::CapaStatus;

    const ALL: &'static [Self] = &[
        CapaStatus::Open,
        CapaStatus::InProgress,
        CapaStatus::PendingVerification,
        CapaStatus::Closed,
        CapaStatus::Verified,
        CapaStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            CapaStatus::Open => "open",
            CapaStatus::InProgress => "in-progress",
            CapaStatus::PendingVerification => "pending-verification",
            CapaStatus::Closed => "closed",
            CapaStatus::Verified => "verified",
            CapaStatus::Cancelled => "cancelled",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CapaStatus::Open => "Open",
            CapaStatus::InProgress => "In Progress",
            CapaStatus::PendingVerification => "Pending Verification",
            CapaStatus::Closed => "Closed",
            CapaStatus::Verified => "Verified",
            CapaStatus::Cancelled => "Cancelled",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.capa_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Capa(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Capa(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CapaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
