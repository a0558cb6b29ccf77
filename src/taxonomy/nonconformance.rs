//! Non-conformance status and risk level

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Status of a non-conformance (NC) record
///
/// Stored as Title_Snake (`"Under_Investigation"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NonConformanceStatus {
    #[default]
    Open,
    UnderInvestigation,
    /// Product on hold awaiting a disposition decision
    PendingDisposition,
    Resolved,
    Closed,
}

impl Taxonomy for NonConformanceStatus {
    const KIND: TaxonomyKind = TaxonomyKind::NcStatus;

    const ALL: &'static [Self] = &[
        NonConformanceStatus::Open,
        NonConformanceStatus::UnderInvestigation,
        NonConformanceStatus::PendingDisposition,
        NonConformanceStatus::Resolved,
        NonConformanceStatus::Closed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            NonConformanceStatus::Open => "Open",
            NonConformanceStatus::UnderInvestigation => "Under_Investigation",
            NonConformanceStatus::PendingDisposition => "Pending_Disposition",
            NonConformanceStatus::Resolved => "Resolved",
            NonConformanceStatus::Closed => "Closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NonConformanceStatus::Open => "Open",
            NonConformanceStatus::UnderInvestigation => "Under Investigation",
            NonConformanceStatus::PendingDisposition => "Pending Disposition",
            NonConformanceStatus::Resolved => "Resolved",
            NonConformanceStatus::Closed => "Closed",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.nc_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::NonConformance(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::NonConformance(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for NonConformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk level assigned to a non-conformance
///
/// Stored lower-case. Missing or unrecognized levels resolve to `Medium`
/// so an unrated NC is never shown as low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Taxonomy for RiskLevel {
    const KIND: TaxonomyKind = TaxonomyKind::NcRiskLevel;

    const ALL: &'static [Self] = &[
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.nc_risk_level
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::RiskLevel(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::RiskLevel(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
