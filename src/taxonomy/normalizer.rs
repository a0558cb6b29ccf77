//! The status normalizer and name-keyed taxonomy access
//!
//! `StatusNormalizer` owns one immutable [`LookupTable`] per taxonomy. It is
//! built once at startup and handed to whoever needs it; there is no global
//! registry. `TaxonomyKind` and `CanonicalStatus` let callers that only know
//! a taxonomy by name (tool parameters, record field declarations) use the
//! same tables without knowing the concrete enum.

use super::{
    AuditStatus, CapaStatus, CheckoutStatus, ComplaintCategory, ComplaintStatus, DocumentStatus,
    LookupTable, NonConformanceStatus, RiskLevel, Taxonomy, TrainingStatus, normalize_token,
};
use crate::error::QmsError;
use std::fmt;
use std::str::FromStr;

/// Named taxonomies known to the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyKind {
    CapaStatus,
    NcStatus,
    NcRiskLevel,
    ComplaintStatus,
    ComplaintCategory,
    TrainingStatus,
    DocumentStatus,
    DocumentCheckoutStatus,
    AuditStatus,
}

impl TaxonomyKind {
    pub const ALL: &'static [TaxonomyKind] = &[
        TaxonomyKind::CapaStatus,
        TaxonomyKind::NcStatus,
        TaxonomyKind::NcRiskLevel,
        TaxonomyKind::ComplaintStatus,
        TaxonomyKind::ComplaintCategory,
        TaxonomyKind::TrainingStatus,
        TaxonomyKind::DocumentStatus,
        TaxonomyKind::DocumentCheckoutStatus,
        TaxonomyKind::AuditStatus,
    ];

    /// Name used in tool parameters and messages
    pub fn name(self) -> &'static str {
        match self {
            TaxonomyKind::CapaStatus => "capa_status",
            TaxonomyKind::NcStatus => "nc_status",
            TaxonomyKind::NcRiskLevel => "nc_risk_level",
            TaxonomyKind::ComplaintStatus => "complaint_status",
            TaxonomyKind::ComplaintCategory => "complaint_category",
            TaxonomyKind::TrainingStatus => "training_status",
            TaxonomyKind::DocumentStatus => "document_status",
            TaxonomyKind::DocumentCheckoutStatus => "document_checkout_status",
            TaxonomyKind::AuditStatus => "audit_status",
        }
    }

    /// Fallback value for missing or unrecognized input
    pub fn default_status(self) -> CanonicalStatus {
        match self {
            TaxonomyKind::CapaStatus => CapaStatus::default().into_status(),
            TaxonomyKind::NcStatus => NonConformanceStatus::default().into_status(),
            TaxonomyKind::NcRiskLevel => RiskLevel::default().into_status(),
            TaxonomyKind::ComplaintStatus => ComplaintStatus::default().into_status(),
            TaxonomyKind::ComplaintCategory => ComplaintCategory::default().into_status(),
            TaxonomyKind::TrainingStatus => TrainingStatus::default().into_status(),
            TaxonomyKind::DocumentStatus => DocumentStatus::default().into_status(),
            TaxonomyKind::DocumentCheckoutStatus => CheckoutStatus::default().into_status(),
            TaxonomyKind::AuditStatus => AuditStatus::default().into_status(),
        }
    }

    /// Every member of the taxonomy, in workflow order
    pub fn members(self) -> Vec<CanonicalStatus> {
        match self {
            TaxonomyKind::CapaStatus => members_of::<CapaStatus>(),
            TaxonomyKind::NcStatus => members_of::<NonConformanceStatus>(),
            TaxonomyKind::NcRiskLevel => members_of::<RiskLevel>(),
            TaxonomyKind::ComplaintStatus => members_of::<ComplaintStatus>(),
            TaxonomyKind::ComplaintCategory => members_of::<ComplaintCategory>(),
            TaxonomyKind::TrainingStatus => members_of::<TrainingStatus>(),
            TaxonomyKind::DocumentStatus => members_of::<DocumentStatus>(),
            TaxonomyKind::DocumentCheckoutStatus => members_of::<CheckoutStatus>(),
            TaxonomyKind::AuditStatus => members_of::<AuditStatus>(),
        }
    }

    /// Comma-separated list of every taxonomy name
    pub fn valid_names() -> String {
        TaxonomyKind::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn members_of<T: Taxonomy>() -> Vec<CanonicalStatus> {
    T::ALL.iter().map(|value| value.into_status()).collect()
}

impl FromStr for TaxonomyKind {
    type Err = QmsError;

    /// Accepts taxonomy names in any case or delimiter style
    /// (`"capa_status"`, `"CAPA Status"`, `"capa-status"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        TaxonomyKind::ALL
            .iter()
            .copied()
            .find(|kind| normalize_token(kind.name()) == token)
            .ok_or_else(|| QmsError::UnknownTaxonomy {
                name: s.to_string(),
                valid: TaxonomyKind::valid_names(),
            })
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A canonical value from any taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalStatus {
    Capa(CapaStatus),
    NonConformance(NonConformanceStatus),
    RiskLevel(RiskLevel),
    Complaint(ComplaintStatus),
    ComplaintCategory(ComplaintCategory),
    Training(TrainingStatus),
    Document(DocumentStatus),
    Checkout(CheckoutStatus),
    Audit(AuditStatus),
}

impl CanonicalStatus {
    pub fn kind(self) -> TaxonomyKind {
        match self {
            CanonicalStatus::Capa(_) => TaxonomyKind::CapaStatus,
            CanonicalStatus::NonConformance(_) => TaxonomyKind::NcStatus,
            CanonicalStatus::RiskLevel(_) => TaxonomyKind::NcRiskLevel,
            CanonicalStatus::Complaint(_) => TaxonomyKind::ComplaintStatus,
            CanonicalStatus::ComplaintCategory(_) => TaxonomyKind::ComplaintCategory,
            CanonicalStatus::Training(_) => TaxonomyKind::TrainingStatus,
            CanonicalStatus::Document(_) => TaxonomyKind::DocumentStatus,
            CanonicalStatus::Checkout(_) => TaxonomyKind::DocumentCheckoutStatus,
            CanonicalStatus::Audit(_) => TaxonomyKind::AuditStatus,
        }
    }

    /// Storage string of the wrapped value
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalStatus::Capa(value) => value.as_str(),
            CanonicalStatus::NonConformance(value) => value.as_str(),
            CanonicalStatus::RiskLevel(value) => value.as_str(),
            CanonicalStatus::Complaint(value) => value.as_str(),
            CanonicalStatus::ComplaintCategory(value) => value.as_str(),
            CanonicalStatus::Training(value) => value.as_str(),
            CanonicalStatus::Document(value) => value.as_str(),
            CanonicalStatus::Checkout(value) => value.as_str(),
            CanonicalStatus::Audit(value) => value.as_str(),
        }
    }

    /// Human-readable label of the wrapped value
    pub fn label(self) -> &'static str {
        match self {
            CanonicalStatus::Capa(value) => value.label(),
            CanonicalStatus::NonConformance(value) => value.label(),
            CanonicalStatus::RiskLevel(value) => value.label(),
            CanonicalStatus::Complaint(value) => value.label(),
            CanonicalStatus::ComplaintCategory(value) => value.label(),
            CanonicalStatus::Training(value) => value.label(),
            CanonicalStatus::Document(value) => value.label(),
            CanonicalStatus::Checkout(value) => value.label(),
            CanonicalStatus::Audit(value) => value.label(),
        }
    }

    /// Whether this is the fallback value of its taxonomy
    pub fn is_default(self) -> bool {
        self == self.kind().default_status()
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable lookup tables for every taxonomy
///
/// # Example
/// ```
/// use qms_mcp::taxonomy::{CapaStatus, StatusNormalizer, Taxonomy};
///
/// let normalizer = StatusNormalizer::new();
/// let status: CapaStatus = normalizer.to_canonical(Some("Pending Verification"));
/// assert_eq!(status, CapaStatus::PendingVerification);
/// assert_eq!(status.as_str(), "pending-verification");
/// assert_eq!(status.label(), "Pending Verification");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusNormalizer {
    pub(super) capa_status: LookupTable<CapaStatus>,
    pub(super) nc_status: LookupTable<NonConformanceStatus>,
    pub(super) nc_risk_level: LookupTable<RiskLevel>,
    pub(super) complaint_status: LookupTable<ComplaintStatus>,
    pub(super) complaint_category: LookupTable<ComplaintCategory>,
    pub(super) training_status: LookupTable<TrainingStatus>,
    pub(super) document_status: LookupTable<DocumentStatus>,
    pub(super) document_checkout_status: LookupTable<CheckoutStatus>,
    pub(super) audit_status: LookupTable<AuditStatus>,
}

impl StatusNormalizer {
    /// Build every table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for taxonomy `T`
    pub fn table<T: Taxonomy>(&self) -> &LookupTable<T> {
        T::table(self)
    }

    /// Resolve raw input to a member of `T`, falling back to `T::default()`
    pub fn to_canonical<T: Taxonomy>(&self, raw: Option<&str>) -> T {
        self.table::<T>().to_canonical(raw)
    }

    /// Exact lookup in `T`; `None` for unrecognized input
    pub fn lookup<T: Taxonomy>(&self, raw: &str) -> Option<T> {
        self.table::<T>().lookup(raw)
    }

    /// Compare two raw strings as members of `T`
    pub fn status_equals<T: Taxonomy>(&self, a: &str, b: &str) -> bool {
        self.table::<T>().status_equals(a, b)
    }

    /// Exact lookup in the named taxonomy
    pub fn lookup_kind(&self, kind: TaxonomyKind, raw: &str) -> Option<CanonicalStatus> {
        match kind {
            TaxonomyKind::CapaStatus => self.lookup::<CapaStatus>(raw).map(Taxonomy::into_status),
            TaxonomyKind::NcStatus => self
                .lookup::<NonConformanceStatus>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::NcRiskLevel => self.lookup::<RiskLevel>(raw).map(Taxonomy::into_status),
            TaxonomyKind::ComplaintStatus => self
                .lookup::<ComplaintStatus>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::ComplaintCategory => self
                .lookup::<ComplaintCategory>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::TrainingStatus => self
                .lookup::<TrainingStatus>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::DocumentStatus => self
                .lookup::<DocumentStatus>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::DocumentCheckoutStatus => self
                .lookup::<CheckoutStatus>(raw)
                .map(Taxonomy::into_status),
            TaxonomyKind::AuditStatus => self.lookup::<AuditStatus>(raw).map(Taxonomy::into_status),
        }
    }

    /// Resolve raw input in the named taxonomy, falling back to its default
    pub fn normalize(&self, kind: TaxonomyKind, raw: Option<&str>) -> CanonicalStatus {
        raw.and_then(|r| self.lookup_kind(kind, r))
            .unwrap_or_else(|| kind.default_status())
    }

    /// `status_equals` for the named taxonomy
    pub fn equals(&self, kind: TaxonomyKind, a: &str, b: &str) -> bool {
        match (self.lookup_kind(kind, a), self.lookup_kind(kind, b)) {
            (Some(left), Some(right)) => left == right,
            (None, None) => normalize_token(a) == normalize_token(b),
            _ => false,
        }
    }

    /// Label for a raw string in the named taxonomy, passing unknown strings through
    pub fn display<'a>(&self, kind: TaxonomyKind, raw: &'a str) -> &'a str {
        match self.lookup_kind(kind, raw) {
            Some(status) => status.label(),
            None => raw,
        }
    }
}
