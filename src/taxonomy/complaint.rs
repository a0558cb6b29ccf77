//! Customer complaint status and category

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Status of a customer complaint
///
/// Stored as Title_Snake (`"Under_Investigation"`). Unrecognized input,
/// including legacy values such as `"Pending"`, falls back to `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComplaintStatus {
    #[default]
    New,
    UnderInvestigation,
    Resolved,
    Closed,
}

impl Taxonomy for ComplaintStatus {
    const KIND: TaxonomyKind = TaxonomyKind::ComplaintStatus;

    const ALL: &'static [Self] = &[
        ComplaintStatus::New,
        ComplaintStatus::UnderInvestigation,
        ComplaintStatus::Resolved,
        ComplaintStatus::Closed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::New => "New",
            ComplaintStatus::UnderInvestigation => "Under_Investigation",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ComplaintStatus::New => "New",
            ComplaintStatus::UnderInvestigation => "Under Investigation",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.complaint_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Complaint(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Complaint(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a complaint is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComplaintCategory {
    /// Glass, metal, plastic or other physical contaminant
    ForeignMaterial,
    /// Undeclared allergen or cross-contact
    Allergen,
    /// Taste, texture, appearance
    Quality,
    Packaging,
    Labeling,
    /// Reported illness or injury
    Illness,
    #[default]
    Other,
}

impl Taxonomy for ComplaintCategory {
    const KIND: TaxonomyKind = TaxonomyKind::ComplaintCategory;

    const ALL: &'static [Self] = &[
        ComplaintCategory::ForeignMaterial,
        ComplaintCategory::Allergen,
        ComplaintCategory::Quality,
        ComplaintCategory::Packaging,
        ComplaintCategory::Labeling,
        ComplaintCategory::Illness,
        ComplaintCategory::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ComplaintCategory::ForeignMaterial => "Foreign_Material",
            ComplaintCategory::Allergen => "Allergen",
            ComplaintCategory::Quality => "Quality",
            ComplaintCategory::Packaging => "Packaging",
            ComplaintCategory::Labeling => "Labeling",
            ComplaintCategory::Illness => "Illness",
            ComplaintCategory::Other => "Other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ComplaintCategory::ForeignMaterial => "Foreign Material",
            ComplaintCategory::Allergen => "Allergen",
            ComplaintCategory::Quality => "Quality",
            ComplaintCategory::Packaging => "Packaging",
            ComplaintCategory::Labeling => "Labeling",
            ComplaintCategory::Illness => "Illness",
            ComplaintCategory::Other => "Other",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.complaint_category
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::ComplaintCategory(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::ComplaintCategory(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
