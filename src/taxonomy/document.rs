//! Controlled document status and checkout status

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Approval lifecycle of a controlled document
///
/// Stored as lower_snake (`"pending_approval"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentStatus {
    #[default]
    Draft,
    PendingApproval,
    Approved,
    Published,
    Archived,
    /// Superseded by a newer revision
    Obsolete,
}

impl Taxonomy for DocumentStatus {
    const KIND: TaxonomyKind = TaxonomyKind::DocumentStatus;

    const ALL: &'static [Self] = &[
        DocumentStatus::Draft,
        DocumentStatus::PendingApproval,
        DocumentStatus::Approved,
        DocumentStatus::Published,
        DocumentStatus::Archived,
        DocumentStatus::Obsolete,
    ];

    fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::PendingApproval => "pending_approval",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Published => "published",
            DocumentStatus::Archived => "archived",
            DocumentStatus::Obsolete => "obsolete",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::PendingApproval => "Pending Approval",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Published => "Published",
            DocumentStatus::Archived => "Archived",
            DocumentStatus::Obsolete => "Obsolete",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.document_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Document(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Document(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a document is checked out for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckoutStatus {
    #[default]
    Available,
    CheckedOut,
}

impl Taxonomy for CheckoutStatus {
    const KIND: TaxonomyKind = TaxonomyKind::DocumentCheckoutStatus;

    const ALL: &'static [Self] = &[CheckoutStatus::Available, CheckoutStatus::CheckedOut];

    fn as_str(self) -> &'static str {
        match self {
            CheckoutStatus::Available => "available",
            CheckoutStatus::CheckedOut => "checked_out",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CheckoutStatus::Available => "Available",
            CheckoutStatus::CheckedOut => "Checked Out",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.document_checkout_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Checkout(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Checkout(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
