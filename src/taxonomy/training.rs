//! Training record status

use super::{CanonicalStatus, LookupTable, StatusNormalizer, Taxonomy, TaxonomyKind};
use std::fmt;

/// Completion status of an employee training record
///
/// Stored as SCREAMING_SNAKE (`"IN_PROGRESS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrainingStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Overdue,
    /// Completed once, but the certification lapsed
    Expired,
}

impl Taxonomy for TrainingStatus {
    const KIND: TaxonomyKind = TaxonomyKind::TrainingStatus;

    const ALL: &'static [Self] = &[
        TrainingStatus::NotStarted,
        TrainingStatus::InProgress,
        TrainingStatus::Completed,
        TrainingStatus::Overdue,
        TrainingStatus::Expired,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TrainingStatus::NotStarted => "NOT_STARTED",
            TrainingStatus::InProgress => "IN_PROGRESS",
            TrainingStatus::Completed => "COMPLETED",
            TrainingStatus::Overdue => "OVERDUE",
            TrainingStatus::Expired => "EXPIRED",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TrainingStatus::NotStarted => "Not Started",
            TrainingStatus::InProgress => "In Progress",
            TrainingStatus::Completed => "Completed",
            TrainingStatus::Overdue => "Overdue",
            TrainingStatus::Expired => "Expired",
        }
    }

    fn table(normalizer: &StatusNormalizer) -> &LookupTable<Self> {
        &normalizer.training_status
    }

    fn into_status(self) -> CanonicalStatus {
        CanonicalStatus::Training(self)
    }

    fn from_status(status: CanonicalStatus) -> Option<Self> {
        match status {
            CanonicalStatus::Training(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
