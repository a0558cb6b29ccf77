//! Immutable lookup table for one taxonomy

use super::{Taxonomy, normalize_token};
use std::collections::HashMap;

/// Maps normalized tokens onto the canonical members of one taxonomy
///
/// Built once from `T::ALL`: each member is reachable through its storage
/// string and its label, both normalized with [`normalize_token`]. The table
/// is never mutated after construction, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct LookupTable<T: Taxonomy> {
    by_token: HashMap<String, T>,
}

impl<T: Taxonomy> Default for LookupTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Taxonomy> LookupTable<T> {
    /// Build the table for `T`
    pub fn new() -> Self {
        let mut by_token = HashMap::with_capacity(T::ALL.len() * 2);
        for &value in T::ALL {
            by_token.insert(normalize_token(value.as_str()), value);
            by_token.insert(normalize_token(value.label()), value);
        }
        Self { by_token }
    }

    /// Number of distinct tokens the table recognizes
    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }

    /// Exact lookup after normalization; `None` for unrecognized input
    pub fn lookup(&self, raw: &str) -> Option<T> {
        self.by_token.get(&normalize_token(raw)).copied()
    }

    /// Resolve any raw input to a canonical member
    ///
    /// Missing, empty or unrecognized input yields `T::default()`.
    pub fn to_canonical(&self, raw: Option<&str>) -> T {
        raw.and_then(|r| self.lookup(r)).unwrap_or_default()
    }

    /// Label for a raw string, or the string itself when it is out of set
    pub fn display<'a>(&self, raw: &'a str) -> &'a str {
        match self.lookup(raw) {
            Some(value) => value.label(),
            None => raw,
        }
    }

    /// Compare two raw strings as statuses of this taxonomy
    ///
    /// Recognized strings compare by canonical value. Unrecognized strings
    /// only equal each other when their normalized tokens are identical.
    pub fn status_equals(&self, a: &str, b: &str) -> bool {
        match (self.lookup(a), self.lookup(b)) {
            (Some(left), Some(right)) => left == right,
            (None, None) => normalize_token(a) == normalize_token(b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::CapaStatus;

    #[test]
    fn test_table_recognizes_storage_strings_and_labels() {
        let table = LookupTable::<CapaStatus>::new();
        assert_eq!(table.lookup("pending-verification"), Some(CapaStatus::PendingVerification));
        assert_eq!(table.lookup("Pending Verification"), Some(CapaStatus::PendingVerification));
        assert_eq!(table.lookup("pending"), None);
        // storage string and label normalize to the same token
        assert_eq!(table.len(), CapaStatus::ALL.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_display_passes_unknown_strings_through() {
        let table = LookupTable::<CapaStatus>::new();
        assert_eq!(table.display("IN_PROGRESS"), "In Progress");
        assert_eq!(table.display("On Hold (legacy)"), "On Hold (legacy)");
    }
}
