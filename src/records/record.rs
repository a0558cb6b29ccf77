//! A single QMS record and its read/write boundary with the store

use super::Domain;
use crate::error::{QmsError, QmsResult};
use crate::taxonomy::{CanonicalStatus, StatusNormalizer};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A record as stored: field name → value
pub type RawRecord = BTreeMap<String, toml::Value>;

pub const ID_FIELD: &str = "id";
pub const TITLE_FIELD: &str = "title";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// A record whose status fields hold canonical values
///
/// `statuses` always contains every status field its domain declares.
/// `fields` carries everything else through untouched. A status field whose
/// stored value did not resolve reads as its default but keeps its stored
/// form in `unresolved` (`None` when it was absent) so that a save writes it
/// back verbatim until the field is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub domain: Domain,
    pub statuses: BTreeMap<String, CanonicalStatus>,
    pub fields: RawRecord,
    pub unresolved: BTreeMap<String, Option<toml::Value>>,
}

impl Record {
    /// Create a record with every status field at its default
    pub fn new(domain: Domain, id: impl Into<String>) -> Self {
        let statuses = domain
            .status_fields()
            .iter()
            .map(|&(field, kind)| (field.to_string(), kind.default_status()))
            .collect();
        Self {
            id: id.into(),
            domain,
            statuses,
            fields: RawRecord::new(),
            unresolved: BTreeMap::new(),
        }
    }

    /// Canonicalize a raw record read from the store
    ///
    /// `position` is the record's index in its table, used in errors only.
    /// The id must be a non-empty string. Status fields that are absent,
    /// not strings, or unrecognized read as their taxonomy default and keep
    /// their stored form.
    pub fn from_raw(
        domain: Domain,
        position: usize,
        mut raw: RawRecord,
        normalizer: &StatusNormalizer,
    ) -> QmsResult<Self> {
        let id = match raw.remove(ID_FIELD) {
            Some(toml::Value::String(id)) if !id.trim().is_empty() => id.trim().to_string(),
            _ => return Err(QmsError::MissingId { domain, position }),
        };

        let mut statuses = BTreeMap::new();
        let mut unresolved = BTreeMap::new();
        for &(field, kind) in domain.status_fields() {
            let value = raw.remove(field);
            let text = value.as_ref().and_then(toml::Value::as_str);
            let status = normalizer.normalize(kind, text);

            if text.is_none_or(|t| normalizer.lookup_kind(kind, t).is_none()) {
                if let Some(value) = &value {
                    tracing::debug!(
                        domain = domain.table_name(),
                        id = %id,
                        field,
                        raw = %value,
                        fallback = status.as_str(),
                        "unrecognized status read as default"
                    );
                }
                unresolved.insert(field.to_string(), value);
            }

            statuses.insert(field.to_string(), status);
        }

        Ok(Self {
            id,
            domain,
            statuses,
            fields: raw,
            unresolved,
        })
    }

    /// Render for writing back
    ///
    /// Resolved status fields become storage strings. Unresolved ones are
    /// written exactly as they were read, or left out if they were absent.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = self.fields.clone();
        raw.insert(ID_FIELD.to_string(), toml::Value::String(self.id.clone()));
        for (field, status) in &self.statuses {
            match self.unresolved.get(field) {
                Some(Some(stored)) => {
                    raw.insert(field.clone(), stored.clone());
                }
                Some(None) => {}
                None => {
                    raw.insert(field.clone(), toml::Value::String(status.as_str().to_string()));
                }
            }
        }
        raw
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(TITLE_FIELD).and_then(toml::Value::as_str)
    }

    pub fn status(&self, field: &str) -> Option<CanonicalStatus> {
        self.statuses.get(field).copied()
    }

    /// Value of the domain's primary status field
    pub fn primary_status(&self) -> CanonicalStatus {
        let (field, kind) = self.domain.primary_status();
        self.status(field).unwrap_or_else(|| kind.default_status())
    }

    /// Whether `field` still holds a stored value that did not resolve
    pub fn is_unresolved(&self, field: &str) -> bool {
        self.unresolved.contains_key(field)
    }

    /// Stored text of an unresolved status field, if it had one
    pub fn unrecognized_text(&self, field: &str) -> Option<String> {
        match self.unresolved.get(field)?.as_ref()? {
            toml::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a status field, returning the previous value
    ///
    /// No workflow rules are applied; any member of the field's taxonomy is
    /// accepted. The field's stored form is replaced even when the value
    /// equals the default it was read as.
    pub fn set_status(&mut self, field: &str, value: CanonicalStatus) -> QmsResult<CanonicalStatus> {
        let expected = self
            .domain
            .status_kind(field)
            .ok_or_else(|| QmsError::UnknownStatusField {
                domain: self.domain,
                field: field.to_string(),
                valid: self.domain.status_field_names(),
            })?;

        if value.kind() != expected {
            return Err(QmsError::TaxonomyMismatch {
                field: field.to_string(),
                expected,
                actual: value.kind(),
            });
        }

        let previous = self
            .statuses
            .insert(field.to_string(), value)
            .unwrap_or_else(|| expected.default_status());
        self.unresolved.remove(field);
        Ok(previous)
    }

    /// Stamp `updated_at`
    pub fn touch(&mut self, date: NaiveDate) {
        self.fields.insert(
            UPDATED_AT_FIELD.to_string(),
            toml::Value::String(date.format("%Y-%m-%d").to_string()),
        );
    }

    /// Case-insensitive match against id and title
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        let id_matches = self.id.to_lowercase().contains(&keyword_lower);
        let title_matches = self
            .title()
            .map(|t| t.to_lowercase().contains(&keyword_lower))
            .unwrap_or(false);
        id_matches || title_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{CapaStatus, ComplaintCategory, ComplaintStatus, RiskLevel, TaxonomyKind};

    fn raw(pairs: &[(&str, toml::Value)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn s(value: &str) -> toml::Value {
        toml::Value::String(value.to_string())
    }

    #[test]
    fn test_from_raw_canonicalizes_every_status_field() {
        let normalizer = StatusNormalizer::new();
        let record = Record::from_raw(
            Domain::Complaint,
            0,
            raw(&[
                ("id", s("CMP-7")),
                ("title", s("Glass in jar")),
                ("status", s("under investigation")),
                ("category", s("FOREIGN-MATERIAL")),
            ]),
            &normalizer,
        )
        .unwrap();

        assert_eq!(record.id, "CMP-7");
        assert_eq!(
            record.status("status"),
            Some(CanonicalStatus::Complaint(ComplaintStatus::UnderInvestigation))
        );
        assert_eq!(
            record.status("category"),
            Some(CanonicalStatus::ComplaintCategory(ComplaintCategory::ForeignMaterial))
        );
        assert_eq!(record.title(), Some("Glass in jar"));
        assert!(!record.fields.contains_key("status"));
    }

    #[test]
    fn test_from_raw_fills_missing_and_non_string_statuses_with_defaults() {
        let normalizer = StatusNormalizer::new();
        let record = Record::from_raw(
            Domain::NonConformance,
            0,
            raw(&[("id", s("NC-1")), ("risk_level", toml::Value::Integer(3))]),
            &normalizer,
        )
        .unwrap();

        assert_eq!(record.primary_status(), TaxonomyKind::NcStatus.default_status());
        assert_eq!(
            record.status("risk_level"),
            Some(CanonicalStatus::RiskLevel(RiskLevel::Medium))
        );
    }

    #[test]
    fn test_from_raw_requires_an_id() {
        let normalizer = StatusNormalizer::new();
        let err = Record::from_raw(Domain::Capa, 4, raw(&[("id", s("  "))]), &normalizer)
            .unwrap_err();
        assert_eq!(
            err,
            QmsError::MissingId {
                domain: Domain::Capa,
                position: 4
            }
        );
    }

    #[test]
    fn test_to_raw_writes_storage_strings() {
        let normalizer = StatusNormalizer::new();
        let record = Record::from_raw(
            Domain::Capa,
            0,
            raw(&[("id", s("CAPA-1")), ("status", s("Pending Verification"))]),
            &normalizer,
        )
        .unwrap();

        let written = record.to_raw();
        assert_eq!(written.get("status"), Some(&s("pending-verification")));
        assert_eq!(written.get("id"), Some(&s("CAPA-1")));
    }

    #[test]
    fn test_unrecognized_statuses_are_written_back_as_stored() {
        let normalizer = StatusNormalizer::new();
        let mut record = Record::from_raw(
            Domain::Complaint,
            0,
            raw(&[("id", s("CMP-9")), ("status", s("Pending"))]),
            &normalizer,
        )
        .unwrap();

        assert_eq!(
            record.primary_status(),
            CanonicalStatus::Complaint(ComplaintStatus::New)
        );
        assert!(record.is_unresolved("category"));
        assert_eq!(record.unrecognized_text("status"), Some("Pending".to_string()));
        assert_eq!(record.unrecognized_text("category"), None);

        let written = record.to_raw();
        assert_eq!(written.get("status"), Some(&s("Pending")));
        assert!(!written.contains_key("category"));

        // Assigning the default it already reads as still replaces the stored form
        let previous = record
            .set_status("status", CanonicalStatus::Complaint(ComplaintStatus::New))
            .unwrap();
        assert_eq!(previous, CanonicalStatus::Complaint(ComplaintStatus::New));
        assert!(!record.is_unresolved("status"));
        assert_eq!(record.to_raw().get("status"), Some(&s("New")));
        assert!(!record.to_raw().contains_key("category"));
    }

    #[test]
    fn test_set_status_rejects_undeclared_field_and_foreign_taxonomy() {
        let mut record = Record::new(Domain::Capa, "CAPA-2");
        let closed = CanonicalStatus::Capa(CapaStatus::Closed);

        assert_eq!(
            record.set_status("status", closed),
            Ok(CanonicalStatus::Capa(CapaStatus::Open))
        );
        assert_eq!(record.primary_status(), closed);

        assert!(matches!(
            record.set_status("risk_level", closed),
            Err(QmsError::UnknownStatusField { .. })
        ));
        assert!(matches!(
            record.set_status("status", CanonicalStatus::RiskLevel(RiskLevel::High)),
            Err(QmsError::TaxonomyMismatch { .. })
        ));
    }

    #[test]
    fn test_matches_keyword() {
        let mut record = Record::new(Domain::Audit, "AUD-2026-03");
        record
            .fields
            .insert(TITLE_FIELD.to_string(), s("Supplier GMP audit"));
        assert!(record.matches_keyword("gmp"));
        assert!(record.matches_keyword("aud-2026"));
        assert!(!record.matches_keyword("haccp"));
    }
}
