use crate::error::QmsError;
use crate::taxonomy::{TaxonomyKind, normalize_token};
use std::fmt;
use std::str::FromStr;

/// A family of QMS records
///
/// Each domain maps to one table of the record store and declares which of
/// its fields hold status/category values. The first declared field is the
/// domain's primary status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Audit,
    Capa,
    NonConformance,
    Complaint,
    Training,
    Document,
}

impl Domain {
    pub const ALL: &'static [Domain] = &[
        Domain::Audit,
        Domain::Capa,
        Domain::NonConformance,
        Domain::Complaint,
        Domain::Training,
        Domain::Document,
    ];

    /// Table name in the record store (and top-level key in the data file)
    pub fn table_name(self) -> &'static str {
        match self {
            Domain::Audit => "audits",
            Domain::Capa => "capas",
            Domain::NonConformance => "non_conformances",
            Domain::Complaint => "complaints",
            Domain::Training => "training_records",
            Domain::Document => "documents",
        }
    }

    fn singular_name(self) -> &'static str {
        match self {
            Domain::Audit => "audit",
            Domain::Capa => "capa",
            Domain::NonConformance => "non_conformance",
            Domain::Complaint => "complaint",
            Domain::Training => "training_record",
            Domain::Document => "document",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::Audit => "Audit",
            Domain::Capa => "CAPA",
            Domain::NonConformance => "Non-conformance",
            Domain::Complaint => "Complaint",
            Domain::Training => "Training",
            Domain::Document => "Document",
        }
    }

    /// Status/category fields and the taxonomy each one uses
    pub fn status_fields(self) -> &'static [(&'static str, TaxonomyKind)] {
        match self {
            Domain::Audit => &[("status", TaxonomyKind::AuditStatus)],
            Domain::Capa => &[("status", TaxonomyKind::CapaStatus)],
            Domain::NonConformance => &[
                ("status", TaxonomyKind::NcStatus),
                ("risk_level", TaxonomyKind::NcRiskLevel),
            ],
            Domain::Complaint => &[
                ("status", TaxonomyKind::ComplaintStatus),
                ("category", TaxonomyKind::ComplaintCategory),
            ],
            Domain::Training => &[("status", TaxonomyKind::TrainingStatus)],
            Domain::Document => &[
                ("status", TaxonomyKind::DocumentStatus),
                ("checkout_status", TaxonomyKind::DocumentCheckoutStatus),
            ],
        }
    }

    /// The primary status field and its taxonomy
    pub fn primary_status(self) -> (&'static str, TaxonomyKind) {
        match self {
            Domain::Audit => ("status", TaxonomyKind::AuditStatus),
            Domain::Capa => ("status", TaxonomyKind::CapaStatus),
            Domain::NonConformance => ("status", TaxonomyKind::NcStatus),
            Domain::Complaint => ("status", TaxonomyKind::ComplaintStatus),
            Domain::Training => ("status", TaxonomyKind::TrainingStatus),
            Domain::Document => ("status", TaxonomyKind::DocumentStatus),
        }
    }

    /// Taxonomy of a declared status field
    pub fn status_kind(self, field: &str) -> Option<TaxonomyKind> {
        self.status_fields()
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, kind)| kind)
    }

    pub fn status_field_names(self) -> String {
        self.status_fields()
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn valid_names() -> String {
        Domain::ALL
            .iter()
            .map(|domain| domain.table_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Domain {
    type Err = QmsError;

    /// Accepts the table name or the singular name in any case or delimiter
    /// style (`"capas"`, `"CAPA"`, `"non-conformance"`, `"training records"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Domain::ALL
            .iter()
            .copied()
            .find(|domain| {
                normalize_token(domain.table_name()) == token
                    || normalize_token(domain.singular_name()) == token
            })
            .ok_or_else(|| QmsError::UnknownDomain {
                name: s.to_string(),
                valid: Domain::valid_names(),
            })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parses_table_and_singular_names() {
        assert_eq!("capas".parse::<Domain>(), Ok(Domain::Capa));
        assert_eq!("CAPA".parse::<Domain>(), Ok(Domain::Capa));
        assert_eq!("Non-Conformance".parse::<Domain>(), Ok(Domain::NonConformance));
        assert_eq!("training records".parse::<Domain>(), Ok(Domain::Training));
        assert!("suppliers".parse::<Domain>().is_err());
    }

    #[test]
    fn test_primary_status_is_first_declared_field() {
        for &domain in Domain::ALL {
            assert_eq!(domain.status_fields().first(), Some(&domain.primary_status()));
        }
    }

    #[test]
    fn test_status_kind() {
        assert_eq!(
            Domain::Complaint.status_kind("category"),
            Some(TaxonomyKind::ComplaintCategory)
        );
        assert_eq!(Domain::Capa.status_kind("category"), None);
    }
}
