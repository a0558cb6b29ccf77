//! Error type for the record layer
//!
//! Status normalization itself never fails. These errors cover the names and
//! records that arrive from callers and from the data file.

use crate::records::Domain;
use crate::taxonomy::TaxonomyKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QmsError {
    #[error("Unknown taxonomy '{name}'. Valid taxonomies: {valid}")]
    UnknownTaxonomy { name: String, valid: String },

    #[error("Unknown domain '{name}'. Valid domains: {valid}")]
    UnknownDomain { name: String, valid: String },

    #[error("{domain} record #{position} has no id")]
    MissingId { domain: Domain, position: usize },

    #[error("Duplicate {domain} record id '{id}'")]
    DuplicateId { domain: Domain, id: String },

    #[error("{domain} records have no status field '{field}'. Status fields: {valid}")]
    UnknownStatusField {
        domain: Domain,
        field: String,
        valid: String,
    },

    #[error("Field '{field}' expects a {expected} value, got {actual}")]
    TaxonomyMismatch {
        field: String,
        expected: TaxonomyKind,
        actual: TaxonomyKind,
    },

    #[error("The record store was opened read-only")]
    ReadOnly,
}

/// Result alias for record-layer operations
pub type QmsResult<T> = std::result::Result<T, QmsError>;
