//! QMS record models and the read/write boundary
//!
//! Records arrive from the store as flat field maps whose status fields are
//! free-form strings. This module canonicalizes them on read and renders them
//! back to storage strings on write:
//! - `domain`: record families and the status fields each one declares
//! - `record`: a single normalized record and its raw conversions
//! - `qms_data`: in-memory collection of records plus the file layout
//! - `queries`: read-only lookups over the collection

mod domain;
mod qms_data;
mod queries;
mod record;

// Re-export all public types
pub use domain::Domain;
pub use qms_data::{QmsData, RawQmsFile};
pub use record::{ID_FIELD, RawRecord, Record, TITLE_FIELD, UPDATED_AT_FIELD};
