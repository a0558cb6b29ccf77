//! In-memory record store and its on-disk layout

use super::{Domain, RawRecord, Record};
use crate::error::{QmsError, QmsResult};
use crate::taxonomy::StatusNormalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// On-disk layout of the records file
///
/// One array of tables per domain (`[[capas]]`, `[[complaints]]`, ...).
/// Unknown top-level keys are ignored and empty tables are omitted on write.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQmsFile {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audits: Vec<RawRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capas: Vec<RawRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_conformances: Vec<RawRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub complaints: Vec<RawRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub training_records: Vec<RawRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<RawRecord>,
}

impl RawQmsFile {
    pub fn table_mut(&mut self, domain: Domain) -> &mut Vec<RawRecord> {
        match domain {
            Domain::Audit => &mut self.audits,
            Domain::Capa => &mut self.capas,
            Domain::NonConformance => &mut self.non_conformances,
            Domain::Complaint => &mut self.complaints,
            Domain::Training => &mut self.training_records,
            Domain::Document => &mut self.documents,
        }
    }
}

/// All loaded records, normalized
///
/// Records keep their load order so that a save rewrites the file with a
/// stable layout. `record_map` indexes (domain, id) → position in `records`
/// and is rebuilt on load, never serialized.
#[derive(Debug, Clone, Default)]
pub struct QmsData {
    pub(crate) records: Vec<Record>,
    pub(crate) record_map: HashMap<(Domain, String), usize>,
}

impl QmsData {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; ids must be unique within a domain
    pub fn add(&mut self, record: Record) -> QmsResult<()> {
        let key = (record.domain, record.id.clone());
        if self.record_map.contains_key(&key) {
            return Err(QmsError::DuplicateId {
                domain: record.domain,
                id: record.id,
            });
        }
        self.record_map.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Canonicalize every table of a raw file
    pub fn from_raw(mut file: RawQmsFile, normalizer: &StatusNormalizer) -> QmsResult<Self> {
        let mut data = Self::new();
        for &domain in Domain::ALL {
            let table = std::mem::take(file.table_mut(domain));
            for (position, raw) in table.into_iter().enumerate() {
                data.add(Record::from_raw(domain, position, raw, normalizer)?)?;
            }
        }
        Ok(data)
    }

    /// Render every record back to storage form
    pub fn to_raw(&self) -> RawQmsFile {
        let mut file = RawQmsFile::default();
        for record in &self.records {
            file.table_mut(record.domain).push(record.to_raw());
        }
        file
    }

    pub fn find_mut(&mut self, domain: Domain, id: &str) -> Option<&mut Record> {
        let position = *self.record_map.get(&(domain, id.to_string()))?;
        self.records.get_mut(position)
    }
}
