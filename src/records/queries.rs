//! Query methods for QmsData

use super::qms_data::QmsData;
use super::{Domain, Record};

impl QmsData {
    /// Find a record by domain and id
    pub fn find(&self, domain: Domain, id: &str) -> Option<&Record> {
        let position = *self.record_map.get(&(domain, id.to_string()))?;
        self.records.get(position)
    }

    /// Check if a record exists
    pub fn contains(&self, domain: Domain, id: &str) -> bool {
        self.record_map.contains_key(&(domain, id.to_string()))
    }

    /// Clone every record of a domain, in load order
    pub fn list_all(&self, domain: Domain) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.domain == domain)
            .cloned()
            .collect()
    }

    /// Number of records in a domain
    pub fn count(&self, domain: Domain) -> usize {
        self.records.iter().filter(|r| r.domain == domain).count()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QmsError;

    #[test]
    fn test_ids_are_unique_per_domain_only() {
        let mut data = QmsData::new();
        data.add(Record::new(Domain::Capa, "X-1")).unwrap();
        data.add(Record::new(Domain::Complaint, "X-1")).unwrap();

        assert_eq!(
            data.add(Record::new(Domain::Capa, "X-1")),
            Err(QmsError::DuplicateId {
                domain: Domain::Capa,
                id: "X-1".to_string()
            })
        );
        assert_eq!(data.len(), 2);
        assert_eq!(data.count(Domain::Capa), 1);
        assert!(data.contains(Domain::Complaint, "X-1"));
        assert!(data.find(Domain::Audit, "X-1").is_none());
    }
}
