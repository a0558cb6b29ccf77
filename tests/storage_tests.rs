//! Record boundary and storage tests
mod common;

use qms_mcp::records::RawQmsFile;
use qms_mcp::taxonomy::{
    CapaStatus, CheckoutStatus, ComplaintCategory, ComplaintStatus, DocumentStatus,
    NonConformanceStatus, RiskLevel, TrainingStatus,
};
use qms_mcp::{CanonicalStatus, Domain, QmsError, StatusNormalizer, Storage};
use std::fs;
use tempfile::NamedTempFile;

fn load_sample() -> (qms_mcp::QmsData, NamedTempFile) {
    let temp_file = common::write_sample_file();
    let storage = Storage::new(temp_file.path(), false);
    let data = storage.load(&StatusNormalizer::new()).unwrap();
    (data, temp_file)
}

#[test]
fn test_load_canonicalizes_mixed_spellings() {
    let (data, _temp_file) = load_sample();

    assert_eq!(data.len(), 9);
    assert_eq!(data.count(Domain::Capa), 3);

    let capa = data.find(Domain::Capa, "CAPA-002").unwrap();
    assert_eq!(
        capa.primary_status(),
        CanonicalStatus::Capa(CapaStatus::PendingVerification)
    );

    let nc = data.find(Domain::NonConformance, "NC-001").unwrap();
    assert_eq!(
        nc.primary_status(),
        CanonicalStatus::NonConformance(NonConformanceStatus::UnderInvestigation)
    );
    assert_eq!(
        nc.status("risk_level"),
        Some(CanonicalStatus::RiskLevel(RiskLevel::High))
    );

    let doc = data.find(Domain::Document, "DOC-001").unwrap();
    assert_eq!(
        doc.primary_status(),
        CanonicalStatus::Document(DocumentStatus::PendingApproval)
    );
    assert_eq!(
        doc.status("checkout_status"),
        Some(CanonicalStatus::Checkout(CheckoutStatus::CheckedOut))
    );

    let training = data.find(Domain::Training, "TR-001").unwrap();
    assert_eq!(
        training.primary_status(),
        CanonicalStatus::Training(TrainingStatus::InProgress)
    );
}

#[test]
fn test_load_substitutes_defaults_for_legacy_and_missing_values() {
    let (data, _temp_file) = load_sample();

    // "awaiting sign-off" is not a CAPA status
    let legacy = data.find(Domain::Capa, "CAPA-003").unwrap();
    assert_eq!(legacy.primary_status(), CanonicalStatus::Capa(CapaStatus::Open));

    // "Pending" is not a complaint status and the category is absent
    let complaint = data.find(Domain::Complaint, "CMP-002").unwrap();
    assert_eq!(
        complaint.primary_status(),
        CanonicalStatus::Complaint(ComplaintStatus::New)
    );
    assert_eq!(
        complaint.status("category"),
        Some(CanonicalStatus::ComplaintCategory(ComplaintCategory::Other))
    );
}

#[test]
fn test_save_writes_storage_strings_and_reloads_identically() {
    let (data, temp_file) = load_sample();
    let storage = Storage::new(temp_file.path(), false);
    storage.save(&data).unwrap();

    let content = fs::read_to_string(temp_file.path()).unwrap();
    let file: RawQmsFile = toml::from_str(&content).unwrap();

    let stored = |table: &[qms_mcp::records::RawRecord], id: &str, field: &str| -> String {
        table
            .iter()
            .find(|r| r.get("id").and_then(toml::Value::as_str) == Some(id))
            .and_then(|r| r.get(field))
            .and_then(toml::Value::as_str)
            .unwrap()
            .to_string()
    };

    assert_eq!(stored(&file.capas, "CAPA-001", "status"), "in-progress");
    assert_eq!(stored(&file.complaints, "CMP-001", "category"), "Foreign_Material");
    assert_eq!(stored(&file.training_records, "TR-001", "status"), "IN_PROGRESS");
    assert_eq!(stored(&file.documents, "DOC-001", "checkout_status"), "checked_out");
    assert_eq!(stored(&file.capas, "CAPA-001", "title"), "Metal detector reject failure on line 3");

    let reloaded = storage.load(&StatusNormalizer::new()).unwrap();
    assert_eq!(reloaded.len(), data.len());
    for &domain in Domain::ALL {
        assert_eq!(reloaded.list_all(domain), data.list_all(domain));
    }
}

#[test]
fn test_save_keeps_unrecognized_values_as_stored() {
    let (data, temp_file) = load_sample();
    Storage::new(temp_file.path(), false).save(&data).unwrap();

    let content = fs::read_to_string(temp_file.path()).unwrap();
    let file: RawQmsFile = toml::from_str(&content).unwrap();
    let record = |table: &[qms_mcp::records::RawRecord], id: &str| {
        table
            .iter()
            .find(|r| r.get("id").and_then(toml::Value::as_str) == Some(id))
            .cloned()
            .unwrap()
    };

    let legacy_capa = record(&file.capas, "CAPA-003");
    assert_eq!(
        legacy_capa.get("status").and_then(toml::Value::as_str),
        Some("awaiting sign-off")
    );

    let legacy_complaint = record(&file.complaints, "CMP-002");
    assert_eq!(
        legacy_complaint.get("status").and_then(toml::Value::as_str),
        Some("Pending")
    );
    // An absent category is not filled in with the default
    assert!(!legacy_complaint.contains_key("category"));

    // They still read as their defaults
    let reloaded = Storage::new(temp_file.path(), false)
        .load(&StatusNormalizer::new())
        .unwrap();
    assert_eq!(
        reloaded.find(Domain::Capa, "CAPA-003").unwrap().primary_status(),
        CanonicalStatus::Capa(CapaStatus::Open)
    );
}

#[test]
fn test_non_string_status_is_kept_on_save() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        "[[non_conformances]]\nid = \"NC-9\"\nstatus = \"Open\"\nrisk_level = 3\n",
    )
    .unwrap();

    let storage = Storage::new(temp_file.path(), false);
    let data = storage.load(&StatusNormalizer::new()).unwrap();
    assert_eq!(
        data.find(Domain::NonConformance, "NC-9").unwrap().status("risk_level"),
        Some(CanonicalStatus::RiskLevel(RiskLevel::Medium))
    );
    storage.save(&data).unwrap();

    let file: RawQmsFile = toml::from_str(&fs::read_to_string(temp_file.path()).unwrap()).unwrap();
    assert_eq!(
        file.non_conformances[0].get("risk_level"),
        Some(&toml::Value::Integer(3))
    );
}

#[test]
fn test_duplicate_ids_are_rejected_on_load() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        "[[capas]]\nid = \"CAPA-1\"\n\n[[capas]]\nid = \"CAPA-1\"\n",
    )
    .unwrap();

    let err = Storage::new(temp_file.path(), false)
        .load(&StatusNormalizer::new())
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<QmsError>(),
        Some(&QmsError::DuplicateId {
            domain: Domain::Capa,
            id: "CAPA-1".to_string()
        })
    );
}

#[test]
fn test_records_without_id_are_rejected_on_load() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), "[[audits]]\ntitle = \"No id\"\n").unwrap();

    let err = Storage::new(temp_file.path(), false)
        .load(&StatusNormalizer::new())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<QmsError>(),
        Some(QmsError::MissingId {
            domain: Domain::Audit,
            position: 0
        })
    ));
}

#[test]
fn test_unknown_top_level_tables_are_ignored() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        "[[suppliers]]\nid = \"SUP-1\"\n\n[[capas]]\nid = \"CAPA-1\"\nstatus = \"Verified\"\n",
    )
    .unwrap();

    let data = Storage::new(temp_file.path(), false)
        .load(&StatusNormalizer::new())
        .unwrap();
    assert_eq!(data.len(), 1);
}

#[test]
fn test_empty_file_loads_empty_store() {
    let temp_file = NamedTempFile::new().unwrap();
    let data = Storage::new(temp_file.path(), false)
        .load(&StatusNormalizer::new())
        .unwrap();
    assert!(data.is_empty());
}
