//! Common test utilities for integration tests
#![allow(dead_code)]

use qms_mcp::QmsServerHandler;
use std::io::Write;
use tempfile::NamedTempFile;

/// Records as a hand-maintained store would hold them: mixed spellings,
/// one legacy CAPA status and one legacy complaint status.
pub const SAMPLE_RECORDS: &str = r#"
[[capas]]
id = "CAPA-001"
title = "Metal detector reject failure on line 3"
status = "In Progress"

[[capas]]
id = "CAPA-002"
title = "Allergen changeover missed"
status = "PENDING_VERIFICATION"

[[capas]]
id = "CAPA-003"
title = "Legacy import"
status = "awaiting sign-off"

[[non_conformances]]
id = "NC-001"
title = "Under-weight packs"
status = "under investigation"
risk_level = "HIGH"

[[complaints]]
id = "CMP-001"
title = "Glass fragment in jar"
status = "Under_Investigation"
category = "foreign material"

[[complaints]]
id = "CMP-002"
title = "Off taste"
status = "Pending"

[[training_records]]
id = "TR-001"
title = "HACCP Level 2"
status = "in progress"

[[documents]]
id = "DOC-001"
title = "Sanitation SOP"
status = "Pending Approval"
checkout_status = "Checked-Out"

[[audits]]
id = "AUD-001"
title = "BRCGS certification audit"
status = "Scheduled"
"#;

/// Write the sample records to a temporary file
pub fn write_sample_file() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(SAMPLE_RECORDS.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Create a test handler over a copy of the sample records
pub fn get_test_handler() -> (QmsServerHandler, NamedTempFile) {
    let temp_file = write_sample_file();
    let handler = QmsServerHandler::new(temp_file.path().to_str().unwrap(), false).unwrap();
    (handler, temp_file)
}

/// Create a read-only test handler over a copy of the sample records
pub fn get_read_only_handler() -> (QmsServerHandler, NamedTempFile) {
    let temp_file = write_sample_file();
    let handler = QmsServerHandler::new(temp_file.path().to_str().unwrap(), true).unwrap();
    (handler, temp_file)
}
