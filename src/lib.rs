//! QMS MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server over the records
//! of a food-safety quality-management system: audits, CAPAs, non-conformances,
//! complaints, training records and controlled documents. Their status and
//! category fields are loosely-typed strings in the store; the `taxonomy`
//! module maps them onto closed enums on read and back to storage strings on
//! write.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `QmsServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `taxonomy` and `records` modules - Status normalization and record boundary
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use qms_mcp::QmsServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = QmsServerHandler::new("qms.toml", false)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod records;
mod storage;
pub mod taxonomy;
pub mod validation;

use anyhow::Result;
use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail_public};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use error::{QmsError, QmsResult};
pub use records::{Domain, QmsData, Record};
pub use storage::Storage;
pub use taxonomy::{CanonicalStatus, StatusNormalizer, Taxonomy, TaxonomyKind};

/// MCP Server handler for QMS records
///
/// Owns the status normalizer (built once, never mutated), the loaded records
/// and the storage they came from. Every status change is written back to the
/// TOML file unless the handler was opened read-only.
pub struct QmsServerHandler {
    pub(crate) data: Mutex<QmsData>,
    pub(crate) storage: Storage,
    pub(crate) normalizer: StatusNormalizer,
}

impl QmsServerHandler {
    /// Create a new QMS server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the records file (TOML format)
    /// * `read_only` - Load the file but never write it back
    ///
    /// # Example
    /// ```no_run
    /// # use qms_mcp::QmsServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = QmsServerHandler::new("qms.toml", false)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, read_only: bool) -> Result<Self> {
        let normalizer = StatusNormalizer::new();
        let storage = Storage::new(storage_path, read_only);
        let data = Mutex::new(storage.load(&normalizer)?);
        Ok(Self {
            data,
            storage,
            normalizer,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Lock the record store for a tool call
    pub(crate) fn lock_data(&self) -> McpResult<MutexGuard<'_, QmsData>> {
        match self.data.lock() {
            Ok(guard) => Ok(guard),
            Err(_) => bail_public!(_, "Record store is unavailable after an earlier failure"),
        }
    }

    /// Write the current records back to storage
    fn save_data(&self) -> Result<()> {
        let data = self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("Record store lock poisoned"))?;
        self.storage.save(&data)?;
        Ok(())
    }
}

/// Quality-management records server for food-safety operations (audits, CAPAs, non-conformances, complaints, training, documents).
///
/// Status and category values in the record store are free-form strings. This server resolves
/// them to closed sets of canonical values per taxonomy and lets you list and update records by status.
///
/// Key concepts:
/// - **taxonomy**: a named closed set of values (capa_status, nc_status, nc_risk_level, complaint_status,
///   complaint_category, training_status, document_status, document_checkout_status, audit_status)
/// - **domain**: a record table (audits, capas, non_conformances, complaints, training_records, documents)
/// - **default**: every taxonomy has one; missing or unrecognized stored values read as the default
///
/// Matching ignores case, spacing, hyphens and underscores: "In Progress" = "in-progress" = "IN_PROGRESS".
#[mcp_server]
impl McpServer for QmsServerHandler {
    /// **Normalize**: Resolve a raw status/category string to its canonical value and label.
    /// **Fallback**: Missing or unrecognized values resolve to the taxonomy default (reported in the response).
    #[tool]
    async fn normalize_status(
        &self,
        /// Taxonomy name, e.g. "capa_status", "complaint_status"
        taxonomy: String,
        /// Raw value, e.g. "Pending Verification". Omit to get the default.
        value: Option<String>,
    ) -> McpResult<String> {
        self.handle_normalize_status(taxonomy, value).await
    }

    /// **Compare**: Check whether two raw strings denote the same status in a taxonomy.
    /// Unrecognized strings only match strings that normalize identically.
    #[tool]
    async fn status_equals(
        &self,
        /// Taxonomy name
        taxonomy: String,
        /// First value
        a: String,
        /// Second value
        b: String,
    ) -> McpResult<String> {
        self.handle_status_equals(taxonomy, a, b).await
    }

    /// **Reference**: List the valid values of one taxonomy (or all), with defaults.
    #[tool]
    async fn taxonomies(
        &self,
        /// Taxonomy name. Empty=all.
        taxonomy: Option<String>,
    ) -> McpResult<String> {
        self.handle_taxonomies(taxonomy).await
    }

    /// **Review**: List records of a domain, optionally filtered by primary status and keyword.
    /// **Use**: domain="capas", status="in progress" shows open work; keyword searches id and title.
    #[tool]
    async fn list(
        &self,
        /// Domain: audits/capas/non_conformances/complaints/training_records/documents
        domain: String,
        /// Primary status filter, any spelling. Empty=all.
        status: Option<String>,
        /// Keyword filter on id and title (case-insensitive)
        keyword: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(domain, status, keyword).await
    }

    /// **Update**: Set a status/category field on one or more records.
    /// **Tip**: field defaults to "status"; use "risk_level", "category" or "checkout_status" for the others.
    #[tool]
    async fn change_status(
        &self,
        /// Domain of the records
        domain: String,
        /// Record IDs
        ids: Vec<String>,
        /// New value, any spelling of a valid member
        new_status: String,
        /// Status field to change. Default: the domain's primary "status" field.
        field: Option<String>,
    ) -> McpResult<String> {
        self.handle_change_status(domain, ids, new_status, field)
            .await
    }
}
