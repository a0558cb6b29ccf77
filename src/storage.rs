use crate::error::QmsError;
use crate::records::{QmsData, RawQmsFile};
use crate::taxonomy::StatusNormalizer;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file standing in for the remote record store
///
/// Every load reads the whole file and every save rewrites it, so each call
/// either fully succeeds or leaves the previous file in place.
pub struct Storage {
    file_path: PathBuf,
    read_only: bool,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>, read_only: bool) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            read_only,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Load and normalize all records; a missing file is an empty store
    pub fn load(&self, normalizer: &StatusNormalizer) -> Result<QmsData> {
        if !self.file_path.exists() {
            tracing::info!(path = %self.file_path.display(), "records file not found, starting empty");
            return Ok(QmsData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let file: RawQmsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;
        let data = QmsData::from_raw(file, normalizer)?;

        tracing::info!(
            path = %self.file_path.display(),
            records = data.len(),
            "loaded records"
        );
        Ok(data)
    }

    /// Write all records back in storage form
    pub fn save(&self, data: &QmsData) -> Result<()> {
        if self.read_only {
            return Err(QmsError::ReadOnly.into());
        }

        let content = toml::to_string_pretty(&data.to_raw())?;
        let tmp_path = self.file_path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.file_path)
            .with_context(|| format!("Failed to replace {}", self.file_path.display()))?;

        tracing::debug!(path = %self.file_path.display(), records = data.len(), "saved records");
        Ok(())
    }
}
