//! CSV dataset store
//!
//! Fields are quoted whenever needed, so multi-line descriptions and
//! comma-joined technology lists survive a write/read cycle unchanged.

use crate::config::OutputConfig;
use crate::model::{Dataset, OfferDetail, OfferIdentity};
use crate::storage::persistable;
use crate::storage::traits::{DatasetStore, Record, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// CSV file backend: one file per dataset
#[derive(Debug, Clone)]
pub struct CsvStore {
    listings_path: PathBuf,
    details_path: PathBuf,
}

impl CsvStore {
    /// Creates a store over the two dataset files
    pub fn new(listings_path: impl Into<PathBuf>, details_path: impl Into<PathBuf>) -> Self {
        Self {
            listings_path: listings_path.into(),
            details_path: details_path.into(),
        }
    }

    /// Creates a store over the files named in the output configuration
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.listings_path, &config.details_path)
    }

    pub fn listings_path(&self) -> &Path {
        &self.listings_path
    }

    pub fn details_path(&self) -> &Path {
        &self.details_path
    }
}

impl DatasetStore for CsvStore {
    fn save_listings(&mut self, offers: &Dataset<OfferIdentity>) -> StorageResult<usize> {
        write_records(&self.listings_path, offers)
    }

    fn load_listings(&self) -> StorageResult<Dataset<OfferIdentity>> {
        read_records(&self.listings_path)
    }

    fn save_details(&mut self, details: &Dataset<OfferDetail>) -> StorageResult<usize> {
        write_records(&self.details_path, details)
    }

    fn load_details(&self) -> StorageResult<Dataset<OfferDetail>> {
        read_records(&self.details_path)
    }
}

/// Writes a header row followed by one row per persistable record
///
/// The header is written even for an empty dataset.
fn write_records<T: Record>(path: &Path, records: &Dataset<T>) -> StorageResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(T::COLUMNS)?;

    let rows = persistable(records);
    for record in &rows {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

/// Reads every row with a non-empty URL, in file order
fn read_records<T: Record>(path: &Path) -> StorageResult<Dataset<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Dataset::new();

    for (line, row) in reader.deserialize::<T>().enumerate() {
        let record = row?;
        if record.key().is_empty() {
            tracing::warn!("Skipping row {} of {}: empty URL", line + 2, path.display());
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
