//! Storage traits and error types
//!
//! This module defines the trait interface for dataset stores and the record
//! shape they persist.

use crate::model::{Dataset, Keyed, OfferDetail, OfferIdentity};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A persistable offer record
pub trait Record: Serialize + DeserializeOwned + Keyed {
    /// Column headers, in field order
    const COLUMNS: &'static [&'static str];
}

impl Record for OfferIdentity {
    const COLUMNS: &'static [&'static str] = &["Title", "Company", "URL"];
}

impl Record for OfferDetail {
    const COLUMNS: &'static [&'static str] = &[
        "Title",
        "Company",
        "Location",
        "Date Posted",
        "Technologies",
        "Experience",
        "Contract Type",
        "Job Type",
        "Seniority",
        "Description",
        "URL",
    ];
}

/// Trait for dataset store implementations
///
/// Saving replaces whatever the store previously held for that dataset.
/// Stores never persist a record with an empty URL, nor a second record for a
/// URL already written; the first occurrence wins. Both methods return the
/// number of records persisted or loaded.
pub trait DatasetStore {
    /// Persists the listing dataset
    fn save_listings(&mut self, offers: &Dataset<OfferIdentity>) -> StorageResult<usize>;

    /// Loads the listing dataset, in saved order
    fn load_listings(&self) -> StorageResult<Dataset<OfferIdentity>>;

    /// Persists the detail dataset
    fn save_details(&mut self, details: &Dataset<OfferDetail>) -> StorageResult<usize>;

    /// Loads the detail dataset, in saved order
    fn load_details(&self) -> StorageResult<Dataset<OfferDetail>>;
}
