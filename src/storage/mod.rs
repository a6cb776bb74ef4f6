//! Storage module for persisting offer datasets
//!
//! This module handles reading and writing the harvested datasets:
//! - CSV files, the primary exchange format between the two run modes
//! - An optional SQLite database mirroring both datasets

mod csv_store;
mod schema;
mod sqlite;
mod traits;

pub use csv_store::CsvStore;
pub use sqlite::SqliteStore;
pub use traits::{DatasetStore, Record, StorageError, StorageResult};

use crate::model::Keyed;
use std::collections::HashSet;

/// Yields the records a store may persist
///
/// Records with an empty URL and repeats of an already-yielded URL are
/// reported and dropped.
fn persistable<'a, T: Keyed>(records: impl IntoIterator<Item = &'a T>) -> Vec<&'a T>
where
    T: 'a,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for record in records {
        let key = record.key();
        if key.is_empty() {
            tracing::warn!("Not persisting record without URL");
            continue;
        }
        if !seen.insert(key) {
            tracing::debug!("Not persisting duplicate URL {}", key);
            continue;
        }
        kept.push(record);
    }

    kept
}
