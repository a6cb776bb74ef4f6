//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the DatasetStore trait.
//! Each save replaces the table content inside one transaction; a `position`
//! column keeps the dataset order.

use crate::model::{Dataset, OfferDetail, OfferIdentity};
use crate::storage::persistable;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{DatasetStore, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`
    pub fn new(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
        ",
        )?;
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl DatasetStore for SqliteStore {
    fn save_listings(&mut self, offers: &Dataset<OfferIdentity>) -> StorageResult<usize> {
        let now = Utc::now().to_rfc3339();
        let rows = persistable(offers);

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM listings", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO listings (url, position, title, company, saved_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, offer) in rows.iter().enumerate() {
                stmt.execute(params![
                    offer.url,
                    position as i64,
                    offer.title,
                    offer.company,
                    now
                ])?;
            }
        }
        tx.commit()?;

        Ok(rows.len())
    }

    fn load_listings(&self) -> StorageResult<Dataset<OfferIdentity>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, company, url FROM listings ORDER BY position")?;

        let offers = stmt
            .query_map([], |row| {
                Ok(OfferIdentity {
                    title: row.get(0)?,
                    company: row.get(1)?,
                    url: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset::from(offers))
    }

    fn save_details(&mut self, details: &Dataset<OfferDetail>) -> StorageResult<usize> {
        let now = Utc::now().to_rfc3339();
        let rows = persistable(details);

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM details", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO details (url, position, title, company, location, date_posted,
                                      technologies, experience, contract_type, job_type,
                                      seniority, description, saved_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;
            for (position, detail) in rows.iter().enumerate() {
                stmt.execute(params![
                    detail.url,
                    position as i64,
                    detail.title,
                    detail.company,
                    detail.location,
                    detail.date_posted,
                    detail.technologies,
                    detail.experience,
                    detail.contract_type,
                    detail.job_type,
                    detail.seniority,
                    detail.description,
                    now
                ])?;
            }
        }
        tx.commit()?;

        Ok(rows.len())
    }

    fn load_details(&self) -> StorageResult<Dataset<OfferDetail>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, company, location, date_posted, technologies, experience,
                    contract_type, job_type, seniority, description, url
             FROM details ORDER BY position",
        )?;

        let details = stmt
            .query_map([], |row| {
                Ok(OfferDetail {
                    title: row.get(0)?,
                    company: row.get(1)?,
                    location: row.get(2)?,
                    date_posted: row.get(3)?,
                    technologies: row.get(4)?,
                    experience: row.get(5)?,
                    contract_type: row.get(6)?,
                    job_type: row.get(7)?,
                    seniority: row.get(8)?,
                    description: row.get(9)?,
                    url: row.get(10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset::from(details))
    }
}
