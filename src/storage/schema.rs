//! Database schema definitions
//!
//! This module contains the SQL schema for the optional SQLite mirror.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Offers found on listing pages
CREATE TABLE IF NOT EXISTS listings (
    url TEXT PRIMARY KEY,
    position INTEGER NOT NULL,
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    saved_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_listings_position ON listings(position);

-- Offers enriched from their detail pages
CREATE TABLE IF NOT EXISTS details (
    url TEXT PRIMARY KEY,
    position INTEGER NOT NULL,
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    location TEXT NOT NULL,
    date_posted TEXT NOT NULL,
    technologies TEXT NOT NULL,
    experience TEXT NOT NULL,
    contract_type TEXT NOT NULL,
    job_type TEXT NOT NULL,
    seniority TEXT NOT NULL,
    description TEXT NOT NULL,
    saved_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_details_position ON details(position);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
