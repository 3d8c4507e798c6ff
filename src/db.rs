//! Read access to the `rachunki.db` SQLite database maintained by the
//! invoice-parsing backend.
//!
//! This module only reads `consumption_records`; the backend owns the schema
//! and all writes. Filters mirror the backend's chart endpoint: utility type
//! by equality, location by substring.

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::env;
use std::path::{Path, PathBuf};

use crate::models::{BillingRecord, Document};

/// Upstream filters applied in SQL before aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter<'a> {
    pub utility_type: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Get the database file path.
///
/// Checks `RACHUNKI_DB_PATH` first, falls back to `~/.rachunki/rachunki.db`.
pub fn default_db_path() -> Result<PathBuf> {
    if let Ok(custom_path) = env::var("RACHUNKI_DB_PATH") {
        return Ok(PathBuf::from(custom_path));
    }

    let base_dirs = directories::BaseDirs::new().context("Failed to find home directory")?;
    Ok(base_dirs.home_dir().join(".rachunki").join("rachunki.db"))
}

/// Load billing records, oldest period first.
pub fn load_records(path: &Path, filter: &RecordFilter) -> Result<Vec<BillingRecord>> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("open bills database {}", path.display()))?;

    let mut sql = String::from(
        "SELECT provider, utility_type, location, period_start, period_end,
                consumption_kwh, consumption_value, consumption_unit,
                cost_net, cost_gross, is_estimate
         FROM consumption_records
         WHERE 1=1",
    );
    let mut params: Vec<String> = Vec::new();
    if let Some(utility) = filter.utility_type {
        sql.push_str(" AND utility_type = ?");
        params.push(utility.to_string());
    }
    if let Some(location) = filter.location {
        sql.push_str(" AND location LIKE ?");
        params.push(format!("%{location}%"));
    }
    sql.push_str(" ORDER BY period_start ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
        Ok(BillingRecord {
            provider: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            utility_type: row.get(1)?,
            location: row.get(2)?,
            period_start: row.get(3)?,
            period_end: row.get(4)?,
            consumption_kwh: row.get(5)?,
            consumption_value: row.get(6)?,
            consumption_unit: row.get(7)?,
            cost_net: row.get(8)?,
            cost_gross: row.get(9)?,
            is_estimate: row.get::<_, Option<i64>>(10)?.unwrap_or(0) != 0,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.context("read consumption record")?);
    }
    Ok(records)
}

/// Load imported invoice documents, newest issue date first, optionally
/// narrowed to one provider (mirrors the backend's `/api/documents`).
pub fn load_documents(path: &Path, provider: Option<&str>) -> Result<Vec<Document>> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("open bills database {}", path.display()))?;

    let mut sql = String::from(
        "SELECT filename, provider, doc_type, doc_number, issue_date,
                due_date, amount_pln, payment_status, location
         FROM documents",
    );
    let mut params: Vec<String> = Vec::new();
    if let Some(provider) = provider {
        sql.push_str(" WHERE provider = ?");
        params.push(provider.to_string());
    }
    sql.push_str(" ORDER BY issue_date DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
        Ok(Document {
            filename: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            provider: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            doc_type: row.get(2)?,
            doc_number: row.get(3)?,
            issue_date: row.get(4)?,
            due_date: row.get(5)?,
            amount_pln: row.get(6)?,
            payment_status: row.get(7)?,
            location: row.get(8)?,
        })
    })?;

    let mut documents = Vec::new();
    for row in rows {
        documents.push(row.context("read document record")?);
    }
    Ok(documents)
}
