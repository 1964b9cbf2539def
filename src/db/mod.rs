mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::models::ExpenseRecord;

/// Failures surfaced by the record store.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("no expense record with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expense records ───────────────────────────────────────

    pub(crate) fn insert_record(&self, rec: &ExpenseRecord) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO expense_record (item_name, item_price, purchase_date)
             VALUES (?1, ?2, ?3)",
            params![
                rec.item_name,
                rec.item_price.to_string(),
                rec.purchase_date,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All records in insertion order.
    pub(crate) fn get_records(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, item_name, item_price, purchase_date
             FROM expense_record ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            let price_str: String = row.get(2)?;
            Ok(ExpenseRecord {
                id: Some(row.get(0)?),
                item_name: row.get(1)?,
                item_price: Decimal::from_str(&price_str).unwrap_or_default(),
                purchase_date: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_record_by_id(&self, id: i64) -> Result<Option<ExpenseRecord>, StoreError> {
        let result = self.conn.query_row(
            "SELECT id, item_name, item_price, purchase_date
             FROM expense_record WHERE id = ?1",
            params![id],
            |row| {
                let price_str: String = row.get(2)?;
                Ok(ExpenseRecord {
                    id: Some(row.get(0)?),
                    item_name: row.get(1)?,
                    item_price: Decimal::from_str(&price_str).unwrap_or_default(),
                    purchase_date: row.get(3)?,
                })
            },
        );
        match result {
            Ok(rec) => Ok(Some(rec)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites all three user columns of the given row. A vanished id
    /// is reported as `NotFound`; the caller decides whether that is
    /// worth telling the user about.
    pub(crate) fn update_record(
        &self,
        id: i64,
        item_name: &str,
        item_price: Decimal,
        purchase_date: &str,
    ) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE expense_record
             SET item_name = ?1, item_price = ?2, purchase_date = ?3
             WHERE id = ?4",
            params![item_name, item_price.to_string(), purchase_date, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Idempotent: deleting an absent id is a no-op.
    pub(crate) fn delete_record(&self, id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM expense_record WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Sum of all prices, zero for an empty table. Prices are stored as
    /// TEXT; summing Decimals here keeps cents exact instead of going
    /// through SQL REAL.
    pub(crate) fn total_spent(&self) -> Result<Decimal, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT item_price FROM expense_record")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut total = Decimal::ZERO;
        for price_str in rows {
            total += Decimal::from_str(&price_str?).unwrap_or_default();
        }
        Ok(total)
    }

    pub(crate) fn record_count(&self) -> Result<i64, StoreError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expense_record", [], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests;
