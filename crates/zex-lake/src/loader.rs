//! Generic truncate+batch-append loader.
//!
//! One routine serves all eleven tables; the per-table differences live
//! entirely in the [`TableRecord`] impls. Each load replaces the table's
//! contents: a destructive clear, then every row appended to one DuckDB
//! Appender batch, flushed as a single unit. Between the clear and the
//! flush readers observe an empty table — the pipeline makes no live-read
//! guarantee during replication.

use duckdb::ToSql;
use tracing::info;

use crate::{LakeError, ZexLake, tables::TableRecord};

impl ZexLake {
    /// Replace the destination table for one entity kind with `records`.
    ///
    /// Appends in input order. No retry: on failure the table is left in an
    /// undefined intermediate state (the clear has already committed) and
    /// the caller decides what a failed run means.
    ///
    /// # Errors
    ///
    /// Returns the stage-specific [`LakeError`] variant: [`Truncate`]
    /// (clear failed), [`BatchPrepare`] (appender could not open),
    /// [`BatchAppend`] (one row was rejected, with its index) or
    /// [`BatchSend`] (final flush failed).
    ///
    /// [`Truncate`]: LakeError::Truncate
    /// [`BatchPrepare`]: LakeError::BatchPrepare
    /// [`BatchAppend`]: LakeError::BatchAppend
    /// [`BatchSend`]: LakeError::BatchSend
    pub fn load<R: TableRecord>(&self, records: &[R]) -> Result<(), LakeError> {
        info!(table = R::TABLE, rows = records.len(), "starting table load");

        self.clear_table(R::TABLE)?;

        let mut appender = self
            .conn()
            .appender(R::TABLE)
            .map_err(|source| LakeError::BatchPrepare {
                table: R::TABLE.to_string(),
                source,
            })?;
        for (index, record) in records.iter().enumerate() {
            let row = record.row();
            let params: Vec<&dyn ToSql> = row.iter().map(|value| value as &dyn ToSql).collect();
            appender
                .append_row(params.as_slice())
                .map_err(|source| LakeError::BatchAppend {
                    table: R::TABLE.to_string(),
                    row: index,
                    source,
                })?;
        }
        appender.flush().map_err(|source| LakeError::BatchSend {
            table: R::TABLE.to_string(),
            source,
        })?;

        info!(table = R::TABLE, rows = records.len(), "finished table load");
        Ok(())
    }

    /// Remove all rows from `table`. A missing table is a no-op, matching
    /// `TRUNCATE TABLE IF EXISTS` on the original destination.
    fn clear_table(&self, table: &str) -> Result<(), LakeError> {
        if !self.table_exists(table).map_err(|source| LakeError::Truncate {
            table: table.to_string(),
            source,
        })? {
            return Ok(());
        }
        self.conn()
            .execute(&format!("DELETE FROM \"{table}\""), [])
            .map_err(|source| LakeError::Truncate {
                table: table.to_string(),
                source,
            })?;
        Ok(())
    }

    fn table_exists(&self, table: &str) -> duckdb::Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT count(*) FROM information_schema.tables
             WHERE table_schema = 'main' AND table_name = ?",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
