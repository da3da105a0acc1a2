//! Destination store error types.
//!
//! Each stage of a table load fails with its own variant so a log line
//! pinpoints where a run died: clearing, opening the batch, appending one
//! row, or sending the batch. There is no retry at this layer.

use thiserror::Error;

/// Errors that can occur in the destination store.
#[derive(Debug, Error)]
pub enum LakeError {
    /// Could not open or validate the DuckDB connection.
    #[error("failed to connect to destination store at {path}: {source}")]
    Connection {
        /// Database path (`:memory:` for the in-memory store).
        path: String,
        source: duckdb::Error,
    },

    /// Destination schema setup failed.
    #[error("schema setup failed: {0}")]
    Schema(duckdb::Error),

    /// The destructive clear of a table failed.
    #[error("truncate failed for table {table}: {source}")]
    Truncate { table: String, source: duckdb::Error },

    /// Opening the batched append context failed.
    #[error("failed to open batch for table {table}: {source}")]
    BatchPrepare { table: String, source: duckdb::Error },

    /// Appending one row to the batch failed (malformed or mismatched value).
    #[error("failed to append row {row} to batch for table {table}: {source}")]
    BatchAppend {
        table: String,
        /// Zero-based index of the offending row in the input collection.
        row: usize,
        source: duckdb::Error,
    },

    /// Flushing the batch failed; the table is left in an undefined
    /// intermediate state (the clear has already committed).
    #[error("failed to send batch for table {table}: {source}")]
    BatchSend { table: String, source: duckdb::Error },

    /// Connection teardown failed. Logged by callers, never masks the run
    /// outcome.
    #[error("failed to close destination connection: {0}")]
    Close(duckdb::Error),
}
