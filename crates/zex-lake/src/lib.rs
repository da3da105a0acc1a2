//! # zex-lake
//!
//! DuckDB destination store for zenexport.
//!
//! Holds the replicated copy of one ZenMoney account: eleven tables, one
//! per entity kind, refreshed by truncate-then-bulk-append on every sync.
//! Tables are refreshed independently — there is no cross-table
//! transaction, and a failed run leaves the destination mixed-fresh until
//! the next successful one.
//!
//! A [`ZexLake`] is scoped to a single replication run: opened at run
//! start, used sequentially by that run's table loads, and closed at run
//! end. Runs never overlap, so there is no pooling.

mod error;
mod loader;
mod replicate;
mod schema;
mod tables;

pub use error::LakeError;
pub use tables::TableRecord;

use duckdb::Connection;

#[cfg(test)]
mod test_support;

/// Destination DuckDB store for replicated snapshots.
#[derive(Debug)]
pub struct ZexLake {
    conn: Connection,
    path: String,
}

impl ZexLake {
    /// Open (or create) the destination database file, validate the
    /// connection and ensure the table schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::Connection`] if the file cannot be opened or the
    /// connection does not answer a trivial query, and [`LakeError::Schema`]
    /// if table creation fails.
    pub fn open(path: &str) -> Result<Self, LakeError> {
        let conn = Connection::open(path).map_err(|source| LakeError::Connection {
            path: path.to_string(),
            source,
        })?;
        let lake = Self {
            conn,
            path: path.to_string(),
        };
        lake.ping()?;
        lake.init_schema()?;
        Ok(lake)
    }

    /// Open an in-memory store (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::Schema`] if table creation fails.
    pub fn open_in_memory() -> Result<Self, LakeError> {
        let conn = Connection::open_in_memory().map_err(|source| LakeError::Connection {
            path: ":memory:".to_string(),
            source,
        })?;
        let lake = Self {
            conn,
            path: ":memory:".to_string(),
        };
        lake.init_schema()?;
        Ok(lake)
    }

    /// Access the underlying DuckDB connection.
    ///
    /// Exposed for ad-hoc analytical queries against the replicated data.
    /// The replication pipeline itself only goes through [`ZexLake::load`]
    /// and [`ZexLake::replicate`].
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing teardown failures.
    ///
    /// Dropping a `ZexLake` also releases the connection; calling `close`
    /// makes a teardown failure observable so the run can log it without
    /// masking its own outcome.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::Close`] if teardown fails.
    pub fn close(self) -> Result<(), LakeError> {
        self.conn
            .close()
            .map_err(|(_, source)| LakeError::Close(source))
    }

    /// Verify the connection answers a trivial query.
    fn ping(&self) -> Result<(), LakeError> {
        self.conn
            .query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|source| LakeError::Connection {
                path: self.path.clone(),
                source,
            })
    }

    /// Create the eleven destination tables if they don't exist.
    fn init_schema(&self) -> Result<(), LakeError> {
        for ddl in schema::CREATE_TABLES {
            self.conn.execute_batch(ddl).map_err(LakeError::Schema)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schema_creation() {
        let lake = ZexLake::open_in_memory().expect("open in-memory lake");

        let tables: Vec<String> = {
            let mut stmt = lake
                .conn()
                .prepare(
                    "SELECT table_name FROM information_schema.tables
                     WHERE table_schema = 'main'
                     ORDER BY table_name",
                )
                .unwrap();
            stmt.query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        };

        assert_eq!(
            tables,
            vec![
                "account",
                "budget",
                "company",
                "country",
                "instrument",
                "merchant",
                "reminder",
                "reminder_marker",
                "tag",
                "transaction",
                "user",
            ]
        );
    }

    #[test]
    fn unreachable_destination_is_a_connection_error() {
        let err = ZexLake::open("/nonexistent-dir/zen.duckdb").expect_err("open must fail");
        assert!(matches!(err, LakeError::Connection { ref path, .. } if path.contains("zen")));
    }

    #[test]
    fn close_succeeds_after_replication() {
        let lake = ZexLake::open_in_memory().expect("open lake");
        lake.replicate(&test_support::full_snapshot("a"))
            .expect("replicate");
        lake.close().expect("close");
    }

    #[test]
    fn file_persistence_across_runs() {
        let tmpdir = tempfile::tempdir().unwrap();
        let db_path = tmpdir.path().join("zenexport.duckdb");
        let db_str = db_path.to_str().unwrap();

        {
            let lake = ZexLake::open(db_str).expect("open file-backed lake");
            lake.replicate(&test_support::full_snapshot("a"))
                .expect("replicate");
            lake.close().expect("close");
        }

        {
            let lake = ZexLake::open(db_str).expect("reopen lake");
            let count: i64 = lake
                .conn()
                .query_row("SELECT count(*) FROM \"transaction\"", [], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn reopen_keeps_existing_rows() {
        // CREATE TABLE IF NOT EXISTS must not clobber a populated table.
        let tmpdir = tempfile::tempdir().unwrap();
        let db_path = tmpdir.path().join("zenexport.duckdb");
        let db_str = db_path.to_str().unwrap();

        let lake = ZexLake::open(db_str).expect("open");
        lake.load(&[test_support::instrument(1)]).expect("load");
        lake.close().expect("close");

        let lake = ZexLake::open(db_str).expect("reopen");
        let count: i64 = lake
            .conn()
            .query_row("SELECT count(*) FROM instrument", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
