//! Replication orchestrator: one snapshot in, eleven tables replaced.

use tracing::info;
use zex_core::Snapshot;

use crate::{LakeError, ZexLake};

impl ZexLake {
    /// Replace all destination tables with the snapshot's collections.
    ///
    /// Tables load in a fixed order chosen so reference tables land before
    /// the tables that point at them: instrument, country, company, user,
    /// account, tag, merchant, budget, reminder, reminder_marker,
    /// transaction. There is no cross-table transaction: the first failing
    /// kind aborts the run, already-loaded tables stay replaced and
    /// not-yet-reached tables keep their previous contents. A failed run
    /// therefore leaves the destination mixed-fresh; the next successful
    /// run converges it.
    ///
    /// # Errors
    ///
    /// Returns the [`LakeError`] of the first failing table load.
    pub fn replicate(&self, snapshot: &Snapshot) -> Result<(), LakeError> {
        info!(
            records = snapshot.record_count(),
            server_timestamp = snapshot.server_timestamp,
            "replicating snapshot"
        );

        self.load(&snapshot.instruments)?;
        self.load(&snapshot.countries)?;
        self.load(&snapshot.companies)?;
        self.load(&snapshot.users)?;
        self.load(&snapshot.accounts)?;
        self.load(&snapshot.tags)?;
        self.load(&snapshot.merchants)?;
        self.load(&snapshot.budgets)?;
        self.load(&snapshot.reminders)?;
        self.load(&snapshot.reminder_markers)?;
        self.load(&snapshot.transactions)?;

        info!("snapshot replicated");
        Ok(())
    }
}
