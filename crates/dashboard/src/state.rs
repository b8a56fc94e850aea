//! Shared data snapshot both staff views render from.

use std::sync::Arc;

use confirma_core::model::{Member, RsvpResponse};
use confirma_core::report::Report;
use confirma_core::roster::{build_roster, RosterRow};
use confirma_core::stats::{compute_stats, AttendanceStats};
use confirma_core::types::Timestamp;
use tokio::sync::RwLock;

/// The member directory and response rows as of the last load. Each side is
/// replaced wholesale by a successful load; a failed load leaves that side's
/// previous rows in place.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub responses: Vec<RsvpResponse>,
    pub loaded_at: Option<Timestamp>,
}

impl Snapshot {
    /// Aggregate counters for the stats board.
    pub fn stats(&self) -> AttendanceStats {
        compute_stats(&self.members, &self.responses)
    }

    /// Reconciled roster, one row per member.
    pub fn roster(&self) -> Vec<RosterRow> {
        build_roster(&self.members, &self.responses)
    }

    /// Full report over the current data, ready to render.
    pub fn report(&self, generated_at: Timestamp) -> Report {
        Report::build(&self.members, &self.responses, generated_at)
    }
}

/// Snapshot shared between the terminal loop and the refresh task.
pub type SharedState = Arc<RwLock<Snapshot>>;

/// Fresh empty state.
pub fn shared() -> SharedState {
    Arc::new(RwLock::new(Snapshot::default()))
}
