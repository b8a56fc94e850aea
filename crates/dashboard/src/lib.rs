//! Staff dashboard layer: login session, the shared data snapshot, the
//! periodic reload task, and report export. Rendering stays in the terminal
//! binary; everything here is data and orchestration.

pub mod error;
pub mod export;
pub mod refresh;
pub mod session;
pub mod state;

pub use error::DashboardError;
pub use refresh::RefreshOutcome;
pub use session::AdminSession;
pub use state::{SharedState, Snapshot};
