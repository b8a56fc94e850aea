//! Bulk reload of the dashboard snapshot, on demand and on a timer.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use confirma_gateway::RsvpBackend;
use tokio_util::sync::CancellationToken;

use crate::state::SharedState;

/// Reload period when `CONFIRMA_REFRESH_SECS` is unset.
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Reload period from the environment.
pub fn interval_from_env() -> Duration {
    let secs = std::env::var("CONFIRMA_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);
    Duration::from_secs(secs)
}

/// What one reload did, side by side. A failed side keeps its previous rows
/// and carries the banner message instead.
#[derive(Debug, Default)]
pub struct RefreshOutcome {
    pub members_loaded: bool,
    pub responses_loaded: bool,
    pub members_error: Option<String>,
    pub responses_error: Option<String>,
}

impl RefreshOutcome {
    pub fn fully_loaded(&self) -> bool {
        self.members_loaded && self.responses_loaded
    }

    /// Banner messages for the sides that failed.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.members_error
            .as_deref()
            .into_iter()
            .chain(self.responses_error.as_deref())
    }
}

/// Load members and responses concurrently and apply each side on its own.
pub async fn refresh_once<B: RsvpBackend + ?Sized>(
    backend: &B,
    state: &SharedState,
) -> RefreshOutcome {
    let (members, responses) = tokio::join!(backend.list_members(), backend.list_responses());

    let mut outcome = RefreshOutcome::default();
    let mut snapshot = state.write().await;
    match members {
        Ok(rows) => {
            snapshot.members = rows;
            outcome.members_loaded = true;
        }
        Err(e) => outcome.members_error = Some(format!("Error al cargar socios: {e}")),
    }
    match responses {
        Ok(rows) => {
            snapshot.responses = rows;
            outcome.responses_loaded = true;
        }
        Err(e) => outcome.responses_error = Some(format!("Error al cargar respuestas: {e}")),
    }
    if outcome.members_loaded || outcome.responses_loaded {
        snapshot.loaded_at = Some(Utc::now());
    }

    outcome
}

/// Run the periodic reload loop.
///
/// Reloads the snapshot every `every` until `cancel` is triggered. The reload
/// runs inline on the tick, so a slow backend delays the next tick instead of
/// overlapping it.
pub async fn run<B: RsvpBackend + ?Sized>(
    backend: Arc<B>,
    state: SharedState,
    every: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(interval_secs = every.as_secs(), "auto-refresh task started");

    let mut interval = tokio::time::interval(every);
    // The first tick completes immediately; the caller already loaded once.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("auto-refresh task stopping");
                break;
            }
            _ = interval.tick() => {
                let outcome = refresh_once(backend.as_ref(), &state).await;
                if outcome.fully_loaded() {
                    tracing::debug!("auto-refresh: snapshot replaced");
                } else {
                    for message in outcome.errors() {
                        tracing::warn!(error = %message, "auto-refresh: load failed");
                    }
                }
            }
        }
    }
}
