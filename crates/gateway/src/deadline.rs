//! Per-operation deadlines, kept separate from the HTTP client so any
//! gateway call can be bounded the same way regardless of transport.

use std::future::Future;
use std::time::Duration;

pub use tokio::time::error::Elapsed;

/// Run `operation` under `limit`. The operation is dropped (cancelled) when
/// the deadline elapses.
pub async fn with_deadline<F, T>(limit: Duration, operation: F) -> Result<T, Elapsed>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(limit, operation).await
}
