//! Report export: render the current snapshot and write it to disk.

use std::path::{Path, PathBuf};

use chrono::Utc;
use confirma_core::report::ExportFormat;

use crate::error::DashboardError;
use crate::state::SharedState;

/// Render the report for the current snapshot and write it under `dir`,
/// named after today's date. Returns the path written.
pub async fn export_report(
    state: &SharedState,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, DashboardError> {
    let report = {
        let snapshot = state.read().await;
        snapshot.report(Utc::now())
    };

    let path = dir.join(report.suggested_filename(format));
    tokio::fs::write(&path, report.render(format)).await?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "report written");

    Ok(path)
}
