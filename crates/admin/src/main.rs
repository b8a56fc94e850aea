//! `confirma-admin` -- staff terminal for the event dashboard.
//!
//! Logs into the backend, keeps a live snapshot of members and responses,
//! and answers stats, table, filter, and export commands.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default                 | Description                       |
//! |--------------------------|----------|-------------------------|-----------------------------------|
//! | `CONFIRMA_BACKEND_URL`   | no       | `http://localhost:8055` | Backend base URL                  |
//! | `CONFIRMA_REFRESH_SECS`  | no       | `30`                    | Snapshot reload period            |
//! | `CONFIRMA_EXPORT_DIR`    | no       | `.`                     | Directory reports are written to  |

use std::path::PathBuf;
use std::sync::Arc;

use confirma_admin::repl;
use confirma_dashboard::refresh;
use confirma_gateway::{DirectusGateway, GatewayConfig};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr; the dashboard owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confirma_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GatewayConfig::from_env();
    let every = refresh::interval_from_env();
    let export_dir = std::env::var("CONFIRMA_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    tracing::info!(
        base_url = %config.base_url,
        refresh_secs = every.as_secs(),
        "Starting confirma-admin"
    );

    let gateway = Arc::new(DirectusGateway::new(config));
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = repl::run(gateway, every, export_dir, stdin, stdout).await {
        tracing::error!(error = %e, "terminal loop failed");
        std::process::exit(1);
    }
}
