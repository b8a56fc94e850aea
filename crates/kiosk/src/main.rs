//! `confirma-kiosk` -- public RSVP terminal.
//!
//! Walks a guest through the confirmation wizard over stdin/stdout: id
//! lookup, response choice, companion count, and the final summary.
//!
//! # Environment variables
//!
//! | Variable                         | Required | Default                 | Description                        |
//! |----------------------------------|----------|-------------------------|------------------------------------|
//! | `CONFIRMA_BACKEND_URL`           | no       | `http://localhost:8055` | Backend base URL                   |
//! | `CONFIRMA_MEMBERS_COLLECTION`    | no       | `matriz`                | Member directory collection        |
//! | `CONFIRMA_RESPONSES_COLLECTION`  | no       | `inauguracion`          | Response collection                |
//! | `CONFIRMA_STATIC_TOKEN`          | no       | unset                   | Static bearer token for reads      |
//! | `CONFIRMA_ID_MIN_LEN`            | no       | `10`                    | Minimum id length                  |
//! | `CONFIRMA_ID_MAX_LEN`            | no       | `11`                    | Maximum id length                  |
//! | `CONFIRMA_EVENT_NAME` and co.    | no       | product defaults        | Event copy shown on the screens    |

use confirma_core::validation::IdRules;
use confirma_gateway::{DirectusGateway, GatewayConfig};
use confirma_kiosk::{render, repl};
use confirma_wizard::{EventDetails, WizardFlow};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr; the wizard screens own stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confirma_kiosk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GatewayConfig::from_env();
    let details = EventDetails::from_env();
    let defaults = IdRules::default();
    let rules = IdRules {
        min_len: env_usize("CONFIRMA_ID_MIN_LEN", defaults.min_len),
        max_len: env_usize("CONFIRMA_ID_MAX_LEN", defaults.max_len),
    };

    tracing::info!(base_url = %config.base_url, event = %details.name, "Starting confirma-kiosk");

    let gateway = DirectusGateway::new(config);
    let flow = WizardFlow::new(gateway, rules, details.clone());

    let mut stdout = tokio::io::stdout();
    if let Err(e) = stdout
        .write_all(render::header(&details.name).as_bytes())
        .await
    {
        tracing::error!(error = %e, "stdout unavailable");
        std::process::exit(1);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = repl::run(flow, stdin, stdout).await {
        tracing::error!(error = %e, "terminal loop failed");
        std::process::exit(1);
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
