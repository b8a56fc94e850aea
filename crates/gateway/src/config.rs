use std::time::Duration;

/// Backend gateway configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL without trailing slash (default: `http://localhost:8055`).
    pub base_url: String,
    /// Collection holding the member directory (default: `matriz`).
    pub members_collection: String,
    /// Collection holding the RSVP responses (default: `inauguracion`).
    pub responses_collection: String,
    /// Optional static bearer token for the public flow. When unset, reads
    /// rely on the backend's public role permissions.
    pub static_token: Option<String>,
    /// Deadline for read operations (default: 10s).
    pub read_timeout: Duration,
    /// Deadline for write operations (default: 15s).
    pub write_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8055".to_string(),
            members_collection: "matriz".to_string(),
            responses_collection: "inauguracion".to_string(),
            static_token: None,
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(15),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                  |
    /// |----------------------------------|--------------------------|
    /// | `CONFIRMA_BACKEND_URL`           | `http://localhost:8055`  |
    /// | `CONFIRMA_MEMBERS_COLLECTION`    | `matriz`                 |
    /// | `CONFIRMA_RESPONSES_COLLECTION`  | `inauguracion`           |
    /// | `CONFIRMA_STATIC_TOKEN`          | unset                    |
    /// | `CONFIRMA_READ_TIMEOUT_SECS`     | `10`                     |
    /// | `CONFIRMA_WRITE_TIMEOUT_SECS`    | `15`                     |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("CONFIRMA_BACKEND_URL")
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();

        let members_collection =
            std::env::var("CONFIRMA_MEMBERS_COLLECTION").unwrap_or(defaults.members_collection);

        let responses_collection = std::env::var("CONFIRMA_RESPONSES_COLLECTION")
            .unwrap_or(defaults.responses_collection);

        let static_token = std::env::var("CONFIRMA_STATIC_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let read_timeout_secs: u64 = std::env::var("CONFIRMA_READ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.read_timeout.as_secs());

        let write_timeout_secs: u64 = std::env::var("CONFIRMA_WRITE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.write_timeout.as_secs());

        Self {
            base_url,
            members_collection,
            responses_collection,
            static_token,
            read_timeout: Duration::from_secs(read_timeout_secs),
            write_timeout: Duration::from_secs(write_timeout_secs),
        }
    }
}
