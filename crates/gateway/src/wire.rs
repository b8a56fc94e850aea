//! Envelope types for the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// `GET /items/{collection}` answers `{ "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Single-item writes answer `{ "data": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

/// Failure bodies carry `{ "errors": [ { "message": ... } ] }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// First backend-provided error message in a failure body, if any.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()?
        .errors
        .into_iter()
        .next()
        .map(|e| e.message)
}

// ---------------------------------------------------------------------------
// Auth payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginEnvelope {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<StaffUser>,
}

/// User object the login endpoint may attach. Deployments expose different
/// field sets, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StaffUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StaffUser {
    /// Name to greet the staff user with. Blank fields are skipped;
    /// `fallback` is the email used to log in.
    pub fn display_name(&self, fallback: &str) -> String {
        [&self.first_name, &self.name, &self.email]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
