//! Staff login session over the backend gateway.

use confirma_core::error::CoreError;
use confirma_gateway::RsvpBackend;

use crate::error::DashboardError;

/// Shown when the login form is submitted with a blank field.
const EMPTY_CREDENTIALS_MSG: &str = "Ingresa tu correo y contraseña.";

/// An authenticated staff session. Holds the name the header greets the user
/// with; the gateway keeps the actual token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    display_name: String,
}

impl AdminSession {
    /// Check the credentials are non-empty, authenticate, and resolve the
    /// greeting name. Deployments that return no user object fall back to
    /// the entered email.
    pub async fn login<B: RsvpBackend + ?Sized>(
        backend: &B,
        email: &str,
        password: &str,
    ) -> Result<Self, DashboardError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(EMPTY_CREDENTIALS_MSG.to_string()).into());
        }

        let user = backend.login(email, password).await?;
        let display_name = user
            .map(|user| user.display_name(email))
            .unwrap_or_else(|| email.to_string());

        tracing::info!(user = %display_name, "staff session opened");
        Ok(Self { display_name })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Drop the backend token and consume the session.
    pub fn logout<B: RsvpBackend + ?Sized>(self, backend: &B) {
        backend.logout();
        tracing::info!(user = %self.display_name, "staff session closed");
    }
}
