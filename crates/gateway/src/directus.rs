//! HTTP implementation of [`RsvpBackend`] against a Directus-style backend.
//!
//! Every operation runs under its own deadline and maps failures to the
//! user-facing taxonomy in [`crate::error`].

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use confirma_core::model::{Member, RsvpResponse, RsvpSubmission};
use confirma_core::types::DbId;

use crate::backend::RsvpBackend;
use crate::config::GatewayConfig;
use crate::deadline::with_deadline;
use crate::error::{GatewayError, GatewayResult};
use crate::wire::{
    extract_error_message, ItemEnvelope, ItemsEnvelope, LoginEnvelope, LoginRequest, StaffUser,
};

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

const CONNECT_MSG: &str = "No se puede conectar al servidor. Verifica tu conexión a internet.";
const CONNECT_LOGIN_MSG: &str = "No se puede conectar al servidor. Verifica la URL de Directus.";

const TIMEOUT_SEARCH_MSG: &str = "Tiempo de espera agotado. Verifica tu conexión.";
const TIMEOUT_LOGIN_MSG: &str = "Tiempo de espera agotado. Verifica tu conexión a internet.";
const TIMEOUT_MEMBERS_MSG: &str = "Tiempo de espera agotado al cargar socios.";
const TIMEOUT_RESPONSES_MSG: &str = "Tiempo de espera agotado al cargar respuestas.";
const TIMEOUT_CREATE_MSG: &str = "Tiempo de espera agotado al enviar respuesta.";
const TIMEOUT_UPDATE_MSG: &str = "Tiempo de espera agotado al actualizar respuesta.";

const FORBIDDEN_READ_MSG: &str =
    "No tienes permisos para acceder a los datos. Contacta al administrador.";
const FORBIDDEN_CREATE_MSG: &str =
    "No tienes permisos para enviar respuestas. Contacta al administrador.";
const FORBIDDEN_UPDATE_MSG: &str =
    "No tienes permisos para actualizar respuestas. Contacta al administrador.";

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// Client for one backend deployment. Holds the bearer token slot, which the
/// static token seeds and a staff login replaces.
pub struct DirectusGateway {
    client: reqwest::Client,
    config: GatewayConfig,
    token: RwLock<Option<String>>,
}

impl DirectusGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build a gateway reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across gateways in tests and tools).
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        let token = RwLock::new(config.static_token.clone());
        Self {
            client,
            config,
            token,
        }
    }

    // ---- private helpers ----

    fn items_url(&self, collection: &str) -> String {
        format!("{}/items/{}", self.config.base_url, collection)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request under `limit`, mapping an elapsed deadline and
    /// connection failures to their user-facing messages.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        limit: Duration,
        timeout_msg: &'static str,
        connect_msg: &'static str,
    ) -> GatewayResult<reqwest::Response> {
        match with_deadline(limit, request.send()).await {
            Err(_) => Err(GatewayError::Timeout(timeout_msg.to_string())),
            Ok(Ok(response)) => Ok(response),
            Ok(Err(error)) if error.is_connect() => {
                Err(GatewayError::Connect(connect_msg.to_string()))
            }
            Ok(Err(error)) => Err(GatewayError::Request(error)),
        }
    }

    /// Map a non-success response. 403 becomes [`GatewayError::Forbidden`]
    /// when the operation carries a permissions message; everything else
    /// keeps the backend's own error message or falls back per operation.
    async fn ensure_success(
        response: reqwest::Response,
        forbidden_msg: Option<&'static str>,
        fallback: impl FnOnce(u16) -> String,
    ) -> GatewayResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let code = status.as_u16();
        if code == 403 {
            if let Some(msg) = forbidden_msg {
                return Err(GatewayError::Forbidden(msg.to_string()));
            }
        }
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body).unwrap_or_else(|| fallback(code));
        Err(GatewayError::Backend {
            status: code,
            message,
        })
    }

    async fn try_existing_response(&self, member_id: DbId) -> GatewayResult<Option<RsvpResponse>> {
        let request = self
            .with_auth(self.client.get(self.items_url(&self.config.responses_collection)))
            .query(&[("filter[idsocio][_eq]", member_id.to_string())]);

        let response = self
            .send(
                request,
                self.config.read_timeout,
                TIMEOUT_SEARCH_MSG,
                CONNECT_MSG,
            )
            .await?;

        // The probe never escalates a rejected status; the flow just
        // proceeds as if no response existed.
        if !response.status().is_success() {
            return Ok(None);
        }

        let envelope: ItemsEnvelope<RsvpResponse> =
            response.json().await.map_err(GatewayError::Request)?;
        Ok(envelope.data.into_iter().next())
    }
}

#[async_trait]
impl RsvpBackend for DirectusGateway {
    async fn find_member_by_national_id(&self, national_id: &str) -> GatewayResult<Option<Member>> {
        tracing::debug!(national_id, "searching member");

        let request = self
            .with_auth(self.client.get(self.items_url(&self.config.members_collection)))
            .query(&[("filter[cedula][_eq]", national_id)]);

        let response = self
            .send(
                request,
                self.config.read_timeout,
                TIMEOUT_SEARCH_MSG,
                CONNECT_MSG,
            )
            .await?;
        let response = Self::ensure_success(response, Some(FORBIDDEN_READ_MSG), |code| {
            format!("Error del servidor: {code}")
        })
        .await?;

        let envelope: ItemsEnvelope<Member> =
            response.json().await.map_err(GatewayError::Request)?;
        Ok(envelope.data.into_iter().next())
    }

    async fn existing_response(&self, member_id: DbId) -> Option<RsvpResponse> {
        match self.try_existing_response(member_id).await {
            Ok(found) => found,
            Err(error) => {
                tracing::debug!(member_id, %error, "existing response probe failed, continuing without it");
                None
            }
        }
    }

    async fn create_response(&self, submission: &RsvpSubmission) -> GatewayResult<RsvpResponse> {
        tracing::debug!(
            member_id = submission.member_id,
            kind = submission.kind.as_wire(),
            companions = submission.companions,
            "creating response"
        );

        let request = self
            .with_auth(self.client.post(self.items_url(&self.config.responses_collection)))
            .json(submission);

        let response = self
            .send(
                request,
                self.config.write_timeout,
                TIMEOUT_CREATE_MSG,
                CONNECT_MSG,
            )
            .await?;
        let response = Self::ensure_success(response, Some(FORBIDDEN_CREATE_MSG), |code| {
            format!("Error del servidor: {code}")
        })
        .await?;

        let envelope: ItemEnvelope<RsvpResponse> =
            response.json().await.map_err(GatewayError::Request)?;
        Ok(envelope.data)
    }

    async fn update_response(
        &self,
        response_id: DbId,
        submission: &RsvpSubmission,
    ) -> GatewayResult<RsvpResponse> {
        tracing::debug!(
            response_id,
            member_id = submission.member_id,
            kind = submission.kind.as_wire(),
            "updating response"
        );

        let url = format!(
            "{}/{}",
            self.items_url(&self.config.responses_collection),
            response_id
        );
        let request = self.with_auth(self.client.patch(url)).json(submission);

        let response = self
            .send(
                request,
                self.config.write_timeout,
                TIMEOUT_UPDATE_MSG,
                CONNECT_MSG,
            )
            .await?;
        let response = Self::ensure_success(response, Some(FORBIDDEN_UPDATE_MSG), |code| {
            format!("Error del servidor: {code}")
        })
        .await?;

        let envelope: ItemEnvelope<RsvpResponse> =
            response.json().await.map_err(GatewayError::Request)?;
        Ok(envelope.data)
    }

    async fn list_members(&self) -> GatewayResult<Vec<Member>> {
        let request = self.with_auth(self.client.get(self.items_url(&self.config.members_collection)));

        let response = self
            .send(
                request,
                self.config.read_timeout,
                TIMEOUT_MEMBERS_MSG,
                CONNECT_MSG,
            )
            .await?;
        let response =
            Self::ensure_success(response, None, |_| "Error al obtener socios".to_string()).await?;

        let envelope: ItemsEnvelope<Member> =
            response.json().await.map_err(GatewayError::Request)?;
        tracing::debug!(count = envelope.data.len(), "members loaded");
        Ok(envelope.data)
    }

    async fn list_responses(&self) -> GatewayResult<Vec<RsvpResponse>> {
        let request = self
            .with_auth(self.client.get(self.items_url(&self.config.responses_collection)));

        let response = self
            .send(
                request,
                self.config.read_timeout,
                TIMEOUT_RESPONSES_MSG,
                CONNECT_MSG,
            )
            .await?;
        let response =
            Self::ensure_success(response, None, |_| "Error al obtener respuestas".to_string())
                .await?;

        let envelope: ItemsEnvelope<RsvpResponse> =
            response.json().await.map_err(GatewayError::Request)?;
        tracing::debug!(count = envelope.data.len(), "responses loaded");
        Ok(envelope.data)
    }

    async fn login(&self, email: &str, password: &str) -> GatewayResult<Option<StaffUser>> {
        tracing::debug!(email, "logging in staff user");

        let request = self
            .client
            .post(format!("{}/auth/login", self.config.base_url))
            .json(&LoginRequest { email, password });

        let response = self
            .send(
                request,
                self.config.read_timeout,
                TIMEOUT_LOGIN_MSG,
                CONNECT_LOGIN_MSG,
            )
            .await?;
        let response =
            Self::ensure_success(response, None, |_| "Credenciales inválidas".to_string()).await?;

        let envelope: LoginEnvelope = response.json().await.map_err(GatewayError::Request)?;
        self.set_token(Some(envelope.data.access_token));
        tracing::debug!("staff login succeeded");
        Ok(envelope.data.user)
    }

    fn logout(&self) {
        self.set_token(None);
        tracing::debug!("staff session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_seeds_the_bearer_slot() {
        let config = GatewayConfig {
            static_token: Some("tok-static".into()),
            ..GatewayConfig::default()
        };
        let gateway = DirectusGateway::new(config);
        assert_eq!(gateway.bearer().as_deref(), Some("tok-static"));

        gateway.set_token(Some("tok-session".into()));
        assert_eq!(gateway.bearer().as_deref(), Some("tok-session"));

        gateway.logout();
        assert_eq!(gateway.bearer(), None);
    }

    #[test]
    fn items_urls_join_base_and_collection() {
        let gateway = DirectusGateway::new(GatewayConfig::default());
        assert_eq!(
            gateway.items_url("matriz"),
            "http://localhost:8055/items/matriz"
        );
    }
}
