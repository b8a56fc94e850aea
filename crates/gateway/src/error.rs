//! Error taxonomy for the backend gateway. Every variant's `Display` is the
//! user-facing message the front ends show as a banner.

/// Classification of a gateway failure, for branching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    Timeout,
    Connect,
    Forbidden,
    Backend,
    Request,
}

/// Errors from the backend gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The deadline elapsed before the backend answered.
    #[error("{0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("{0}")]
    Connect(String),

    /// The backend rejected the request with HTTP 403.
    #[error("{0}")]
    Forbidden(String),

    /// The backend answered with any other non-success status. `message` is
    /// the backend's own error message when one could be extracted.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Residual transport failures (TLS, malformed response body, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl GatewayError {
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            Self::Timeout(_) => GatewayErrorKind::Timeout,
            Self::Connect(_) => GatewayErrorKind::Connect,
            Self::Forbidden(_) => GatewayErrorKind::Forbidden,
            Self::Backend { .. } => GatewayErrorKind::Backend,
            Self::Request(_) => GatewayErrorKind::Request,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
