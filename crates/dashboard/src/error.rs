//! Error type for the dashboard layer. Every `Display` is the Spanish banner
//! text the staff terminal prints.

use confirma_core::error::CoreError;
use confirma_gateway::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(#[from] CoreError),

    /// The backend gateway failed. Its message is already user-facing.
    #[error("{0}")]
    Backend(#[from] GatewayError),

    /// The exported report could not be written to disk.
    #[error("No se pudo escribir el reporte: {0}")]
    Export(#[from] std::io::Error),
}
