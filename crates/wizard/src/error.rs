//! Wizard failure taxonomy. Every variant renders the banner message the
//! guest sees; transitions leave the flow on its current step when they fail.

use confirma_core::error::CoreError;
use confirma_gateway::GatewayError;

use crate::flow::WizardStep;

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(#[from] CoreError),

    #[error("No se encontró ningún socio con esa cédula. Verifica que el número sea correcto.")]
    MemberNotFound,

    #[error("{0}")]
    Backend(#[from] GatewayError),

    /// The action fired from a step that does not offer it.
    #[error("Acción '{action}' no disponible en el paso '{}'", .step.as_str())]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },
}
