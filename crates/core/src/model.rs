//! Domain model for the attendance campaign: cooperative members, their RSVP
//! responses, the submission payload, and the closed set of response kinds
//! the backend stores.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Response kinds
// ---------------------------------------------------------------------------

/// Wire value used when a member has no resolvable response.
pub const NO_RESPONSE_WIRE: &str = "SIN_RESPUESTA";

/// Display label used when a member has no resolvable response.
pub const NO_RESPONSE_LABEL: &str = "Sin Respuesta";

/// Presentation category used when a member has no resolvable response.
pub const NO_RESPONSE_CATEGORY: &str = "sin-respuesta";

/// The three response kinds the backend accepts. The set is closed; any other
/// stored string resolves to no kind and displays as [`NO_RESPONSE_LABEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpKind {
    #[serde(rename = "ASISTIRÁ")]
    Attend,
    #[serde(rename = "NO ASISTIRÁ")]
    Decline,
    #[serde(rename = "ENVIARÁ UN REPRESENTANTE")]
    Delegate,
}

impl RsvpKind {
    /// All kinds, in the order the public flow offers them.
    pub const ALL: [RsvpKind; 3] = [RsvpKind::Attend, RsvpKind::Decline, RsvpKind::Delegate];

    /// Convert to the exact literal the backend stores.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Attend => "ASISTIRÁ",
            Self::Decline => "NO ASISTIRÁ",
            Self::Delegate => "ENVIARÁ UN REPRESENTANTE",
        }
    }

    /// Parse a stored literal. Exact, case-sensitive match; anything else is
    /// `None` and is treated as no response downstream.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "ASISTIRÁ" => Some(Self::Attend),
            "NO ASISTIRÁ" => Some(Self::Decline),
            "ENVIARÁ UN REPRESENTANTE" => Some(Self::Delegate),
            _ => None,
        }
    }

    /// Short label shown in the roster and the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attend => "Asistirá",
            Self::Decline => "No Asistirá",
            Self::Delegate => "Enviará Representante",
        }
    }

    /// First-person phrase shown in the public flow.
    pub fn full_text(&self) -> &'static str {
        match self {
            Self::Attend => "Asistiré al evento",
            Self::Decline => "No podré asistir",
            Self::Delegate => "Enviaré un representante",
        }
    }

    /// Presentation category slug for status styling.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Attend => "asistira",
            Self::Decline => "no-asistira",
            Self::Delegate => "representante",
        }
    }
}

// ---------------------------------------------------------------------------
// Backend rows
// ---------------------------------------------------------------------------

/// A row of the members collection. `national_id` stays a string; leading
/// zeros are significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "idsocio")]
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "fundador", default)]
    pub founder: Option<String>,
}

/// A row of the responses collection. `kind_raw` keeps whatever string the
/// backend holds; [`RsvpResponse::kind`] resolves it lazily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub id: DbId,
    #[serde(rename = "idsocio")]
    pub member_id: DbId,
    #[serde(rename = "respuesta")]
    pub kind_raw: String,
    #[serde(rename = "adicionales", default)]
    pub companions: Option<i64>,
    #[serde(rename = "fechaconfirmacion", default)]
    pub confirmed_at: Option<Timestamp>,
    #[serde(rename = "date_created", default)]
    pub created_at: Option<Timestamp>,
}

impl RsvpResponse {
    /// Resolve the stored literal to a kind, if it is one of the closed set.
    pub fn kind(&self) -> Option<RsvpKind> {
        RsvpKind::from_wire(&self.kind_raw)
    }

    /// Companion count with the backend's null folded to zero.
    pub fn companions_count(&self) -> i64 {
        self.companions.unwrap_or(0)
    }

    /// Confirmation timestamp, falling back to the row creation timestamp.
    pub fn responded_at(&self) -> Option<Timestamp> {
        self.confirmed_at.or(self.created_at)
    }
}

/// Payload written when a member confirms or changes a response.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpSubmission {
    #[serde(rename = "idsocio")]
    pub member_id: DbId,
    #[serde(rename = "respuesta")]
    pub kind: RsvpKind,
    #[serde(rename = "adicionales")]
    pub companions: i64,
    #[serde(rename = "fechaconfirmacion")]
    pub confirmed_at: Timestamp,
}
