//! Reconciled roster: one row per member with their resolved response, plus
//! the filters the staff dashboard applies to it.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{Member, RsvpKind, RsvpResponse, NO_RESPONSE_CATEGORY, NO_RESPONSE_LABEL, NO_RESPONSE_WIRE};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Roster rows
// ---------------------------------------------------------------------------

/// One member joined with their response, if any. `kind` is `None` both for
/// silent members and for rows whose stored literal is outside the closed
/// set; `has_response` distinguishes the two for the people projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub member_id: DbId,
    pub name: String,
    pub national_id: String,
    pub founder: Option<String>,
    pub kind: Option<RsvpKind>,
    pub has_response: bool,
    pub companions: i64,
    pub total_people: i64,
    pub responded_at: Option<Timestamp>,
}

impl RosterRow {
    /// Display label for the resolved response.
    pub fn label(&self) -> &'static str {
        self.kind.map(|kind| kind.label()).unwrap_or(NO_RESPONSE_LABEL)
    }

    /// Presentation category slug for the resolved response.
    pub fn category(&self) -> &'static str {
        self.kind
            .map(|kind| kind.category())
            .unwrap_or(NO_RESPONSE_CATEGORY)
    }

    /// Founder label with the backend's null folded to empty.
    pub fn founder_label(&self) -> &str {
        self.founder.as_deref().unwrap_or("")
    }
}

/// Join members with responses, keyed by member id. When a member holds
/// several response rows the last seen wins. Members project `1 + companions`
/// people once any response row exists, zero otherwise.
pub fn build_roster(members: &[Member], responses: &[RsvpResponse]) -> Vec<RosterRow> {
    let mut by_member: HashMap<DbId, &RsvpResponse> = HashMap::new();
    for response in responses {
        by_member.insert(response.member_id, response);
    }

    members
        .iter()
        .map(|member| {
            let response = by_member.get(&member.id).copied();
            let companions = response.map(RsvpResponse::companions_count).unwrap_or(0);
            RosterRow {
                member_id: member.id,
                name: member.name.clone(),
                national_id: member.national_id.clone(),
                founder: member.founder.clone(),
                kind: response.and_then(RsvpResponse::kind),
                has_response: response.is_some(),
                companions,
                total_people: if response.is_some() { 1 + companions } else { 0 },
                responded_at: response.and_then(RsvpResponse::responded_at),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Exact-match filter over the resolved response kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Kind(RsvpKind),
    NoResponse,
}

impl KindFilter {
    /// Parse a filter value: one of the stored literals or the no-response
    /// sentinel.
    pub fn from_wire(s: &str) -> Result<Self, CoreError> {
        if s == NO_RESPONSE_WIRE {
            return Ok(Self::NoResponse);
        }
        RsvpKind::from_wire(s)
            .map(Self::Kind)
            .ok_or_else(|| CoreError::Validation(format!("Filtro desconocido: {s}")))
    }

    fn matches(&self, row: &RosterRow) -> bool {
        match self {
            Self::Kind(kind) => row.kind == Some(*kind),
            Self::NoResponse => row.kind.is_none(),
        }
    }
}

/// Dashboard filters. Kind and search compose with AND; the search term
/// matches the name case-insensitively and the id as a plain substring.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    pub kind: Option<KindFilter>,
    pub search: Option<String>,
}

impl RosterFilter {
    pub fn apply(&self, rows: &[RosterRow]) -> Vec<RosterRow> {
        let query = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        rows.iter()
            .filter(|row| {
                self.kind.map(|kind| kind.matches(row)).unwrap_or(true)
                    && query
                        .as_deref()
                        .map(|q| {
                            row.name.to_lowercase().contains(q) || row.national_id.contains(q)
                        })
                        .unwrap_or(true)
            })
            .cloned()
            .collect()
    }
}
