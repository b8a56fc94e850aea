//! Attendance statistics for the staff dashboard and the report summary.

use serde::Serialize;

use crate::model::{Member, RsvpKind, RsvpResponse};

/// Aggregate counts over the current data snapshot.
///
/// `no_response` is the historical headcount heuristic: members minus
/// response rows. It skews when a member holds several response rows or a
/// response row has no matching member, and can go negative; the roster join
/// is the reconciled view. Kept signed and uncorrected on purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub confirmed: i64,
    pub delegates: i64,
    pub declined: i64,
    pub no_response: i64,
    pub total_people: i64,
    pub total_extra: i64,
}

/// Single pass over the response rows. Rows whose stored kind is not one of
/// the closed set contribute to no category, but still count as responses
/// for the `no_response` subtraction.
pub fn compute_stats(members: &[Member], responses: &[RsvpResponse]) -> AttendanceStats {
    let mut stats = AttendanceStats::default();

    for response in responses {
        let companions = response.companions_count();
        match response.kind() {
            Some(RsvpKind::Attend) => {
                stats.confirmed += 1;
                stats.total_people += 1 + companions;
                stats.total_extra += companions;
            }
            Some(RsvpKind::Delegate) => {
                stats.delegates += 1;
                stats.total_people += 1 + companions;
                stats.total_extra += companions;
            }
            Some(RsvpKind::Decline) => {
                stats.declined += 1;
            }
            None => {}
        }
    }

    stats.no_response = members.len() as i64 - responses.len() as i64;
    stats
}
