//! View models for the wizard screens.
//!
//! Each step renders from one of these structs; they carry all the copy so
//! front ends only lay text out. Builders live here too, next to the words
//! they assemble.

use confirma_core::model::{Member, RsvpKind, RsvpResponse};
use confirma_core::text;
use confirma_core::validation::MAX_COMPANIONS;

use crate::event::EventDetails;

/// Field labels shared by the detail blocks on several screens.
pub mod labels {
    pub const MEMBER: &str = "Socio:";
    pub const NATIONAL_ID: &str = "Cédula:";
    pub const RESPONSE: &str = "Respuesta:";
    pub const YOUR_RESPONSE: &str = "Tu respuesta:";
    pub const COMPANIONS: &str = "Personas adicionales:";
    pub const TOTAL_PEOPLE: &str = "Total de personas:";
    pub const CONFIRMED_AT: &str = "Fecha de confirmación:";
    pub const EVENT_DATE: &str = "Fecha:";
    pub const EVENT_TIME: &str = "Hora:";
    pub const EVENT_PLACE: &str = "Lugar:";
    pub const EVENT_ADDRESS: &str = "Dirección:";
}

// ---------------------------------------------------------------------------
// Step views
// ---------------------------------------------------------------------------

/// What the current step shows. One variant per screen; the invitation slot
/// holds either the options or the guest's previous answer.
#[derive(Debug, Clone, PartialEq)]
pub enum StepView {
    Search(SearchView),
    Invitation(InvitationView),
    ExistingResponse(ExistingResponseView),
    Accompanied(AccompaniedView),
    Additional(AdditionalView),
    Confirmation(ConfirmationView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub prompt: String,
}

impl SearchView {
    pub(crate) fn build() -> Self {
        Self {
            prompt: "Ingresa tu número de cédula".to_string(),
        }
    }
}

/// One response option offered on the invitation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseOption {
    pub kind: RsvpKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvitationView {
    pub greeting: String,
    pub welcome: String,
    pub event_date: String,
    pub event_time: String,
    pub event_place: String,
    pub event_address: String,
    pub options_header: String,
    pub options: Vec<ResponseOption>,
    /// True when the guest asked to change a previous answer.
    pub editing: bool,
}

impl InvitationView {
    pub(crate) fn build(member: &Member, details: &EventDetails, editing: bool) -> Self {
        Self {
            greeting: format!("¡Hola {}!", text::capitalize(&member.name)),
            welcome: "Nos complace invitarte a nuestra inauguración oficial".to_string(),
            event_date: text::capitalize(&details.date),
            event_time: details.time.clone(),
            event_place: details.city.clone(),
            event_address: details.address.clone(),
            options_header: "Por favor, confirma tu asistencia:".to_string(),
            options: RsvpKind::ALL
                .into_iter()
                .map(|kind| ResponseOption {
                    kind,
                    label: kind.full_text(),
                })
                .collect(),
            editing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingResponseView {
    pub title: String,
    pub status_line: String,
    /// Value for [`labels::YOUR_RESPONSE`].
    pub response_text: String,
    pub companions: i64,
    pub total_people: i64,
    /// Value for [`labels::CONFIRMED_AT`].
    pub confirmed_text: String,
    pub change_action: String,
    pub reset_action: String,
}

impl ExistingResponseView {
    pub(crate) fn build(existing: &RsvpResponse) -> Self {
        let past_phrase = match existing.kind() {
            Some(RsvpKind::Attend) => "confirmado tu asistencia",
            Some(RsvpKind::Decline) => "confirmado que no asistirás",
            Some(RsvpKind::Delegate) => "confirmado que enviarás un representante",
            None => "respondido",
        };
        let companions = existing.companions_count();
        Self {
            title: "¡Muchas gracias!".to_string(),
            status_line: format!("Ya has {past_phrase} al evento"),
            response_text: existing
                .kind()
                .map(|kind| kind.full_text().to_string())
                .unwrap_or_else(|| "Sin respuesta".to_string()),
            companions,
            total_people: 1 + companions,
            confirmed_text: existing
                .responded_at()
                .map(|ts| text::format_date_long(&ts))
                .unwrap_or_else(|| "Fecha no disponible".to_string()),
            change_action: "Cambiar mi respuesta".to_string(),
            reset_action: "Nueva consulta".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccompaniedView {
    pub question: String,
    pub hint: String,
    pub yes_label: String,
    pub no_label: String,
}

impl AccompaniedView {
    pub(crate) fn for_attendee() -> Self {
        Self {
            question: "¡Perfecto! ¿Asistirás acompañado?".to_string(),
            hint: "Cuéntanos si vendrás con personas adicionales".to_string(),
            yes_label: "SÍ, vendré acompañado/a".to_string(),
            no_label: "NO, asistiré solo/a".to_string(),
        }
    }

    pub(crate) fn for_delegate() -> Self {
        Self {
            question: "¿Tu representante irá acompañado?".to_string(),
            hint: "Indícanos si tu representante llevará personas adicionales".to_string(),
            yes_label: "SÍ, irá acompañado/a".to_string(),
            no_label: "NO, irá solo/a".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalView {
    pub title: String,
    pub question: String,
    pub submit_label: String,
    pub max: i64,
}

impl AdditionalView {
    pub(crate) fn for_attendee() -> Self {
        Self {
            title: "Acompañantes".to_string(),
            question: "¿Cuántas personas vendrán contigo? (sin incluirte a ti)".to_string(),
            submit_label: "Confirmar Asistencia".to_string(),
            max: MAX_COMPANIONS,
        }
    }

    pub(crate) fn for_delegate() -> Self {
        Self {
            title: "Personas Adicionales".to_string(),
            question: "¿Cuántas personas irán con tu representante? (sin incluir al representante)"
                .to_string(),
            submit_label: "Confirmar Representación".to_string(),
            max: MAX_COMPANIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    pub title: String,
    pub status_line: String,
    pub member_name: String,
    pub national_id: String,
    /// Value for [`labels::RESPONSE`].
    pub response_text: String,
    pub companions: i64,
    pub total_people: i64,
    /// Highlight line summarizing who comes along; absent for a decline.
    pub people_line: Option<String>,
    pub reminder: EventReminder,
}

impl ConfirmationView {
    pub(crate) fn build(
        member: &Member,
        kind: RsvpKind,
        companions: i64,
        updated: bool,
        details: &EventDetails,
    ) -> Self {
        let verb = if updated { "actualizada" } else { "registrada" };
        Self {
            title: if updated {
                "¡Respuesta actualizada exitosamente!".to_string()
            } else {
                "¡Respuesta registrada exitosamente!".to_string()
            },
            status_line: format!("Tu respuesta ha sido {verb} correctamente"),
            member_name: member.name.clone(),
            national_id: member.national_id.clone(),
            response_text: match kind {
                RsvpKind::Attend => "Confirmo mi asistencia".to_string(),
                RsvpKind::Decline => "No podré asistir".to_string(),
                RsvpKind::Delegate => "Enviaré un representante".to_string(),
            },
            companions,
            total_people: 1 + companions,
            people_line: people_line(kind, companions),
            reminder: EventReminder::build(details),
        }
    }
}

/// Closing block reminding the guest of the event logistics.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReminder {
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub note: String,
}

impl EventReminder {
    fn build(details: &EventDetails) -> Self {
        Self {
            title: "Recordatorio del Evento".to_string(),
            date: text::capitalize(&details.date),
            time: details.time.clone(),
            place: details.city.clone(),
            note: "Si necesitas cambiar tu respuesta nuevamente, puedes volver a llenar este formulario usando la misma cédula.".to_string(),
        }
    }
}

fn people_line(kind: RsvpKind, companions: i64) -> Option<String> {
    match kind {
        RsvpKind::Attend => Some(if companions > 0 {
            let noun = if companions == 1 {
                "acompañante"
            } else {
                "acompañantes"
            };
            format!("Asistirás con {companions} {noun}")
        } else {
            "Asistirás solo/a".to_string()
        }),
        RsvpKind::Delegate => Some(if companions > 0 {
            let noun = if companions == 1 {
                "persona adicional"
            } else {
                "personas adicionales"
            };
            format!("Tu representante irá con {companions} {noun}")
        } else {
            "Tu representante irá solo/a".to_string()
        }),
        RsvpKind::Decline => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn member() -> Member {
        Member {
            id: 7,
            name: "MARÍA QUISPE".to_string(),
            national_id: "1714255439".to_string(),
            founder: None,
        }
    }

    // -- invitation --

    #[test]
    fn invitation_greets_with_capitalized_name() {
        let view = InvitationView::build(&member(), &EventDetails::default(), false);
        assert_eq!(view.greeting, "¡Hola María quispe!");
        assert_eq!(view.event_date, "Domingo 31 de agosto");
        assert_eq!(view.event_place, "Machachi");
        assert_eq!(view.options_header, "Por favor, confirma tu asistencia:");
        assert_eq!(view.options.len(), 3);
        assert_eq!(view.options[0].label, "Asistiré al evento");
        assert_eq!(view.options[1].label, "No podré asistir");
        assert_eq!(view.options[2].label, "Enviaré un representante");
    }

    // -- existing response --

    #[test]
    fn existing_response_describes_previous_answer() {
        let existing = RsvpResponse {
            id: 9,
            member_id: 7,
            kind_raw: "ENVIARÁ UN REPRESENTANTE".to_string(),
            companions: Some(2),
            confirmed_at: Some(Utc.with_ymd_and_hms(2025, 8, 20, 14, 0, 0).unwrap()),
            created_at: None,
        };
        let view = ExistingResponseView::build(&existing);
        assert_eq!(view.title, "¡Muchas gracias!");
        assert_eq!(
            view.status_line,
            "Ya has confirmado que enviarás un representante al evento"
        );
        assert_eq!(view.response_text, "Enviaré un representante");
        assert_eq!(view.companions, 2);
        assert_eq!(view.total_people, 3);
        assert_eq!(view.confirmed_text, "20 de agosto de 2025, 14:00");
    }

    #[test]
    fn existing_response_without_dates_shows_placeholder() {
        let existing = RsvpResponse {
            id: 9,
            member_id: 7,
            kind_raw: "tal vez".to_string(),
            companions: None,
            confirmed_at: None,
            created_at: None,
        };
        let view = ExistingResponseView::build(&existing);
        assert_eq!(view.confirmed_text, "Fecha no disponible");
        assert_eq!(view.response_text, "Sin respuesta");
        assert_eq!(view.status_line, "Ya has respondido al evento");
    }

    // -- companion screens --

    #[test]
    fn accompanied_copy_differs_by_context() {
        let attend = AccompaniedView::for_attendee();
        assert_eq!(attend.question, "¡Perfecto! ¿Asistirás acompañado?");
        assert_eq!(attend.yes_label, "SÍ, vendré acompañado/a");

        let delegate = AccompaniedView::for_delegate();
        assert_eq!(delegate.question, "¿Tu representante irá acompañado?");
        assert_eq!(delegate.no_label, "NO, irá solo/a");
    }

    #[test]
    fn additional_copy_differs_by_context() {
        let attend = AdditionalView::for_attendee();
        assert_eq!(attend.title, "Acompañantes");
        assert_eq!(attend.submit_label, "Confirmar Asistencia");

        let delegate = AdditionalView::for_delegate();
        assert_eq!(delegate.title, "Personas Adicionales");
        assert_eq!(delegate.submit_label, "Confirmar Representación");
        assert_eq!(delegate.max, 10);
    }

    // -- confirmation --

    #[test]
    fn confirmation_people_line_handles_singular_and_plural() {
        assert_eq!(
            people_line(RsvpKind::Attend, 1).as_deref(),
            Some("Asistirás con 1 acompañante")
        );
        assert_eq!(
            people_line(RsvpKind::Attend, 4).as_deref(),
            Some("Asistirás con 4 acompañantes")
        );
        assert_eq!(
            people_line(RsvpKind::Attend, 0).as_deref(),
            Some("Asistirás solo/a")
        );
        assert_eq!(
            people_line(RsvpKind::Delegate, 1).as_deref(),
            Some("Tu representante irá con 1 persona adicional")
        );
        assert_eq!(
            people_line(RsvpKind::Delegate, 0).as_deref(),
            Some("Tu representante irá solo/a")
        );
        assert_eq!(people_line(RsvpKind::Decline, 0), None);
    }

    #[test]
    fn confirmation_verb_tracks_create_versus_update() {
        let details = EventDetails::default();

        let created = ConfirmationView::build(&member(), RsvpKind::Attend, 2, false, &details);
        assert_eq!(created.title, "¡Respuesta registrada exitosamente!");
        assert_eq!(
            created.status_line,
            "Tu respuesta ha sido registrada correctamente"
        );
        assert_eq!(created.response_text, "Confirmo mi asistencia");
        assert_eq!(created.total_people, 3);

        let updated = ConfirmationView::build(&member(), RsvpKind::Decline, 0, true, &details);
        assert_eq!(updated.title, "¡Respuesta actualizada exitosamente!");
        assert_eq!(
            updated.status_line,
            "Tu respuesta ha sido actualizada correctamente"
        );
        assert_eq!(updated.people_line, None);
    }

    #[test]
    fn reminder_carries_event_logistics() {
        let reminder = EventReminder::build(&EventDetails::default());
        assert_eq!(reminder.title, "Recordatorio del Evento");
        assert_eq!(reminder.date, "Domingo 31 de agosto");
        assert_eq!(reminder.place, "Machachi");
        assert!(reminder.note.contains("misma cédula"));
    }
}
