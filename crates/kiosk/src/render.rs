//! Turns step views into terminal screens. Pure text assembly, no I/O.

use confirma_wizard::views::{
    labels, AccompaniedView, AdditionalView, ConfirmationView, ExistingResponseView,
    InvitationView, SearchView,
};
use confirma_wizard::StepView;

const DIVIDER: &str = "------------------------------------------------------------";

/// One-time heading printed when the kiosk starts.
pub fn header(event_name: &str) -> String {
    format!("{DIVIDER}\n{event_name}\nConfirmación de Asistencia\n{DIVIDER}\n")
}

/// Banner line for a rejected entry or a failed call. The guest stays on the
/// same screen.
pub fn banner(message: &str) -> String {
    format!("[!] {message}\n")
}

/// Render the current step as a full screen ending in a newline; the loop
/// prints the input marker after it.
pub fn screen(view: &StepView) -> String {
    match view {
        StepView::Search(view) => search(view),
        StepView::Invitation(view) => invitation(view),
        StepView::ExistingResponse(view) => existing(view),
        StepView::Accompanied(view) => accompanied(view),
        StepView::Additional(view) => additional(view),
        StepView::Confirmation(view) => confirmation(view),
    }
}

fn search(view: &SearchView) -> String {
    format!("\n{} (o escribe \"salir\")\n", view.prompt)
}

fn invitation(view: &InvitationView) -> String {
    let mut lines = vec![
        String::new(),
        view.greeting.clone(),
        view.welcome.clone(),
        String::new(),
        format!("  {} {}", labels::EVENT_DATE, view.event_date),
        format!("  {} {}", labels::EVENT_TIME, view.event_time),
        format!("  {} {}", labels::EVENT_PLACE, view.event_place),
        format!("  {} {}", labels::EVENT_ADDRESS, view.event_address),
        String::new(),
        view.options_header.clone(),
    ];
    for (index, option) in view.options.iter().enumerate() {
        lines.push(format!("  {}) {}", index + 1, option.label));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn existing(view: &ExistingResponseView) -> String {
    [
        String::new(),
        view.title.clone(),
        view.status_line.clone(),
        String::new(),
        format!("  {} {}", labels::YOUR_RESPONSE, view.response_text),
        format!("  {} {}", labels::COMPANIONS, view.companions),
        format!("  {} {}", labels::TOTAL_PEOPLE, view.total_people),
        format!("  {} {}", labels::CONFIRMED_AT, view.confirmed_text),
        String::new(),
        format!("  1) {}", view.change_action),
        format!("  2) {}", view.reset_action),
        String::new(),
    ]
    .join("\n")
}

fn accompanied(view: &AccompaniedView) -> String {
    [
        String::new(),
        view.question.clone(),
        view.hint.clone(),
        String::new(),
        format!("  s) {}", view.yes_label),
        format!("  n) {}", view.no_label),
        String::new(),
    ]
    .join("\n")
}

fn additional(view: &AdditionalView) -> String {
    [
        String::new(),
        view.title.clone(),
        view.question.clone(),
        format!("Número de 0 a {} (Enter para 0). {}", view.max, view.submit_label),
        String::new(),
    ]
    .join("\n")
}

fn confirmation(view: &ConfirmationView) -> String {
    let mut lines = vec![
        String::new(),
        view.title.clone(),
        view.status_line.clone(),
        String::new(),
        format!("  {} {}", labels::MEMBER, view.member_name),
        format!("  {} {}", labels::NATIONAL_ID, view.national_id),
        format!("  {} {}", labels::RESPONSE, view.response_text),
        format!("  {} {}", labels::COMPANIONS, view.companions),
        format!("  {} {}", labels::TOTAL_PEOPLE, view.total_people),
    ];
    if let Some(people_line) = &view.people_line {
        lines.push(String::new());
        lines.push(format!("  {people_line}"));
    }
    lines.extend([
        String::new(),
        view.reminder.title.clone(),
        format!("  {} {}", labels::EVENT_DATE, view.reminder.date),
        format!("  {} {}", labels::EVENT_TIME, view.reminder.time),
        format!("  {} {}", labels::EVENT_PLACE, view.reminder.place),
        String::new(),
        view.reminder.note.clone(),
        String::new(),
        "Presiona Enter para una nueva consulta".to_string(),
        String::new(),
    ]);
    lines.join("\n")
}
