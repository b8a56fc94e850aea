//! Drives the terminal loop over scripted input and a captured output
//! buffer.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use confirma_core::model::{Member, RsvpResponse, RsvpSubmission};
use confirma_core::types::DbId;
use confirma_core::validation::IdRules;
use confirma_gateway::wire::StaffUser;
use confirma_gateway::{GatewayResult, RsvpBackend};
use confirma_kiosk::repl;
use confirma_wizard::{EventDetails, WizardFlow};
use tokio::io::BufReader;

// ---------------------------------------------------------------------------
// Scripted backend
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeState {
    member: Option<Member>,
    existing: Option<RsvpResponse>,
    created: Vec<RsvpSubmission>,
    updated: Vec<(DbId, RsvpSubmission)>,
}

#[derive(Clone, Default)]
struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    fn with_member(member: Member) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().member = Some(member);
        fake
    }

    fn set_existing(&self, existing: RsvpResponse) {
        self.state.lock().unwrap().existing = Some(existing);
    }

    fn created(&self) -> Vec<RsvpSubmission> {
        self.state.lock().unwrap().created.clone()
    }

    fn updated(&self) -> Vec<(DbId, RsvpSubmission)> {
        self.state.lock().unwrap().updated.clone()
    }
}

#[async_trait]
impl RsvpBackend for FakeBackend {
    async fn find_member_by_national_id(&self, national_id: &str) -> GatewayResult<Option<Member>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .member
            .clone()
            .filter(|m| m.national_id == national_id))
    }

    async fn existing_response(&self, member_id: DbId) -> Option<RsvpResponse> {
        self.state
            .lock()
            .unwrap()
            .existing
            .clone()
            .filter(|r| r.member_id == member_id)
    }

    async fn create_response(&self, submission: &RsvpSubmission) -> GatewayResult<RsvpResponse> {
        let mut state = self.state.lock().unwrap();
        state.created.push(submission.clone());
        Ok(RsvpResponse {
            id: 100 + state.created.len() as DbId,
            member_id: submission.member_id,
            kind_raw: submission.kind.as_wire().to_string(),
            companions: Some(submission.companions),
            confirmed_at: Some(submission.confirmed_at),
            created_at: None,
        })
    }

    async fn update_response(
        &self,
        response_id: DbId,
        submission: &RsvpSubmission,
    ) -> GatewayResult<RsvpResponse> {
        let mut state = self.state.lock().unwrap();
        state.updated.push((response_id, submission.clone()));
        Ok(RsvpResponse {
            id: response_id,
            member_id: submission.member_id,
            kind_raw: submission.kind.as_wire().to_string(),
            companions: Some(submission.companions),
            confirmed_at: Some(submission.confirmed_at),
            created_at: None,
        })
    }

    async fn list_members(&self) -> GatewayResult<Vec<Member>> {
        Ok(Vec::new())
    }

    async fn list_responses(&self) -> GatewayResult<Vec<RsvpResponse>> {
        Ok(Vec::new())
    }

    async fn login(&self, _email: &str, _password: &str) -> GatewayResult<Option<StaffUser>> {
        Ok(None)
    }

    fn logout(&self) {}
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn maria() -> Member {
    Member {
        id: 7,
        name: "MARÍA QUISPE".to_string(),
        national_id: "1714255439".to_string(),
        founder: Some("SI".to_string()),
    }
}

async fn run_script(backend: FakeBackend, script: &str) -> String {
    let flow = WizardFlow::new(backend, IdRules::default(), EventDetails::default());
    let mut output = std::io::Cursor::new(Vec::new());
    repl::run(flow, BufReader::new(script.as_bytes()), &mut output)
        .await
        .expect("terminal loop");
    String::from_utf8(output.into_inner()).expect("utf-8 output")
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// Full attend walk: search, option 1, accompanied, count, confirmation,
/// then Enter starts a new lookup.
#[tokio::test]
async fn attend_walk_prints_every_screen() {
    let backend = FakeBackend::with_member(maria());
    let text = run_script(backend.clone(), "1714255439\n1\ns\n2\n\nsalir\n").await;

    assert!(text.contains("Ingresa tu número de cédula"));
    assert!(text.contains("¡Hola María quispe!"));
    assert!(text.contains("1) Asistiré al evento"));
    assert!(text.contains("¡Perfecto! ¿Asistirás acompañado?"));
    assert!(text.contains("¿Cuántas personas vendrán contigo? (sin incluirte a ti)"));
    assert!(text.contains("¡Respuesta registrada exitosamente!"));
    assert!(text.contains("Asistirás con 2 acompañantes"));

    // The trailing empty line resets the wizard to the search screen.
    assert!(text.matches("Ingresa tu número de cédula").count() >= 2);

    let created = backend.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].companions, 2);
}

/// Rejected entries print a banner and keep the guest on the same screen.
#[tokio::test]
async fn rejected_entries_print_banners() {
    let backend = FakeBackend::with_member(maria());
    let text = run_script(backend.clone(), "123\n0999999999\nsalir\n").await;

    assert!(text.contains("[!] La cédula debe tener entre 10 y 11 dígitos"));
    assert!(text.contains(
        "[!] No se encontró ningún socio con esa cédula. Verifica que el número sea correcto."
    ));
    assert!(backend.created().is_empty());
}

/// A menu entry outside 1..=3 never reaches the backend.
#[tokio::test]
async fn bad_menu_choice_keeps_the_invitation() {
    let backend = FakeBackend::with_member(maria());
    let text = run_script(backend.clone(), "1714255439\n7\n2\nsalir\n").await;

    assert!(text.contains("[!] Opción no válida. Elige 1, 2 o 3."));
    assert!(text.contains("¡Respuesta registrada exitosamente!"));

    let created = backend.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].kind.as_wire(), "NO ASISTIRÁ");
}

/// A stored answer surfaces first; option 1 unlocks the invitation and the
/// new choice patches the same row.
#[tokio::test]
async fn stored_answer_offers_the_change_path() {
    let backend = FakeBackend::with_member(maria());
    backend.set_existing(RsvpResponse {
        id: 42,
        member_id: 7,
        kind_raw: "ASISTIRÁ".to_string(),
        companions: Some(1),
        confirmed_at: None,
        created_at: None,
    });

    let text = run_script(backend.clone(), "1714255439\n1\n3\nn\nsalir\n").await;

    assert!(text.contains("Ya has confirmado tu asistencia al evento"));
    assert!(text.contains("1) Cambiar mi respuesta"));
    assert!(text.contains("¡Respuesta actualizada exitosamente!"));

    let updated = backend.updated();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, 42);
    assert_eq!(updated[0].1.kind.as_wire(), "ENVIARÁ UN REPRESENTANTE");
    assert!(backend.created().is_empty());
}
