//! Line-driven loop for the public terminal: read an entry, advance the
//! wizard, print the next screen.

use confirma_core::error::CoreError;
use confirma_core::model::RsvpKind;
use confirma_gateway::RsvpBackend;
use confirma_wizard::{StepView, WizardError, WizardFlow};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::render;

const PROMPT: &str = "> ";

/// What the entry means on the current screen.
enum Input {
    Search,
    Kind(RsvpKind),
    Change,
    Reset,
    Accompanied(bool),
    Companions,
    BadChoice(&'static str),
}

/// Drive the wizard until the guest types `salir` or the input ends. Errors
/// print as a banner and keep the guest on the same screen.
pub async fn run<B, R, W>(mut flow: WizardFlow<B>, input: R, mut output: W) -> std::io::Result<()>
where
    B: RsvpBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output
        .write_all(render::screen(flow.view()).as_bytes())
        .await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("salir") {
            break;
        }

        match dispatch(&mut flow, entry).await {
            Ok(()) => {
                output
                    .write_all(render::screen(flow.view()).as_bytes())
                    .await?;
            }
            Err(err) => {
                output
                    .write_all(render::banner(&err.to_string()).as_bytes())
                    .await?;
            }
        }
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
    }

    Ok(())
}

/// Map the entry to a flow call. The view borrow ends before the call.
async fn dispatch<B: RsvpBackend>(
    flow: &mut WizardFlow<B>,
    entry: &str,
) -> Result<(), WizardError> {
    let input = match flow.view() {
        StepView::Search(_) => Input::Search,
        StepView::Invitation(view) => entry
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| view.options.get(i))
            .map(|option| Input::Kind(option.kind))
            .unwrap_or(Input::BadChoice("Opción no válida. Elige 1, 2 o 3.")),
        StepView::ExistingResponse(_) => match entry {
            "1" => Input::Change,
            "2" => Input::Reset,
            _ => Input::BadChoice("Opción no válida. Elige 1 o 2."),
        },
        StepView::Accompanied(_) => match entry.to_lowercase().as_str() {
            "s" | "si" | "sí" => Input::Accompanied(true),
            "n" | "no" => Input::Accompanied(false),
            _ => Input::BadChoice("Responde s o n."),
        },
        StepView::Additional(_) => Input::Companions,
        StepView::Confirmation(_) => Input::Reset,
    };

    match input {
        Input::Search => flow.submit_national_id(entry).await,
        Input::Kind(kind) => flow.select_kind(kind).await,
        Input::Change => flow.change_response(),
        Input::Reset => {
            flow.start_over();
            Ok(())
        }
        Input::Accompanied(accompanied) => flow.set_accompanied(accompanied).await,
        Input::Companions => flow.submit_companions(entry).await,
        Input::BadChoice(message) => Err(WizardError::Validation(CoreError::Validation(
            message.to_string(),
        ))),
    }
}
