//! Command loop for the staff terminal: login, the live snapshot, and the
//! dashboard commands.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use confirma_core::report::ExportFormat;
use confirma_core::roster::{KindFilter, RosterFilter};
use confirma_dashboard::{export, refresh, state, AdminSession};
use confirma_gateway::RsvpBackend;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::render;

const PROMPT: &str = "> ";

/// Drive a staff session end to end: prompt for credentials, load the data,
/// keep it fresh in the background, and answer commands until `salir`.
pub async fn run<B, R, W>(
    backend: Arc<B>,
    every: Duration,
    export_dir: PathBuf,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    B: RsvpBackend + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    // Failed logins print their banner and prompt again.
    let session = loop {
        output.write_all("Correo: ".as_bytes()).await?;
        output.flush().await?;
        let Some(email) = lines.next_line().await? else {
            return Ok(());
        };

        output.write_all("Contraseña: ".as_bytes()).await?;
        output.flush().await?;
        let Some(password) = lines.next_line().await? else {
            return Ok(());
        };

        match AdminSession::login(backend.as_ref(), &email, &password).await {
            Ok(session) => break session,
            Err(err) => {
                output
                    .write_all(render::banner(&err.to_string()).as_bytes())
                    .await?;
            }
        }
    };

    output
        .write_all(format!("\nBienvenido, {}\n", session.display_name()).as_bytes())
        .await?;

    let state = state::shared();
    let outcome = refresh::refresh_once(backend.as_ref(), &state).await;
    for message in outcome.errors() {
        output.write_all(render::banner(message).as_bytes()).await?;
    }

    let cancel = CancellationToken::new();
    let refresher = tokio::spawn(refresh::run(
        Arc::clone(&backend),
        state.clone(),
        every,
        cancel.clone(),
    ));

    output.write_all(render::usage().as_bytes()).await?;

    let mut filter = RosterFilter::default();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let entry = line.trim();

        let (command, arg) = match entry.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (entry, ""),
        };

        match command {
            "" => {}
            "stats" => {
                let board = render::stats_board(&state.read().await.stats());
                output.write_all(board.as_bytes()).await?;
            }
            "tabla" => {
                let rows = filter.apply(&state.read().await.roster());
                output.write_all(render::table(&rows).as_bytes()).await?;
            }
            "filtro" => match parse_filter(arg) {
                Ok(kind) => {
                    filter.kind = kind;
                    let rows = filter.apply(&state.read().await.roster());
                    output.write_all(render::table(&rows).as_bytes()).await?;
                }
                Err(message) => {
                    output.write_all(render::banner(&message).as_bytes()).await?;
                }
            },
            "buscar" => {
                filter.search = match arg {
                    "" | "-" => None,
                    text => Some(text.to_string()),
                };
                let rows = filter.apply(&state.read().await.roster());
                output.write_all(render::table(&rows).as_bytes()).await?;
            }
            "recargar" => {
                let outcome = refresh::refresh_once(backend.as_ref(), &state).await;
                if outcome.fully_loaded() {
                    output.write_all("Datos actualizados.\n".as_bytes()).await?;
                } else {
                    for message in outcome.errors() {
                        output.write_all(render::banner(message).as_bytes()).await?;
                    }
                }
            }
            "exportar" => match ExportFormat::from_arg(arg) {
                Ok(format) => match export::export_report(&state, format, &export_dir).await {
                    Ok(path) => {
                        output
                            .write_all(
                                format!("Reporte escrito en {}\n", path.display()).as_bytes(),
                            )
                            .await?;
                    }
                    Err(err) => {
                        output
                            .write_all(render::banner(&err.to_string()).as_bytes())
                            .await?;
                    }
                },
                Err(err) => {
                    output
                        .write_all(render::banner(&err.to_string()).as_bytes())
                        .await?;
                }
            },
            "salir" => break,
            _ => output.write_all(render::usage().as_bytes()).await?,
        }
    }

    cancel.cancel();
    refresher.await.ok();
    session.logout(backend.as_ref());

    Ok(())
}

/// `filtro` argument: a stored literal, the no-response sentinel, or `-` to
/// clear the filter.
fn parse_filter(arg: &str) -> Result<Option<KindFilter>, String> {
    match arg {
        "" | "-" => Ok(None),
        value => KindFilter::from_wire(value)
            .map(Some)
            .map_err(|e| e.to_string()),
    }
}
