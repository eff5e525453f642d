//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use leadagent_app::config::Settings;
use leadagent_app::process::process_message;
use leadagent_app::services::{AnalysisService, LeadService, SendService};
use leadagent_app::signals;
use leadagent_app::{AppState, ConfiguredServices, Message, ServiceSet};
use leadagent_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a shutdown signal arrives
pub async fn run(settings: Settings, services: ConfiguredServices) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting Lead Agent (service: {}, analysis: {}, leads: {}, send: {})",
        settings.service.base_url,
        settings.analysis.backend,
        settings.leads.backend,
        settings.send.backend
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel: service completions and signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    if let Err(ref e) = result {
        error!("TUI loop exited with error: {}", e);
    }
    info!("Lead Agent stopped");
    // A loop error outranks a restore error
    result.and(restored)
}

/// Drain background messages, draw, then wait up to one poll interval for
/// terminal input.
fn run_loop<A, L, S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &ServiceSet<A, L, S>,
) -> Result<()>
where
    A: AnalysisService + Sync + 'static,
    L: LeadService + Sync + 'static,
    S: SendService + Sync + 'static,
{
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
