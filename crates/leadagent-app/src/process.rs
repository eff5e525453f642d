//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::{AnalysisService, LeadService, SendService, ServiceSet};
use crate::state::AppState;

/// Process a message through the TEA update function, following any chain
/// of follow-up messages and spawning the actions they request.
pub fn process_message<A, L, S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &ServiceSet<A, L, S>,
) where
    A: AnalysisService + Sync + 'static,
    L: LeadService + Sync + 'static,
    S: SendService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
