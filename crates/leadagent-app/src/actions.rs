//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every spawned call reports back with exactly one completion message,
//! whatever the outcome, so the handler that marked its trigger busy always
//! sees the matching release.

use std::sync::Arc;

use tokio::sync::mpsc;

use leadagent_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::services::{AnalysisService, LeadService, SendService, ServiceSet};

/// Execute an action by spawning a background task
pub fn handle_action<A, L, S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &ServiceSet<A, L, S>,
) where
    A: AnalysisService + Sync + 'static,
    L: LeadService + Sync + 'static,
    S: SendService + Sync + 'static,
{
    match action {
        UpdateAction::Analyze { description } => {
            let service = Arc::clone(&services.analysis);
            tokio::spawn(async move {
                let msg = match service.analyze(&description).await {
                    Ok(result) => Message::AnalysisCompleted { result },
                    Err(error) => Message::AnalysisFailed { error },
                };
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::GenerateLeads { criteria } => {
            let service = Arc::clone(&services.leads);
            tokio::spawn(async move {
                let msg = match service.generate(&criteria).await {
                    Ok(batch) => Message::LeadsGenerated { batch },
                    Err(error) => Message::LeadGenerationFailed { error },
                };
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::SendSequence { draft } => {
            let service = Arc::clone(&services.send);
            tokio::spawn(async move {
                let msg = match service.send(&draft).await {
                    Ok(receipt) if receipt.success => Message::DraftSent { receipt },
                    Ok(receipt) => Message::DraftSendFailed {
                        error: ServiceError::rejected(None, Some(receipt.message)),
                    },
                    Err(error) => Message::DraftSendFailed { error },
                };
                report(&msg_tx, msg).await;
            });
        }
    }
}

async fn report(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed; dropping service completion");
    }
}
