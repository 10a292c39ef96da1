//! Context-bounded reply pipeline
//!
//! Answers one inbound SMS end to end: read the student's history, build the
//! tutor prompt, generate, shape, record, dispatch. Collaborator failures
//! degrade to fixed reply text; the caller always gets some text back.

use crate::conversation::ConversationStore;
use crate::gateway::SmsSender;
use crate::llm::LlmService;
use crate::{prompt, shaper};
use std::sync::Arc;

/// Substituted when generation fails or produces nothing
pub const GENERATION_FALLBACK: &str =
    "Sorry, I'm having trouble processing your question right now. Please try again later.";

pub struct ReplyPipeline {
    store: Arc<ConversationStore>,
    llm: Arc<dyn LlmService>,
    messenger: Arc<dyn SmsSender>,
    sender_id: String,
}

impl ReplyPipeline {
    pub fn new(
        store: Arc<ConversationStore>,
        llm: Arc<dyn LlmService>,
        messenger: Arc<dyn SmsSender>,
        sender_id: String,
    ) -> Self {
        Self {
            store,
            llm,
            messenger,
            sender_id,
        }
    }

    /// Produce, record and dispatch the reply for one inbound message.
    ///
    /// The exchange is appended to history whichever branch produced the
    /// final text, so fallback replies are part of later context too.
    /// Dispatch is a single best-effort attempt; its failure is logged and
    /// does not change the returned text.
    pub async fn respond(&self, identity: &str, incoming: &str) -> String {
        let history = self.store.history(identity);
        let prompt = prompt::build_prompt(&history, incoming);

        let reply = match self.llm.generate(&prompt).await {
            Ok(text) if !text.is_empty() => shaper::shape(&text),
            Ok(_) => {
                tracing::warn!(identity = %identity, "Generation returned empty text");
                GENERATION_FALLBACK.to_string()
            }
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "Generation failed");
                GENERATION_FALLBACK.to_string()
            }
        };

        self.store.append(identity, incoming, &reply);

        match self
            .messenger
            .send(&reply, &[identity.to_string()], &self.sender_id)
            .await
        {
            Ok(receipt) => {
                tracing::info!(
                    identity = %identity,
                    accepted = receipt.accepted,
                    "Reply dispatched"
                );
            }
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "Reply dispatch failed");
            }
        }

        reply
    }
}
