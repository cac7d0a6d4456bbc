//! The conversational support companion.
//!
//! One long-lived conversation per session, seeded with the fixed persona.
//! `reply` is total: a failed send resolves to a canned gentle apology
//! rather than an application error, and is never retried.

use crate::model::{ChatRole, ChatTurn, GenerativeModel};
use crate::prompts;
use solace_core::{ChatMessage, Speaker};

pub const FALLBACK_REPLY: &str = "I'm having a little trouble connecting right now, \
but I'm still here with you. Maybe take one slow breath, and we can try again in a moment.";

fn to_turns(transcript: &[ChatMessage]) -> Vec<ChatTurn> {
    transcript
        .iter()
        .map(|message| ChatTurn {
            role: match message.speaker {
                Speaker::User => ChatRole::User,
                Speaker::Assistant => ChatRole::Assistant,
            },
            text: message.text.clone(),
        })
        .collect()
}

/// Send one user message on top of the prior transcript and return the
/// assistant's reply text.
pub async fn reply(
    model: &dyn GenerativeModel,
    transcript: &[ChatMessage],
    text: &str,
) -> String {
    let history = to_turns(transcript);
    match model
        .chat(prompts::COMPANION_PERSONA, &history, text)
        .await
    {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("companion chat failed, using canned reply: {e}");
            FALLBACK_REPLY.to_string()
        }
    }
}
