//! Tutor prompt construction
//!
//! Builds the single-shot generation prompt: a fixed tutor persona, the
//! student's stored transcript, then the incoming question.

use crate::conversation::Exchange;
use std::fmt::Write;

/// Persona instruction sent ahead of every generation request
pub const TUTOR_PROMPT: &str = r"You are an educational SMS chatbot assistant. Your role is to:
1. Help students with homework and study questions
2. Explain concepts in simple, clear language suitable for SMS
3. Provide educational resources and tips
4. Keep responses concise (under 160 characters when possible) due to SMS limitations
5. Be encouraging and supportive
6. If asked non-educational questions, politely redirect to educational topics
7. You can understand and respond in Swahili if the user speaks to you in Swahili, to support users in East African countries.

Always be helpful, patient, and educational in your responses.";

/// Render stored history as role-prefixed lines, oldest first.
pub fn render_transcript(history: &[Exchange]) -> String {
    let mut transcript = String::new();
    for exchange in history {
        let _ = writeln!(transcript, "{}: {}", exchange.role, exchange.content);
    }
    transcript
}

/// Assemble the full generation prompt for one incoming question.
pub fn build_prompt(history: &[Exchange], incoming: &str) -> String {
    let transcript = render_transcript(history);
    format!(
        "{TUTOR_PROMPT}\n\nConversation history:\n{transcript}\nStudent: {incoming}\n\nEducational Assistant:"
    )
}
