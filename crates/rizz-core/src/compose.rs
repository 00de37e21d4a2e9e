//! Prompt composition for reply requests.
//!
//! The slider and style selections are interpolated into the prompt text; the
//! adapter and backend only ever see the finished string.

use rizz_types::reply::{ReplyRequest, Scale};

/// Behavior description handed to the backend when the config has none.
pub const DEFAULT_DESCRIPTION: &str = "You help people answer messages they received while texting \
someone they are talking to or dating. Every request gives you the received message, an interest \
level from 1 to 10, a tone level from 1 to 10, and a response style. Write exactly one reply the \
user can send as-is: short, natural, in the same language as the received message, no hashtags, \
no quotation marks around it, and no explanation before or after it.";

/// Build the prompt for one reply request.
pub fn compose_prompt(request: &ReplyRequest) -> String {
    format!(
        "Message I received:\n\"{message}\"\n\n\
         Interest level: {interest}/10 ({interest_hint})\n\
         Tone level: {tone}/10 ({tone_hint})\n\
         Response style: {style} ({style_hint})\n\n\
         Write my reply.",
        message = request.message.trim(),
        interest = request.interest,
        interest_hint = interest_hint(request.interest),
        tone = request.tone,
        tone_hint = tone_hint(request.tone),
        style = request.style,
        style_hint = request.style.hint(),
    )
}

fn interest_hint(interest: Scale) -> &'static str {
    match interest.get() {
        1..=3 => "barely interested",
        4..=7 => "somewhat interested",
        _ => "very interested",
    }
}

fn tone_hint(tone: Scale) -> &'static str {
    match tone.get() {
        1..=3 => "laid-back",
        4..=7 => "balanced",
        _ => "intense",
    }
}
