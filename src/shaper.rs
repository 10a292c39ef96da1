//! SMS reply shaping
//!
//! Generated replies are shaped for single-message SMS delivery before they
//! leave the process: bounded to 300 characters with a continuation hint, or
//! replaced with a fixed fallback when generation produced nothing usable.

/// Longest reply sent as-is, counted in characters (not bytes)
pub const MAX_REPLY_CHARS: usize = 300;

/// Appended after a truncated reply so the student knows more exists
pub const CONTINUATION_SUFFIX: &str = "... (reply 'more' for continuation)";

/// Substituted when the raw reply is empty
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm having trouble generating a response. Please try again.";

/// Shape a raw generated reply into SMS-ready text.
///
/// Empty input yields the fixed fallback. Input over [`MAX_REPLY_CHARS`]
/// characters is cut at the cap and marked with [`CONTINUATION_SUFFIX`].
/// Everything else passes through with surrounding whitespace trimmed.
pub fn shape(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_REPLY_FALLBACK.to_string();
    }

    if raw.chars().count() > MAX_REPLY_CHARS {
        let mut shaped: String = raw.chars().take(MAX_REPLY_CHARS).collect();
        shaped.push_str(CONTINUATION_SUFFIX);
        return shaped;
    }

    raw.trim().to_string()
}
