//! USSD screens and input trails

/// One rendered USSD response: screen text plus whether the session
/// continues after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    text: String,
    terminal: bool,
}

impl Screen {
    /// A screen that expects further input
    pub fn con(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminal: false,
        }
    }

    /// A screen that ends the session
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            terminal: true,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render with the gateway's continuation/termination sigil. The sigil
    /// is the only session-control channel the gateway understands.
    pub fn render(&self) -> String {
        if self.terminal {
            format!("END {}", self.text)
        } else {
            format!("CON {}", self.text)
        }
    }
}

/// The full sequence of menu selections for one session.
///
/// The gateway owns session continuity: it appends each new entry to the
/// trail and resupplies the whole thing on every step. Nothing here is
/// cached between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    tokens: Vec<String>,
}

impl Trail {
    /// Parse a raw `*`-delimited trail. An empty string and a single empty
    /// token mean the same thing: just dialed in, no selections yet.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<String> = raw.split('*').map(str::to_string).collect();
        if tokens.len() == 1 && tokens[0].is_empty() {
            return Self { tokens: Vec::new() };
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
