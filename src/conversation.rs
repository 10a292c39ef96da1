//! Per-student conversation memory
//!
//! Keeps a bounded, in-memory history of question/answer exchanges keyed by
//! phone number. Histories live for the process lifetime only; there is no
//! persistence and no deletion path.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Hard cap on stored exchanges per student (10 question/answer pairs)
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Who produced an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Student,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => f.write_str("Student"),
            Role::Assistant => f.write_str("Assistant"),
        }
    }
}

/// One stored message in a student's history
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// In-memory conversation store keyed by phone number.
///
/// Each history is guarded by its own lock so concurrent messages from the
/// same student serialize against each other while different students never
/// contend. The outer map lock is held only long enough to find or create
/// the per-student slot, never across an append.
///
/// Instances are owned by whoever constructs them and passed down explicitly,
/// so tests get isolated stores for free.
pub struct ConversationStore {
    histories: RwLock<HashMap<String, Arc<Mutex<Vec<Exchange>>>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of a student's history, oldest exchange first.
    ///
    /// Unknown identities return an empty vec without creating an entry, so
    /// lookups never grow the map.
    pub fn history(&self, identity: &str) -> Vec<Exchange> {
        let histories = self.histories.read().unwrap();
        match histories.get(identity) {
            Some(slot) => slot.lock().unwrap().clone(),
            None => Vec::new(),
        }
    }

    /// Append one question/answer pair, then evict oldest entries beyond the
    /// cap. The student exchange is recorded before the assistant exchange so
    /// chronological order survives replay into a prompt.
    pub fn append(&self, identity: &str, student_text: &str, assistant_text: &str) {
        let slot = self.slot(identity);
        let mut history = slot.lock().unwrap();

        history.push(Exchange {
            role: Role::Student,
            content: student_text.to_string(),
            timestamp: Utc::now(),
        });
        history.push(Exchange {
            role: Role::Assistant,
            content: assistant_text.to_string(),
            timestamp: Utc::now(),
        });

        if history.len() > MAX_HISTORY_ENTRIES {
            let excess = history.len() - MAX_HISTORY_ENTRIES;
            history.drain(..excess);
        }
    }

    /// Find or lazily create the per-student slot.
    fn slot(&self, identity: &str) -> Arc<Mutex<Vec<Exchange>>> {
        {
            let histories = self.histories.read().unwrap();
            if let Some(slot) = histories.get(identity) {
                return slot.clone();
            }
        }
        let mut histories = self.histories.write().unwrap();
        histories
            .entry(identity.to_string())
            .or_default()
            .clone()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
