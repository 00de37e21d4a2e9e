//! The append-only turn history of one conversation.

use rizz_types::chat::{Role, Turn};

/// Ordered, append-only sequence of turns.
///
/// Only the owning adapter appends; everyone else sees shared references or
/// snapshots. Turns are never reordered, edited, or removed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    turns: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of user turns that never got an assistant turn back.
    ///
    /// Failed round-trips leave their user turn behind. With overlapping
    /// requests the pairing is by count, not by position.
    pub fn unanswered_count(&self) -> usize {
        let users = self.turns.iter().filter(|t| t.role == Role::User).count();
        let assistants = self.len() - users;
        users.saturating_sub(assistants)
    }
}
