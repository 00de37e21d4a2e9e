//! ConversationAdapter -- one conversation against one backend session.
//!
//! The adapter owns both the backend session and the local turn history.
//! `submit` records the user turn, asks the backend for exactly one reply,
//! records the assistant turn, and hands the reply back untouched.
//!
//! There is no mutual exclusion across the backend round-trip: overlapping
//! `submit` calls append their user turns in call order, but assistant turns
//! land in completion order. Callers that need coherent pairs serialize with
//! [`crate::queue::SerialSubmitter`].

use std::sync::{Mutex, PoisonError};

use rizz_types::chat::Turn;
use rizz_types::error::BackendError;

use crate::backend::{Backend, BackendSession};
use crate::session::Session;

/// Mode selector passed to every `get_response` call.
pub const RESPONSE_MODE: &str = "text";

/// Owns one conversation with a backend.
pub struct ConversationAdapter<S> {
    description: String,
    backend: S,
    // Never held across an await.
    session: Mutex<Session>,
}

impl<S: BackendSession> ConversationAdapter<S> {
    /// Create the backend session for `description` and wrap it.
    ///
    /// The description is handed to the backend once and stays fixed for the
    /// adapter's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Construction`] (or whatever the backend
    /// reports) when the session cannot be created. No adapter exists then;
    /// build a new one.
    pub fn create<B>(backend: &B, description: impl Into<String>) -> Result<Self, BackendError>
    where
        B: Backend<Session = S>,
    {
        let description = description.into();
        let session = backend.create(&description)?;
        Ok(Self {
            description,
            backend: session,
            session: Mutex::new(Session::new()),
        })
    }

    /// Submit a prompt and wait for the generated reply.
    ///
    /// The user turn is appended before the request goes out and is kept even
    /// when the request fails. The assistant turn is appended only after the
    /// backend actually returned.
    ///
    /// # Errors
    ///
    /// Propagates the backend's error unchanged. No retry.
    pub async fn submit(&self, prompt: impl Into<String>) -> Result<String, BackendError> {
        let prompt = prompt.into();

        self.record(Turn::user(prompt));

        let reply = self.backend.get_response(RESPONSE_MODE).await?;

        self.record(Turn::assistant(reply.clone()));

        Ok(reply)
    }

    /// Append `turn` locally and forward it to the backend under one lock, so
    /// both histories see overlapping calls in the same order.
    fn record(&self, turn: Turn) {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        self.backend.add_message(turn.role, &turn.text);
        session.push(turn);
    }
}

impl<S> ConversationAdapter<S> {
    /// The behavior description this adapter was built with.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Snapshot of the turn history.
    pub fn turns(&self) -> Vec<Turn> {
        self.with_session(|session| session.turns().to_vec())
    }

    pub fn turn_count(&self) -> usize {
        self.with_session(Session::len)
    }

    /// User turns still waiting for (or abandoned by) an assistant turn.
    pub fn unanswered_count(&self) -> usize {
        self.with_session(Session::unanswered_count)
    }

    fn with_session<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }
}
