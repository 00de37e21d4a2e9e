//! Mock backends shared by the unit tests in this crate.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use rizz_types::chat::Role;
use rizz_types::error::{BackendError, RequestFailure};

use crate::backend::{Backend, BackendSession};

/// What a mock session saw, shared with the test after the adapter takes
/// ownership of the session.
#[derive(Clone, Default)]
pub struct CallLog {
    descriptions: Arc<Mutex<Vec<String>>>,
    messages: Arc<Mutex<Vec<(Role, String)>>>,
    modes: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn descriptions(&self) -> Vec<String> {
        self.descriptions.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<(Role, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn modes(&self) -> Vec<String> {
        self.modes.lock().unwrap().clone()
    }
}

/// Hands out sessions that answer from a fixed script.
pub struct ScriptedBackend {
    script: Vec<Result<String, RequestFailure>>,
    construction_error: Option<String>,
    log: CallLog,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Result<String, RequestFailure>>) -> Self {
        Self {
            script,
            construction_error: None,
            log: CallLog::default(),
        }
    }

    pub fn replying<const N: usize>(replies: [&str; N]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn failing_construction(message: &str) -> Self {
        Self {
            construction_error: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl Backend for ScriptedBackend {
    type Session = ScriptedSession;

    fn name(&self) -> &str {
        "scripted"
    }

    fn create(&self, description: &str) -> Result<Self::Session, BackendError> {
        if let Some(message) = &self.construction_error {
            return Err(BackendError::construction(message.clone()));
        }
        self.log
            .descriptions
            .lock()
            .unwrap()
            .push(description.to_string());
        Ok(ScriptedSession {
            script: Mutex::new(self.script.clone().into()),
            log: self.log.clone(),
        })
    }
}

pub struct ScriptedSession {
    script: Mutex<VecDeque<Result<String, RequestFailure>>>,
    log: CallLog,
}

impl BackendSession for ScriptedSession {
    fn add_message(&self, role: Role, text: &str) {
        self.log
            .messages
            .lock()
            .unwrap()
            .push((role, text.to_string()));
    }

    fn get_response(
        &self,
        mode: &str,
    ) -> impl Future<Output = Result<String, BackendError>> + Send {
        self.log.modes.lock().unwrap().push(mode.to_string());
        let next = self.script.lock().unwrap().pop_front();
        async move {
            match next {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(failure)) => Err(BackendError::Request(failure)),
                None => Err(BackendError::Request(RequestFailure::EmptyResponse)),
            }
        }
    }
}

/// A session whose replies are released one by one by the test through
/// oneshot senders, so completion order can be forced.
pub struct GatedSession {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<String, RequestFailure>>>>,
}

impl GatedSession {
    /// Build a session with `n` gates. Request `i` waits on sender `i`.
    pub fn with_gates(n: usize) -> (Self, Vec<oneshot::Sender<Result<String, RequestFailure>>>) {
        let mut senders = Vec::with_capacity(n);
        let mut receivers = VecDeque::with_capacity(n);
        for _ in 0..n {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        (
            Self {
                gates: Mutex::new(receivers),
            },
            senders,
        )
    }
}

impl BackendSession for GatedSession {
    fn add_message(&self, _role: Role, _text: &str) {}

    fn get_response(
        &self,
        _mode: &str,
    ) -> impl Future<Output = Result<String, BackendError>> + Send {
        let gate = self.gates.lock().unwrap().pop_front();
        async move {
            let gate = gate.ok_or(RequestFailure::EmptyResponse)?;
            let released = gate
                .await
                .map_err(|_| RequestFailure::Network("gate dropped".to_string()))?;
            Ok::<_, BackendError>(released?)
        }
    }
}

/// Hands out a pre-built session exactly once.
pub struct SingleSessionBackend<S>(pub Mutex<Option<S>>);

impl<S> SingleSessionBackend<S> {
    pub fn new(session: S) -> Self {
        Self(Mutex::new(Some(session)))
    }
}

impl<S: BackendSession> Backend for SingleSessionBackend<S> {
    type Session = S;

    fn name(&self) -> &str {
        "single"
    }

    fn create(&self, _description: &str) -> Result<S, BackendError> {
        self.0
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| BackendError::construction("session already taken"))
    }
}
