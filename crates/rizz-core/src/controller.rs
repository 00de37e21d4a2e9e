//! Reply controller -- the state behind the reply form.
//!
//! Takes a [`ReplyRequest`] from whichever surface the user is on (CLI or
//! web page), composes the prompt, submits it, and keeps the transient state
//! the surface renders: loading flag, last reply, or the fallback message
//! after a failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use rizz_types::chat::Turn;
use rizz_types::error::BackendError;
use rizz_types::reply::ReplyRequest;

use crate::adapter::ConversationAdapter;
use crate::backend::BackendSession;
use crate::compose::compose_prompt;
use crate::queue::SerialSubmitter;

/// Shown to the user whenever a reply could not be generated.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong while generating a reply. Please try again.";

/// What the reply area should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum ReplyStatus {
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a reply is already being generated")]
    Busy,

    #[error("reply timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub struct ReplyController<S> {
    submitter: SerialSubmitter<S>,
    in_flight: AtomicBool,
    status: Mutex<ReplyStatus>,
    timeout: Option<Duration>,
}

/// Clears the in-flight flag when the request ends. A request dropped before
/// it settled (client went away, task aborted) leaves the fallback message
/// instead of a stale `Loading`.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
    status: &'a Mutex<ReplyStatus>,
    settled: bool,
}

impl InFlightGuard<'_> {
    fn settle(mut self, status: ReplyStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.status.lock().unwrap_or_else(PoisonError::into_inner) =
                ReplyStatus::Failed(FALLBACK_MESSAGE.to_string());
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

impl<S: BackendSession> ReplyController<S> {
    pub fn new(adapter: ConversationAdapter<S>) -> Self {
        Self {
            submitter: SerialSubmitter::new(adapter),
            in_flight: AtomicBool::new(false),
            status: Mutex::new(ReplyStatus::Idle),
            timeout: None,
        }
    }

    /// Give up on a reply after `timeout`. The abandoned user turn stays in
    /// the history.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Generate a reply for `request`.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::EmptyMessage`] for a blank message; nothing is sent.
    /// - [`ControllerError::Busy`] while another reply is in flight.
    /// - [`ControllerError::Timeout`] when the configured timeout elapses.
    /// - [`ControllerError::Backend`] when the round-trip fails.
    pub async fn generate(&self, request: &ReplyRequest) -> Result<String, ControllerError> {
        if request.message.trim().is_empty() {
            return Err(ControllerError::EmptyMessage);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Reply requested while another is in flight");
            return Err(ControllerError::Busy);
        }
        let guard = InFlightGuard {
            in_flight: &self.in_flight,
            status: &self.status,
            settled: false,
        };

        self.set_status(ReplyStatus::Loading);
        let prompt = compose_prompt(request);
        let started = Instant::now();

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.submitter.submit(prompt)).await {
                Ok(result) => result.map_err(ControllerError::from),
                Err(_) => Err(ControllerError::Timeout(limit)),
            },
            None => self.submitter.submit(prompt).await.map_err(ControllerError::from),
        };

        match &result {
            Ok(reply) => {
                tracing::info!(
                    style = %request.style,
                    interest = %request.interest,
                    tone = %request.tone,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    reply_chars = reply.chars().count(),
                    "Reply generated"
                );
                guard.settle(ReplyStatus::Ready(reply.clone()));
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Reply generation failed"
                );
                guard.settle(ReplyStatus::Failed(FALLBACK_MESSAGE.to_string()));
            }
        }

        result
    }

    pub fn history(&self) -> Vec<Turn> {
        self.submitter.adapter().turns()
    }

    /// Requests that failed or timed out and left their user turn behind.
    pub fn unanswered_count(&self) -> usize {
        self.submitter.adapter().unanswered_count()
    }

    pub fn description(&self) -> &str {
        self.submitter.adapter().description()
    }
}

impl<S> ReplyController<S> {
    pub fn status(&self) -> ReplyStatus {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn set_status(&self, status: ReplyStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
    }
}
