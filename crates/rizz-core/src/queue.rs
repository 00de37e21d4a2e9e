//! Single-slot request queue in front of a [`ConversationAdapter`].
//!
//! Each `submit` waits until the previous one finished before it issues its
//! own, so the history is always user/assistant pairs in call order. The
//! adapter itself stays lock-free across the round-trip; ordering is this
//! wrapper's job.

use tokio::sync::Mutex;

use rizz_types::error::BackendError;

use crate::adapter::ConversationAdapter;
use crate::backend::BackendSession;

pub struct SerialSubmitter<S> {
    adapter: ConversationAdapter<S>,
    slot: Mutex<()>,
}

impl<S: BackendSession> SerialSubmitter<S> {
    pub fn new(adapter: ConversationAdapter<S>) -> Self {
        Self {
            adapter,
            slot: Mutex::new(()),
        }
    }

    /// Submit after every earlier submission has completed.
    ///
    /// Waiters are served in FIFO order.
    pub async fn submit(&self, prompt: impl Into<String>) -> Result<String, BackendError> {
        let _slot = self.slot.lock().await;
        self.adapter.submit(prompt).await
    }

    /// Whether a submission currently holds the slot.
    pub fn is_busy(&self) -> bool {
        self.slot.try_lock().is_err()
    }

    pub fn adapter(&self) -> &ConversationAdapter<S> {
        &self.adapter
    }
}
