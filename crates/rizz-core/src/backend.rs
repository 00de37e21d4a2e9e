//! Backend port definitions.
//!
//! The conversational service behind RizzSite is opaque. All the core may
//! assume is the capability set below: create a session bound to a behavior
//! description, append role-tagged messages to that session's memory, and ask
//! for a generated reply.
//!
//! Implementations live in rizz-infra (e.g., `OpenAiCompatBackend`).

use std::future::Future;

use rizz_types::chat::Role;
use rizz_types::error::BackendError;

/// Factory for backend sessions.
pub trait Backend: Send + Sync {
    type Session: BackendSession;

    /// Human-readable backend name (e.g., "openai", "mistral").
    fn name(&self) -> &str;

    /// Create a session whose behavior is fixed by `description` for its
    /// whole lifetime.
    fn create(&self, description: &str) -> Result<Self::Session, BackendError>;
}

/// One conversation held by the backend.
///
/// Methods take `&self` so that overlapping requests are possible; sessions
/// that keep memory guard it themselves.
pub trait BackendSession: Send + Sync {
    /// Record a turn into the backend's own memory. Fire-and-forget.
    fn add_message(&self, role: Role, text: &str);

    /// Request a generated reply. `mode` is an opaque selector the caller
    /// passes through unchanged.
    fn get_response(
        &self,
        mode: &str,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}
