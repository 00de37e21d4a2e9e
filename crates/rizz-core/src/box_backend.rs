//! BoxBackend / BoxBackendSession -- object-safe wrappers for runtime backend
//! selection.
//!
//! Same blanket-impl pattern as the rest of the ports:
//! 1. Define object-safe `*Dyn` traits with boxed futures
//! 2. Blanket-impl them for every concrete `Backend` / `BackendSession`
//! 3. The `Box*` types wrap the trait objects and implement the ports again,
//!    so generic code (the adapter) accepts them unchanged.

use std::future::Future;
use std::pin::Pin;

use rizz_types::chat::Role;
use rizz_types::error::BackendError;

use super::backend::{Backend, BackendSession};

/// Object-safe version of [`BackendSession`] with a boxed future.
pub trait BackendSessionDyn: Send + Sync {
    fn add_message_dyn(&self, role: Role, text: &str);

    fn get_response_boxed<'a>(
        &'a self,
        mode: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, BackendError>> + Send + 'a>>;
}

impl<T: BackendSession> BackendSessionDyn for T {
    fn add_message_dyn(&self, role: Role, text: &str) {
        BackendSession::add_message(self, role, text)
    }

    fn get_response_boxed<'a>(
        &'a self,
        mode: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, BackendError>> + Send + 'a>> {
        Box::pin(self.get_response(mode))
    }
}

/// Type-erased backend session.
pub struct BoxBackendSession {
    inner: Box<dyn BackendSessionDyn>,
}

impl BoxBackendSession {
    pub fn new<T: BackendSession + 'static>(session: T) -> Self {
        Self {
            inner: Box::new(session),
        }
    }
}

impl BackendSession for BoxBackendSession {
    fn add_message(&self, role: Role, text: &str) {
        self.inner.add_message_dyn(role, text)
    }

    async fn get_response(&self, mode: &str) -> Result<String, BackendError> {
        self.inner.get_response_boxed(mode).await
    }
}

/// Object-safe version of [`Backend`] producing boxed sessions.
pub trait BackendDyn: Send + Sync {
    fn name_dyn(&self) -> &str;

    fn create_boxed(&self, description: &str) -> Result<BoxBackendSession, BackendError>;
}

impl<T> BackendDyn for T
where
    T: Backend,
    T::Session: 'static,
{
    fn name_dyn(&self) -> &str {
        Backend::name(self)
    }

    fn create_boxed(&self, description: &str) -> Result<BoxBackendSession, BackendError> {
        self.create(description).map(BoxBackendSession::new)
    }
}

/// Type-erased backend factory.
///
/// Lets the binary pick a concrete backend from configuration at runtime
/// while the adapter stays generic over [`BackendSession`].
pub struct BoxBackend {
    inner: Box<dyn BackendDyn>,
}

impl BoxBackend {
    pub fn new<T>(backend: T) -> Self
    where
        T: Backend + 'static,
        T::Session: 'static,
    {
        Self {
            inner: Box::new(backend),
        }
    }
}

impl Backend for BoxBackend {
    type Session = BoxBackendSession;

    fn name(&self) -> &str {
        self.inner.name_dyn()
    }

    fn create(&self, description: &str) -> Result<Self::Session, BackendError> {
        self.inner.create_boxed(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_boxed_backend_delegates() {
        let scripted = ScriptedBackend::replying(["boxed reply"]);
        let log = scripted.log();
        let backend = BoxBackend::new(scripted);
        assert_eq!(backend.name(), "scripted");

        let session = backend.create("be brief").unwrap();
        session.add_message(Role::User, "hello");
        let reply = session.get_response("text").await.unwrap();

        assert_eq!(reply, "boxed reply");
        assert_eq!(log.messages(), vec![(Role::User, "hello".to_string())]);
        assert_eq!(log.descriptions(), vec!["be brief".to_string()]);
    }

    #[tokio::test]
    async fn test_boxed_session_drives_adapter() {
        let backend = BoxBackend::new(ScriptedBackend::replying(["through the box"]));
        let adapter = crate::adapter::ConversationAdapter::create(&backend, "d").unwrap();

        let reply = adapter.submit("hi").await.unwrap();

        assert_eq!(reply, "through the box");
        assert_eq!(adapter.turn_count(), 2);
    }

    #[test]
    fn test_boxed_backend_construction_failure() {
        let backend = BoxBackend::new(ScriptedBackend::failing_construction("no key"));
        let err = backend.create("anything").err().unwrap();
        assert!(matches!(err, BackendError::Construction { .. }));
    }
}
