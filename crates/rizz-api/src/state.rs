//! Application state wiring config, backend, and controller together.
//!
//! AppState holds the one conversation this process serves. Both the CLI
//! commands and the HTTP handlers go through it.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use rizz_core::adapter::ConversationAdapter;
use rizz_core::box_backend::{BoxBackend, BoxBackendSession};
use rizz_core::compose::DEFAULT_DESCRIPTION;
use rizz_core::controller::ReplyController;
use rizz_infra::config::{load_config, load_config_file, resolve_config_dir};
use rizz_infra::llm::create_backend;
use rizz_types::config::RizzConfig;

/// The controller pinned to the runtime-selected backend.
pub type ConcreteController = ReplyController<BoxBackendSession>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ConcreteController>,
    pub config: Arc<RizzConfig>,
}

impl AppState {
    /// Load the config, build the backend, and open the conversation.
    pub async fn init(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = load(config_path).await?;
        let backend = create_backend(&config.backend).context("Failed to set up the chat backend")?;
        Self::with_backend(config, &backend)
    }

    /// Open the conversation against an already built backend.
    pub fn with_backend(config: RizzConfig, backend: &BoxBackend) -> anyhow::Result<Self> {
        let description = config
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let adapter = ConversationAdapter::create(backend, description)
            .context("Failed to open a conversation with the backend")?;

        let mut controller = ReplyController::new(adapter);
        if config.request_timeout_secs > 0 {
            controller = controller.with_timeout(Duration::from_secs(config.request_timeout_secs));
        }

        Ok(Self {
            controller: Arc::new(controller),
            config: Arc::new(config),
        })
    }
}

/// Load the config named on the command line, or the default one.
async fn load(config_path: Option<&Path>) -> anyhow::Result<RizzConfig> {
    match config_path {
        Some(path) => Ok(load_config_file(path).await?),
        None => Ok(load_config(&resolve_config_dir()).await),
    }
}
