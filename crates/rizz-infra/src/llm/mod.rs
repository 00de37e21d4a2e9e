//! Backend implementations.
//!
//! Contains the concrete implementation of the [`Backend`] port defined in
//! `rizz-core`, plus a factory ([`create_backend`]) that builds the right
//! backend from a [`BackendConfig`].
//!
//! [`Backend`]: rizz_core::backend::Backend

pub mod openai_compat;

use secrecy::SecretString;

use rizz_core::box_backend::BoxBackend;
use rizz_types::config::BackendConfig;
use rizz_types::error::BackendError;

use self::openai_compat::config::{self as oai_config, OpenAiCompatConfig};
use self::openai_compat::OpenAiCompatBackend;

/// Create a [`BoxBackend`] from a [`BackendConfig`], reading the API key from
/// the environment variable the config names.
///
/// # Errors
///
/// [`BackendError::Construction`] when the variable is unset or empty, or when
/// the provider is neither a known preset nor given a `base_url`.
pub fn create_backend(config: &BackendConfig) -> Result<BoxBackend, BackendError> {
    let api_key = std::env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .map(SecretString::from);
    create_backend_with_key(config, api_key)
}

/// Same as [`create_backend`] with an already resolved API key.
pub fn create_backend_with_key(
    config: &BackendConfig,
    api_key: Option<SecretString>,
) -> Result<BoxBackend, BackendError> {
    let oai = resolve_config(config, api_key)?;
    tracing::info!(
        provider = %oai.provider_name,
        base_url = %oai.base_url,
        model = %oai.model,
        "Using chat completions backend"
    );
    Ok(BoxBackend::new(OpenAiCompatBackend::new(oai)))
}

fn resolve_config(
    config: &BackendConfig,
    api_key: Option<SecretString>,
) -> Result<OpenAiCompatConfig, BackendError> {
    let key = api_key.ok_or_else(|| {
        BackendError::construction(format!(
            "no API key: set the {} environment variable",
            config.api_key_env
        ))
    })?;

    // An explicit base_url wins over the preset
    let base_url = match config.base_url.as_deref() {
        Some(url) => url,
        None => oai_config::preset_base_url(&config.provider).ok_or_else(|| {
            BackendError::construction(format!(
                "unknown provider '{}': set backend.base_url",
                config.provider
            ))
        })?,
    };

    Ok(
        oai_config::custom(&config.provider, base_url, key, &config.model)
            .with_sampling(config.max_tokens, config.temperature),
    )
}
