//! Configuration types and per-provider presets for OpenAI-compatible providers.
//!
//! Each provider that speaks the OpenAI chat completions protocol gets a
//! factory function returning an [`OpenAiCompatConfig`] with the correct base
//! URL and reply-sized sampling defaults.

use secrecy::SecretString;

/// Token ceiling for one reply. Replies are text messages, not essays.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Sampling temperature for replies.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Configuration for an OpenAI-compatible chat completions endpoint.
///
/// Used to construct an [`super::OpenAiCompatBackend`]. Does not derive
/// Debug so the API key never ends up in a log line.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "mistral").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl OpenAiCompatConfig {
    /// Replace the sampling defaults.
    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

/// Base URL of a known provider preset.
pub fn preset_base_url(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some("https://api.openai.com/v1"),
        "gemini" => Some("https://generativelanguage.googleapis.com/v1beta/openai"),
        "mistral" => Some("https://api.mistral.ai/v1"),
        "openrouter" => Some("https://openrouter.ai/api/v1"),
        _ => None,
    }
}

/// Build a configuration for an arbitrary endpoint.
pub fn custom(provider_name: &str, base_url: &str, api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: provider_name.into(),
        base_url: base_url.into(),
        api_key,
        model: model.into(),
        max_tokens: DEFAULT_MAX_TOKENS,
        temperature: DEFAULT_TEMPERATURE,
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    custom("openai", "https://api.openai.com/v1", api_key, model)
}

/// Google Gemini default configuration (OpenAI-compatible beta endpoint).
///
/// Base URL: `https://generativelanguage.googleapis.com/v1beta/openai`
pub fn gemini_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    custom(
        "gemini",
        "https://generativelanguage.googleapis.com/v1beta/openai",
        api_key,
        model,
    )
}

/// Mistral AI default configuration.
///
/// Base URL: `https://api.mistral.ai/v1`
pub fn mistral_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    custom("mistral", "https://api.mistral.ai/v1", api_key, model)
}

/// OpenRouter default configuration.
///
/// Base URL: `https://openrouter.ai/api/v1`
pub fn openrouter_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    custom("openrouter", "https://openrouter.ai/api/v1", api_key, model)
}
