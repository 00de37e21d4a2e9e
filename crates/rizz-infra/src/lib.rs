//! Infrastructure layer for RizzSite.
//!
//! Contains the implementations of the backend ports defined in `rizz-core`
//! (an OpenAI-compatible chat completions client) and the `config.toml`
//! loader.

pub mod config;
pub mod llm;
