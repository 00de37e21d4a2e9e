//! Shared domain types for RizzSite.
//!
//! Conversation turns, the reply style palette, slider scales, configuration
//! shapes, and the error enums shared by the core and infrastructure crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod reply;
