//! Business logic and backend port definitions for RizzSite.
//!
//! This crate defines the `Backend` / `BackendSession` ports that the
//! infrastructure layer implements, the `ConversationAdapter` that owns one
//! conversation against a backend session, and the reply controller that turns
//! slider/style selections into prompts. It depends only on `rizz-types` --
//! never on `rizz-infra` or any HTTP crate.

pub mod adapter;
pub mod backend;
pub mod box_backend;
pub mod compose;
pub mod controller;
pub mod queue;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
