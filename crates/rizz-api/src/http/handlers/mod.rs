//! HTTP request handlers.

pub mod history;
pub mod page;
pub mod reply;
pub mod styles;
