//! HTTP layer for RizzSite.
//!
//! Serves the single-page reply form at `/` and a small JSON API at
//! `/api/v1/` using the envelope response format.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
