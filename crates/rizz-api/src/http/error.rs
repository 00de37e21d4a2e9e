//! Application error type mapping to HTTP status codes and envelope format.

use std::time::Instant;

use axum::response::{IntoResponse, Response};

use rizz_core::controller::{ControllerError, FALLBACK_MESSAGE};

use crate::http::response::{new_request_id, ApiResponse};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Reply generation errors.
    Controller(ControllerError),
    /// Malformed request body or parameter.
    Validation(String),
}

impl From<ControllerError> for AppError {
    fn from(e: ControllerError) -> Self {
        AppError::Controller(e)
    }
}

impl AppError {
    /// Envelope error code and user-facing message.
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Controller(ControllerError::EmptyMessage) => (
                "VALIDATION_ERROR",
                "Paste the message you received first".to_string(),
            ),
            AppError::Controller(ControllerError::Busy) => (
                "BUSY",
                "A reply is already being generated".to_string(),
            ),
            AppError::Controller(ControllerError::Timeout(_)) => {
                ("TIMEOUT", FALLBACK_MESSAGE.to_string())
            }
            AppError::Controller(ControllerError::Backend(_)) => {
                ("BACKEND_ERROR", FALLBACK_MESSAGE.to_string())
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
        }
    }
}

impl AppError {
    /// Render the error envelope, timing the request from `started`.
    pub fn into_response_since(self, started: Instant) -> Response {
        let (code, message) = self.code_and_message();
        let elapsed = started.elapsed().as_millis() as u64;
        ApiResponse::error(code, &message, new_request_id(), elapsed).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_since(Instant::now())
    }
}
