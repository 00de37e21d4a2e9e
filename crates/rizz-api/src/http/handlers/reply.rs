//! Reply endpoints.
//!
//! POST /api/v1/reply  - Generate a reply for a received message.
//! GET  /api/v1/status - What the reply area should currently show.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use rizz_core::controller::ReplyStatus;
use rizz_types::reply::{ReplyRequest, ReplyStyle, Scale};

use crate::http::error::AppError;
use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReplyData {
    pub reply: String,
    pub style: ReplyStyle,
    pub interest: Scale,
    pub tone: Scale,
}

#[derive(Debug, Serialize)]
pub struct StatusData {
    pub loading: bool,
    pub status: ReplyStatus,
}

/// POST /api/v1/reply - Generate one reply.
///
/// The slider values and style default to 5/5/NEUTRAL when omitted. A body
/// that does not parse (unknown style, scale outside 1..=10) is a 400, not
/// axum's default 422, so the page only has one validation path to handle.
pub async fn create_reply(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ReplyData>>, Response> {
    let start = Instant::now();
    let Json(request) = payload
        .map_err(|e| AppError::Validation(e.body_text()).into_response_since(start))?;

    let reply = state
        .controller
        .generate(&request)
        .await
        .map_err(|e| AppError::from(e).into_response_since(start))?;

    let data = ReplyData {
        reply,
        style: request.style,
        interest: request.interest,
        tone: request.tone,
    };
    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(data, new_request_id(), elapsed)))
}

/// GET /api/v1/status - Loading flag and last outcome.
pub async fn get_status(State(state): State<AppState>) -> Json<ApiResponse<StatusData>> {
    let data = StatusData {
        loading: state.controller.is_loading(),
        status: state.controller.status(),
    };
    Json(ApiResponse::success(data, new_request_id(), 0))
}
