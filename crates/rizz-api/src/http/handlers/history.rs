//! GET /api/v1/history - The conversation so far.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use rizz_types::chat::Turn;

use crate::http::response::{new_request_id, ApiResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryData {
    pub turns: Vec<Turn>,
    /// User turns whose request failed or timed out.
    pub unanswered: usize,
}

pub async fn get_history(State(state): State<AppState>) -> Json<ApiResponse<HistoryData>> {
    let data = HistoryData {
        turns: state.controller.history(),
        unanswered: state.controller.unanswered_count(),
    };
    Json(ApiResponse::success(data, new_request_id(), 0))
}
