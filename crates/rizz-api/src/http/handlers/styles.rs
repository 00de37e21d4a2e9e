//! GET /api/v1/styles - The style grid, in display order.

use axum::Json;
use serde::Serialize;

use rizz_types::reply::ReplyStyle;

use crate::http::response::{new_request_id, ApiResponse};

#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub label: &'static str,
    pub hint: &'static str,
    pub default: bool,
}

pub fn style_infos() -> Vec<StyleInfo> {
    ReplyStyle::ALL
        .into_iter()
        .map(|style| StyleInfo {
            label: style.label(),
            hint: style.hint(),
            default: style == ReplyStyle::default(),
        })
        .collect()
}

pub async fn list_styles() -> Json<ApiResponse<Vec<StyleInfo>>> {
    Json(ApiResponse::success(style_infos(), new_request_id(), 0))
}
