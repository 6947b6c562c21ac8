//! Ping Handler
//!
//! 健康检查，同时确认存储可访问

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub stickers: usize,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let stickers = state
        .sticker_repo
        .find_all()
        .await
        .map_err(|e| ApiError::Internal(format!("Storage unavailable: {}", e)))?
        .len();

    Ok(Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
        stickers,
    }))
}
