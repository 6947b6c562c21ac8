//! Data Transfer Objects

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::{CreateSticker, StickerDetails, UpdateSticker};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 仅包含状态码的响应体：`{"status": <code>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: u16,
}

impl StatusBody {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
        }
    }
}

/// 以 `status` 作为 HTTP 状态码，并在响应体中回显该状态码
pub fn status_only(status: StatusCode) -> Response {
    (status, Json(StatusBody::new(status))).into_response()
}

/// JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

// ============================================================================
// Sticker DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateStickerRequest {
    pub name: String,
}

impl From<CreateStickerRequest> for CreateSticker {
    fn from(req: CreateStickerRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStickerRequest {
    pub id: i64,
    pub name: String,
}

impl From<UpdateStickerRequest> for UpdateSticker {
    fn from(req: UpdateStickerRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerResponse {
    pub id: i64,
    pub name: String,
}

impl From<StickerDetails> for StickerResponse {
    fn from(details: StickerDetails) -> Self {
        Self {
            id: details.id,
            name: details.name,
        }
    }
}
