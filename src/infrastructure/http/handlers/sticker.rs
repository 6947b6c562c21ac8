//! Sticker HTTP Handlers
//!
//! 每个 handler 的形态相同：取得输入 → 调用一次 StickerService → 交给 [`respond`] 选择响应。

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateSticker, UpdateSticker};
use crate::infrastructure::http::dto::{
    json_response, status_only, CreateStickerRequest, StickerResponse, UpdateStickerRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::respond::respond;
use crate::infrastructure::http::state::AppState;

/// 请求体解析失败时降级为 `None`，不作为错误抛出
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Option<T> {
    match payload {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Request body rejected");
            None
        }
    }
}

/// 路径中的 id 缺失或不是整数时直接 400
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(format!("Invalid sticker id: {}", rejection)))
}

/// 获取贴纸列表
///
/// 列表为空时同样返回 200，只是响应体为 `{"status":200}`
pub async fn list_stickers(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let stickers: Vec<StickerResponse> = state
        .sticker_service
        .get_all()
        .await?
        .into_iter()
        .map(StickerResponse::from)
        .collect();

    Ok(respond(
        || !stickers.is_empty(),
        || json_response(StatusCode::OK, &stickers),
        || status_only(StatusCode::OK),
    ))
}

/// 创建贴纸
pub async fn create_sticker(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateStickerRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let command = parse_body(payload).map(CreateSticker::from);

    let sticker = state
        .sticker_service
        .create(command)
        .await?
        .map(StickerResponse::from);

    Ok(respond(
        || sticker.is_some(),
        || json_response(StatusCode::CREATED, &sticker),
        || status_only(StatusCode::BAD_REQUEST),
    ))
}

/// 获取贴纸详情
pub async fn get_sticker(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(id)?;

    let sticker = state
        .sticker_service
        .get_by_id(id)
        .await?
        .map(StickerResponse::from);

    Ok(respond(
        || sticker.is_some(),
        || json_response(StatusCode::OK, &sticker),
        || status_only(StatusCode::BAD_REQUEST),
    ))
}

/// 更新贴纸（id 在请求体中）
pub async fn update_sticker(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateStickerRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let command = parse_body(payload).map(UpdateSticker::from);

    let sticker = state
        .sticker_service
        .update(command)
        .await?
        .map(StickerResponse::from);

    Ok(respond(
        || sticker.is_some(),
        || json_response(StatusCode::OK, &sticker),
        || status_only(StatusCode::BAD_REQUEST),
    ))
}

/// 删除贴纸
pub async fn delete_sticker(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(id)?;

    let deleted = state.sticker_service.delete_by_id(id).await?;

    Ok(respond(
        || deleted,
        || status_only(StatusCode::NO_CONTENT),
        || status_only(StatusCode::BAD_REQUEST),
    ))
}
