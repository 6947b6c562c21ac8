//! HTTP Routes
//!
//! API Endpoints:
//! - /ping              GET     健康检查
//! - /stickers          GET     列出所有贴纸
//! - /stickers          POST    创建贴纸
//! - /stickers          PUT     更新贴纸（id 在请求体中）
//! - /stickers/:id      GET     获取贴纸详情
//! - /stickers/:id      DELETE  删除贴纸
//!
//! `/stickers/`（缺少 id）同样注册了 GET / DELETE，由 handler 返回 400

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(sticker_routes())
}

/// Sticker 路由
fn sticker_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stickers",
            get(handlers::list_stickers)
                .post(handlers::create_sticker)
                .put(handlers::update_sticker),
        )
        .route(
            "/stickers/",
            get(handlers::get_sticker).delete(handlers::delete_sticker),
        )
        .route(
            "/stickers/:id",
            get(handlers::get_sticker).delete(handlers::delete_sticker),
        )
}
