//! Application State
//!
//! 所有 handler 共享的应用状态，请求之间不保存可变数据

use std::sync::Arc;

use crate::application::{StickerRepositoryPort, StickerService};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub sticker_repo: Arc<dyn StickerRepositoryPort>,

    // ========== Services ==========
    pub sticker_service: StickerService,

    /// 当前使用的存储后端名称（供健康检查展示）
    pub storage: &'static str,
}

impl AppState {
    /// 创建应用状态
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>, storage: &'static str) -> Self {
        Self {
            sticker_repo: sticker_repo.clone(),
            sticker_service: StickerService::new(sticker_repo),
            storage,
        }
    }
}
