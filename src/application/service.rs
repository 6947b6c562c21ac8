//! Sticker Service - 用例门面
//!
//! 将 Sticker 的五个 Command/Query Handler 组合为一个服务对象，
//! 供 HTTP 层直接调用。输入为 `None`（请求体解析失败）时不触达仓储，
//! 直接按"无结果"返回，使调用方的分支逻辑与"未找到"一致。

use std::sync::Arc;

use crate::application::commands::handlers::{
    CreateStickerHandler, DeleteStickerHandler, UpdateStickerHandler,
};
use crate::application::commands::{CreateSticker, DeleteSticker, UpdateSticker};
use crate::application::error::ApplicationError;
use crate::application::ports::StickerRepositoryPort;
use crate::application::queries::handlers::{
    GetStickerHandler, ListStickersHandler, StickerDetails,
};
use crate::application::queries::{GetSticker, ListStickers};

/// 贴纸服务
pub struct StickerService {
    create_handler: CreateStickerHandler,
    update_handler: UpdateStickerHandler,
    delete_handler: DeleteStickerHandler,
    get_handler: GetStickerHandler,
    list_handler: ListStickersHandler,
}

impl StickerService {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self {
            create_handler: CreateStickerHandler::new(sticker_repo.clone()),
            update_handler: UpdateStickerHandler::new(sticker_repo.clone()),
            delete_handler: DeleteStickerHandler::new(sticker_repo.clone()),
            get_handler: GetStickerHandler::new(sticker_repo.clone()),
            list_handler: ListStickersHandler::new(sticker_repo),
        }
    }

    /// 获取全部贴纸
    pub async fn get_all(&self) -> Result<Vec<StickerDetails>, ApplicationError> {
        self.list_handler.handle(ListStickers).await
    }

    /// 创建贴纸
    pub async fn create(
        &self,
        command: Option<CreateSticker>,
    ) -> Result<Option<StickerDetails>, ApplicationError> {
        match command {
            Some(command) => self.create_handler.handle(command).await,
            None => Ok(None),
        }
    }

    /// 根据 ID 获取贴纸
    pub async fn get_by_id(&self, id: i64) -> Result<Option<StickerDetails>, ApplicationError> {
        self.get_handler.handle(GetSticker { sticker_id: id }).await
    }

    /// 更新贴纸
    pub async fn update(
        &self,
        command: Option<UpdateSticker>,
    ) -> Result<Option<StickerDetails>, ApplicationError> {
        match command {
            Some(command) => self.update_handler.handle(command).await,
            None => Ok(None),
        }
    }

    /// 根据 ID 删除贴纸
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, ApplicationError> {
        self.delete_handler
            .handle(DeleteSticker { sticker_id: id })
            .await
    }
}
