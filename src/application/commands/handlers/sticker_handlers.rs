//! Sticker Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateSticker, DeleteSticker, UpdateSticker};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewStickerRecord, StickerRecord, StickerRepositoryPort};
use crate::application::queries::handlers::StickerDetails;
use crate::domain::{Sticker, StickerId, StickerName};

// ============================================================================
// CreateSticker
// ============================================================================

/// CreateSticker Handler
pub struct CreateStickerHandler {
    sticker_repo: Arc<dyn StickerRepositoryPort>,
}

impl CreateStickerHandler {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self { sticker_repo }
    }

    /// 名称非法时返回 `Ok(None)`
    pub async fn handle(
        &self,
        command: CreateSticker,
    ) -> Result<Option<StickerDetails>, ApplicationError> {
        let name = match StickerName::new(command.name) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(error = %e, "Sticker creation rejected");
                return Ok(None);
            }
        };

        let record = self
            .sticker_repo
            .insert(&NewStickerRecord {
                name: name.into_inner(),
            })
            .await?;

        tracing::info!(
            sticker_id = record.id,
            name = %record.name,
            "Sticker created"
        );

        Ok(Some(StickerDetails::from(record)))
    }
}

// ============================================================================
// UpdateSticker
// ============================================================================

/// UpdateSticker Handler
pub struct UpdateStickerHandler {
    sticker_repo: Arc<dyn StickerRepositoryPort>,
}

impl UpdateStickerHandler {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self { sticker_repo }
    }

    /// 名称非法或贴纸不存在时返回 `Ok(None)`
    pub async fn handle(
        &self,
        command: UpdateSticker,
    ) -> Result<Option<StickerDetails>, ApplicationError> {
        let name = match StickerName::new(command.name) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(sticker_id = command.id, error = %e, "Sticker update rejected");
                return Ok(None);
            }
        };

        let sticker = Sticker::new(StickerId::new(command.id), name);
        let updated = self
            .sticker_repo
            .update(&StickerRecord::from(&sticker))
            .await?;

        if !updated {
            tracing::debug!(sticker_id = command.id, "Sticker to update not found");
            return Ok(None);
        }

        tracing::info!(
            sticker_id = command.id,
            name = %sticker.name(),
            "Sticker updated"
        );

        Ok(Some(StickerDetails::from(sticker)))
    }
}

// ============================================================================
// DeleteSticker
// ============================================================================

/// DeleteSticker Handler
pub struct DeleteStickerHandler {
    sticker_repo: Arc<dyn StickerRepositoryPort>,
}

impl DeleteStickerHandler {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self { sticker_repo }
    }

    /// 返回是否确实删除了一条记录
    pub async fn handle(&self, command: DeleteSticker) -> Result<bool, ApplicationError> {
        let sticker_id = command.sticker_id;
        let deleted = self.sticker_repo.delete(sticker_id).await?;

        if deleted {
            tracing::info!(sticker_id = sticker_id, "Sticker deleted");
        }

        Ok(deleted)
    }
}
