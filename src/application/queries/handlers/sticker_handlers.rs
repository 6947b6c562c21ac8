//! Sticker Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{StickerRecord, StickerRepositoryPort};
use crate::application::queries::{GetSticker, ListStickers};
use crate::domain::Sticker;

// ============================================================================
// Response DTOs
// ============================================================================

/// 贴纸详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerDetails {
    pub id: i64,
    pub name: String,
}

impl From<StickerRecord> for StickerDetails {
    fn from(record: StickerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<Sticker> for StickerDetails {
    fn from(sticker: Sticker) -> Self {
        Self {
            id: sticker.id().value(),
            name: sticker.name().as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetSticker Handler
pub struct GetStickerHandler {
    sticker_repo: Arc<dyn StickerRepositoryPort>,
}

impl GetStickerHandler {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self { sticker_repo }
    }

    pub async fn handle(
        &self,
        query: GetSticker,
    ) -> Result<Option<StickerDetails>, ApplicationError> {
        let sticker = self.sticker_repo.find_by_id(query.sticker_id).await?;
        Ok(sticker.map(StickerDetails::from))
    }
}

/// ListStickers Handler
pub struct ListStickersHandler {
    sticker_repo: Arc<dyn StickerRepositoryPort>,
}

impl ListStickersHandler {
    pub fn new(sticker_repo: Arc<dyn StickerRepositoryPort>) -> Self {
        Self { sticker_repo }
    }

    pub async fn handle(
        &self,
        _query: ListStickers,
    ) -> Result<Vec<StickerDetails>, ApplicationError> {
        let stickers = self.sticker_repo.find_all().await?;
        Ok(stickers.into_iter().map(StickerDetails::from).collect())
    }
}
