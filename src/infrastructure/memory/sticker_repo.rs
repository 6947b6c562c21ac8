//! In-Memory Sticker Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{
    NewStickerRecord, RepositoryError, StickerRecord, StickerRepositoryPort,
};

/// 内存贴纸仓储
///
/// id 从 1 开始单调递增，删除后不复用，与 SQLite AUTOINCREMENT 行为一致
pub struct InMemoryStickerRepository {
    stickers: DashMap<i64, StickerRecord>,
    next_id: AtomicI64,
}

impl InMemoryStickerRepository {
    pub fn new() -> Self {
        Self {
            stickers: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryStickerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StickerRepositoryPort for InMemoryStickerRepository {
    async fn insert(&self, sticker: &NewStickerRecord) -> Result<StickerRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = StickerRecord {
            id,
            name: sticker.name.clone(),
        };
        self.stickers.insert(id, record.clone());
        tracing::debug!(sticker_id = id, "Sticker stored in memory");
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StickerRecord>, RepositoryError> {
        Ok(self.stickers.get(&id).map(|s| s.clone()))
    }

    async fn find_all(&self) -> Result<Vec<StickerRecord>, RepositoryError> {
        let mut all: Vec<StickerRecord> = self.stickers.iter().map(|s| s.value().clone()).collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn update(&self, sticker: &StickerRecord) -> Result<bool, RepositoryError> {
        match self.stickers.get_mut(&sticker.id) {
            Some(mut existing) => {
                existing.name = sticker.name.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.stickers.remove(&id).is_some())
    }
}
