//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Sticker;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Sticker Repository
// ============================================================================

/// 贴纸实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerRecord {
    pub id: i64,
    pub name: String,
}

impl From<&Sticker> for StickerRecord {
    fn from(sticker: &Sticker) -> Self {
        Self {
            id: sticker.id().value(),
            name: sticker.name().as_str().to_string(),
        }
    }
}

/// 待插入的贴纸（id 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewStickerRecord {
    pub name: String,
}

/// Sticker Repository Port
#[async_trait]
pub trait StickerRepositoryPort: Send + Sync {
    /// 插入贴纸，返回分配了 id 的记录
    async fn insert(&self, sticker: &NewStickerRecord) -> Result<StickerRecord, RepositoryError>;

    /// 根据 ID 查找贴纸
    async fn find_by_id(&self, id: i64) -> Result<Option<StickerRecord>, RepositoryError>;

    /// 获取所有贴纸（按 id 升序）
    async fn find_all(&self) -> Result<Vec<StickerRecord>, RepositoryError>;

    /// 更新贴纸，记录不存在时返回 false
    async fn update(&self, sticker: &StickerRecord) -> Result<bool, RepositoryError>;

    /// 删除贴纸，记录不存在时返回 false
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
