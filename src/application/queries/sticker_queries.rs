//! Sticker Queries

/// 获取贴纸详情查询
#[derive(Debug, Clone)]
pub struct GetSticker {
    pub sticker_id: i64,
}

/// 列出所有贴纸查询
#[derive(Debug, Clone)]
pub struct ListStickers;
