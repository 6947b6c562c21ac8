//! Sticker Commands

/// 创建贴纸命令
#[derive(Debug, Clone)]
pub struct CreateSticker {
    pub name: String,
}

/// 更新贴纸命令（id 随请求体携带）
#[derive(Debug, Clone)]
pub struct UpdateSticker {
    pub id: i64,
    pub name: String,
}

/// 删除贴纸命令
#[derive(Debug, Clone)]
pub struct DeleteSticker {
    pub sticker_id: i64,
}
