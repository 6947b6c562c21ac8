//! Sticker Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerError {
    #[error("无效的贴纸名称: {0}")]
    InvalidName(String),
}
