//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Sticker Context: 贴纸管理

pub mod sticker;

pub use sticker::{Sticker, StickerError, StickerId, StickerName};
