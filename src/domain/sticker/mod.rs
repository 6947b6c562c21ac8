//! Sticker Context - 贴纸限界上下文
//!
//! 职责:
//! - 贴纸名称校验
//! - 贴纸实体

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Sticker;
pub use errors::StickerError;
pub use value_objects::{StickerId, StickerName};
