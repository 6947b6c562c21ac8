//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StickerRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - service: 面向 HTTP 层的 StickerService 门面
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod service;

// Re-exports
pub use commands::{
    handlers::{CreateStickerHandler, DeleteStickerHandler, UpdateStickerHandler},
    CreateSticker, DeleteSticker, UpdateSticker,
};

pub use error::ApplicationError;

pub use ports::{NewStickerRecord, RepositoryError, StickerRecord, StickerRepositoryPort};

pub use queries::{
    handlers::{GetStickerHandler, ListStickersHandler, StickerDetails},
    GetSticker, ListStickers,
};

pub use service::StickerService;
