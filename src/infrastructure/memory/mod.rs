//! In-Memory Implementations
//!
//! 不依赖外部存储的仓储实现，用于本地调试与测试

mod sticker_repo;

pub use sticker_repo::InMemoryStickerRepository;
