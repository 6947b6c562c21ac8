//! Stickers - 贴纸 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Sticker Context: 贴纸名称与实体
//!
//! 应用层 (application/):
//! - Ports: StickerRepositoryPort
//! - Commands / Queries: CQRS 处理器
//! - Service: StickerService 门面
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 响应分支协议
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
