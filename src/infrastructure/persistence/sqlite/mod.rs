//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod sticker_repo;

pub use database::*;
pub use sticker_repo::*;
