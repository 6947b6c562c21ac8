//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod sticker_handlers;

pub use sticker_handlers::*;
