//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod sticker_handlers;

pub use sticker_handlers::*;
