//! HTTP Handlers

mod ping;
mod sticker;

pub use ping::*;
pub use sticker::*;
