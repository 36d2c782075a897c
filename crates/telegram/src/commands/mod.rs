//! Command handlers for the Telegram bot
//!
//! - `basic`: start, help and the fallback for unsupported messages
//! - `link`: resolving Terabox links sent as plain text

mod basic;
mod link;

pub use basic::*;
pub use link::*;
