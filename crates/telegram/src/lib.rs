pub mod commands;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod telegram;
pub mod types;

pub use error::{BotError, UserMessage};
pub use handlers::{process_text, Resolution};
pub use teloxide::prelude::Dispatcher;
pub use types::{Command, HandlerResult};
