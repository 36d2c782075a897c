//! Basic bot commands (start, help)

use crate::constants::replies;
use crate::types::HandlerResult;
use teloxide::{prelude::*, types::ParseMode};

/// Welcome message when user starts the bot
pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, replies::WELCOME).await?;
    Ok(())
}

/// Explain how to use the bot
pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, replies::HELP)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Handle unknown commands and non-text messages
pub async fn invalid_state(bot: Bot, msg: Message) -> HandlerResult {
    tracing::debug!("Unsupported message in chat {}", msg.chat.id);
    bot.send_message(msg.chat.id, replies::UNSUPPORTED).await?;
    Ok(())
}
