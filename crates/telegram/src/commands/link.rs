//! Resolve Terabox links sent as plain text

use crate::error::BotError;
use crate::handlers::{self, Resolution};
use crate::types::HandlerResult;
use teloxide::prelude::*;
use terabox::TeraboxApi;
use tokio_util::sync::CancellationToken;

/// Validate the message, resolve the link and reply with the outcome
///
/// Every resolution outcome becomes one of the fixed replies; only a
/// failure to send the reply is returned to the dispatcher.
pub async fn resolve_link(
    bot: Bot,
    msg: Message,
    terabox: TeraboxApi,
    cancel: CancellationToken,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    let resolution = handlers::process_text(text, &terabox, &cancel).await;

    match &resolution {
        Resolution::Link(url) => {
            tracing::info!("Resolved link for chat {}: {}", msg.chat.id, url);
        }
        Resolution::Empty => {
            tracing::warn!("Resolver API returned no download link for chat {}", msg.chat.id);
        }
        Resolution::Failed(BotError::InvalidLink) => {
            tracing::info!("Rejected non-Terabox message in chat {}", msg.chat.id);
        }
        Resolution::Failed(BotError::Resolve(err)) => {
            tracing::warn!("Error fetching Terabox link for chat {}: {}", msg.chat.id, err);
        }
        Resolution::Failed(BotError::Unexpected(reason)) => {
            tracing::error!("Unexpected error in chat {}: {}", msg.chat.id, reason);
        }
    }

    bot.send_message(msg.chat.id, resolution.reply_text()).await?;
    Ok(())
}
