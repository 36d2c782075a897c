use crate::commands;
use crate::types::Command;
use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

/// Register bot commands in Telegram menu
pub async fn set_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Text that is not a command goes through the link pipeline
pub fn is_plain_text(text: &str) -> bool {
    !text.starts_with('/')
}

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(commands::start))
        .branch(case![Command::Help].endpoint(commands::help));

    let text_handler = dptree::filter(|msg: Message| msg.text().is_some_and(is_plain_text))
        .endpoint(commands::resolve_link);

    // Unknown commands and non-text messages fall through to the last branch
    Update::filter_message()
        .branch(command_handler)
        .branch(text_handler)
        .branch(dptree::endpoint(commands::invalid_state))
}
