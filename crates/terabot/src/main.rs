mod config;
mod logging;

use config::{Config, LogFormat};
use telegram::telegram;
use teloxide::{error_handlers::LoggingErrorHandler, prelude::*};
use terabox::TeraboxApi;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    let log_format = LogFormat::from_env();
    logging::init(log_format.clone().unwrap_or_default());
    if let Err(e) = log_format {
        tracing::warn!("{}; falling back to the default log format", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded configuration: {:?}", config);

    let terabox = match TeraboxApi::new(config.api) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build the resolver API client: {}", e);
            std::process::exit(1);
        }
    };

    let bot = Bot::new(config.bot_token);

    if let Err(e) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    // Cancelled on Ctrl-C so in-flight resolver calls stop waiting
    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.cancel();
            }
        });
    }

    tracing::info!("Bot started successfully!");

    Dispatcher::builder(bot, telegram::schema())
        .dependencies(dptree::deps![terabox, shutdown])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Bot stopped");
}
