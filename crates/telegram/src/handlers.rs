//! Link resolution pipeline
//!
//! Turns the text of a chat message into a [`Resolution`]: the link is
//! located with the Terabox validator, handed to a [`LinkResolver`] and
//! the outcome is tagged so the caller can match on it exhaustively.

use terabox::{find_terabox_link, LinkResolver};
use tokio_util::sync::CancellationToken;

use crate::constants::replies;
use crate::error::{BotError, UserMessage};

/// Outcome of handling one message
#[derive(Debug)]
pub enum Resolution {
    /// Direct download link returned by the API
    Link(String),
    /// The API answered but had no link for us
    Empty,
    /// Validation, API or unexpected failure
    Failed(BotError),
}

impl Resolution {
    /// Text sent back to the user
    pub fn reply_text(&self) -> String {
        match self {
            Resolution::Link(url) => format_download_link(url),
            Resolution::Empty => replies::EMPTY_RESULT.to_string(),
            Resolution::Failed(err) => err.user_message(),
        }
    }
}

/// Format a resolved link for display
pub fn format_download_link(url: &str) -> String {
    format!("{}\n{}", replies::DOWNLOAD_LABEL, url)
}

/// Validate `text` and resolve the Terabox link it carries
///
/// The resolver is only called when a link was found. If `cancel` fires
/// while the request is in flight the call is dropped and the result is
/// [`BotError::Unexpected`].
pub async fn process_text<R>(text: &str, resolver: &R, cancel: &CancellationToken) -> Resolution
where
    R: LinkResolver + ?Sized,
{
    let Some(link) = find_terabox_link(text) else {
        return Resolution::Failed(BotError::InvalidLink);
    };

    let result = tokio::select! {
        result = resolver.resolve(link) => result,
        _ = cancel.cancelled() => {
            return Resolution::Failed(BotError::Unexpected(format!(
                "resolution of {} cancelled",
                link
            )));
        }
    };

    match result {
        Ok(Some(url)) => Resolution::Link(url),
        Ok(None) => Resolution::Empty,
        Err(err) => Resolution::Failed(err.into()),
    }
}
