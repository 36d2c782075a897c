use terabox::ResolveError;

use crate::constants::replies;

/// Reasons a message could not be turned into a download link
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The message does not contain a Terabox link
    #[error("no Terabox link in message")]
    InvalidLink,
    /// The resolver API call failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Anything else; details stay in the logs
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Helper trait to convert errors into user-friendly messages
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        match self {
            BotError::InvalidLink => replies::INVALID_LINK.to_string(),
            BotError::Resolve(
                ResolveError::Network(_) | ResolveError::Http { .. } | ResolveError::Parse(_),
            ) => replies::API_ERROR.to_string(),
            BotError::Unexpected(_) => replies::UNEXPECTED.to_string(),
        }
    }
}
