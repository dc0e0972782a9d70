use thiserror::Error;

/// Failure of a single chat-completion call
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Failed to send request to chat-completion API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Chat-completion API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse chat-completion response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Chat-completion response contained no choices")]
    NoChoices,

    #[error("Chat-completion response contained no message content")]
    MissingContent,
}

pub type Result<T> = std::result::Result<T, ChatError>;
