//! Error kinds raised while polling the homework API and notifying the chat.

/// Errors that can occur during one poll iteration.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The response (or a part of it) has the wrong JSON type.
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("missing key: {0}")]
    MissingKey(&'static str),

    #[error("homeworks list is empty")]
    EmptyResult,

    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// The API answered with anything other than 200 OK.
    #[error("API server error: HTTP {status}")]
    ServerError { status: u16 },

    /// Transport-level failure talking to the homework API.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid JSON in API response: {0}")]
    InvalidJson(String),

    #[error("failed to send message: {0}")]
    SendMessage(String),
}

pub type Result<T> = core::result::Result<T, BotError>;
