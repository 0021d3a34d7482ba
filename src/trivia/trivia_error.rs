use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriviaError>;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Datastore client is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("Failed to build request: {0}")]
    RequestBuild(String),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl TriviaError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        TriviaError::Unavailable(reason.into())
    }

    /// True when the failure happened on the wire rather than while building or decoding.
    pub fn is_transport(&self) -> bool {
        matches!(self, TriviaError::Transport(_) | TriviaError::BodyRead(_))
    }
}
