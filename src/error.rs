use crate::domain::session::SessionError;
use crate::domain::topic::FetchError;

/// Main client error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Custom result type for the client
pub type ClientResult<T> = Result<T, ClientError>;
