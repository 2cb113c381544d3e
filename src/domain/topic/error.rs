/// Failure modes of a page fetch. The loader collapses all of them to a
/// single network-error signal toward the presenter, but the taxonomy is
/// kept so callers can differentiate later without a rewrite.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Server(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FetchError {
    pub fn is_server_error(&self) -> bool {
        matches!(self, FetchError::Server(_))
    }
}
