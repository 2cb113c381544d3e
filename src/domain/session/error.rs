use crate::domain::topic::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
