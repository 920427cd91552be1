use thiserror::Error;

/// Failures talking to the lead backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Status(status.as_u16())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
