//! Error conversion glue between the repository and service layers.
//!
//! Repository errors never reach the page as-is; they are folded into the
//! two failure shapes the submission banner knows how to describe.

use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::Status(status) => ServiceError::Rejected(status),
            RepositoryError::Transport(message) => ServiceError::Backend(message),
            RepositoryError::Decode(message) => ServiceError::Backend(message),
        }
    }
}
