//! Page services: submission workflow, recent leads and page state.

use thiserror::Error;

use crate::forms::FormError;

pub mod page;
pub mod recent_leads;
pub mod submission;

/// Message shown when the backend answers with a non-success status.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit";
/// Message shown when a transport failure carries no description.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend rejected the request with status {0}")]
    Rejected(u16),

    #[error("backend unavailable: {0}")]
    Backend(String),

    #[error("form error: {0}")]
    Form(#[from] FormError),
}

impl ServiceError {
    /// Single human readable line suitable for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Rejected(_) => SUBMIT_FAILED_MESSAGE.to_string(),
            ServiceError::Backend(message) if message.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            ServiceError::Backend(message) => message.clone(),
            ServiceError::Form(err) => err.to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_requests_use_generic_message() {
        assert_eq!(ServiceError::Rejected(500).user_message(), "Failed to submit");
    }

    #[test]
    fn backend_message_falls_back_when_blank() {
        assert_eq!(
            ServiceError::Backend("connection refused".to_string()).user_message(),
            "connection refused"
        );
        assert_eq!(
            ServiceError::Backend(" ".to_string()).user_message(),
            "Something went wrong"
        );
    }

    #[test]
    fn form_errors_describe_the_rejected_value() {
        let err = ServiceError::from(FormError::from(
            crate::domain::types::TypeConstraintError::UnknownServiceType(
                "Pool Cleaning".to_string(),
            ),
        ));

        assert_eq!(err.user_message(), "unknown service type: Pool Cleaning");
    }
}
