//! Lead submission workflow.

use crate::domain::lead::LeadPayload;
use crate::repository::LeadWriter;
use crate::services::{ServiceError, ServiceResult};

/// Banner text after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks! We received your request and will reach out shortly.";

/// Where the most recent submission attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl SubmissionOutcome {
    /// The submit control is disabled while this is true.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight)
    }

    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            SubmissionOutcome::Succeeded => Some(SUCCESS_MESSAGE),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_in_flight() {
            "Submitting..."
        } else {
            "Request quote"
        }
    }
}

impl From<&ServiceResult<()>> for SubmissionOutcome {
    fn from(result: &ServiceResult<()>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Succeeded,
            Err(err) => SubmissionOutcome::Failed(err.user_message()),
        }
    }
}

/// Sends the payload to the backend. No deduplication: every call creates a
/// new lead.
pub async fn create_lead<R>(repo: &R, payload: &LeadPayload) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    repo.create_lead(payload).await.map_err(|err| {
        log::error!("Failed to submit lead: {err}");
        ServiceError::from(err)
    })
}
