//! Seam between the page services and the lead backend.

use std::future::Future;

use crate::domain::lead::{LeadPayload, LeadRecord};

pub mod errors;
#[cfg(feature = "server")]
pub mod http;

pub use errors::{RepositoryError, RepositoryResult};

pub trait LeadReader {
    /// Most recent leads, at most `limit` as enforced by the backend.
    fn list_recent_leads(
        &self,
        limit: usize,
    ) -> impl Future<Output = RepositoryResult<Vec<LeadRecord>>>;
}

pub trait LeadWriter {
    /// Creates a lead. Identical payloads create separate records.
    fn create_lead(&self, payload: &LeadPayload) -> impl Future<Output = RepositoryResult<()>>;
}
