use crate::domain::lead::LeadRecord;
use crate::repository::LeadReader;
use crate::services::{ServiceError, ServiceResult};

/// Number of leads requested from the backend. The list is never trimmed
/// locally; honouring the limit is the backend's job.
pub const RECENT_LEADS_LIMIT: usize = 5;

/// Holds the most recently fetched list of leads.
#[derive(Debug, Default)]
pub struct RecentLeadsLoader {
    leads: Vec<LeadRecord>,
}

impl RecentLeadsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> &[LeadRecord] {
        &self.leads
    }

    /// Replaces the held list with a fresh fetch.
    ///
    /// On failure the previous list is kept and the error is returned.
    pub async fn refresh<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: LeadReader + ?Sized,
    {
        let leads = repo
            .list_recent_leads(RECENT_LEADS_LIMIT)
            .await
            .map_err(ServiceError::from)?;
        self.leads = leads;
        Ok(())
    }
}
