//! reqwest-backed access to the lead backend.

use serde_json::Value;

use crate::domain::lead::{LeadPayload, LeadRecord, recent_leads_from_json};
use crate::repository::{LeadReader, LeadWriter, RepositoryError, RepositoryResult};

const USER_AGENT: &str = concat!("crystalclean-site/", env!("CARGO_PKG_VERSION"));

/// Lead backend reached over HTTP.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpLeadRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLeadRepository {
    pub fn new(base_url: &str) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RepositoryError::Transport(format!("Failed to build client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn leads_url(&self) -> String {
        format!("{}/api/leads", self.base_url)
    }
}

impl LeadWriter for HttpLeadRepository {
    async fn create_lead(&self, payload: &LeadPayload) -> RepositoryResult<()> {
        let response = self
            .client
            .post(self.leads_url())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Lead creation rejected with status {status}");
            return Err(RepositoryError::Status(status.as_u16()));
        }

        Ok(())
    }
}

impl LeadReader for HttpLeadRepository {
    async fn list_recent_leads(&self, limit: usize) -> RepositoryResult<Vec<LeadRecord>> {
        let response = self
            .client
            .get(self.leads_url())
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        Ok(recent_leads_from_json(&body))
    }
}
