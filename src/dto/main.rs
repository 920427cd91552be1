use serde::Serialize;

use crate::domain::lead::LeadRecord;
use crate::domain::types::SERVICE_CATALOG;
use crate::forms::fields::{FieldView, bind_fields};
use crate::repository::{LeadReader, LeadWriter};
use crate::services::page::LeadPage;
use crate::services::submission::SubmissionOutcome;

/// Shown instead of a preferred date when the visitor left it blank.
pub const FLEXIBLE_DATE: &str = "Flexible";

/// One card of the services showcase.
#[derive(Debug, Serialize)]
pub struct ServiceCard {
    pub name: &'static str,
    pub blurb: String,
}

/// A recent lead as displayed in the list.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RecentLeadView {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub city: Option<String>,
    pub when: String,
    pub message: Option<String>,
}

impl From<&LeadRecord> for RecentLeadView {
    fn from(lead: &LeadRecord) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());
        Self {
            id: lead.id.to_string(),
            name: lead.name.clone(),
            service_type: lead.service_type.clone(),
            city: non_empty(&lead.city),
            when: non_empty(&lead.preferred_date).unwrap_or_else(|| FLEXIBLE_DATE.to_string()),
            message: non_empty(&lead.message),
        }
    }
}

/// Data required to render the landing page template.
#[derive(Debug, Serialize)]
pub struct LandingPageData {
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    /// Label the browser swaps in while the posted form awaits its response.
    pub busy_label: &'static str,
    pub success_message: Option<&'static str>,
    pub error_message: Option<String>,
    pub services: Vec<ServiceCard>,
    pub recent_leads: Vec<RecentLeadView>,
    pub year: i32,
}

impl LandingPageData {
    pub fn from_page<R>(page: &LeadPage<'_, R>, year: i32) -> Self
    where
        R: LeadReader + LeadWriter + ?Sized,
    {
        let outcome = page.outcome();
        Self {
            fields: bind_fields(page.draft()),
            submit_label: outcome.submit_label(),
            busy_label: SubmissionOutcome::InFlight.submit_label(),
            success_message: outcome.success_message(),
            error_message: outcome.error_message().map(str::to_string),
            services: SERVICE_CATALOG
                .iter()
                .map(|service| ServiceCard {
                    name: service.label(),
                    blurb: service.blurb(),
                })
                .collect(),
            recent_leads: page.recent_leads().iter().map(RecentLeadView::from).collect(),
            year,
        }
    }
}
