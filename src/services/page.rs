//! State of one landing page instance.

use crate::domain::lead::{LeadDraft, LeadField, LeadRecord};
use crate::forms::FormError;
use crate::forms::lead::{LeadForm, LeadFormController};
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::services::recent_leads::RecentLeadsLoader;
use crate::services::submission::{SubmissionOutcome, create_lead};

/// Owns the draft, the submission outcome and the recent leads of a single
/// page. Nothing is shared between instances.
///
/// `submit` borrows the page mutably, so a page can never run two
/// submissions at once.
pub struct LeadPage<'a, R: ?Sized> {
    repo: &'a R,
    form: LeadFormController,
    outcome: SubmissionOutcome,
    recent: RecentLeadsLoader,
}

impl<'a, R> LeadPage<'a, R>
where
    R: LeadReader + LeadWriter + ?Sized,
{
    /// Creates an empty page without touching the backend.
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            form: LeadFormController::new(),
            outcome: SubmissionOutcome::Idle,
            recent: RecentLeadsLoader::new(),
        }
    }

    /// Composes the page and performs the initial recent leads fetch.
    pub async fn open(repo: &'a R) -> Self {
        let mut page = Self::new(repo);
        page.refresh_recent_leads().await;
        page
    }

    pub fn draft(&self) -> &LeadDraft {
        self.form.draft()
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn recent_leads(&self) -> &[LeadRecord] {
        self.recent.leads()
    }

    pub fn set_field(&mut self, field: LeadField, value: &str) -> Result<(), FormError> {
        self.form.set_field(field, value)
    }

    /// Applies a posted form to the draft.
    ///
    /// A rejected value marks the submission as failed with the form error so
    /// the visitor sees why nothing was sent.
    pub fn apply_form(&mut self, form: LeadForm) -> ServiceResult<()> {
        let result = form.apply(&mut self.form).map_err(ServiceError::from);
        if result.is_err() {
            self.outcome = SubmissionOutcome::from(&result);
        }
        result
    }

    /// Submits the current draft.
    ///
    /// On success the draft is cleared and the recent leads are fetched
    /// again; a failure of that fetch never changes the outcome. On failure
    /// the draft is kept for correction.
    pub async fn submit(&mut self) -> &SubmissionOutcome {
        self.outcome = SubmissionOutcome::InFlight;

        let payload = self.form.payload();
        let result = create_lead(self.repo, &payload).await;
        self.outcome = SubmissionOutcome::from(&result);

        if result.is_ok() {
            self.form.reset();
            self.refresh_recent_leads().await;
        }

        &self.outcome
    }

    /// Fetches recent leads, keeping the current list when that fails.
    pub async fn refresh_recent_leads(&mut self) {
        if let Err(err) = self.recent.refresh(self.repo).await {
            log::warn!("Failed to refresh recent leads: {err}");
        }
    }
}
