//! Bail submission and status queries for the Coordinator.

use jiff::Timestamp;
use log::{debug, info};

use super::Coordinator;
use crate::{
    db::Database,
    error::Result,
    models::{BailResult, PlanView},
    params::PlanAccess,
    visibility::project,
};

impl Coordinator {
    /// Records the caller's wish to bail and returns the plan as they may
    /// see it afterwards.
    ///
    /// Idempotent: submitting again, or submitting against a cancelled
    /// plan, changes nothing and returns the current view.
    ///
    /// # Errors
    ///
    /// * `BailoutError::NotFound` - plan is missing or expired
    /// * `BailoutError::InvalidParticipant` - secret matches no participant
    /// * `BailoutError::RetriesExhausted` - storage kept failing
    pub async fn submit_bail(&self, params: &PlanAccess) -> Result<BailResult> {
        self.submit_bail_at(params, Timestamp::now()).await
    }

    /// [`Coordinator::submit_bail`] evaluated at an explicit `now`.
    pub async fn submit_bail_at(&self, params: &PlanAccess, now: Timestamp) -> Result<BailResult> {
        debug!("submit_bail: {params:?}");

        let db_path = self.db_path.clone();
        let plan_id = params.plan_id.clone();
        let secret = params.secret.clone();

        let (outcome, plan) = self
            .run_with_retry("submit_bail", move || {
                let mut db = Database::new(&db_path)?;
                db.submit_bail(&plan_id, &secret, now)
            })
            .await?;

        if outcome.is_mutation() {
            info!("Plan {}: bail {outcome}", params.plan_id);
        }

        Ok(BailResult::new(outcome, project(&plan, &params.secret)))
    }

    /// Returns the plan as the caller may currently see it.
    ///
    /// # Errors
    ///
    /// * `BailoutError::NotFound` - plan is missing or expired
    /// * `BailoutError::InvalidParticipant` - secret matches no participant
    pub async fn get_status(&self, params: &PlanAccess) -> Result<PlanView> {
        self.get_status_at(params, Timestamp::now()).await
    }

    /// [`Coordinator::get_status`] evaluated at an explicit `now`.
    pub async fn get_status_at(&self, params: &PlanAccess, now: Timestamp) -> Result<PlanView> {
        debug!("get_status: {params:?}");

        let db_path = self.db_path.clone();
        let plan_id = params.plan_id.clone();
        let secret = params.secret.clone();

        let plan = self
            .run_with_retry("get_status", move || {
                let mut db = Database::new(&db_path)?;
                db.get_live_plan(&plan_id, &secret, now)
            })
            .await?;

        Ok(project(&plan, &params.secret))
    }
}
