//! Plan creation for the Coordinator.

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::Coordinator;
use crate::{
    db::Database,
    error::{BailoutError, Result},
    models::{CreatedPlan, ParticipantCredential},
    params::CreatePlan,
};

impl Coordinator {
    /// Creates a plan with `num_participants` participants and hands back
    /// their secrets. This is the only call that ever returns secrets.
    ///
    /// # Errors
    ///
    /// * `BailoutError::InvalidInput` - participant count outside 2 to 5
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<CreatedPlan> {
        self.create_plan_at(params, Timestamp::now()).await
    }

    /// [`Coordinator::create_plan`] with an explicit creation time.
    pub async fn create_plan_at(&self, params: &CreatePlan, now: Timestamp) -> Result<CreatedPlan> {
        let db_path = self.db_path.clone();
        let description = params.description.clone();
        let num_participants = params.num_participants;

        // Single attempt; secrets are minted inside the transaction
        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(description.as_deref(), num_participants, now)
        })
        .await
        .map_err(|e| BailoutError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Created plan {} with {} participants",
            plan.id,
            plan.participants.len()
        );

        Ok(CreatedPlan {
            plan_id: plan.id,
            participants: plan
                .participants
                .into_iter()
                .map(|p| ParticipantCredential {
                    name: p.name,
                    secret: p.secret.expose().to_string(),
                })
                .collect(),
        })
    }
}
