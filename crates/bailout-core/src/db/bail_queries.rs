//! The bail transition.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, TransactionBehavior};

use super::plan_queries::{ensure_live, load_participants, load_plan};
use crate::{
    error::{BailoutError, DatabaseResultExt, Result},
    models::{BailOutcome, Plan, PlanStatus},
};

const UPDATE_PARTICIPANT_BAIL_SQL: &str =
    "UPDATE participants SET wants_to_bail = 1 WHERE id = ?1 AND plan_id = ?2 AND wants_to_bail = 0";
const UPDATE_PLAN_CANCELLED_SQL: &str = "UPDATE plans SET status = ?1 WHERE id = ?2 AND status = ?3";

impl super::Database {
    /// Records that the holder of `secret` wants to bail on plan `plan_id`,
    /// cancelling the plan if that was the last outstanding vote.
    ///
    /// Runs as one `BEGIN IMMEDIATE` transaction, so the "everyone bailed"
    /// check always sees every earlier submission. Returns what happened
    /// together with the plan as committed.
    pub fn submit_bail(
        &mut self,
        plan_id: &str,
        secret: &str,
        now: Timestamp,
    ) -> Result<(BailOutcome, Plan)> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let plan = ensure_live(load_plan(&tx, plan_id)?, now)?;

        let caller = plan
            .participant_by_secret(secret)
            .ok_or(BailoutError::InvalidParticipant)?;

        if plan.status == PlanStatus::Cancelled {
            debug!("Plan {plan_id} already cancelled, nothing to do");
            tx.commit().db_context("Failed to commit transaction")?;
            return Ok((BailOutcome::AlreadyCancelled, plan));
        }

        if caller.wants_to_bail {
            debug!("{} already bailed on plan {plan_id}", caller.name);
            tx.commit().db_context("Failed to commit transaction")?;
            return Ok((BailOutcome::AlreadyBailed, plan));
        }

        let caller_id = caller.id;
        tx.execute(UPDATE_PARTICIPANT_BAIL_SQL, params![caller_id as i64, plan_id])
            .db_context("Failed to record bail")?;

        let mut plan = plan;
        plan.participants = load_participants(&tx, plan_id)?;

        let outcome = if plan.all_bailed() {
            let cancelled = tx
                .execute(
                    UPDATE_PLAN_CANCELLED_SQL,
                    params![
                        PlanStatus::Cancelled.as_str(),
                        plan_id,
                        PlanStatus::Active.as_str()
                    ],
                )
                .db_context("Failed to cancel plan")?;

            if cancelled == 1 {
                info!("Everyone bailed, plan {plan_id} is cancelled");
                BailOutcome::Cancelled
            } else {
                BailOutcome::Registered
            }
        } else {
            debug!(
                "Bail registered on plan {plan_id} ({} of {})",
                plan.bailed_count(),
                plan.participants.len()
            );
            BailOutcome::Registered
        };

        // Always answer with the authoritative post-transition state
        let plan = load_plan(&tx, plan_id)?.ok_or(BailoutError::NotFound)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((outcome, plan))
    }
}
