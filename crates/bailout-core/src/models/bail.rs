//! Outcome types for a bail submission.

use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanView};

/// What a single `submit_bail` call did to the stored plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum BailOutcome {
    /// The caller's vote was recorded; others are still pending
    Registered,

    /// The caller's vote was the last one and cancelled the plan
    Cancelled,

    /// The caller had already voted; nothing changed
    AlreadyBailed,

    /// The plan was already cancelled; nothing changed
    AlreadyCancelled,
}

impl BailOutcome {
    /// Whether this call wrote anything.
    pub fn is_mutation(&self) -> bool {
        matches!(self, BailOutcome::Registered | BailOutcome::Cancelled)
    }
}

/// Response to a bail submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BailResult {
    pub message: String,
    pub outcome: BailOutcome,
    pub plan: PlanView,
}

impl BailResult {
    /// Wraps a projected plan with the matching human-readable message.
    pub fn new(outcome: BailOutcome, plan: PlanView) -> Self {
        let message = if plan.status == PlanStatus::Cancelled {
            "Plans cancelled! Everyone bailed."
        } else if plan.caller_has_bailed() {
            "Your bail request is registered."
        } else {
            "Bail request updated."
        };

        Self {
            message: message.to_string(),
            outcome,
            plan,
        }
    }
}
