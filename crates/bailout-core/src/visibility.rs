//! Visibility projection of a plan for one caller.
//!
//! A participant who has not bailed learns nothing about anyone else's vote:
//! the field is omitted, not masked. Once the caller has bailed, or the plan
//! is cancelled, every vote is revealed.

use crate::models::{CurrentUser, ParticipantView, Plan, PlanView};

/// Projects `plan` as seen by the holder of `caller_secret`.
///
/// Secrets never appear in the result. An unknown secret yields a view with
/// no current user and every other vote hidden.
pub fn project(plan: &Plan, caller_secret: &str) -> PlanView {
    let caller = plan.participant_by_secret(caller_secret);
    let reveal_all = plan.status.is_terminal() || caller.is_some_and(|c| c.wants_to_bail);

    let participants = plan
        .participants
        .iter()
        .map(|p| {
            let is_current_user = caller.is_some_and(|c| c.id == p.id);
            ParticipantView {
                name: p.name.clone(),
                wants_to_bail: (is_current_user || reveal_all).then_some(p.wants_to_bail),
                is_current_user,
            }
        })
        .collect();

    PlanView {
        id: plan.id.clone(),
        description: plan.description.clone(),
        status: plan.status,
        participants,
        current_user: caller.map(|c| CurrentUser {
            name: c.name.clone(),
            wants_to_bail: c.wants_to_bail,
        }),
    }
}
