//! Participant-facing projections of a plan.

use serde::{Deserialize, Serialize};

use super::PlanStatus;

/// A participant as seen by one particular caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ParticipantView {
    pub name: String,

    /// Absent when the caller is not allowed to see it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wants_to_bail: Option<bool>,

    pub is_current_user: bool,
}

/// The caller's own entry, always fully visible to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: String,
    pub wants_to_bail: bool,
}

/// A plan filtered through the caller's visibility rule. Contains no secrets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: String,
    pub description: Option<String>,
    pub status: PlanStatus,
    pub participants: Vec<ParticipantView>,
    pub current_user: Option<CurrentUser>,
}

impl PlanView {
    /// Whether the caller has voted to bail.
    pub fn caller_has_bailed(&self) -> bool {
        self.current_user.as_ref().is_some_and(|u| u.wants_to_bail)
    }
}
