//! Parameter structures for bailout operations
//!
//! These structures are shared across interfaces (CLI, MCP) without
//! framework-specific derives beyond serde. Interface layers wrap or convert
//! into them: the CLI through `From` impls on its clap argument structs, the
//! MCP server through a transparent serde wrapper that adds a JSON schema
//! when the `schema` feature is enabled.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default participant count when the creator does not specify one.
pub const DEFAULT_PARTICIPANTS: u32 = 2;

fn default_participants() -> u32 {
    DEFAULT_PARTICIPANTS
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// Optional free-text label for the plan
    #[serde(default)]
    pub description: Option<String>,
    /// How many participants the plan has (2 to 5)
    #[serde(default = "default_participants")]
    pub num_participants: u32,
}

impl Default for CreatePlan {
    fn default() -> Self {
        Self {
            description: None,
            num_participants: DEFAULT_PARTICIPANTS,
        }
    }
}

/// Parameters identifying a participant of a plan.
///
/// Used by both the status query and the bail submission.
#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanAccess {
    /// ID of the plan
    pub plan_id: String,
    /// The participant's secret token
    pub secret: String,
}

impl PlanAccess {
    pub fn new(plan_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for PlanAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanAccess")
            .field("plan_id", &self.plan_id)
            .field("secret", &"..")
            .finish()
    }
}
