//! Result of creating a plan: the only place secrets are handed out.

use serde::{Deserialize, Serialize};

/// Name and secret of a freshly created participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ParticipantCredential {
    pub name: String,
    pub secret: String,
}

/// A participant credential together with its personal share link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ShareLink {
    pub name: String,
    pub secret: String,
    pub link: String,
}

/// Identifiers handed back to the creator of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatedPlan {
    pub plan_id: String,
    pub participants: Vec<ParticipantCredential>,
}

impl CreatedPlan {
    /// Builds one `{base_url}/bail/{plan_id}/{secret}` link per participant.
    pub fn share_links(&self, base_url: &str) -> Vec<ShareLink> {
        let base = base_url.trim_end_matches('/');
        self.participants
            .iter()
            .map(|p| ShareLink {
                name: p.name.clone(),
                secret: p.secret.clone(),
                link: format!("{base}/bail/{}/{}", self.plan_id, p.secret),
            })
            .collect()
    }
}
