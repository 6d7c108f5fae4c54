//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{BailResult, CreatedPlan};

/// Wrapper type for displaying a freshly created plan with its share links.
///
/// This is the only output that ever contains secrets: each link is the
/// credential of one participant.
///
/// # Examples
///
/// ```rust
/// use bailout_core::{
///     display::CreateResult,
///     models::{CreatedPlan, ParticipantCredential},
/// };
///
/// let created = CreatedPlan {
///     plan_id: "abc".to_string(),
///     participants: vec![ParticipantCredential {
///         name: "Participant 1".to_string(),
///         secret: "s1".to_string(),
///     }],
/// };
///
/// let output = CreateResult::new(&created, "http://localhost:3000").to_string();
/// assert!(output.contains("Created plan with ID: abc"));
/// assert!(output.contains("http://localhost:3000/bail/abc/s1"));
/// ```
pub struct CreateResult<'a> {
    pub created: &'a CreatedPlan,
    pub base_url: &'a str,
}

impl<'a> CreateResult<'a> {
    /// Create a new CreateResult wrapper.
    pub fn new(created: &'a CreatedPlan, base_url: &'a str) -> Self {
        Self { created, base_url }
    }
}

impl fmt::Display for CreateResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.created.plan_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "Send each participant their own link. Anyone holding a link can vote as that participant."
        )?;
        writeln!(f)?;
        for link in self.created.share_links(self.base_url) {
            writeln!(f, "- {}: {}", link.name, link.link)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of a bail submission.
pub struct BailSummary<'a>(pub &'a BailResult);

impl fmt::Display for BailSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.message)?;
        writeln!(f)?;
        write!(f, "{}", self.0.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BailOutcome, ParticipantCredential, PlanStatus, PlanView};

    #[test]
    fn test_create_result_lists_every_link() {
        let created = CreatedPlan {
            plan_id: "xyz".to_string(),
            participants: (1..=3)
                .map(|n| ParticipantCredential {
                    name: format!("Participant {n}"),
                    secret: format!("secret{n}"),
                })
                .collect(),
        };

        let output = CreateResult::new(&created, "https://bail.example").to_string();
        for n in 1..=3 {
            assert!(output.contains(&format!(
                "- Participant {n}: https://bail.example/bail/xyz/secret{n}"
            )));
        }
    }

    #[test]
    fn test_bail_summary_leads_with_message() {
        let result = BailResult::new(
            BailOutcome::Cancelled,
            PlanView {
                id: "p".to_string(),
                description: None,
                status: PlanStatus::Cancelled,
                participants: vec![],
                current_user: None,
            },
        );

        let output = BailSummary(&result).to_string();
        assert!(output.starts_with("Plans cancelled! Everyone bailed."));
        assert!(output.contains("# Plan p"));
    }
}
