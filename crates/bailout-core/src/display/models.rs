//! Display implementations for domain models.
//!
//! Markdown output for rich terminal display. Votes the caller may not see
//! are rendered as `hidden`, never guessed.

use std::fmt;

use crate::models::{BailOutcome, ParticipantView, PlanStatus, PlanView};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BailOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BailOutcome::Registered => "registered",
            BailOutcome::Cancelled => "cancelled",
            BailOutcome::AlreadyBailed => "already bailed",
            BailOutcome::AlreadyCancelled => "already cancelled",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ParticipantView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vote = match self.wants_to_bail {
            Some(true) => "✓ wants to bail",
            Some(false) => "○ still in",
            None => "? hidden",
        };
        if self.is_current_user {
            writeln!(f, "- **{} (you)**: {vote}", self.name)
        } else {
            writeln!(f, "- {}: {vote}", self.name)
        }
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Participants")?;
        writeln!(f)?;
        for participant in &self.participants {
            write!(f, "{participant}")?;
        }

        match (&self.current_user, self.status) {
            (_, PlanStatus::Cancelled) => {
                writeln!(f, "\nEveryone bailed. The plan is off.")?;
            }
            (Some(user), PlanStatus::Active) if !user.wants_to_bail => {
                writeln!(
                    f,
                    "\nOther votes stay hidden until you bail yourself."
                )?;
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrentUser;

    fn view(status: PlanStatus, caller_bailed: bool) -> PlanView {
        PlanView {
            id: "p1".to_string(),
            description: Some("Picnic".to_string()),
            status,
            participants: vec![
                ParticipantView {
                    name: "Participant 1".to_string(),
                    wants_to_bail: Some(caller_bailed),
                    is_current_user: true,
                },
                ParticipantView {
                    name: "Participant 2".to_string(),
                    wants_to_bail: caller_bailed.then_some(false),
                    is_current_user: false,
                },
            ],
            current_user: Some(CurrentUser {
                name: "Participant 1".to_string(),
                wants_to_bail: caller_bailed,
            }),
        }
    }

    #[test]
    fn test_undecided_view_marks_hidden_votes() {
        let output = view(PlanStatus::Active, false).to_string();
        assert!(output.contains("# Plan p1"));
        assert!(output.contains("- Status: active"));
        assert!(output.contains("**Participant 1 (you)**: ○ still in"));
        assert!(output.contains("- Participant 2: ? hidden"));
        assert!(output.contains("until you bail yourself"));
    }

    #[test]
    fn test_bailed_view_shows_votes() {
        let output = view(PlanStatus::Active, true).to_string();
        assert!(output.contains("**Participant 1 (you)**: ✓ wants to bail"));
        assert!(output.contains("- Participant 2: ○ still in"));
        assert!(!output.contains("hidden"));
    }

    #[test]
    fn test_cancelled_view_footer() {
        let output = view(PlanStatus::Cancelled, true).to_string();
        assert!(output.contains("Everyone bailed. The plan is off."));
    }
}
