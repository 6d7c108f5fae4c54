//! Plan and participant model definitions.

use std::fmt;

use jiff::Timestamp;
use subtle::ConstantTimeEq;

use super::PlanStatus;

/// Capability token identifying a participant.
///
/// Whoever holds the token acts as the participant, so the value is kept out
/// of `Debug` output and never leaves the core in a view.
#[derive(Clone, PartialEq, Eq)]
pub struct ParticipantSecret(String);

impl ParticipantSecret {
    /// Generate a fresh high-entropy secret (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the raw token, for storage and share links only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Exact match against a caller-supplied token, in constant time for
    /// tokens of equal length.
    pub fn matches(&self, candidate: &str) -> bool {
        bool::from(self.0.as_bytes().ct_eq(candidate.as_bytes()))
    }
}

impl From<String> for ParticipantSecret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ParticipantSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParticipantSecret(..)")
    }
}

/// One member of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// Row identifier, unique within the plan
    pub id: u64,

    /// Bearer credential and lookup key
    pub secret: ParticipantSecret,

    /// Display label assigned at creation
    pub name: String,

    /// Whether this participant voted to cancel; never reset once set
    pub wants_to_bail: bool,
}

/// A shared plan together with its fixed set of participants.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Opaque unique identifier
    pub id: String,

    /// Free-text label
    pub description: Option<String>,

    /// Active or cancelled
    pub status: PlanStatus,

    /// Participant count at creation time
    pub num_required: u32,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Participants in creation order
    pub participants: Vec<Participant>,
}

impl Plan {
    /// Finds the participant holding `secret`.
    pub fn participant_by_secret(&self, secret: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.secret.matches(secret))
    }

    /// True when every participant has voted to bail.
    pub fn all_bailed(&self) -> bool {
        !self.participants.is_empty() && self.participants.iter().all(|p| p.wants_to_bail)
    }

    /// Number of participants that have bailed so far.
    pub fn bailed_count(&self) -> usize {
        self.participants.iter().filter(|p| p.wants_to_bail).count()
    }
}
