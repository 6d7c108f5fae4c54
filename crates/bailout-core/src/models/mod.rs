//! Data models for plans and participants.
//!
//! Stored records ([`Plan`], [`Participant`]) carry secrets and never leave
//! the core directly. Everything handed to callers goes through a projection
//! ([`PlanView`]) or, at creation time only, a [`CreatedPlan`].
//!
//! Display implementations live in [`crate::display::models`].

pub mod bail;
pub mod created;
pub mod plan;
pub mod status;
pub mod view;


pub use bail::{BailOutcome, BailResult};
pub use created::{CreatedPlan, ParticipantCredential, ShareLink};
pub use plan::{Participant, ParticipantSecret, Plan};
pub use status::PlanStatus;
pub use view::{CurrentUser, ParticipantView, PlanView};
