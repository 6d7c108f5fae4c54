//! Core library for the Bailout plan-cancellation service.
//!
//! A plan has between two and five participants, each identified only by a
//! secret token. Every participant may secretly vote to bail; the plan is
//! cancelled once, and only once, every participant has voted. Until a
//! participant votes, the votes of everyone else stay hidden from them.
//!
//! # Layers
//!
//! - [`db`]: SQLite entity store; each plan aggregate is read and written in
//!   a single transaction
//! - [`coordinator`]: async entry point with retry on conflicts
//! - [`visibility`]: projects a plan for one caller
//! - [`expiry`]: plans older than seven days are unreachable
//! - [`display`]: markdown formatting for terminals and MCP
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bailout_core::{params::{CreatePlan, PlanAccess}, CoordinatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = CoordinatorBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let created = coordinator.create_plan(&CreatePlan::default()).await?;
//! for p in &created.participants {
//!     let view = coordinator
//!         .submit_bail(&PlanAccess::new(&created.plan_id, &p.secret))
//!         .await?;
//!     println!("{}", view.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod db;
pub mod display;
pub mod error;
pub mod expiry;
pub mod models;
pub mod params;
pub mod visibility;

// Re-export commonly used types
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use db::Database;
pub use display::{BailSummary, CreateResult};
pub use error::{BailoutError, Result};
pub use models::{
    BailOutcome, BailResult, CreatedPlan, CurrentUser, ParticipantView, Plan, PlanStatus,
    PlanView,
};
pub use params::{CreatePlan, PlanAccess};
