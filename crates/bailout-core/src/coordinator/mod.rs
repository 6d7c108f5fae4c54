//! High-level coordinator API for plans and bail submissions.
//!
//! The [`Coordinator`] is the entry point for every interface. It owns no
//! in-memory plan state: each call opens its own database connection on a
//! blocking thread, runs one transaction, and projects the committed result
//! for the caller.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Coordinator   │    │    Database     │    │   Visibility    │
//! │ (bail_ops,      │───▶│ (one tx per     │───▶│   projection    │
//! │  plan_ops)      │    │  attempt)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   retry + clock         atomic transition       hide undecided votes
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Coordinator`] instances
//! - [`bail_ops`]: Bail submission and status queries
//! - [`plan_ops`]: Plan creation
//!
//! # Usage
//!
//! ```rust,no_run
//! use bailout_core::{
//!     params::{CreatePlan, PlanAccess},
//!     CoordinatorBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = CoordinatorBuilder::new()
//!     .with_database_path(Some("bailout.db"))
//!     .build()
//!     .await?;
//!
//! let created = coordinator.create_plan(&CreatePlan::default()).await?;
//! let first = &created.participants[0];
//!
//! let result = coordinator
//!     .submit_bail(&PlanAccess::new(&created.plan_id, &first.secret))
//!     .await?;
//! println!("{}", result.message);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use log::warn;
use tokio::task;

use crate::error::{BailoutError, Result};

pub mod bail_ops;
pub mod builder;
pub mod plan_ops;


pub use builder::CoordinatorBuilder;

/// Default number of attempts for operations that hit a conflict or a
/// storage failure.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay between attempts; attempt `n` waits `n` times this.
const RETRY_BACKOFF: Duration = Duration::from_millis(25);

/// Main coordinator interface for plans and bail submissions.
pub struct Coordinator {
    pub(crate) db_path: PathBuf,
    pub(crate) base_url: String,
    pub(crate) max_attempts: u32,
}

impl Coordinator {
    /// Creates a new coordinator over the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf, base_url: String, max_attempts: u32) -> Self {
        Self {
            db_path,
            base_url,
            max_attempts,
        }
    }

    /// Base URL used when building share links.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs `op` on a blocking thread, rerunning it while it fails with a
    /// retryable error and attempts remain.
    ///
    /// Each attempt is a complete transaction, so a failed attempt leaves
    /// nothing behind and rerunning it is safe.
    pub(crate) async fn run_with_retry<T, F>(&self, name: &'static str, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: Fn() -> Result<T> + Clone + Send + 'static,
    {
        let mut attempt = 1;
        loop {
            let op = op.clone();
            let result = task::spawn_blocking(op)
                .await
                .map_err(|e| BailoutError::Configuration {
                    message: format!("Task join error: {e}"),
                })?;

            match result {
                Err(e) if e.is_retryable() => {
                    if attempt >= self.max_attempts {
                        return Err(BailoutError::RetriesExhausted {
                            attempts: attempt,
                            source: Box::new(e),
                        });
                    }
                    warn!("{name} attempt {attempt} failed, retrying: {e}");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
