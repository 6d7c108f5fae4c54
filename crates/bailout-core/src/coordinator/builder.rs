//! Builder for creating and configuring Coordinator instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::{Coordinator, DEFAULT_MAX_ATTEMPTS};
use crate::{
    db::Database,
    error::{BailoutError, Result},
};

/// Share-link base used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Builder for creating and configuring Coordinator instances.
#[derive(Debug, Clone)]
pub struct CoordinatorBuilder {
    database_path: Option<PathBuf>,
    base_url: Option<String>,
    max_attempts: u32,
}

impl CoordinatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            base_url: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bailout/bailout.db` or
    /// `~/.local/share/bailout/bailout.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the base URL participants' share links are built on.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = Some(url);
        }
        self
    }

    /// Sets how many times a conflicting or failing operation is attempted.
    /// Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Builds the configured coordinator instance.
    ///
    /// # Errors
    ///
    /// Returns `BailoutError::FileSystem` if the database path is invalid
    /// Returns `BailoutError::Database` if database initialization fails
    pub async fn build(self) -> Result<Coordinator> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BailoutError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BailoutError>(())
        })
        .await
        .map_err(|e| BailoutError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Coordinator::new(db_path, base_url, self.max_attempts))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bailout")
            .place_data_file("bailout.db")
            .map_err(|e| BailoutError::XdgDirectory(e.to_string()))
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
