//! Database operations and SQLite management for plans and participants.
//!
//! Every read and write of a plan aggregate (the plan row plus all of its
//! participant rows) happens inside a single transaction. Mutations take the
//! write lock up front (`BEGIN IMMEDIATE`), so concurrent bail submissions
//! against the same database are applied one after another.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod bail_queries;
pub mod migrations;
pub mod plan_queries;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
