//! Display formatting and result wrapper types.
//!
//! Domain views implement [`std::fmt::Display`] directly (see [`models`]);
//! operation results get small wrapper types so the same data can be shown
//! differently depending on context. All output is markdown, rendered by the
//! CLI's terminal renderer or returned verbatim over MCP.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for plan views and statuses
//! - [`results`]: Creation and bail result wrappers

pub mod models;
pub mod results;

pub use results::{BailSummary, CreateResult};
