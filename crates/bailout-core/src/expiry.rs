//! Plan expiry policy.
//!
//! Plans older than [`EXPIRY_WINDOW`] are treated as if they never existed.
//! Time is always passed in, never read from the ambient clock here.

use jiff::{SignedDuration, Timestamp};

/// How long a plan stays reachable after creation.
pub const EXPIRY_WINDOW: SignedDuration = SignedDuration::from_secs(7 * 24 * 60 * 60);

/// Returns true when more than [`EXPIRY_WINDOW`] has elapsed since
/// `created_at`.
pub fn is_expired(created_at: Timestamp, now: Timestamp) -> bool {
    now.duration_since(created_at) > EXPIRY_WINDOW
}
