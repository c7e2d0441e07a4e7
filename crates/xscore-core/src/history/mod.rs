//! Match history.
//!
//! Completed, tracked matches are kept newest first, capped at
//! [`HISTORY_CAPACITY`] entries and persisted under
//! [`MATCHES_KEY`](crate::storage::MATCHES_KEY) after every insert.
//! Simple matches are never recorded.

mod store;

pub use store::*;
