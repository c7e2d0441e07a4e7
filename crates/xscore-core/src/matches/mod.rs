//! Best-of-three matches.
//!
//! - [`Match`]: the persisted record of a match and its completed games
//! - [`MatchSession`]: drives a match, holding the game currently in play
//!   outside the record until it finishes
//!
//! Simple matches run through the same session but are flagged so the
//! history store never keeps them.

mod record;
mod session;

pub use record::*;
pub use session::*;
