//! Matchup statistics over match history.
//!
//! Every query rescans the matches it is given; nothing is cached. A matchup
//! is keyed either on full composite names or on the part in one slot, and
//! is ordered: the left side is always the one that played as player 1.

mod matchup;

pub use matchup::*;
