//! Part catalog and saved composites.
//!
//! - **Parts**: built-in blade/ratchet/bit list plus user custom entries
//! - **Saved composites**: composites the user assembled and kept, persisted
//!   under [`COMPOSITES_KEY`](crate::storage::COMPOSITES_KEY)

mod builtin;
mod part;
mod parts;
mod saved;

pub use builtin::{BITS, BLADES, PERMANENT_COMPOSITES, RATCHETS};
pub use part::*;
pub use parts::*;
pub use saved::*;
