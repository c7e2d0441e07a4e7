mod scoring;
mod state;

pub use scoring::*;
pub use state::*;
