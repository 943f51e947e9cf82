//! Compute module - Rule decoding and evolution for tri-state automata.

mod engine;
mod error;
mod rule;
mod stats;

pub use engine::*;
pub use error::*;
pub use rule::*;
pub use stats::*;
