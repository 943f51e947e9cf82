//! Tri-state elementary cellular automata.
//!
//! A one-dimensional ring of cells, each in state 0, 1 or 2, evolves under a
//! rule that maps every (left, self) neighborhood to a new state. The nine
//! outputs are packed into a rule index in `0..=19682` by reading them as
//! base-3 digits, generalizing Wolfram's elementary rule numbers.
//!
//! # Architecture
//!
//! - `compute`: Rule decoding, the evolution engine and history statistics
//! - `schema`: Run configuration and initial-row seeding
//!
//! The engine only produces data. Rendering the spacetime history is left to
//! the caller.
//!
//! # Example
//!
//! ```rust
//! use tristate_ca::Engine;
//!
//! let mut engine = Engine::new(0, &[1, 0, 2, 1])?;
//! engine.evolve(1)?;
//!
//! assert_eq!(engine.history(), vec![vec![1u8, 0, 2, 1], vec![0, 0, 0, 0]]);
//! # Ok::<(), tristate_ca::CaError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{CaError, Engine, SpacetimeStats, TransitionTable, build_table};
pub use schema::{AutomatonConfig, Pattern, Seed};
