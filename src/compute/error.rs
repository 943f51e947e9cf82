//! Error types for rule decoding and evolution.

/// Errors raised by the automaton core.
///
/// Each variant is raised before any state is touched, so a failed call
/// leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaError {
    #[error("Rule index {0} is outside 0..=19682")]
    InvalidRule(i128),
    #[error("Cell {index} has value {value}, expected 0, 1 or 2")]
    InvalidConfiguration { index: usize, value: u8 },
    #[error("Step count {0:?} is not a non-negative integer")]
    InvalidStepCount(String),
}
