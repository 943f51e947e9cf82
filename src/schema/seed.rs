//! Seed types for building initial configurations.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::compute::STATES;

/// Complete seed specification for the initial row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Single {
                value: 1,
                position: None,
            },
        }
    }
}

/// Predefined initial row patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// One non-zero cell on a zero background.
    Single {
        /// State of the seeded cell.
        value: u8,
        /// Cell index (None = center).
        position: Option<usize>,
    },
    /// Every cell in the same state.
    Uniform {
        value: u8,
    },
    /// Independent uniform draws from {0, 1, 2}.
    Random {
        /// Random seed.
        seed: u64,
    },
    /// Explicit cell values; length must equal the configured width.
    Custom {
        cells: Vec<u8>,
    },
}

impl Seed {
    /// Random seed with the given RNG seed.
    pub fn random(seed: u64) -> Self {
        Self {
            pattern: Pattern::Random { seed },
        }
    }

    /// Generate the initial row for a lattice of `width` cells.
    ///
    /// Values are not validated here; the engine rejects invalid rows and
    /// `AutomatonConfig::validate` rejects out-of-range positions.
    pub fn generate(&self, width: usize) -> Vec<u8> {
        match &self.pattern {
            Pattern::Single { value, position } => {
                let mut cells = vec![0u8; width];
                let pos = position.unwrap_or(width / 2);
                if let Some(cell) = cells.get_mut(pos) {
                    *cell = *value;
                }
                cells
            }
            Pattern::Uniform { value } => vec![*value; width],
            Pattern::Random { seed } => random_cells(width, *seed),
            Pattern::Custom { cells } => cells.clone(),
        }
    }
}

/// Uniformly random row of `width` cells.
pub fn random_cells(width: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width).map(|_| rng.gen_range(0..STATES)).collect()
}
