//! Configuration types for tri-state automaton runs.

use serde::{Deserialize, Serialize};

use super::{Pattern, Seed};
use crate::compute::{CaError, Engine, MAX_RULE, STATES};

fn default_steps() -> usize {
    100
}

/// Top-level run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomatonConfig {
    /// Rule index in 0..=19682.
    pub rule: u32,
    /// Lattice width in cells.
    pub width: usize,
    /// Default number of steps when none is given on the command line.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Initial row.
    #[serde(default)]
    pub seed: Seed,
    /// How the CLI prints the spacetime diagram.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            rule: 1815,
            width: 79,
            steps: default_steps(),
            seed: Seed::default(),
            output: OutputFormat::default(),
        }
    }
}

/// Spacetime diagram output format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum OutputFormat {
    /// One digit per cell, one row per generation.
    #[default]
    Digits,
    /// One glyph per cell taken from `glyphs[state]`.
    Glyphs { glyphs: [char; 3] },
    /// Full spacetime record as JSON.
    Json,
    /// Summary statistics only.
    Summary,
}

impl AutomatonConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rule > MAX_RULE {
            return Err(ConfigError::InvalidRule(self.rule));
        }
        if self.width == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        match &self.seed.pattern {
            Pattern::Single { value, .. } | Pattern::Uniform { value } if *value >= STATES => {
                return Err(ConfigError::InvalidSeedValue(*value));
            }
            Pattern::Single {
                position: Some(position),
                ..
            } if *position >= self.width => {
                return Err(ConfigError::SeedPositionOutOfRange {
                    position: *position,
                    width: self.width,
                });
            }
            Pattern::Custom { cells } if cells.len() != self.width => {
                return Err(ConfigError::SeedWidthMismatch {
                    width: self.width,
                    cells: cells.len(),
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and build an engine at generation 0.
    pub fn build_engine(&self) -> Result<Engine, ConfigError> {
        self.validate()?;
        let initial = self.seed.generate(self.width);
        Ok(Engine::new(self.rule, &initial)?)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Rule index {0} must be at most 19682")]
    InvalidRule(u32),
    #[error("Lattice width must be non-zero")]
    InvalidWidth,
    #[error("Seed value {0} is not a cell state")]
    InvalidSeedValue(u8),
    #[error("Seed position {position} is outside a lattice of width {width}")]
    SeedPositionOutOfRange { position: usize, width: usize },
    #[error("Custom seed has {cells} cells but width is {width}")]
    SeedWidthMismatch { width: usize, cells: usize },
    #[error("Automaton rejected configuration: {0}")]
    Automaton(#[from] CaError),
}
