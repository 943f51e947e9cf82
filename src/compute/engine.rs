//! Automaton engine - evolves a ring of tri-state cells and records spacetime.
//!
//! Each generation is computed synchronously from the previous one. The
//! lattice is periodic: the left neighbor of cell 0 is the last cell.

use std::fmt::Display;

use serde::Serialize;

use super::{CaError, NEIGHBORHOODS, Neighborhood, STATES, TransitionTable, build_table};

/// Stepping `steps * width` cells beyond this logs a memory warning.
const LARGE_RUN_CELLS: u128 = 100_000_000;

/// Neighborhood of cell `i` under periodic boundaries.
///
/// `None` when `i` is not a cell of `cells`.
#[inline]
pub fn neighborhood_at(cells: &[u8], i: usize) -> Option<Neighborhood> {
    let center = *cells.get(i)?;
    let left = match i.checked_sub(1) {
        Some(l) => cells[l],
        None => *cells.last()?,
    };
    Some(Neighborhood { left, center })
}

/// Apply `table` to every cell of `cells`, writing the next generation to `next`.
///
/// `next` is cleared first and reads only from `cells`.
pub fn step_into(table: &TransitionTable, cells: &[u8], next: &mut Vec<u8>) {
    next.clear();
    let Some(&last) = cells.last() else {
        return;
    };
    let lefts = std::iter::once(last).chain(cells.iter().copied());
    next.extend(
        lefts
            .zip(cells.iter().copied())
            .map(|(left, center)| table.get(left, center)),
    );
}

/// Next generation of `cells` under `table`.
pub fn next_configuration(table: &TransitionTable, cells: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(cells.len());
    step_into(table, cells, &mut next);
    next
}

/// Check that every cell is a valid state.
pub fn validate_configuration(cells: &[u8]) -> Result<(), CaError> {
    match cells.iter().position(|&v| v >= STATES) {
        Some(index) => Err(CaError::InvalidConfiguration {
            index,
            value: cells[index],
        }),
        None => Ok(()),
    }
}

/// Parse a textual step count such as a command-line argument.
pub fn parse_steps(text: &str) -> Result<usize, CaError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| CaError::InvalidStepCount(text.to_string()))
}

/// Tri-state cellular automaton with full spacetime history.
///
/// `history()[0]` is the initial configuration and `history()[t]` the
/// configuration after `t` steps. History is append-only and grows by one
/// row per step, so memory use is O(steps * width) and bounding it is up to
/// the caller.
#[derive(Debug, Clone)]
pub struct Engine {
    table: TransitionTable,
    history: Vec<Vec<u8>>,
}

impl Engine {
    /// Create an engine for `rule` starting from `initial`.
    ///
    /// Fails with [`CaError::InvalidRule`] or [`CaError::InvalidConfiguration`].
    pub fn new(rule: u32, initial: &[u8]) -> Result<Self, CaError> {
        let table = build_table(rule)?;
        validate_configuration(initial)?;

        log::debug!("engine: rule {} width {}", rule, initial.len());

        Ok(Self {
            table,
            history: vec![initial.to_vec()],
        })
    }

    /// Create an engine from an already decoded table.
    pub fn with_table(table: TransitionTable, initial: &[u8]) -> Result<Self, CaError> {
        validate_configuration(initial)?;
        Ok(Self {
            table,
            history: vec![initial.to_vec()],
        })
    }

    /// Advance `steps` generations.
    ///
    /// Accepts any integer type. Negative or unrepresentable counts fail with
    /// [`CaError::InvalidStepCount`] and leave the engine untouched.
    pub fn evolve<T>(&mut self, steps: T) -> Result<(), CaError>
    where
        T: TryInto<usize> + Display + Copy,
    {
        let steps: usize = steps
            .try_into()
            .map_err(|_| CaError::InvalidStepCount(steps.to_string()))?;

        let cells = steps as u128 * self.width() as u128;
        if cells > LARGE_RUN_CELLS {
            log::warn!(
                "evolving {} steps of width {} retains {} cells of history",
                steps,
                self.width(),
                cells
            );
        }

        for _ in 0..steps {
            self.step();
        }

        log::trace!("evolved {} steps, generation {}", steps, self.generation());
        Ok(())
    }

    /// Advance a single generation.
    pub fn step(&mut self) {
        let next = next_configuration(&self.table, self.current());
        self.history.push(next);
    }

    /// Transition table in use.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Rule index in use.
    pub fn rule(&self) -> u32 {
        self.table.rule()
    }

    /// Lattice width (constant for the engine's lifetime).
    pub fn width(&self) -> usize {
        self.history[0].len()
    }

    /// Number of steps taken so far.
    pub fn generation(&self) -> usize {
        self.history.len() - 1
    }

    /// Configuration the engine was created with.
    pub fn initial(&self) -> &[u8] {
        &self.history[0]
    }

    /// Most recent configuration.
    pub fn current(&self) -> &[u8] {
        // History is never empty: construction pushes the initial row.
        &self.history[self.history.len() - 1]
    }

    /// Every configuration so far; outer index is time, inner is space.
    pub fn history(&self) -> &[Vec<u8>] {
        &self.history
    }

    /// Consume the engine, returning its history.
    pub fn into_history(self) -> Vec<Vec<u8>> {
        self.history
    }

    /// Serializable view of the spacetime record.
    pub fn record(&self) -> SpacetimeRecord<'_> {
        SpacetimeRecord {
            rule: self.rule(),
            width: self.width(),
            generations: self.generation(),
            table: *self.table.outputs(),
            history: &self.history,
        }
    }
}

/// Spacetime diagram with the rule that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SpacetimeRecord<'a> {
    pub rule: u32,
    pub width: usize,
    pub generations: usize,
    /// Outputs in canonical neighborhood order.
    pub table: [u8; NEIGHBORHOODS],
    pub history: &'a [Vec<u8>],
}
