//! Summary statistics over a spacetime history.

use std::collections::HashMap;

use serde::Serialize;

use super::STATES;

/// Per-state cell counts for a single configuration.
///
/// Values outside 0..=2 are not counted.
pub fn state_counts(cells: &[u8]) -> [usize; STATES as usize] {
    let mut counts = [0usize; STATES as usize];
    for &v in cells {
        if let Some(c) = counts.get_mut(v as usize) {
            *c += 1;
        }
    }
    counts
}

/// First revisited configuration in a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cycle {
    /// Generation at which the repeated configuration first appeared.
    pub start: usize,
    /// Number of generations between repeats.
    pub period: usize,
}

/// Find the earliest generation whose configuration occurred before.
///
/// Evolution is deterministic, so once a configuration repeats the history
/// cycles with the returned period forever.
pub fn find_cycle(history: &[Vec<u8>]) -> Option<Cycle> {
    let mut seen: HashMap<&[u8], usize> = HashMap::with_capacity(history.len());
    for (t, row) in history.iter().enumerate() {
        if let Some(&start) = seen.get(row.as_slice()) {
            return Some(Cycle {
                start,
                period: t - start,
            });
        }
        seen.insert(row.as_slice(), t);
    }
    None
}

/// Aggregate statistics for a spacetime history.
#[derive(Debug, Clone, Serialize)]
pub struct SpacetimeStats {
    /// Number of steps taken (rows - 1).
    pub generations: usize,
    /// Lattice width.
    pub width: usize,
    /// Cell counts per state in the initial row.
    pub initial_counts: [usize; STATES as usize],
    /// Cell counts per state in the last row.
    pub final_counts: [usize; STATES as usize],
    /// Cell counts per state over the whole history.
    pub total_counts: [usize; STATES as usize],
    /// First cycle, if the history revisits a configuration.
    pub cycle: Option<Cycle>,
}

impl SpacetimeStats {
    /// Compute statistics for a non-empty history.
    pub fn from_history(history: &[Vec<u8>]) -> Self {
        let initial = history.first().map(|r| r.as_slice()).unwrap_or_default();
        let last = history.last().map(|r| r.as_slice()).unwrap_or_default();

        let mut total_counts = [0usize; STATES as usize];
        for row in history {
            for (t, c) in total_counts.iter_mut().zip(state_counts(row)) {
                *t += c;
            }
        }

        Self {
            generations: history.len().saturating_sub(1),
            width: initial.len(),
            initial_counts: state_counts(initial),
            final_counts: state_counts(last),
            total_counts,
            cycle: find_cycle(history),
        }
    }

    /// Fraction of non-zero cells in the last row.
    pub fn final_activity(&self) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        (self.width - self.final_counts[0]) as f32 / self.width as f32
    }
}
