//! Rule decoding for tri-state automata.
//!
//! A rule index is read as a base-3 numeral whose digits, most significant
//! first, are the outputs for the nine canonically ordered neighborhoods.
//! This is the ternary analogue of Wolfram's elementary rule numbering.

use serde::Serialize;

use super::CaError;

/// Number of cell states.
pub const STATES: u8 = 3;

/// Number of distinct (left, self) neighborhoods.
pub const NEIGHBORHOODS: usize = 9;

/// Largest valid rule index (3^9 - 1).
pub const MAX_RULE: u32 = 19682;

/// Ordered (left, self) pair of cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Neighborhood {
    pub left: u8,
    pub center: u8,
}

impl Neighborhood {
    /// All neighborhoods in canonical order: (0,0), (0,1), ..., (2,2).
    pub const CANONICAL: [Neighborhood; NEIGHBORHOODS] = {
        let mut out = [Neighborhood { left: 0, center: 0 }; NEIGHBORHOODS];
        let mut i = 0;
        while i < NEIGHBORHOODS {
            out[i] = Neighborhood {
                left: (i / 3) as u8,
                center: (i % 3) as u8,
            };
            i += 1;
        }
        out
    };

    /// Position of this neighborhood in canonical order.
    #[inline]
    pub fn index(self) -> usize {
        self.left as usize * STATES as usize + self.center as usize
    }
}

/// Convert `value` to `width` digits in `base`, most significant first.
///
/// The digit sequence is left-padded with zeros. Zero yields `width` zeros.
/// Digits beyond `width` are not dropped: a value needing more digits than
/// `width` returns its full expansion.
pub fn digits_in_base(value: u32, base: u32, width: usize) -> Vec<u8> {
    debug_assert!((2..=256).contains(&base));

    let mut digits = Vec::with_capacity(width);
    let mut quotient = value;
    loop {
        digits.push((quotient % base) as u8);
        quotient /= base;
        if quotient == 0 {
            break;
        }
    }
    digits.resize(digits.len().max(width), 0);
    digits.reverse();
    digits
}

/// Complete neighborhood -> output mapping for one rule index.
///
/// Indexed by `left * 3 + self`. Always holds exactly one output per
/// neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    rule: u32,
    outputs: [u8; NEIGHBORHOODS],
}

impl TransitionTable {
    /// Rule index this table was decoded from.
    pub fn rule(&self) -> u32 {
        self.rule
    }

    /// Output for neighborhood (left, center).
    #[inline]
    pub fn get(&self, left: u8, center: u8) -> u8 {
        self.outputs[left as usize * STATES as usize + center as usize]
    }

    /// Output for a neighborhood value.
    #[inline]
    pub fn lookup(&self, neighborhood: Neighborhood) -> u8 {
        self.outputs[neighborhood.index()]
    }

    /// Outputs in canonical neighborhood order.
    pub fn outputs(&self) -> &[u8; NEIGHBORHOODS] {
        &self.outputs
    }

    /// Iterate (neighborhood, output) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Neighborhood, u8)> + '_ {
        Neighborhood::CANONICAL
            .iter()
            .zip(self.outputs.iter())
            .map(|(&n, &o)| (n, o))
    }
}

/// Decode a rule index into its transition table.
pub fn build_table(rule: u32) -> Result<TransitionTable, CaError> {
    if rule > MAX_RULE {
        return Err(CaError::InvalidRule(i128::from(rule)));
    }

    let digits = digits_in_base(rule, STATES as u32, NEIGHBORHOODS);
    let mut outputs = [0u8; NEIGHBORHOODS];
    outputs.copy_from_slice(&digits);

    Ok(TransitionTable { rule, outputs })
}

/// Decode a rule index given as any integer type.
///
/// Negative or oversized values fail with [`CaError::InvalidRule`].
pub fn build_table_from<T>(rule: T) -> Result<TransitionTable, CaError>
where
    T: TryInto<u32> + Copy + Into<i128>,
{
    let wide: i128 = rule.into();
    let rule: u32 = rule.try_into().map_err(|_| CaError::InvalidRule(wide))?;
    build_table(rule)
}
