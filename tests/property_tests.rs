//! Property-based tests for rule decoding and evolution.
//!
//! These tests use proptest to check the engine's invariants across
//! randomly generated rules, rows and step counts.

use proptest::prelude::*;
use tristate_ca::compute::{
    CaError, Engine, MAX_RULE, NEIGHBORHOODS, Neighborhood, build_table, neighborhood_at,
    next_configuration,
};

prop_compose! {
    fn arbitrary_row(max_len: usize)(cells in prop::collection::vec(0u8..3, 1..max_len)) -> Vec<u8> {
        cells
    }
}

proptest! {
    #[test]
    fn table_is_total(rule in 0u32..=MAX_RULE) {
        let table = build_table(rule).unwrap();
        prop_assert_eq!(table.iter().count(), NEIGHBORHOODS);
        prop_assert!(table.outputs().iter().all(|&v| v < 3));
    }

    #[test]
    fn table_digits_reconstruct_rule(rule in 0u32..=MAX_RULE) {
        let table = build_table(rule).unwrap();
        let rebuilt = table.outputs().iter().fold(0u32, |acc, &d| acc * 3 + d as u32);
        prop_assert_eq!(rebuilt, rule);
    }

    #[test]
    fn rules_above_max_rejected(rule in (MAX_RULE + 1)..u32::MAX) {
        prop_assert_eq!(build_table(rule), Err(CaError::InvalidRule(rule as i128)));
    }

    #[test]
    fn fresh_history_is_initial(rule in 0u32..=MAX_RULE, row in arbitrary_row(64)) {
        let engine = Engine::new(rule, &row).unwrap();
        prop_assert_eq!(engine.history(), &[row.clone()][..]);
        prop_assert_eq!(engine.current(), row.as_slice());
    }

    #[test]
    fn stepping_is_associative(
        rule in 0u32..=MAX_RULE,
        row in arbitrary_row(32),
        n1 in 0usize..20,
        n2 in 0usize..20,
    ) {
        let mut split = Engine::new(rule, &row).unwrap();
        split.evolve(n1).unwrap();
        split.evolve(n2).unwrap();

        let mut whole = Engine::new(rule, &row).unwrap();
        whole.evolve(n1 + n2).unwrap();

        prop_assert_eq!(split.history(), whole.history());
        prop_assert_eq!(whole.history().len(), 1 + n1 + n2);
    }

    #[test]
    fn evolve_zero_is_noop(rule in 0u32..=MAX_RULE, row in arbitrary_row(32), n in 0usize..10) {
        let mut engine = Engine::new(rule, &row).unwrap();
        engine.evolve(n).unwrap();
        let before = engine.history().to_vec();
        engine.evolve(0).unwrap();
        prop_assert_eq!(engine.history(), before.as_slice());
    }

    #[test]
    fn earlier_rows_never_change(rule in 0u32..=MAX_RULE, row in arbitrary_row(32), n in 1usize..15) {
        let mut engine = Engine::new(rule, &row).unwrap();
        engine.evolve(n).unwrap();
        let prefix = engine.history().to_vec();
        engine.evolve(n).unwrap();
        prop_assert_eq!(&engine.history()[..prefix.len()], prefix.as_slice());
        prop_assert_eq!(engine.initial(), row.as_slice());
        prop_assert_eq!(engine.current(), engine.history().last().unwrap().as_slice());
    }

    #[test]
    fn each_cell_follows_table(rule in 0u32..=MAX_RULE, row in arbitrary_row(32)) {
        let table = build_table(rule).unwrap();
        let next = next_configuration(&table, &row);
        let len = row.len();
        for i in 0..len {
            let expected = table.get(row[(i + len - 1) % len], row[i]);
            prop_assert_eq!(next[i], expected);
        }
    }

    #[test]
    fn left_of_first_cell_is_last(row in arbitrary_row(32)) {
        let n = neighborhood_at(&row, 0);
        prop_assert_eq!(n, Some(Neighborhood { left: row[row.len() - 1], center: row[0] }));
    }

    #[test]
    fn deterministic_replay(rule in 0u32..=MAX_RULE, row in arbitrary_row(32), n in 0usize..30) {
        let mut a = Engine::new(rule, &row).unwrap();
        let mut b = Engine::new(rule, &row).unwrap();
        a.evolve(n).unwrap();
        b.evolve(n).unwrap();
        prop_assert_eq!(a.into_history(), b.into_history());
    }

    #[test]
    fn invalid_cell_rejected(
        row in arbitrary_row(16),
        index in any::<prop::sample::Index>(),
        bad in 3u8..=u8::MAX,
    ) {
        let mut row = row;
        let i = index.index(row.len());
        row[i] = bad;
        let first = row.iter().position(|&v| v >= 3).unwrap();
        prop_assert_eq!(
            Engine::new(0, &row).unwrap_err(),
            CaError::InvalidConfiguration { index: first, value: row[first] }
        );
    }

    #[test]
    fn negative_steps_leave_history(row in arbitrary_row(16), n in 0i64..10, bad in i64::MIN..0) {
        let mut engine = Engine::new(1815, &row).unwrap();
        engine.evolve(n).unwrap();
        let len = engine.history().len();
        prop_assert!(matches!(engine.evolve(bad), Err(CaError::InvalidStepCount(_))));
        prop_assert_eq!(engine.history().len(), len);
    }
}

#[test]
fn rule_zero_example() {
    let mut engine = Engine::new(0, &[1, 0, 2, 1]).unwrap();
    engine.evolve(1).unwrap();
    assert_eq!(engine.history(), vec![vec![1u8, 0, 2, 1], vec![0, 0, 0, 0]]);
}

#[test]
fn extreme_rules() {
    assert_eq!(build_table(0).unwrap().outputs(), &[0; NEIGHBORHOODS]);
    assert_eq!(build_table(MAX_RULE).unwrap().outputs(), &[2; NEIGHBORHOODS]);
}
