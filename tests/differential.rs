//! Differential testing: the sparse engine against the dense oracle.
//!
//! Random soups are kept inside a margin wide enough that nothing can reach
//! the dense universe's boundary within the stepped generations, so the
//! bounded oracle and the unbounded engine must agree exactly.

use polylife::{DenseLife, RuleTable, SparseLife, Universe};
use proptest::prelude::*;

const SIZE: i32 = 48;
const MARGIN: i32 = 12;

fn live(u: &dyn Universe) -> Vec<(i32, i32, u8)> {
    let mut cells = Vec::new();
    u.for_each_live(&mut |x, y, s| cells.push((x, y, s)));
    cells
}

/// Seed both universes with the same soup, in raster order.
fn seed_pair(
    rule: &dyn Fn() -> RuleTable,
    soup: &std::collections::BTreeMap<(i32, i32), u8>,
) -> (SparseLife, DenseLife) {
    let mut sparse = SparseLife::new(rule());
    let mut dense = DenseLife::new(rule(), SIZE as usize, SIZE as usize);
    let mut cells: Vec<_> = soup.iter().map(|(&(x, y), &s)| (x, y, s)).collect();
    cells.sort_by_key(|&(x, y, _)| (y, x));
    for (x, y, s) in cells {
        sparse.set(x, y, s).unwrap();
        dense.set(x, y, s).unwrap();
    }
    (sparse, dense)
}

fn interior() -> impl Strategy<Value = (i32, i32)> {
    (MARGIN..SIZE - MARGIN, MARGIN..SIZE - MARGIN)
}

fn check(rule: impl Fn() -> RuleTable, soup: std::collections::BTreeMap<(i32, i32), u8>, steps: usize) {
    let (mut sparse, mut dense) = seed_pair(&rule, &soup);
    for generation in 0..steps {
        sparse.next_generation().unwrap();
        dense.next_generation().unwrap();
        assert_eq!(live(&sparse), live(&dense), "diverged at generation {generation}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn conway_soups_match(
        soup in prop::collection::btree_map(interior(), Just(1u8), 0..80),
        steps in 1usize..8,
    ) {
        check(RuleTable::conway, soup, steps);
    }

    #[test]
    fn niemiec_soups_match(
        soup in prop::collection::btree_map(interior(), 1u8..9, 0..80),
        steps in 1usize..8,
    ) {
        check(polylife::niemiec, soup, steps);
    }

    #[test]
    fn generations_soups_match(
        soup in prop::collection::btree_map(interior(), 1u8..4, 0..80),
        steps in 1usize..8,
    ) {
        // SteepleChase: B2/S345 with 4 states.
        check(
            || RuleTable::generations(&[2], &[3, 4, 5], 4).unwrap(),
            soup,
            steps,
        );
    }

    #[test]
    fn lava_soups_match(
        soup in prop::collection::btree_map(interior(), 1u8..8, 0..80),
        steps in 1usize..8,
    ) {
        // Lava: B45678/S12345 with 8 states.
        check(
            || RuleTable::generations(&[4, 5, 6, 7, 8], &[1, 2, 3, 4, 5], 8).unwrap(),
            soup,
            steps,
        );
    }
}
