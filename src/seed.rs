//! Random universe seeding.

use rand::Rng;

use crate::engine::Universe;
use crate::error::GridError;
use crate::types::Viewport;

/// Fill `region` with a random soup.
///
/// Each cell independently comes alive with probability `density`; live
/// states are drawn uniformly from the rule's nonzero states. Cells are
/// written in raster order, so the universe must not already hold cells at
/// or past the region.
pub fn fill_random<U, R>(
    universe: &mut U,
    region: Viewport,
    density: f64,
    rng: &mut R,
) -> Result<(), GridError>
where
    U: Universe + ?Sized,
    R: Rng + ?Sized,
{
    let states = universe.states();
    for dy in 0..region.height {
        for dx in 0..region.width {
            if rng.gen_range(0.0..1.0) >= density {
                continue;
            }
            let state = if states > 2 {
                rng.gen_range(1..states as u32) as u8
            } else {
                1
            };
            universe.set(region.x + i32::from(dx), region.y + i32::from(dy), state)?;
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SparseLife;
    use crate::rule::RuleTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn live(u: &SparseLife) -> Vec<(i32, i32, u8)> {
        u.live_cells().collect()
    }

    #[test]
    fn test_zero_density_fills_nothing() {
        let mut u = SparseLife::new(RuleTable::conway());
        let mut rng = StdRng::seed_from_u64(7);
        fill_random(&mut u, Viewport::new(0, 0, 16, 16), 0.0, &mut rng).unwrap();
        assert!(live(&u).is_empty());
    }

    #[test]
    fn test_full_density_fills_region() {
        let mut u = SparseLife::new(RuleTable::conway());
        let mut rng = StdRng::seed_from_u64(7);
        fill_random(&mut u, Viewport::new(-2, -2, 4, 4), 1.0, &mut rng).unwrap();
        assert_eq!(live(&u).len(), 16);
    }

    #[test]
    fn test_states_stay_in_rule_range() {
        let mut u = SparseLife::new(crate::rule::niemiec());
        let mut rng = StdRng::seed_from_u64(42);
        fill_random(&mut u, Viewport::new(0, 0, 32, 32), 0.5, &mut rng).unwrap();
        for (x, y, state) in live(&u) {
            assert!((1..9).contains(&state), "state {state} at ({x}, {y})");
            assert!((0..32).contains(&x) && (0..32).contains(&y));
        }
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let region = Viewport::new(0, 0, 24, 24);
        let mut a = SparseLife::new(RuleTable::conway());
        let mut b = SparseLife::new(RuleTable::conway());
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        fill_random(&mut a, region, 0.3, &mut rng_a).unwrap();
        fill_random(&mut b, region, 0.3, &mut rng_b).unwrap();
        assert_eq!(live(&a), live(&b));
        assert!(!live(&a).is_empty());
    }
}
