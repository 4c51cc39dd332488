//! Dense bounded universe.
//!
//! A plain `width * height` byte array advanced by brute force, with the
//! world dead outside the bounds. Far too slow and small for real runs; it
//! exists as an independently-written oracle for the sparse engine and as a
//! simple harness for trying out rule tables.

use crate::error::GridError;
use crate::rule::RuleTable;

use super::Universe;

pub struct DenseLife {
    rule: RuleTable,
    width: usize,
    height: usize,
    cells: Vec<u8>,
    scratch: Vec<u8>,
}

impl DenseLife {
    pub fn new(rule: RuleTable, width: usize, height: usize) -> Self {
        Self {
            rule,
            width,
            height,
            cells: vec![0; width * height],
            scratch: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.cells[y as usize * self.width + x as usize]
    }
}

impl Universe for DenseLife {
    fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn states(&self) -> usize {
        self.rule.states()
    }

    fn set_rule(&mut self, rule: RuleTable) {
        self.rule = rule;
        self.clear();
    }

    /// Writes outside the bounds are dropped; the dense world simply does
    /// not have those cells.
    fn set(&mut self, x: i32, y: i32, state: u8) -> Result<(), GridError> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.cells[y as usize * self.width + x as usize] = state;
        }
        Ok(())
    }

    fn get(&self, x: i32, y: i32) -> u8 {
        self.at(x, y)
    }

    fn next_generation(&mut self) -> Result<(), GridError> {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let neighbors = [
                    self.at(x - 1, y - 1),
                    self.at(x, y - 1),
                    self.at(x + 1, y - 1),
                    self.at(x - 1, y),
                    self.at(x + 1, y),
                    self.at(x - 1, y + 1),
                    self.at(x, y + 1),
                    self.at(x + 1, y + 1),
                    self.at(x, y),
                ];
                self.scratch[y as usize * self.width + x as usize] =
                    self.rule.transition(&neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        Ok(())
    }

    fn for_each_live(&self, visit: &mut dyn FnMut(i32, i32, u8)) {
        for y in 0..self.height {
            for x in 0..self.width {
                let state = self.cells[y * self.width + x];
                if state != 0 {
                    visit(x as i32, y as i32, state);
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn live(u: &DenseLife) -> Vec<(i32, i32, u8)> {
        let mut cells = Vec::new();
        u.for_each_live(&mut |x, y, s| cells.push((x, y, s)));
        cells
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut u = DenseLife::new(RuleTable::conway(), 5, 5);
        for x in 1..4 {
            u.set(x, 2, 1).unwrap();
        }
        u.next_generation().unwrap();
        assert_eq!(live(&u), vec![(2, 1, 1), (2, 2, 1), (2, 3, 1)]);
        u.next_generation().unwrap();
        assert_eq!(live(&u), vec![(1, 2, 1), (2, 2, 1), (3, 2, 1)]);
    }

    #[test]
    fn test_block_is_still() {
        let mut u = DenseLife::new(RuleTable::conway(), 4, 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            u.set(x, y, 1).unwrap();
        }
        let before = live(&u);
        u.next_generation().unwrap();
        assert_eq!(live(&u), before);
    }

    #[test]
    fn test_world_is_dead_outside_bounds() {
        // A blinker against the edge loses its off-grid birth.
        let mut u = DenseLife::new(RuleTable::conway(), 3, 1);
        for x in 0..3 {
            u.set(x, 0, 1).unwrap();
        }
        u.next_generation().unwrap();
        assert_eq!(live(&u), vec![(1, 0, 1)]);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut u = DenseLife::new(RuleTable::conway(), 3, 3);
        u.set(-1, 0, 1).unwrap();
        u.set(0, 7, 1).unwrap();
        assert!(live(&u).is_empty());
    }

    #[test]
    fn test_generations_decay_chain() {
        // SteepleChase: B2/S345, 4 states. A lone state-1 cell with no
        // neighbors starts decaying instead of dying outright.
        let rule = RuleTable::generations(&[2], &[3, 4, 5], 4).unwrap();
        let mut u = DenseLife::new(rule, 3, 3);
        u.set(1, 1, 1).unwrap();
        u.next_generation().unwrap();
        assert_eq!(u.get(1, 1), 2);
        u.next_generation().unwrap();
        assert_eq!(u.get(1, 1), 3);
        u.next_generation().unwrap();
        assert_eq!(u.get(1, 1), 0);
    }
}
