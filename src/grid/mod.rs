//! Append-only packed sparse grid.
//!
//! One generation's live cells, grouped into rows of bit-packed "runs".
//! A run is a 32-bit word holding up to `32 / bits_per_state` consecutive
//! cell states starting at some x; zero fields inside a run are dead cells.
//! Rows appear in strictly increasing y, runs within a row in strictly
//! increasing, non-overlapping x.
//!
//! The structure is write-once per generation: producers append cells in
//! raster order (y non-decreasing, x strictly increasing within a row) and
//! the packing algorithm relies on it. The contract is checked - an
//! out-of-order append is a caller bug and fails fast instead of silently
//! corrupting the packed words.
//!
//! Storage is an arena sized up front so the generation-advance hot path
//! allocates nothing. What happens when a generation outgrows it is an
//! explicit [`OverflowPolicy`], not a silent overrun.

mod cursor;

pub(crate) use cursor::RowCursor;

use crate::error::GridError;

use log::debug;

/// Bits in one packed run word.
const WORD_BITS: usize = 32;

/// What to do when a generation needs more runs than the arena holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Double the arena and keep going (hosted default).
    #[default]
    Grow,
    /// Report [`GridError::CapacityExceeded`] and fail the append.
    Fail,
}

/// One packed span of consecutive cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    /// X of the first field in the word.
    pub x: i32,
    /// Bit-packed states, field 0 at the lowest bits.
    pub bits: u32,
}

/// One nonempty row: its y plus a span into the run arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowSpan {
    pub y: i32,
    /// First run index.
    pub start: u32,
    /// Number of runs.
    pub len: u32,
}

/// Append-only sparse grid of one generation's live cells.
pub struct SparseGrid {
    rows: Vec<RowSpan>,
    runs: Vec<Run>,
    /// Field width; power of two so fields never straddle words.
    bits_per_state: u8,
    /// Cells per run word: `32 / bits_per_state`.
    word_capacity: u8,
    /// Field mask: `(1 << bits_per_state) - 1` (all ones for 8-bit fields).
    mask: u32,
    policy: OverflowPolicy,
    capacity: usize,
    /// Raster-order watermarks for the append contract.
    last_x: i32,
    last_y: i32,
}

/// Smallest power-of-two field width that can hold `states` distinct values.
fn bits_for_states(states: usize) -> u8 {
    match states {
        0..=2 => 1,
        3..=4 => 2,
        5..=16 => 4,
        _ => 8,
    }
}

impl SparseGrid {
    /// Create an empty grid for a rule with `states` cell states.
    ///
    /// `capacity` is the run arena size; one run covers up to
    /// `32 / bits_per_state` consecutive cells.
    pub fn new(states: usize, capacity: usize, policy: OverflowPolicy) -> Self {
        let bits_per_state = bits_for_states(states);
        let word_capacity = (WORD_BITS / bits_per_state as usize) as u8;
        let mask = (1u32 << bits_per_state) - 1;
        Self {
            rows: Vec::with_capacity(capacity),
            runs: Vec::with_capacity(capacity),
            bits_per_state,
            word_capacity,
            mask,
            policy,
            capacity,
            last_x: i32::MIN,
            last_y: i32::MIN,
        }
    }

    /// Reset to empty without releasing the arena. O(1).
    pub fn clear(&mut self) {
        self.rows.clear();
        self.runs.clear();
        self.last_x = i32::MIN;
        self.last_y = i32::MIN;
    }

    /// True if no live cell has been appended since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs currently stored.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Current run arena capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Overflow policy the grid was built with.
    #[inline]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Append one cell in raster order.
    ///
    /// Requires `y > last_y`, or `y == last_y` and `x > last_x`; anything
    /// else is an ordering-contract violation. A dead state is accepted and
    /// ignored so callers can feed rule output straight through.
    pub fn append(&mut self, x: i32, y: i32, state: u8) -> Result<(), GridError> {
        if state == 0 {
            return Ok(());
        }
        debug_assert!(
            (state as u32) <= self.mask,
            "state {state} does not fit {} bits",
            self.bits_per_state
        );

        if y < self.last_y || (y == self.last_y && x <= self.last_x) {
            return Err(GridError::OutOfOrder {
                x,
                y,
                last_x: self.last_x,
                last_y: self.last_y,
            });
        }

        if y > self.last_y {
            // New row; its first run starts here.
            self.reserve_slot()?;
            self.rows.push(RowSpan {
                y,
                start: self.runs.len() as u32,
                len: 1,
            });
            self.runs.push(Run {
                x,
                bits: state as u32,
            });
            self.last_y = y;
        } else {
            // Same row: pack into the open run or start a new one.
            let run = self.runs.last_mut().expect("row exists, so a run exists");
            let offset = x - run.x;
            if offset < self.word_capacity as i32 {
                run.bits |= (state as u32) << (self.bits_per_state as u32 * offset as u32);
            } else {
                self.reserve_slot()?;
                self.runs.push(Run {
                    x,
                    bits: state as u32,
                });
                let row = self.rows.last_mut().expect("row exists");
                row.len += 1;
            }
        }
        self.last_x = x;
        Ok(())
    }

    /// Make room for one more run (and potentially one more row).
    fn reserve_slot(&mut self) -> Result<(), GridError> {
        if self.runs.len() < self.capacity {
            return Ok(());
        }
        match self.policy {
            OverflowPolicy::Grow => {
                let new_capacity = self.capacity * 2;
                debug!(
                    "grid arena full at {} runs, growing to {}",
                    self.capacity, new_capacity
                );
                self.runs.reserve(new_capacity - self.runs.len());
                self.rows.reserve(new_capacity - self.rows.len());
                self.capacity = new_capacity;
                Ok(())
            }
            OverflowPolicy::Fail => Err(GridError::CapacityExceeded {
                capacity: self.capacity,
            }),
        }
    }

    /// State at (x, y); 0 for any cell not stored.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        let Ok(row_idx) = self.rows.binary_search_by_key(&y, |r| r.y) else {
            return 0;
        };
        let row = self.rows[row_idx];
        let runs = &self.runs[row.start as usize..(row.start + row.len) as usize];
        // Last run starting at or before x, if any.
        let idx = match runs.binary_search_by_key(&x, |r| r.x) {
            Ok(i) => i,
            Err(0) => return 0,
            Err(i) => i - 1,
        };
        let run = runs[idx];
        let offset = x - run.x;
        if offset >= self.word_capacity as i32 {
            return 0;
        }
        ((run.bits >> (self.bits_per_state as u32 * offset as u32)) & self.mask) as u8
    }

    /// Lazy sequence of live cells in storage (raster) order.
    ///
    /// The iterator is finite and cannot be rewound; call `live_cells`
    /// again for another pass.
    pub fn live_cells(&self) -> LiveCells<'_> {
        LiveCells {
            grid: self,
            row: 0,
            run: 0,
            word: 0,
            x: 0,
        }
    }

    // Row access for the generation-advance scan.

    pub(crate) fn row_spans(&self) -> &[RowSpan] {
        &self.rows
    }

    pub(crate) fn cursor(&self, row: RowSpan) -> RowCursor<'_> {
        RowCursor::new(
            &self.runs[row.start as usize..(row.start + row.len) as usize],
            self.bits_per_state,
            self.mask,
        )
    }
}

// =============================================================================
// Live-cell iteration
// =============================================================================

/// Iterator over `(x, y, state)` triples in raster order.
pub struct LiveCells<'a> {
    grid: &'a SparseGrid,
    /// Next row index once the current run is drained.
    row: usize,
    /// Runs consumed within the current row.
    run: usize,
    /// Remaining bits of the current word; field 0 is the cell at `x`.
    word: u32,
    x: i32,
}

impl Iterator for LiveCells<'_> {
    type Item = (i32, i32, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.word != 0 {
                let state = (self.word & self.grid.mask) as u8;
                let x = self.x;
                self.word >>= self.grid.bits_per_state as u32;
                self.x += 1;
                if state != 0 {
                    let y = self.grid.rows[self.row].y;
                    return Some((x, y, state));
                }
                continue;
            }
            // Advance to the next run, moving to the next row as needed.
            let row = *self.grid.rows.get(self.row)?;
            if self.run == row.len as usize {
                self.row += 1;
                self.run = 0;
                continue;
            }
            let run = self.grid.runs[row.start as usize + self.run];
            self.run += 1;
            self.word = run.bits;
            self.x = run.x;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(states: usize) -> SparseGrid {
        SparseGrid::new(states, 64, OverflowPolicy::Grow)
    }

    fn collect(g: &SparseGrid) -> Vec<(i32, i32, u8)> {
        g.live_cells().collect()
    }

    #[test]
    fn test_bits_for_states() {
        assert_eq!(bits_for_states(2), 1);
        assert_eq!(bits_for_states(4), 2);
        assert_eq!(bits_for_states(9), 4);
        assert_eq!(bits_for_states(16), 4);
        assert_eq!(bits_for_states(17), 8);
        assert_eq!(bits_for_states(256), 8);
    }

    #[test]
    fn test_append_packs_one_run() {
        let mut g = grid(9); // 4 bits -> 8 cells per run
        for x in 0..8 {
            g.append(x, 5, (x + 1) as u8).unwrap();
        }
        assert_eq!(g.run_count(), 1);
        let cells = collect(&g);
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], (0, 5, 1));
        assert_eq!(cells[7], (7, 5, 8));
    }

    #[test]
    fn test_append_with_gap_inside_run() {
        let mut g = grid(9);
        g.append(0, 0, 1).unwrap();
        g.append(5, 0, 2).unwrap();
        assert_eq!(g.run_count(), 1);
        assert_eq!(collect(&g), vec![(0, 0, 1), (5, 0, 2)]);
        assert_eq!(g.get(3, 0), 0);
    }

    #[test]
    fn test_append_starts_new_run_past_word() {
        let mut g = grid(9);
        g.append(0, 0, 1).unwrap();
        g.append(8, 0, 2).unwrap(); // field 8 would not fit a 8-cell word
        assert_eq!(g.run_count(), 2);
        assert_eq!(collect(&g), vec![(0, 0, 1), (8, 0, 2)]);
    }

    #[test]
    fn test_two_state_packs_32_cells() {
        let mut g = grid(2);
        for x in 0..32 {
            g.append(x, 0, 1).unwrap();
        }
        assert_eq!(g.run_count(), 1);
        g.append(32, 0, 1).unwrap();
        assert_eq!(g.run_count(), 2);
    }

    #[test]
    fn test_rows_and_negative_coordinates() {
        let mut g = grid(9);
        g.append(-3, -7, 4).unwrap();
        g.append(-1, -7, 2).unwrap();
        g.append(-5, 0, 1).unwrap();
        assert_eq!(collect(&g), vec![(-3, -7, 4), (-1, -7, 2), (-5, 0, 1)]);
        assert_eq!(g.get(-3, -7), 4);
        assert_eq!(g.get(-2, -7), 0);
        assert_eq!(g.get(-5, 0), 1);
    }

    #[test]
    fn test_dead_state_is_ignored() {
        let mut g = grid(9);
        g.append(0, 0, 0).unwrap();
        assert!(g.is_empty());
        // A zero write does not move the watermark.
        g.append(0, 0, 3).unwrap();
        assert_eq!(collect(&g), vec![(0, 0, 3)]);
    }

    #[test]
    fn test_out_of_order_same_row() {
        let mut g = grid(9);
        g.append(4, 0, 1).unwrap();
        let err = g.append(4, 0, 1).unwrap_err();
        assert!(matches!(err, GridError::OutOfOrder { x: 4, y: 0, .. }));
        assert!(g.append(2, 0, 1).is_err());
    }

    #[test]
    fn test_out_of_order_earlier_row() {
        let mut g = grid(9);
        g.append(0, 3, 1).unwrap();
        let err = g.append(0, 2, 1).unwrap_err();
        assert!(matches!(err, GridError::OutOfOrder { y: 2, .. }));
    }

    #[test]
    fn test_fail_policy_reports_capacity() {
        let mut g = SparseGrid::new(9, 2, OverflowPolicy::Fail);
        g.append(0, 0, 1).unwrap();
        g.append(0, 1, 1).unwrap();
        let err = g.append(0, 2, 1).unwrap_err();
        assert_eq!(err, GridError::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_grow_policy_doubles_arena() {
        let mut g = SparseGrid::new(9, 2, OverflowPolicy::Grow);
        for y in 0..5 {
            g.append(0, y, 1).unwrap();
        }
        assert!(g.capacity() >= 5);
        assert_eq!(collect(&g).len(), 5);
    }

    #[test]
    fn test_clear_resets_watermarks() {
        let mut g = grid(9);
        g.append(3, 3, 1).unwrap();
        g.clear();
        assert!(g.is_empty());
        // Earlier coordinates are fine again after clear.
        g.append(0, 0, 1).unwrap();
        assert_eq!(collect(&g), vec![(0, 0, 1)]);
    }

    #[test]
    fn test_iteration_is_restartable_from_scratch() {
        let mut g = grid(9);
        g.append(1, 1, 2).unwrap();
        g.append(2, 1, 3).unwrap();
        let first: Vec<_> = g.live_cells().collect();
        let second: Vec<_> = g.live_cells().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_storage_order_invariant() {
        let mut g = grid(9);
        let cells = [(0, -2, 1), (7, -2, 2), (9, -2, 3), (-4, 0, 1), (30, 5, 8)];
        for (x, y, s) in cells {
            g.append(x, y, s).unwrap();
        }
        let out = collect(&g);
        assert_eq!(out.len(), cells.len());
        for pair in out.windows(2) {
            let (x0, y0, _) = pair[0];
            let (x1, y1, _) = pair[1];
            assert!(y1 > y0 || (y1 == y0 && x1 > x0), "raster order violated");
        }
    }
}
