//! Row cursor for the generation-advance scan.
//!
//! A cursor walks one row's runs left to right, always positioned on a live
//! cell. The scan protocol is minimal: report the current x (or `i32::MAX`
//! when exhausted) and consume the value there if asked for that exact
//! column. The neighbor-window loop drives three of these in lockstep.

use super::Run;

/// Cursor over the live cells of a single row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowCursor<'a> {
    /// Runs not yet entered.
    runs: &'a [Run],
    /// Remaining fields of the current run word; field 0 is the cell at `x`.
    word: u32,
    /// X of the live cell the cursor sits on; `i32::MAX` when exhausted.
    x: i32,
    bits_per_state: u8,
    mask: u32,
}

impl<'a> RowCursor<'a> {
    /// Cursor over no cells at all, for rows that do not exist.
    pub fn empty() -> Self {
        Self {
            runs: &[],
            word: 0,
            x: i32::MAX,
            bits_per_state: 0,
            mask: 0,
        }
    }

    /// Cursor positioned on the first live cell of `runs`.
    pub fn new(runs: &'a [Run], bits_per_state: u8, mask: u32) -> Self {
        let mut cursor = Self {
            runs,
            word: 0,
            x: i32::MAX,
            bits_per_state,
            mask,
        };
        cursor.enter_next_run();
        cursor
    }

    /// X of the live cell the cursor sits on, or `i32::MAX` when exhausted.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Consume and return the state at `x` if the cursor sits there,
    /// otherwise report dead and stay put.
    #[inline]
    pub fn take_if_at(&mut self, x: i32) -> u8 {
        if self.x != x {
            return 0;
        }
        let state = (self.word & self.mask) as u8;
        self.advance();
        state
    }

    /// Step to the next live cell.
    fn advance(&mut self) {
        loop {
            self.word >>= self.bits_per_state as u32;
            if self.word == 0 {
                self.enter_next_run();
                return;
            }
            self.x += 1;
            if self.word & self.mask != 0 {
                return;
            }
        }
    }

    /// Load the next run, skipping to exhausted when none remain.
    fn enter_next_run(&mut self) {
        let Some((run, rest)) = self.runs.split_first() else {
            self.x = i32::MAX;
            self.word = 0;
            return;
        };
        self.runs = rest;
        self.word = run.bits;
        self.x = run.x;
        // A run's first field is always live (runs open on a live append),
        // but skip leading dead fields anyway.
        while self.word != 0 && self.word & self.mask == 0 {
            self.word >>= self.bits_per_state as u32;
            self.x += 1;
        }
        if self.word == 0 {
            self.enter_next_run();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{OverflowPolicy, SparseGrid};

    fn row_cursor(g: &SparseGrid) -> RowCursor<'_> {
        let row = g.row_spans()[0];
        g.cursor(row)
    }

    #[test]
    fn test_empty_cursor() {
        let mut c = RowCursor::empty();
        assert_eq!(c.x(), i32::MAX);
        assert_eq!(c.take_if_at(0), 0);
    }

    #[test]
    fn test_walks_live_cells_with_gaps() {
        let mut g = SparseGrid::new(9, 16, OverflowPolicy::Grow);
        g.append(2, 0, 5).unwrap();
        g.append(4, 0, 1).unwrap();
        g.append(20, 0, 7).unwrap();

        let mut c = row_cursor(&g);
        assert_eq!(c.x(), 2);
        // Asking for a column the cursor is not at reports dead and stays.
        assert_eq!(c.take_if_at(1), 0);
        assert_eq!(c.x(), 2);
        assert_eq!(c.take_if_at(2), 5);
        assert_eq!(c.x(), 4);
        assert_eq!(c.take_if_at(4), 1);
        // Run boundary crossed transparently.
        assert_eq!(c.x(), 20);
        assert_eq!(c.take_if_at(20), 7);
        assert_eq!(c.x(), i32::MAX);
    }

    #[test]
    fn test_single_bit_states() {
        let mut g = SparseGrid::new(2, 16, OverflowPolicy::Grow);
        for x in [0, 1, 31, 40] {
            g.append(x, 0, 1).unwrap();
        }
        let mut c = row_cursor(&g);
        for x in [0, 1, 31, 40] {
            assert_eq!(c.x(), x);
            assert_eq!(c.take_if_at(x), 1);
        }
        assert_eq!(c.x(), i32::MAX);
    }
}
