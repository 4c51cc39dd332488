//! Run-length-encoded pattern loading.
//!
//! Reads the common RLE pattern text: a run count followed by a tag, where
//! `b` or `.` is a run of dead cells, `o` a run of live cells, `A`..`Z` a
//! run of cells in state `1 + (letter - 'A')`, `$` ends the row, and `!`
//! ends the pattern. A missing count means 1. Whitespace may appear
//! anywhere; other bytes are skipped (and drop any pending count), which
//! makes the usual `#` comment and `x = ..` header lines harmless as long
//! as they contain no digits-before-tag sequences of their own, so strip
//! headers before feeding a full file.
//!
//! Cells are emitted in raster order, which is exactly what sparse
//! universes require from their seeding calls.

use crate::engine::Universe;
use crate::error::GridError;

// =============================================================================
// Byte sources
// =============================================================================

/// Minimal pull-based byte stream for decoders.
pub trait ByteSource {
    /// Next byte without consuming it.
    fn peek(&mut self) -> Option<u8>;

    /// Consume and return the next byte.
    fn read(&mut self) -> Option<u8>;
}

/// [`ByteSource`] over a byte slice.
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl ByteSource for SliceSource<'_> {
    fn peek(&mut self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn read(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// RLE pattern decoder writing into a universe at a fixed origin.
pub struct PatternDecoder {
    origin_x: i32,
    origin_y: i32,
    /// State written for `o` runs.
    default_state: u8,
}

impl PatternDecoder {
    /// Decoder placing the pattern's top-left corner at (x, y). `o` cells
    /// are written as state 1.
    pub fn new(origin_x: i32, origin_y: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            default_state: 1,
        }
    }

    /// Use `state` for `o` runs instead of 1.
    pub fn with_default_state(mut self, state: u8) -> Self {
        self.default_state = state;
        self
    }

    /// Decode `source` into `universe`.
    ///
    /// State letters must name states the installed rule has; the universe
    /// must not already hold cells at or past the target region, or the
    /// raster-order seeding contract fails.
    pub fn decode<S: ByteSource>(
        &self,
        mut source: S,
        universe: &mut dyn Universe,
    ) -> Result<(), GridError> {
        let mut x = self.origin_x;
        let mut y = self.origin_y;
        let mut count: u32 = 0;

        while let Some(byte) = source.read() {
            match byte {
                b'0'..=b'9' => {
                    count = count * 10 + u32::from(byte - b'0');
                    continue;
                }
                byte if byte.is_ascii_whitespace() => continue,
                b'!' => break,
                _ => {}
            }
            let n = count.max(1) as i32;
            match byte {
                b'b' | b'.' => x += n,
                b'o' => {
                    for _ in 0..n {
                        universe.set(x, y, self.default_state)?;
                        x += 1;
                    }
                }
                b'A'..=b'Z' => {
                    let state = 1 + (byte - b'A');
                    for _ in 0..n {
                        universe.set(x, y, state)?;
                        x += 1;
                    }
                }
                b'$' => {
                    y += n;
                    x = self.origin_x;
                }
                _ => {} // unknown tag: skip, count already dropped
            }
            count = 0;
        }
        Ok(())
    }

    /// Decode pattern text into `universe`.
    pub fn decode_str(&self, text: &str, universe: &mut dyn Universe) -> Result<(), GridError> {
        self.decode(SliceSource::from(text), universe)
    }
}

// =============================================================================
// Tests
// =============================================================================
