//! polylife - sparse multi-state cellular automata with live display.
//!
//! An engine for the Life family of cellular automata over an effectively
//! unbounded plane. Generations are stored as append-only packed sparse
//! grids and advanced by a merge scan whose cost tracks the live
//! population, not the board size. Rules are data: a nine-deep transition
//! table traversed once per candidate cell, covering classic Life,
//! Generations-style decay rules and colorised multi-state variants.
//!
//! # Example
//!
//! ```no_run
//! use polylife::{
//!     CaptureDisplay, LifeEngine, NullClock, PatternDecoder, RuleTable, RunContext,
//!     SparseLife, Viewport,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = LifeEngine::new(
//!     SparseLife::new(RuleTable::conway()),
//!     Viewport::new(-32, -32, 64, 64),
//! );
//! PatternDecoder::new(0, 0).decode_str("bob$2bo$3o!", engine.universe_mut())?;
//!
//! let mut display = CaptureDisplay::new(64, 64);
//! let mut clock = NullClock;
//! let outcome = engine.run(&mut RunContext::new(&mut display, &mut clock))?;
//! println!("stopped after {} generations: {:?}", outcome.steps, outcome.reason);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod rule;
pub mod seed;
pub mod types;

pub use display::{CaptureDisplay, DisplayAdapter, TerminalDisplay};
pub use engine::{
    Clock, DenseLife, LifeEngine, NullClock, RunConfig, RunContext, RunOutcome, SparseLife,
    StopReason, SystemClock, Universe,
};
pub use error::{EngineError, GridError, RuleError};
pub use grid::{OverflowPolicy, SparseGrid};
pub use pattern::{ByteSource, PatternDecoder, SliceSource};
pub use rule::{niemiec, RuleTable, DEFAULT_PALETTE, LAVA_PALETTE, STEEPLECHASE_PALETTE};
pub use seed::fill_random;
pub use types::{Rgb, Viewport};
