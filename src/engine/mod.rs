//! Universe implementations and the run loop.
//!
//! [`SparseLife`] is the real engine: two append-only packed grids advanced
//! by a single merge scan over live rows, so cost tracks the population and
//! the plane is effectively unbounded. [`DenseLife`] is a small bounded
//! array used as an oracle. [`LifeEngine`] wraps a universe with a viewport,
//! a color map and the frame loop, talking to the outside world only
//! through the [`RunContext`] handed to [`LifeEngine::run`].

mod dense;
mod window;

pub use dense::DenseLife;

use std::io;
use std::mem;
use std::time::Duration;

use log::debug;

use crate::display::DisplayAdapter;
use crate::error::{EngineError, GridError};
use crate::grid::{LiveCells, OverflowPolicy, RowCursor, RowSpan, SparseGrid};
use crate::rule::{RuleTable, DEFAULT_PALETTE};
use crate::types::{Rgb, Viewport};

use window::NeighborWindow;

/// Default run arena size, in packed runs per generation.
const DEFAULT_RUN_CAPACITY: usize = 4096;

// =============================================================================
// Universe
// =============================================================================

/// A cell universe that can be seeded, stepped and enumerated.
///
/// Coordinates are signed and unbounded; implementations may clip.
pub trait Universe {
    /// Kill every cell.
    fn clear(&mut self);

    /// Number of cell states of the installed rule (dead included).
    fn states(&self) -> usize;

    /// Replace the rule. Clears the universe: the packed representation is
    /// sized for the rule's state count.
    fn set_rule(&mut self, rule: RuleTable);

    /// Seed one cell. Sparse universes require raster order across calls
    /// (y non-decreasing, x strictly increasing within a row).
    fn set(&mut self, x: i32, y: i32, state: u8) -> Result<(), GridError>;

    /// State at (x, y); 0 where nothing lives.
    fn get(&self, x: i32, y: i32) -> u8;

    /// Advance one generation.
    fn next_generation(&mut self) -> Result<(), GridError>;

    /// Visit every live cell in raster order.
    fn for_each_live(&self, visit: &mut dyn FnMut(i32, i32, u8));
}

// =============================================================================
// SparseLife
// =============================================================================

/// Sparse universe over the unbounded plane.
///
/// Holds two packed grids and ping-pongs between them: a generation is
/// computed by scanning the current grid's rows with three cursors (the row
/// above, the row itself, the row below) feeding a sliding 3x3 window, and
/// appending the window's output to the other grid in raster order. Rows
/// and columns with no live cell within reach are skipped entirely.
pub struct SparseLife {
    rule: RuleTable,
    front: SparseGrid,
    back: SparseGrid,
}

impl SparseLife {
    pub fn new(rule: RuleTable) -> Self {
        Self::with_capacity(rule, DEFAULT_RUN_CAPACITY, OverflowPolicy::default())
    }

    /// Universe with an explicit arena size and overflow policy.
    pub fn with_capacity(rule: RuleTable, capacity: usize, policy: OverflowPolicy) -> Self {
        let states = rule.states();
        Self {
            rule,
            front: SparseGrid::new(states, capacity, policy),
            back: SparseGrid::new(states, capacity, policy),
        }
    }

    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Live cells of the current generation, raster order.
    pub fn live_cells(&self) -> LiveCells<'_> {
        self.front.live_cells()
    }

    /// Number of packed runs in the current generation.
    pub fn run_count(&self) -> usize {
        self.front.run_count()
    }
}

impl Universe for SparseLife {
    fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    fn states(&self) -> usize {
        self.rule.states()
    }

    fn set_rule(&mut self, rule: RuleTable) {
        let states = rule.states();
        let capacity = self.front.capacity();
        let policy = self.front.policy();
        self.front = SparseGrid::new(states, capacity, policy);
        self.back = SparseGrid::new(states, capacity, policy);
        self.rule = rule;
    }

    fn set(&mut self, x: i32, y: i32, state: u8) -> Result<(), GridError> {
        self.front.append(x, y, state)
    }

    fn get(&self, x: i32, y: i32) -> u8 {
        self.front.get(x, y)
    }

    fn next_generation(&mut self) -> Result<(), GridError> {
        if self.front.is_empty() {
            return Ok(());
        }
        self.back.clear();
        {
            let rule = &self.rule;
            let front = &self.front;
            let back = &mut self.back;
            let rows = front.row_spans();

            let mut window = NeighborWindow::new(rule);
            // Index of the next stored row not yet picked up by the scan.
            let mut pending = 0usize;
            // Spans of the rows at and below the output row. Each row is
            // rescanned from its start as it serves the below/self/above
            // roles, so the loop carries spans and opens fresh cursors
            // per output row.
            let mut curr_span: Option<RowSpan> = None;
            let mut next_span: Option<RowSpan> = None;
            let mut y = 0i32;

            loop {
                let prev_span: Option<RowSpan>;
                if curr_span.is_none() && next_span.is_none() {
                    // Nothing within reach of the current y. Jump to one
                    // row above the next live row, where its cells first
                    // influence the output.
                    let Some(&span) = rows.get(pending) else {
                        break;
                    };
                    pending += 1;
                    prev_span = None;
                    curr_span = None;
                    next_span = Some(span);
                    y = span.y - 1;
                } else {
                    prev_span = curr_span;
                    curr_span = next_span;
                    y += 1;
                    next_span = match rows.get(pending) {
                        Some(&span) if span.y == y + 1 => {
                            pending += 1;
                            Some(span)
                        }
                        _ => None,
                    };
                }

                let mut prev = prev_span.map_or_else(RowCursor::empty, |s| front.cursor(s));
                let mut curr = curr_span.map_or_else(RowCursor::empty, |s| front.cursor(s));
                let mut next = next_span.map_or_else(RowCursor::empty, |s| front.cursor(s));

                window.start_row(y);
                loop {
                    let x = prev.x().min(curr.x()).min(next.x());
                    if x == i32::MAX {
                        break;
                    }
                    let above = prev.take_if_at(x);
                    let center = curr.take_if_at(x);
                    let below = next.take_if_at(x);
                    window.load(x, above, center, below, back)?;
                }
                window.finish_row(back)?;
            }
        }
        mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    fn for_each_live(&self, visit: &mut dyn FnMut(i32, i32, u8)) {
        for (x, y, state) in self.front.live_cells() {
            visit(x, y, state);
        }
    }
}

// =============================================================================
// Run context
// =============================================================================

/// Frame pacing source. Abstracted so headless runs and tests can skip
/// real sleeps.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock pacing via `std::thread::sleep`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// No-op clock for headless runs and tests.
pub struct NullClock;

impl Clock for NullClock {
    fn sleep(&mut self, _duration: Duration) {}
}

/// Everything the run loop touches outside the universe itself.
pub struct RunContext<'a> {
    pub display: &'a mut dyn DisplayAdapter,
    pub clock: &'a mut dyn Clock,
}

impl<'a> RunContext<'a> {
    pub fn new(display: &'a mut dyn DisplayAdapter, clock: &'a mut dyn Clock) -> Self {
        Self { display, clock }
    }
}

// =============================================================================
// LifeEngine
// =============================================================================

/// Knobs for one run of the frame loop.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Hard stop after this many generations.
    pub max_steps: u32,
    /// Pause between frames.
    pub frame_delay: Duration,
    /// Extra pause after the seed frame, before stepping begins.
    pub initial_delay: Duration,
    /// Probe the frame checksum every this many generations. Nonzero.
    pub sample_interval: u32,
    /// Stop once more than this many consecutive probes are unchanged.
    pub stagnant_threshold: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: 8000,
            frame_delay: Duration::from_millis(20),
            initial_delay: Duration::ZERO,
            sample_interval: 12,
            stagnant_threshold: 10,
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `max_steps` generations were run.
    StepLimit,
    /// The viewport checksum stopped changing: the visible population is
    /// dead or settled into a short cycle.
    ///
    /// The probe compares samples `sample_interval` generations apart, so
    /// an oscillator whose period divides the interval also reads as
    /// stagnant. That is the intent: such a frame is just as boring to
    /// watch.
    Stagnant,
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Generations actually stepped.
    pub steps: u32,
    pub reason: StopReason,
}

#[derive(Debug, Clone, Copy)]
struct Pan {
    dx: i32,
    dy: i32,
    every: u32,
}

/// A universe wired to a viewport, a color map and the frame loop.
pub struct LifeEngine<U: Universe> {
    universe: U,
    viewport: Viewport,
    pan: Option<Pan>,
    colors: Vec<Rgb>,
    config: RunConfig,
}

/// State-indexed colors for a rule with `states` states; index 0 is the
/// background.
fn stock_color_map(states: usize) -> Vec<Rgb> {
    (0..states)
        .map(|s| match s {
            0 => Rgb::BLACK,
            // Cycle the live palette entries; never hand a live state the
            // background color.
            s => DEFAULT_PALETTE[1 + (s - 1) % (DEFAULT_PALETTE.len() - 1)],
        })
        .collect()
}

impl<U: Universe> LifeEngine<U> {
    pub fn new(universe: U, viewport: Viewport) -> Self {
        let colors = stock_color_map(universe.states());
        Self {
            universe,
            viewport,
            pan: None,
            colors,
            config: RunConfig::default(),
        }
    }

    pub fn universe(&self) -> &U {
        &self.universe
    }

    pub fn universe_mut(&mut self) -> &mut U {
        &mut self.universe
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RunConfig) {
        self.config = config;
    }

    /// Replace the rule; clears the universe and resets the color map to
    /// the stock palette for the new state count.
    pub fn set_rule(&mut self, rule: RuleTable) {
        self.universe.set_rule(rule);
        self.colors = stock_color_map(self.universe.states());
    }

    /// Install a state-indexed color map. Entry 0 is the background; states
    /// past the end of the map render white.
    pub fn set_color_map(&mut self, colors: &[Rgb]) {
        self.colors = colors.to_vec();
    }

    /// Slide the viewport by (dx, dy) every `every` generations.
    pub fn set_pan(&mut self, dx: i32, dy: i32, every: u32) {
        self.pan = Some(Pan {
            dx,
            dy,
            every: every.max(1),
        });
    }

    pub fn clear_pan(&mut self) {
        self.pan = None;
    }

    /// Draw the current generation and return the frame checksum.
    ///
    /// The checksum covers the state values of visible cells in raster
    /// order, not their positions. A pattern whose visible population is
    /// constant (a lone spaceship, say) therefore checksums the same every
    /// frame and will be reported stagnant by [`LifeEngine::run`].
    pub fn render(&self, display: &mut dyn DisplayAdapter) -> io::Result<u8> {
        display.clear_frame();
        let mut crc = 0u8;
        let viewport = self.viewport;
        let colors = &self.colors;
        self.universe.for_each_live(&mut |x, y, state| {
            let Some((lx, ly)) = viewport.to_local(x, y) else {
                return;
            };
            crc = crc8_update(crc, state);
            let color = colors.get(state as usize).copied().unwrap_or(Rgb::WHITE);
            display.draw_pixel(lx, ly, color);
        });
        display.present()?;
        Ok(crc)
    }

    /// Run generations until the step limit or the stagnation probe fires.
    ///
    /// The probe samples the viewport checksum every
    /// `config.sample_interval` generations and stops once more than
    /// `config.stagnant_threshold` consecutive samples match. An empty or
    /// fully-off-screen universe reads as stagnant too.
    pub fn run(&mut self, ctx: &mut RunContext<'_>) -> Result<RunOutcome, EngineError> {
        let cfg = self.config;
        let sample_interval = cfg.sample_interval.max(1);
        let mut last_crc = 0u8;
        let mut unchanged = 0u32;

        self.render(ctx.display)?;
        ctx.clock.sleep(cfg.initial_delay);

        for step in 1..=cfg.max_steps {
            ctx.clock.sleep(cfg.frame_delay);
            self.universe.next_generation()?;
            if let Some(pan) = self.pan {
                if step % pan.every == 0 {
                    self.viewport.pan(pan.dx, pan.dy);
                }
            }
            let crc = self.render(ctx.display)?;
            if step % sample_interval == 0 {
                if crc == last_crc {
                    unchanged += 1;
                } else {
                    unchanged = 0;
                }
                last_crc = crc;
                if unchanged > cfg.stagnant_threshold {
                    debug!("frame checksum settled, stopping at step {step}");
                    return Ok(RunOutcome {
                        steps: step,
                        reason: StopReason::Stagnant,
                    });
                }
            }
        }
        debug!("step limit reached at {} generations", cfg.max_steps);
        Ok(RunOutcome {
            steps: cfg.max_steps,
            reason: StopReason::StepLimit,
        })
    }
}

/// Dallas/Maxim CRC-8 (polynomial 0x8C, reflected), one byte at a time.
fn crc8_update(mut crc: u8, mut value: u8) -> u8 {
    for _ in 0..8 {
        let mix = (crc ^ value) & 0x01;
        crc >>= 1;
        if mix != 0 {
            crc ^= 0x8C;
        }
        value >>= 1;
    }
    crc
}

// =============================================================================
// Tests
// =============================================================================
