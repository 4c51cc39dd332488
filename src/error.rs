//! Error types for polylife.

use std::io;

use thiserror::Error;

/// Errors from the sparse grid's append path.
///
/// Both variants are fail-fast: an out-of-order write or an overrun of a
/// fixed arena would corrupt the packed representation if allowed through,
/// so they surface at the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Insertion violated the raster-order contract (y must be
    /// non-decreasing, x strictly increasing within a row).
    #[error("out-of-order insertion at ({x}, {y}); last was ({last_x}, {last_y})")]
    OutOfOrder {
        x: i32,
        y: i32,
        last_x: i32,
        last_y: i32,
    },

    /// The run arena is full and the grid was built with
    /// `OverflowPolicy::Fail`.
    #[error("grid arena full: capacity {capacity} runs")]
    CapacityExceeded {
        /// Arena capacity in runs.
        capacity: usize,
    },
}

/// Errors detected while installing a rule table.
///
/// A malformed table is a construction-time defect; `RuleTable::new`
/// rejects it so traversal never has to bounds-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The table must have at least one node and fewer than `u16::MAX` nodes.
    #[error("rule table has invalid node count {nodes}")]
    BadNodeCount { nodes: usize },

    /// State count must be at least 2 (dead plus one live state) and at
    /// most 256 so states fit a byte.
    #[error("rule table has invalid state count {states}")]
    BadStateCount { states: usize },

    /// Root node id is not a valid row.
    #[error("rule table root {root} out of range ({nodes} nodes)")]
    RootOutOfRange { root: u16, nodes: usize },

    /// A node reachable within the first 8 lookups points past the table.
    #[error("rule node {node} at depth {depth} out of range ({nodes} nodes)")]
    NodeOutOfRange { node: u16, depth: u8, nodes: usize },

    /// A node reachable at the final lookup yields a state outside [0, N).
    #[error("rule terminal {state} exceeds state count {states}")]
    StateOutOfRange { state: u16, states: usize },
}

/// Anything that can end a run early.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("universe update failed: {0}")]
    Grid(#[from] GridError),

    #[error("display I/O failed: {0}")]
    Display(#[from] io::Error),
}
