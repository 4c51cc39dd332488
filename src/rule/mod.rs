//! Rule tables: finite-automaton transition functions.
//!
//! A [`RuleTable`] encodes a cellular-automaton transition rule as a table of
//! automaton nodes. `transition` starts at the root node and performs nine
//! sequential lookups, one per neighborhood slot, threading the node id
//! through each column; the id reached after the final lookup is the next
//! cell state. Swapping the table data swaps the rule - two-state Life,
//! multi-state Generations decay, colorized variants - without touching the
//! traversal.
//!
//! # Neighborhood order
//!
//! The nine inputs are consumed in a fixed order:
//!
//! ```text
//! NW, N, NE, W, E, SW, S, SE, self
//! ```
//!
//! Every producer of neighbor arrays in this crate uses the same order.

mod tables;

pub use tables::{niemiec, DEFAULT_PALETTE, LAVA_PALETTE, STEEPLECHASE_PALETTE};

use crate::error::RuleError;

/// Slot indices of the 3x3 neighborhood in traversal order.
pub const NEIGHBOR_SLOTS: usize = 9;

/// An immutable rule table: `nodes x states` transition matrix plus a root.
///
/// Tables are validated on construction - every node reachable within the
/// first eight lookups must be a valid row for any neighbor value, and every
/// id reachable at the ninth lookup must be a valid cell state. After that,
/// `transition` never bounds-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Number of cell states N; neighbor values must lie in [0, N).
    states: usize,
    /// Row to start traversal from.
    root: u16,
    /// Row-major `node_count x states` matrix.
    nodes: Vec<u16>,
}

impl RuleTable {
    /// Install a rule table from raw node data, validating it fully.
    ///
    /// `nodes` is a row-major `node_count x states` matrix. Returns an error
    /// if any node reachable from the root escapes the table, or any
    /// terminal value escapes `[0, states)`.
    pub fn new(states: usize, root: u16, nodes: Vec<u16>) -> Result<Self, RuleError> {
        if !(2..=256).contains(&states) {
            return Err(RuleError::BadStateCount { states });
        }
        if nodes.is_empty() || nodes.len() % states != 0 {
            return Err(RuleError::BadNodeCount {
                nodes: nodes.len() / states,
            });
        }
        let node_count = nodes.len() / states;
        if node_count > u16::MAX as usize {
            return Err(RuleError::BadNodeCount { nodes: node_count });
        }
        if root as usize >= node_count {
            return Err(RuleError::RootOutOfRange {
                root,
                nodes: node_count,
            });
        }

        let table = Self {
            states,
            root,
            nodes,
        };
        table.validate(node_count)?;
        Ok(table)
    }

    /// Breadth-first reachability check over the nine lookup depths.
    fn validate(&self, node_count: usize) -> Result<(), RuleError> {
        let mut frontier = vec![false; node_count];
        frontier[self.root as usize] = true;

        for depth in 0..NEIGHBOR_SLOTS as u8 {
            let mut next = vec![false; node_count];
            let terminal = depth == NEIGHBOR_SLOTS as u8 - 1;
            for node in 0..node_count {
                if !frontier[node] {
                    continue;
                }
                for s in 0..self.states {
                    let target = self.nodes[node * self.states + s];
                    if terminal {
                        if target as usize >= self.states {
                            return Err(RuleError::StateOutOfRange {
                                state: target,
                                states: self.states,
                            });
                        }
                    } else {
                        if target as usize >= node_count {
                            return Err(RuleError::NodeOutOfRange {
                                node: target,
                                depth,
                                nodes: node_count,
                            });
                        }
                        next[target as usize] = true;
                    }
                }
            }
            if !terminal {
                frontier = next;
            }
        }
        Ok(())
    }

    /// Number of cell states this rule operates on.
    #[inline]
    pub fn states(&self) -> usize {
        self.states
    }

    /// Compute the next state for a cell from its ordered 3x3 neighborhood.
    ///
    /// Pure and deterministic. Neighbor values must be below
    /// [`states`](Self::states); the grid guarantees this for every cell it
    /// stores.
    #[inline]
    pub fn transition(&self, neighbors: &[u8; NEIGHBOR_SLOTS]) -> u8 {
        let mut node = self.root as usize;
        for &n in neighbors {
            debug_assert!((n as usize) < self.states);
            node = self.nodes[node * self.states + n as usize] as usize;
        }
        node as u8
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Classic two-state Conway Life (B3/S23).
    pub fn conway() -> Self {
        Self::generations(&[3], &[2, 3], 2).expect("generated table is structurally valid")
    }

    /// Build a Generations-family rule table.
    ///
    /// Semantics: only cells in state 1 count as live neighbors. A dead cell
    /// with a neighbor count in `birth` becomes state 1; a state-1 cell with
    /// a count in `survival` stays 1, otherwise it starts decaying; decay
    /// states advance 2, 3, ... and wrap to dead after `states - 1`.
    /// With `states == 2` this degenerates to an ordinary totalistic
    /// two-state rule, which is how [`conway`](Self::conway) is built.
    ///
    /// The table is a layered counting automaton: the node for depth `d`
    /// remembers how many of the first `d` neighbors were state 1, and the
    /// ninth column folds (count, self) into the next state.
    pub fn generations(birth: &[u8], survival: &[u8], states: usize) -> Result<Self, RuleError> {
        if !(2..=256).contains(&states) {
            return Err(RuleError::BadStateCount { states });
        }

        // node(d, c) = d * (d + 1) / 2 + c for d in 0..=8, c in 0..=d
        let node_id = |d: usize, c: usize| -> u16 { (d * (d + 1) / 2 + c) as u16 };
        let node_count = node_id(9, 0) as usize;
        let mut nodes = vec![0u16; node_count * states];

        for d in 0..NEIGHBOR_SLOTS {
            for c in 0..=d {
                let row = node_id(d, c) as usize * states;
                for s in 0..states {
                    nodes[row + s] = if d < NEIGHBOR_SLOTS - 1 {
                        // Counting layer: advance depth, bump count on state 1.
                        node_id(d + 1, c + usize::from(s == 1))
                    } else {
                        // Terminal layer: fold (count, self) to the next state.
                        let count = c as u8;
                        match s {
                            0 if birth.contains(&count) => 1,
                            0 => 0,
                            1 if survival.contains(&count) => 1,
                            _ => {
                                // Decay chain; state 1 falls into it on death.
                                if s + 1 < states { (s + 1) as u16 } else { 0 }
                            }
                        }
                    };
                }
            }
        }

        Self::new(states, 0, nodes)
    }
}

// =============================================================================
// Tests
// =============================================================================
