//! Inference rules over the fact store.
//!
//! Each rule is a pure function of the store (and the move that triggered
//! it). Rules are kept apart from the engine so the single-pass ordering is
//! visible in one place: occupancy first, then the line scan.

pub mod draw;
pub mod lines;
pub mod occupancy;

pub use draw::is_full;
pub use lines::{LineScan, scan_lines};
pub use occupancy::occupy;

use super::types::{Cell, Line, Mark};
use serde::{Deserialize, Serialize};

/// One rule firing, in the words the log uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RuleFiring {
    /// Rule 1: the cell's `Empty` fact was retracted.
    #[display("Rule 1: {_0} is no longer empty")]
    Vacated(Cell),
    /// Rule 2: the mark threatens to complete a line at `cell`.
    #[display("Rule 2: Winning move for {mark} at {cell}")]
    Threat {
        /// The threatening mark.
        mark: Mark,
        /// The empty cell that would complete the line.
        cell: Cell,
    },
    /// Rule 3: the mark owns every cell of `line`.
    #[display("Rule 3: Win detected for {mark}")]
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
}
