//! Moves and the ways they can be refused.
//!
//! A move is a domain event: the mover's intent to occupy a cell. It is
//! validated against the fact store before anything is mutated.

use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target cell.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }

    /// Returns the mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// A move the engine refuses. The session is left untouched.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum IllegalMoveError {
    /// `Empty(cell)` does not hold.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Cell),

    /// The game already ended in a win or a draw.
    #[display("Game Over! Click 'New Game'")]
    GameOver,

    /// No game has been started yet.
    #[display("Enter player names and click 'New Game'")]
    AwaitingNames,
}
