//! Ground facts of the tic-tac-toe knowledge base.

use super::types::{Cell, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A ground proposition about the board.
///
/// Facts compare and hash structurally. The derived ordering (variant first,
/// then fields) is the order of the initial fact dump in the log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Fact {
    /// Two cells lie next to each other on some line. Static.
    #[display("Adjacent({_0},{_1})")]
    Adjacent(Cell, Cell),
    /// The cell holds no mark.
    #[display("Empty({_0})")]
    Empty(Cell),
    /// The cell holds the given mark.
    #[display("Occupied({_0},{_1})")]
    Occupied(Cell, Mark),
    /// The mark owns a full line. Derived.
    #[display("Win({_0})")]
    Win(Mark),
    /// The mark owns two cells of a line whose third cell is empty. Derived.
    #[display("WinningMove({_0},{_1})")]
    WinningMove(Mark, Cell),
}

impl Fact {
    /// Returns true for facts produced by inference rather than by moves or setup.
    pub fn is_derived(&self) -> bool {
        matches!(self, Fact::Win(_) | Fact::WinningMove(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: u8) -> Cell {
        Cell::new(index).expect("valid cell")
    }

    #[test]
    fn test_display_matches_log_notation() {
        assert_eq!(Fact::Empty(cell(1)).to_string(), "Empty(P1)");
        assert_eq!(Fact::Occupied(cell(3), Mark::X).to_string(), "Occupied(P3,X)");
        assert_eq!(Fact::Adjacent(cell(1), cell(2)).to_string(), "Adjacent(P1,P2)");
        assert_eq!(Fact::WinningMove(Mark::O, cell(7)).to_string(), "WinningMove(O,P7)");
        assert_eq!(Fact::Win(Mark::X).to_string(), "Win(X)");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Fact::Occupied(cell(2), Mark::O), Fact::Occupied(cell(2), Mark::O));
        assert_ne!(Fact::Occupied(cell(2), Mark::O), Fact::Occupied(cell(2), Mark::X));
        assert_ne!(Fact::Adjacent(cell(1), cell(2)), Fact::Adjacent(cell(2), cell(1)));
    }

    #[test]
    fn test_adjacent_sorts_before_empty() {
        assert!(Fact::Adjacent(cell(9), cell(8)) < Fact::Empty(cell(1)));
        assert!(Fact::Empty(cell(1)) < Fact::Empty(cell(2)));
    }

    #[test]
    fn test_derived_classification() {
        assert!(Fact::Win(Mark::O).is_derived());
        assert!(Fact::WinningMove(Mark::X, cell(5)).is_derived());
        assert!(!Fact::Empty(cell(5)).is_derived());
        assert!(!Fact::Occupied(cell(4), Mark::X).is_derived());
    }
}
