//! Board geometry for tic-tac-toe: marks, cells, and winning lines.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One of the nine cells of the 3x3 grid, indexed 1-9 in row-major order.
///
/// Cells display as `P1`..`P9`, the naming used throughout the fact log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("P{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// All nine cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
        Cell(9),
    ];

    /// Creates a cell from its 1-based index.
    ///
    /// Returns `None` outside `1..=9`.
    pub fn new(index: u8) -> Option<Self> {
        (1..=9).contains(&index).then_some(Self(index))
    }

    /// Returns the 1-based index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the 0-based row-major offset, for array-backed views.
    pub fn offset(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns the 0-based row.
    pub fn row(self) -> u8 {
        (self.0 - 1) / 3
    }

    /// Returns the 0-based column.
    pub fn column(self) -> u8 {
        (self.0 - 1) % 3
    }
}

/// Index outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell index {index} is outside 1-9")]
pub struct CellIndexError {
    /// The rejected index.
    pub index: u8,
}

impl TryFrom<u8> for Cell {
    type Error = CellIndexError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(CellIndexError { index })
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// The eight winning lines.
///
/// Iteration order (via `strum::IntoEnumIterator`) is rows top to bottom,
/// columns left to right, then the two diagonals. The rule engine scans in
/// this order, so it also fixes the order of log entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Cells 1, 2, 3.
    #[display("top row")]
    TopRow,
    /// Cells 4, 5, 6.
    #[display("middle row")]
    MiddleRow,
    /// Cells 7, 8, 9.
    #[display("bottom row")]
    BottomRow,
    /// Cells 1, 4, 7.
    #[display("left column")]
    LeftColumn,
    /// Cells 2, 5, 8.
    #[display("center column")]
    CenterColumn,
    /// Cells 3, 6, 9.
    #[display("right column")]
    RightColumn,
    /// Cells 1, 5, 9.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 3, 5, 7.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns the three cells of this line.
    pub fn cells(self) -> [Cell; 3] {
        let [a, b, c] = match self {
            Line::TopRow => [1, 2, 3],
            Line::MiddleRow => [4, 5, 6],
            Line::BottomRow => [7, 8, 9],
            Line::LeftColumn => [1, 4, 7],
            Line::CenterColumn => [2, 5, 8],
            Line::RightColumn => [3, 6, 9],
            Line::MainDiagonal => [1, 5, 9],
            Line::AntiDiagonal => [3, 5, 7],
        };
        [Cell(a), Cell(b), Cell(c)]
    }
}

/// Undirected adjacency pairs seeded into every fresh fact base.
///
/// Each pair is stored in both directions.
pub const ADJACENCIES: [(Cell, Cell); 16] = [
    // Horizontal
    (Cell(1), Cell(2)),
    (Cell(2), Cell(3)),
    (Cell(4), Cell(5)),
    (Cell(5), Cell(6)),
    (Cell(7), Cell(8)),
    (Cell(8), Cell(9)),
    // Vertical
    (Cell(1), Cell(4)),
    (Cell(4), Cell(7)),
    (Cell(2), Cell(5)),
    (Cell(5), Cell(8)),
    (Cell(3), Cell(6)),
    (Cell(6), Cell(9)),
    // Diagonal
    (Cell(1), Cell(5)),
    (Cell(5), Cell(9)),
    (Cell(3), Cell(5)),
    (Cell(5), Cell(7)),
];
