//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use fol_tictactoe::Cell;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Cell::new(row * 3 + col + 1).unwrap_or(cursor)
}

/// Maps a digit key to the cell with that index.
pub fn digit_cell(key: KeyCode) -> Option<Cell> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(Cell::new),
        _ => None,
    }
}
