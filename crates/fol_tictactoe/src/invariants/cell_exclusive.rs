//! Cell exclusivity: every cell is either empty or held by exactly one mark.

use super::super::{Cell, Fact, FactStore, Mark};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: for every cell exactly one of `Empty(c)` or a single
/// `Occupied(c, m)` holds.
pub struct CellExclusiveInvariant;

impl Invariant<FactStore> for CellExclusiveInvariant {
    fn holds(store: &FactStore) -> bool {
        Cell::ALL.into_iter().all(|cell| {
            let empty = usize::from(store.is_empty(cell));
            let occupied = Mark::iter()
                .filter(|mark| store.holds(&Fact::Occupied(cell, *mark)))
                .count();
            empty + occupied == 1
        })
    }

    fn description() -> &'static str {
        "Every cell is either empty or occupied by exactly one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, rules::occupy};

    #[test]
    fn test_holds_after_occupy() {
        let mut store = FactStore::new();
        occupy(&mut store, Move::new(Mark::O, Cell::ALL[2]));
        assert!(CellExclusiveInvariant::holds(&store));
    }

    #[test]
    fn test_neither_empty_nor_occupied_violates() {
        let mut store = FactStore::new();
        store.retract(&Fact::Empty(Cell::ALL[2]));
        assert!(!CellExclusiveInvariant::holds(&store));
    }

    #[test]
    fn test_two_marks_on_one_cell_violates() {
        let mut store = FactStore::new();
        let cell = Cell::ALL[6];
        occupy(&mut store, Move::new(Mark::X, cell));
        store.assert(Fact::Occupied(cell, Mark::O));
        assert!(!CellExclusiveInvariant::holds(&store));
    }
}
