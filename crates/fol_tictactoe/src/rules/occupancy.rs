//! Rule 1: an occupied cell is no longer empty.

use super::super::action::Move;
use super::super::fact::Fact;
use super::super::store::FactStore;
use super::RuleFiring;
use tracing::{debug, instrument};

/// Asserts `Occupied(cell, mark)` and fires Rule 1.
///
/// Rule 1 matches the conjunction `Occupied(cell, mark) ∧ Empty(cell)` and
/// retracts `Empty(cell)`. The conjunction is re-checked after the assert
/// rather than assumed, so the rule reads the same as its logical form.
/// Returns the firing, or `None` if the antecedent did not hold.
#[instrument(skip(store))]
pub fn occupy(store: &mut FactStore, mv: Move) -> Option<RuleFiring> {
    let occupied = Fact::Occupied(mv.cell, mv.mark);
    let empty = Fact::Empty(mv.cell);
    store.assert(occupied);

    if store.holds(&occupied) && store.holds(&empty) {
        store.retract(&empty);
        let firing = RuleFiring::Vacated(mv.cell);
        debug!(%firing, "Rule fired");
        Some(firing)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_occupy_replaces_empty() {
        let mut store = FactStore::new();
        let cell = Cell::new(5).expect("valid cell");
        let firing = occupy(&mut store, Move::new(Mark::X, cell));

        assert_eq!(firing, Some(RuleFiring::Vacated(cell)));
        assert!(store.holds(&Fact::Occupied(cell, Mark::X)));
        assert!(!store.holds(&Fact::Empty(cell)));
        assert_eq!(store.empty_count() + store.occupied_count(), 9);
    }

    #[test]
    fn test_rule_one_needs_empty_antecedent() {
        let mut store = FactStore::new();
        let cell = Cell::new(2).expect("valid cell");
        store.retract(&Fact::Empty(cell));

        assert_eq!(occupy(&mut store, Move::new(Mark::O, cell)), None);
        assert!(store.holds(&Fact::Occupied(cell, Mark::O)));
    }
}
