//! Adjacency symmetry: the static topology survives every move intact.

use super::super::store::ADJACENT_FACT_COUNT;
use super::super::{Fact, FactStore};
use super::Invariant;

/// Invariant: every `Adjacent(a, b)` has its mirror `Adjacent(b, a)`, and the
/// seeded adjacency facts are all still present.
pub struct AdjacencySymmetricInvariant;

impl Invariant<FactStore> for AdjacencySymmetricInvariant {
    fn holds(store: &FactStore) -> bool {
        let mut count = 0;
        for fact in store.iter() {
            if let Fact::Adjacent(a, b) = fact {
                if !store.holds(&Fact::Adjacent(*b, *a)) {
                    return false;
                }
                count += 1;
            }
        }
        count == ADJACENT_FACT_COUNT
    }

    fn description() -> &'static str {
        "Adjacency facts are symmetric and complete"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_missing_mirror_violates() {
        let mut store = FactStore::new();
        store.retract(&Fact::Adjacent(Cell::ALL[1], Cell::ALL[0]));
        assert!(!AdjacencySymmetricInvariant::holds(&store));
    }

    #[test]
    fn test_extra_one_way_fact_violates() {
        let mut store = FactStore::new();
        store.assert(Fact::Adjacent(Cell::ALL[0], Cell::ALL[8]));
        assert!(!AdjacencySymmetricInvariant::holds(&store));
    }
}
