//! Occupancy total: `Empty` plus `Occupied` facts always number nine.

use super::super::FactStore;
use super::Invariant;

/// Invariant: `#Empty + #Occupied == 9`.
pub struct OccupancyTotalInvariant;

impl Invariant<FactStore> for OccupancyTotalInvariant {
    fn holds(store: &FactStore) -> bool {
        store.empty_count() + store.occupied_count() == 9
    }

    fn description() -> &'static str {
        "Empty and Occupied facts together cover exactly nine cells"
    }
}
