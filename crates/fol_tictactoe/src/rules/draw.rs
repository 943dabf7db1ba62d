//! Draw detection for tic-tac-toe.

use super::super::store::FactStore;
use tracing::instrument;

/// Checks whether no `Empty` fact remains.
///
/// A full board without `Win` for the mover is a draw.
#[instrument(skip(store))]
pub fn is_full(store: &FactStore) -> bool {
    !store.has_empty_cell()
}
