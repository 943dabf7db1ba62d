//! The fact store: a set of ground facts with assert/retract semantics.

use super::fact::Fact;
use super::types::{ADJACENCIES, Cell, Mark};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Number of `Adjacent` facts in a freshly initialized store.
pub const ADJACENT_FACT_COUNT: usize = ADJACENCIES.len() * 2;

/// Number of facts in a freshly initialized store.
pub const INITIAL_FACT_COUNT: usize = Cell::ALL.len() + ADJACENT_FACT_COUNT;

/// Set of ground facts describing one game.
///
/// Membership is boolean: asserting a present fact or retracting an absent
/// one is a no-op. Iteration follows the total order on [`Fact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactStore {
    facts: BTreeSet<Fact>,
}

impl FactStore {
    /// Creates an initialized store (every cell empty, adjacency seeded).
    #[instrument]
    pub fn new() -> Self {
        let mut store = Self {
            facts: BTreeSet::new(),
        };
        store.initialize();
        store
    }

    /// Resets the store to nine `Empty` facts plus the symmetric adjacency facts.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        self.facts.clear();
        self.facts.extend(Cell::ALL.into_iter().map(Fact::Empty));
        for (a, b) in ADJACENCIES {
            self.facts.insert(Fact::Adjacent(a, b));
            self.facts.insert(Fact::Adjacent(b, a));
        }
        debug!(facts = self.facts.len(), "Fact store initialized");
    }

    /// Returns true if the fact holds.
    pub fn holds(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Adds a fact. Returns false if it was already present.
    #[instrument(skip(self))]
    pub fn assert(&mut self, fact: Fact) -> bool {
        let added = self.facts.insert(fact);
        if added {
            debug!("Fact asserted");
        }
        added
    }

    /// Removes a fact. Returns false if it was absent.
    #[instrument(skip(self))]
    pub fn retract(&mut self, fact: &Fact) -> bool {
        let removed = self.facts.remove(fact);
        if removed {
            debug!("Fact retracted");
        }
        removed
    }

    /// Returns true if `Empty(cell)` holds.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.holds(&Fact::Empty(cell))
    }

    /// Returns the mark occupying the cell, if any.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|mark| self.holds(&Fact::Occupied(cell, *mark)))
    }

    /// Returns true if any `Empty` fact remains.
    pub fn has_empty_cell(&self) -> bool {
        Cell::ALL.into_iter().any(|cell| self.is_empty(cell))
    }

    /// Counts `Empty` facts.
    pub fn empty_count(&self) -> usize {
        self.facts
            .iter()
            .filter(|fact| matches!(fact, Fact::Empty(_)))
            .count()
    }

    /// Counts `Occupied` facts.
    pub fn occupied_count(&self) -> usize {
        self.facts
            .iter()
            .filter(|fact| matches!(fact, Fact::Occupied(..)))
            .count()
    }

    /// Returns the facts produced by inference, in fact order.
    pub fn derived_facts(&self) -> Vec<Fact> {
        self.facts
            .iter()
            .filter(|fact| fact.is_derived())
            .copied()
            .collect()
    }

    /// Returns every fact in sorted order.
    pub fn sorted(&self) -> Vec<Fact> {
        self.facts.iter().copied().collect()
    }

    /// Iterates facts in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Number of facts held.
    pub fn len(&self) -> usize {
        self.facts.len()
    }
}

impl Default for FactStore {
    fn default() -> Self {
        Self::new()
    }
}
