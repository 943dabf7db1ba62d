//! Rules 2 and 3: threat and win detection over the eight lines.

use super::super::fact::Fact;
use super::super::store::FactStore;
use super::super::types::{Cell, Line, Mark};
use super::RuleFiring;
use derive_getters::{Dissolve, Getters};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// What one scan of the eight lines derived for a mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Dissolve)]
pub struct LineScan {
    /// Firings in line order.
    firings: Vec<RuleFiring>,
    /// Newly derived facts, without repeats, in derivation order.
    derived: Vec<Fact>,
    /// Cells of every line fully owned by the mark.
    winning_cells: BTreeSet<Cell>,
}

/// Scans every line for the mover's threats and wins.
///
/// The store is only read. Derived facts are collected and handed back so
/// the caller merges them after the whole scan; a fact derived on one line
/// never influences a later line in the same pass.
///
/// - Rule 2: two cells owned by `mark` and one `Empty` cell derive
///   `WinningMove(mark, cell)`.
/// - Rule 3: three cells owned by `mark` derive `Win(mark)`.
#[instrument(skip(store))]
pub fn scan_lines(store: &FactStore, mark: Mark) -> LineScan {
    let mut scan = LineScan::default();

    for line in Line::iter() {
        let cells = line.cells();
        let occupied: Vec<Cell> = cells
            .iter()
            .copied()
            .filter(|cell| store.holds(&Fact::Occupied(*cell, mark)))
            .collect();
        let empty: Vec<Cell> = cells
            .iter()
            .copied()
            .filter(|cell| store.holds(&Fact::Empty(*cell)))
            .collect();

        if let ([_, _], [cell]) = (occupied.as_slice(), empty.as_slice()) {
            scan.derive(
                RuleFiring::Threat { mark, cell: *cell },
                Fact::WinningMove(mark, *cell),
            );
        }

        if occupied.len() == 3 {
            scan.derive(RuleFiring::Win { mark, line }, Fact::Win(mark));
            scan.winning_cells.extend(occupied);
        }
    }

    scan
}

impl LineScan {
    fn derive(&mut self, firing: RuleFiring, fact: Fact) {
        debug!(%firing, "Rule fired");
        self.firings.push(firing);
        if !self.derived.contains(&fact) {
            self.derived.push(fact);
        }
    }
}
