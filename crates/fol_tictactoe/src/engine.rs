//! Single-pass forward-chaining engine.
//!
//! One move produces exactly one pass: Rule 1 updates occupancy, then
//! Rules 2 and 3 scan the lines against that snapshot, then every derived
//! fact is merged. There is no iteration to a fixpoint.

use super::action::{IllegalMoveError, Move};
use super::contracts::LegalMove;
use super::fact::Fact;
use super::rules::{self, RuleFiring};
use super::store::FactStore;
use super::types::Cell;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Everything one inference pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Inference {
    /// The move that triggered the pass.
    #[getter(copy)]
    mv: Move,
    /// Rule firings in the order they fired.
    firings: Vec<RuleFiring>,
    /// Facts newly added to the store by Rules 2 and 3.
    derived: Vec<Fact>,
    /// Cells of every line the mover completed.
    highlight: BTreeSet<Cell>,
    /// Whether `Win(mover)` holds after the pass.
    #[getter(copy)]
    win: bool,
}

impl Inference {
    /// Log lines for this pass, one per firing.
    pub fn log_lines(&self) -> Vec<String> {
        self.firings.iter().map(ToString::to_string).collect()
    }
}

/// Applies moves to a fact store.
pub struct RuleEngine;

impl RuleEngine {
    /// Checks legality, then runs one inference pass.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the game is over or `Empty(cell)` does
    /// not hold. The store is untouched in that case.
    #[instrument(skip(store))]
    pub fn apply_move(
        store: &mut FactStore,
        mv: Move,
        game_over: bool,
    ) -> Result<Inference, IllegalMoveError> {
        LegalMove::check(&mv, store, game_over)?;
        Ok(Self::fire(store, mv))
    }

    /// Runs one inference pass for a move already known to be legal.
    #[instrument(skip(store))]
    pub fn fire(store: &mut FactStore, mv: Move) -> Inference {
        let mut firings = Vec::new();

        // Rule 1
        if let Some(firing) = rules::occupy(store, mv) {
            firings.push(firing);
        }

        // Rules 2 & 3 read the post-Rule-1 snapshot; merge afterwards.
        let (line_firings, candidates, highlight) = rules::scan_lines(store, mv.mark).dissolve();
        firings.extend(line_firings);

        let derived: Vec<Fact> = candidates
            .into_iter()
            .filter(|fact| store.assert(*fact))
            .collect();
        debug!(derived = derived.len(), "Derived facts merged");

        let win = store.holds(&Fact::Win(mv.mark));
        if win {
            info!(mark = %mv.mark, "Win derived");
        }

        Inference {
            mv,
            firings,
            derived,
            highlight,
            win,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn cell(index: u8) -> Cell {
        Cell::new(index).expect("valid cell")
    }

    fn play(store: &mut FactStore, moves: &[(Mark, u8)]) -> Vec<Inference> {
        moves
            .iter()
            .map(|(mark, index)| {
                RuleEngine::apply_move(store, Move::new(*mark, cell(*index)), false)
                    .expect("legal move")
            })
            .collect()
    }

    #[test]
    fn test_single_move_fires_rule_one_only() {
        let mut store = FactStore::new();
        let inference = play(&mut store, &[(Mark::X, 5)]).remove(0);

        assert_eq!(inference.firings(), &vec![RuleFiring::Vacated(cell(5))]);
        assert!(inference.derived().is_empty());
        assert!(!inference.win());
        assert_eq!(inference.log_lines(), vec!["Rule 1: P5 is no longer empty"]);
    }

    #[test]
    fn test_threat_is_asserted() {
        let mut store = FactStore::new();
        let inferences = play(&mut store, &[(Mark::X, 1), (Mark::O, 4), (Mark::X, 2)]);
        let last = inferences.last().expect("three passes");

        assert_eq!(last.derived(), &vec![Fact::WinningMove(Mark::X, cell(3))]);
        assert!(store.holds(&Fact::WinningMove(Mark::X, cell(3))));
        assert!(!last.win());
    }

    #[test]
    fn test_top_row_win() {
        let mut store = FactStore::new();
        let inferences = play(
            &mut store,
            &[(Mark::X, 1), (Mark::O, 4), (Mark::X, 2), (Mark::O, 5), (Mark::X, 3)],
        );
        let last = inferences.last().expect("five passes");

        assert!(last.win());
        assert_eq!(last.highlight(), &BTreeSet::from([cell(1), cell(2), cell(3)]));
        assert_eq!(
            last.log_lines(),
            vec!["Rule 1: P3 is no longer empty", "Rule 3: Win detected for X"]
        );
    }

    #[test]
    fn test_known_threat_is_not_derived_again() {
        let mut store = FactStore::new();
        // X threatens 3 after the second move; O blocks elsewhere, X moves again.
        let inferences = play(
            &mut store,
            &[(Mark::X, 1), (Mark::O, 5), (Mark::X, 2), (Mark::O, 9), (Mark::X, 7)],
        );
        let last = inferences.last().expect("five passes");

        assert!(
            last.firings()
                .contains(&RuleFiring::Threat { mark: Mark::X, cell: cell(3) })
        );
        assert!(!last.derived().contains(&Fact::WinningMove(Mark::X, cell(3))));
        assert!(last.derived().contains(&Fact::WinningMove(Mark::X, cell(4))));
    }

    #[test]
    fn test_stale_threat_survives_block() {
        let mut store = FactStore::new();
        play(&mut store, &[(Mark::X, 1), (Mark::O, 5), (Mark::X, 2), (Mark::O, 3)]);

        assert!(store.holds(&Fact::WinningMove(Mark::X, cell(3))));
        assert_eq!(store.mark_at(cell(3)), Some(Mark::O));
    }

    #[test]
    fn test_illegal_move_leaves_store_untouched() {
        let mut store = FactStore::new();
        play(&mut store, &[(Mark::X, 5)]);
        let before = store.clone();

        let result = RuleEngine::apply_move(&mut store, Move::new(Mark::O, cell(5)), false);
        assert_eq!(result, Err(IllegalMoveError::CellOccupied(cell(5))));
        assert_eq!(store, before);

        let result = RuleEngine::apply_move(&mut store, Move::new(Mark::O, cell(1)), true);
        assert_eq!(result, Err(IllegalMoveError::GameOver));
        assert_eq!(store, before);
    }

    #[test]
    fn test_double_line_win_highlights_both() {
        let mut store = FactStore::new();
        let inferences = play(
            &mut store,
            &[
                (Mark::X, 1),
                (Mark::O, 4),
                (Mark::X, 2),
                (Mark::O, 6),
                (Mark::X, 5),
                (Mark::O, 9),
                (Mark::X, 7),
                (Mark::O, 8),
                (Mark::X, 3),
            ],
        );
        let (last, earlier) = inferences.split_last().expect("nine passes");

        assert!(earlier.iter().all(|inference| !inference.win()));
        assert!(last.win());
        assert_eq!(
            last.highlight(),
            &BTreeSet::from([cell(1), cell(2), cell(3), cell(5), cell(7)])
        );
        let wins = last
            .firings()
            .iter()
            .filter(|firing| matches!(firing, RuleFiring::Win { .. }))
            .count();
        assert_eq!(wins, 2);
        assert_eq!(last.derived(), &vec![Fact::Win(Mark::X)]);
    }
}
