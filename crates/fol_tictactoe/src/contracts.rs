//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions decide legality and
//! are always checked; postconditions re-verify the invariants after a move
//! and run in debug builds.

use super::action::{IllegalMoveError, Move};
use super::invariants::{AlternatingTurnInvariant, Invariant, InvariantSet, StoreInvariants};
use super::session::{GameSession, Phase};
use super::store::FactStore;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition failed: the move left the session inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Postcondition failed: {message}")]
pub struct ContractViolation {
    /// Descriptions of everything that failed, joined.
    pub message: String,
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: `Empty(cell)` must hold.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto a cell that is not empty.
    #[instrument(skip(store))]
    pub fn check(mv: &Move, store: &FactStore) -> Result<(), IllegalMoveError> {
        if store.is_empty(mv.cell) {
            Ok(())
        } else {
            Err(IllegalMoveError::CellOccupied(mv.cell))
        }
    }
}

/// Precondition: the game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has ended.
    #[instrument]
    pub fn check(game_over: bool) -> Result<(), IllegalMoveError> {
        if game_over {
            Err(IllegalMoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is live and the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all engine-level preconditions for a move.
    #[instrument(skip(store))]
    pub fn check(mv: &Move, store: &FactStore, game_over: bool) -> Result<(), IllegalMoveError> {
        GameNotOver::check(game_over)?;
        CellIsEmpty::check(mv, store)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moves submitted to a session.
///
/// Preconditions:
/// - A game has been started
/// - The game is not over
/// - The target cell is empty
///
/// Postconditions:
/// - Store invariants hold (exclusive cells, nine occupancy facts, adjacency intact)
/// - Players still alternate
/// - Derived facts from earlier moves are retained
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), IllegalMoveError> {
        if *session.phase() == Phase::AwaitingNames {
            return Err(IllegalMoveError::AwaitingNames);
        }
        LegalMove::check(action, session.store(), session.phase().is_over())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), ContractViolation> {
        let mut failures: Vec<String> = match StoreInvariants::check_all(after.store()) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if !AlternatingTurnInvariant::holds(after) {
            failures.push(AlternatingTurnInvariant::description().to_string());
        }

        let retained = before
            .store()
            .derived_facts()
            .iter()
            .all(|fact| after.store().holds(fact));
        if !retained {
            failures.push("Derived facts are never retracted within a game".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let message = failures.join("; ");
            warn!(%message, "Move contract violated");
            Err(ContractViolation { message })
        }
    }
}
