//! Tic-tac-toe played over a knowledge base of ground facts.
//!
//! Every move triggers one forward-chaining pass over a small fact base:
//!
//! - **Facts**: `Empty(cell)`, `Occupied(cell, mark)`, `Adjacent(a, b)`,
//!   plus the derived `WinningMove(mark, cell)` and `Win(mark)`
//! - **Store**: a set of facts with assert/retract semantics
//! - **Rules**: Rule 1 retracts `Empty` for an occupied cell; Rules 2 and 3
//!   scan the eight lines for threats and wins
//! - **Session**: the phase machine (names → play → won/drawn) and the log
//!
//! # Example
//!
//! ```
//! use fol_tictactoe::{Cell, Fact, GameSession, Mark, MoveOutcome};
//!
//! let mut session = GameSession::new();
//! session.start_new_game("Ada", "Alan").unwrap();
//!
//! for index in [1, 4, 2] {
//!     session.submit_move(Cell::new(index).unwrap());
//! }
//! let threat = Fact::WinningMove(Mark::X, Cell::new(3).unwrap());
//! assert!(session.store().holds(&threat));
//!
//! session.submit_move(Cell::new(5).unwrap());
//! let report = session.submit_move(Cell::new(3).unwrap());
//! assert_eq!(report.outcome(), &MoveOutcome::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod fact;
pub mod invariants;
mod players;
pub mod rules;
mod session;
mod store;
mod types;

pub use action::{IllegalMoveError, Move};
pub use contracts::{CellIsEmpty, Contract, ContractViolation, GameNotOver, LegalMove, MoveContract};
pub use engine::{Inference, RuleEngine};
pub use fact::Fact;
pub use players::{PlayerNames, ValidationError};
pub use rules::RuleFiring;
pub use session::{GameSession, GameView, INITIAL_LOG_HEADER, MoveOutcome, MoveReport, Phase};
pub use store::{ADJACENT_FACT_COUNT, FactStore, INITIAL_FACT_COUNT};
pub use types::{ADJACENCIES, Cell, CellIndexError, Line, Mark};
