//! A game session: one fact store, the game phase, and the running log.
//!
//! The session is the only surface the presentation layer talks to. Each
//! call is processed to completion and returns values to render; nothing
//! here touches a terminal or a widget.

use super::action::{IllegalMoveError, Move};
use super::contracts::{Contract, MoveContract};
use super::engine::RuleEngine;
use super::players::{PlayerNames, ValidationError};
use super::rules;
use super::store::FactStore;
use super::types::{Cell, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

/// Header written above the initial fact dump.
pub const INITIAL_LOG_HEADER: &str = "Initial Knowledge Base:";

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for both player names.
    #[display("awaiting names")]
    AwaitingNames,
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// The given mark completed a line.
    #[display("won by {_0}")]
    Won(Mark),
    /// The board filled without a win.
    #[display("drawn")]
    Drawn,
}

impl Phase {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }
}

/// Result of submitting one move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was refused; nothing changed.
    Rejected(IllegalMoveError),
    /// The move was accepted; the given mark moves next.
    Continued(Mark),
    /// The move completed a line for the given mark.
    Won(Mark),
    /// The move filled the board without a win.
    Drawn,
}

/// Display directives produced by one move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveReport {
    /// What happened.
    outcome: MoveOutcome,
    /// Log lines appended by this move, in firing order.
    log_entries: Vec<String>,
    /// Cells to highlight; non-empty only on a win.
    highlight: BTreeSet<Cell>,
}

impl MoveReport {
    fn rejected(reason: IllegalMoveError) -> Self {
        Self::new(MoveOutcome::Rejected(reason), Vec::new(), BTreeSet::new())
    }
}

/// Snapshot of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Current phase.
    #[getter(copy)]
    phase: Phase,
    /// Mark to move next (the winner, once won).
    #[getter(copy)]
    to_move: Mark,
    /// Player names, once a game has started.
    names: Option<PlayerNames>,
    /// Mark on each cell in row-major order.
    board: [Option<Mark>; 9],
    /// Cells of the winning line(s).
    highlight: BTreeSet<Cell>,
    /// The full session log.
    log: Vec<String>,
}

impl GameView {
    /// Returns the mark on a cell.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.board[cell.offset()]
    }

    /// The one-line status shown above the board.
    pub fn status_line(&self) -> String {
        let name = |mark: Mark| {
            self.names
                .as_ref()
                .map(|names| names.name(mark).to_string())
                .unwrap_or_else(|| mark.to_string())
        };
        match self.phase {
            Phase::AwaitingNames => IllegalMoveError::AwaitingNames.to_string(),
            Phase::InProgress => format!("{}'s turn ({})", name(self.to_move), self.to_move),
            Phase::Won(mark) => format!("🎉 {} Wins! 🎉", name(mark)),
            Phase::Drawn => "It's a Draw!".to_string(),
        }
    }
}

/// One game session, owning its fact store and state.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The knowledge base.
    store: FactStore,
    /// Current phase.
    phase: Phase,
    /// Mark to move next.
    #[getter(copy)]
    to_move: Mark,
    /// Player names, once a game has started.
    names: Option<PlayerNames>,
    /// Accepted moves in order.
    history: Vec<Move>,
    /// Append-only log since the last new game.
    log: Vec<String>,
    /// Winning cells of a won game.
    highlight: BTreeSet<Cell>,
}

impl GameSession {
    /// Creates a session waiting for player names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            store: FactStore::new(),
            phase: Phase::AwaitingNames,
            to_move: Mark::X,
            names: None,
            history: Vec::new(),
            log: Vec::new(),
            highlight: BTreeSet::new(),
        }
    }

    /// Validates both names and starts a fresh game with X to move.
    ///
    /// Accepted from any phase: starting over always revalidates names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either name is blank; the session is
    /// left unchanged.
    #[instrument(skip(self, name_x, name_o), fields(phase = %self.phase))]
    pub fn start_new_game(&mut self, name_x: &str, name_o: &str) -> Result<GameView, ValidationError> {
        let names = PlayerNames::new(name_x, name_o)?;

        self.reset();
        self.phase = Phase::InProgress;
        self.log.push(INITIAL_LOG_HEADER.to_string());
        self.log
            .extend(self.store.sorted().iter().map(|fact| format!("• {fact}")));
        info!(x = %names.x(), o = %names.o(), "Game started");
        self.names = Some(names);

        Ok(self.view())
    }

    /// Abandons the current game and waits for names again.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn request_new_game(&mut self) {
        self.reset();
        self.names = None;
        self.phase = Phase::AwaitingNames;
        info!("Awaiting player names");
    }

    /// Submits a move for the player to move.
    ///
    /// Illegal moves come back as [`MoveOutcome::Rejected`] with the session
    /// unchanged.
    #[instrument(skip(self), fields(mark = %self.to_move, phase = %self.phase))]
    pub fn submit_move(&mut self, cell: Cell) -> MoveReport {
        let mv = Move::new(self.to_move, cell);
        if let Err(reason) = MoveContract::pre(self, &mv) {
            warn!(%reason, "Move rejected");
            return MoveReport::rejected(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let inference = RuleEngine::fire(&mut self.store, mv);
        let log_entries = inference.log_lines();
        self.log.extend(log_entries.iter().cloned());
        self.history.push(mv);

        let outcome = if inference.win() {
            self.phase = Phase::Won(mv.mark);
            self.highlight = inference.highlight().clone();
            info!(winner = %mv.mark, "Game won");
            MoveOutcome::Won(mv.mark)
        } else if rules::is_full(&self.store) {
            self.phase = Phase::Drawn;
            info!("Game drawn");
            MoveOutcome::Drawn
        } else {
            self.to_move = mv.mark.opponent();
            MoveOutcome::Continued(self.to_move)
        };

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "{post:?}");
        }

        MoveReport::new(outcome, log_entries, self.highlight.clone())
    }

    /// The complete log since the current game started.
    pub fn current_log(&self) -> &[String] {
        &self.log
    }

    /// Snapshot for rendering.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let mut board = [None; 9];
        for cell in Cell::ALL {
            board[cell.offset()] = self.store.mark_at(cell);
        }
        GameView {
            phase: self.phase,
            to_move: self.to_move,
            names: self.names.clone(),
            board,
            highlight: self.highlight.clone(),
            log: self.log.clone(),
        }
    }

    /// Starts a game and plays the given cells in order.
    ///
    /// Every cell is submitted, including after the game ends, so the
    /// returned reports show each rejection as the player would see it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either name is blank.
    #[instrument(skip(name_x, name_o))]
    pub fn replay(
        name_x: &str,
        name_o: &str,
        cells: &[Cell],
    ) -> Result<(Self, Vec<MoveReport>), ValidationError> {
        let mut session = Self::new();
        session.start_new_game(name_x, name_o)?;
        let reports = cells.iter().map(|cell| session.submit_move(*cell)).collect();
        Ok((session, reports))
    }

    fn reset(&mut self) {
        self.store.initialize();
        self.to_move = Mark::X;
        self.history.clear();
        self.log.clear();
        self.highlight.clear();
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut FactStore {
        &mut self.store
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
