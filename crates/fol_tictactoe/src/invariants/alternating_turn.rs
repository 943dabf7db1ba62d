//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Mark, Phase};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is in
/// progress, the player to move is the one after the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        if *session.phase() != Phase::InProgress {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_fresh_game_holds() {
        let mut session = GameSession::new();
        session.start_new_game("Ada", "Alan").expect("valid names");
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_holds_across_moves() {
        let mut session = GameSession::new();
        session.start_new_game("Ada", "Alan").expect("valid names");
        for index in [5, 1, 9] {
            session.submit_move(Cell::new(index).expect("valid cell"));
            assert!(AlternatingTurnInvariant::holds(&session));
        }
        assert_eq!(session.to_move(), Mark::O);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::new();
        session.start_new_game("Ada", "Alan").expect("valid names");
        let center = Cell::new(5).expect("valid cell");
        session.submit_move(center);
        session.submit_move(center);
        assert_eq!(session.to_move(), Mark::O);
        assert!(AlternatingTurnInvariant::holds(&session));
    }
}
