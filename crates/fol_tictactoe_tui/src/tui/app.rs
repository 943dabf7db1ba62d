//! Application state and key handling.
//!
//! The app only routes keys: every game decision comes back from
//! [`GameSession`] and is stored here for the next frame.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use fol_tictactoe::{Cell, GameSession, MoveOutcome, Phase};
use tracing::{debug, instrument};

/// Which name field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The X player's name.
    X,
    /// The O player's name.
    O,
}

/// Main application state.
pub struct App {
    session: GameSession,
    name_x: String,
    name_o: String,
    focus: NameField,
    cursor: Cell,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app on the name-entry screen with prefilled names.
    pub fn new(name_x: &str, name_o: &str) -> Self {
        Self {
            session: GameSession::new(),
            name_x: name_x.to_string(),
            name_o: name_o.to_string(),
            focus: NameField::X,
            cursor: Cell::ALL[4],
            notice: None,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current text of a name field.
    pub fn name(&self, field: NameField) -> &str {
        match field {
            NameField::X => &self.name_x,
            NameField::O => &self.name_o,
        }
    }

    /// Field with keyboard focus.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Last rejection or validation message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the name screen or the board.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if *self.session.phase() == Phase::AwaitingNames {
            self.handle_name_key(key);
        } else {
            self.handle_board_key(key);
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    NameField::X => NameField::O,
                    NameField::O => NameField::X,
                };
            }
            KeyCode::Backspace => {
                self.focused_name_mut().pop();
            }
            KeyCode::Enter => self.confirm_names(),
            KeyCode::Char(c) => self.focused_name_mut().push(c),
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => {
                self.session.request_new_game();
                self.notice = None;
                self.focus = NameField::X;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(cell) = digit_cell(other) {
                    self.cursor = cell;
                    self.submit(cell);
                }
            }
        }
    }

    fn focused_name_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.name_x,
            NameField::O => &mut self.name_o,
        }
    }

    fn confirm_names(&mut self) {
        match self.session.start_new_game(&self.name_x, &self.name_o) {
            Ok(view) => {
                debug!(status = %view.status_line(), "Game started from name screen");
                self.notice = None;
                self.cursor = Cell::ALL[4];
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn submit(&mut self, cell: Cell) {
        let report = self.session.submit_move(cell);
        self.notice = match report.outcome() {
            MoveOutcome::Rejected(reason) => Some(reason.to_string()),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fol_tictactoe::Mark;

    fn type_keys(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_blank_names_show_notice() {
        let mut app = App::new("Ada", "");
        app.handle_key(KeyCode::Enter);
        assert_eq!(*app.session().phase(), Phase::AwaitingNames);
        assert_eq!(app.notice(), Some("Please enter names for both players!"));
    }

    #[test]
    fn test_typing_names_starts_game() {
        let mut app = App::new("", "");
        type_keys(
            &mut app,
            &[
                KeyCode::Char('A'),
                KeyCode::Char('d'),
                KeyCode::Char('x'),
                KeyCode::Backspace,
                KeyCode::Char('a'),
                KeyCode::Tab,
                KeyCode::Char('B'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.name(NameField::X), "Ada");
        assert_eq!(app.name(NameField::O), "B");
        assert_eq!(*app.session().phase(), Phase::InProgress);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_digits_play_and_win() {
        let mut app = App::new("Ada", "Alan");
        app.handle_key(KeyCode::Enter);
        type_keys(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('4'),
                KeyCode::Char('2'),
                KeyCode::Char('5'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(*app.session().phase(), Phase::Won(Mark::X));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.notice(), Some("Game Over! Click 'New Game'"));
    }

    #[test]
    fn test_cursor_enter_plays_cursor_cell() {
        let mut app = App::new("Ada", "Alan");
        app.handle_key(KeyCode::Enter);
        type_keys(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        let top_left = Cell::new(1).expect("valid cell");
        assert_eq!(app.cursor(), top_left);
        assert_eq!(app.session().view().mark_at(top_left), Some(Mark::X));

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.notice(), Some("P1 is already occupied"));
    }

    #[test]
    fn test_new_game_returns_to_names() {
        let mut app = App::new("Ada", "Alan");
        type_keys(&mut app, &[KeyCode::Enter, KeyCode::Char('5'), KeyCode::Char('n')]);
        assert_eq!(*app.session().phase(), Phase::AwaitingNames);
        assert_eq!(app.name(NameField::X), "Ada");
        assert!(app.session().current_log().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("Ada", "Alan");
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit(), "q is typed into the name field");
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
