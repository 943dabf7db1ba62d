//! Stateless UI rendering for the board and the inference log.

use super::app::{App, NameField};
use fol_tictactoe::{Cell, GameView, Mark, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole screen: game on the left, log on the right.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board or names
            Constraint::Length(3), // Status
            Constraint::Length(3), // Notice / help
        ])
        .split(halves[0]);

    let title = Paragraph::new("Knowledge-Base Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if view.phase() == Phase::AwaitingNames {
        draw_names(frame, chunks[1], app);
    } else {
        draw_board(frame, chunks[1], &view, app.cursor());
    }

    let status = Paragraph::new(view.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_footer(frame, chunks[3], app, view.phase());
    draw_log(frame, halves[1], view.log());
}

fn draw_names(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (row, field, label) in [
        (rows[0], NameField::X, "Player X"),
        (rows[1], NameField::O, "Player O"),
    ] {
        let border = if app.focus() == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(app.name(field)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label),
        );
        frame.render_widget(input, row);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Cell) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (slot, cells) in Cell::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[slot * 2], view, cursor, cells);
        if slot < 2 {
            draw_separator(frame, rows[slot * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, cursor: Cell, cells: &[Cell]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (slot, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[slot * 2], view, cursor, *cell);
        if slot < 2 {
            draw_separator_vertical(frame, cols[slot * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Cell, cell: Cell) {
    let label = cell.index().to_string();
    let (symbol, base_style) = match view.mark_at(cell) {
        None => (label.as_str(), Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let live = view.phase() == Phase::InProgress;
    let style = if view.highlight().contains(&cell) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if live && cell == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, phase: Phase) {
    let (text, style) = match app.notice() {
        Some(notice) => (notice.to_string(), Style::default().fg(Color::Red)),
        None => {
            let help = if phase == Phase::AwaitingNames {
                "Tab: switch field  Enter: New Game  Esc: quit"
            } else {
                "1-9/arrows+Enter: move  n: New Game  q: quit"
            };
            (help.to_string(), Style::default().fg(Color::DarkGray))
        }
    };
    let footer = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;

    // Wrap by hand so the tail we keep is counted in screen rows.
    let rows: Vec<String> = log
        .iter()
        .flat_map(|entry| wrap_rows(entry, inner_width))
        .collect();
    let tail = rows.len().saturating_sub(visible);
    let lines: Vec<Line> = rows[tail..].iter().map(|row| Line::from(row.as_str())).collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Knowledge Base Log"));
    frame.render_widget(paragraph, area);
}

/// Splits one log entry into rows of at most `width` characters.
fn wrap_rows(entry: &str, width: usize) -> Vec<String> {
    if width == 0 || entry.is_empty() {
        return vec![entry.to_string()];
    }
    let chars: Vec<char> = entry.chars().collect();
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        render_sized(app, 100, 30)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_names_screen_renders_fields() {
        let app = App::new("Ada", "Alan");
        let screen = render(&app);
        assert!(screen.contains("Player X"));
        assert!(screen.contains("Ada"));
    }

    #[test]
    fn test_board_renders_log_and_status() {
        let mut app = App::new("Ada", "Alan");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains("Alan's turn (O)"));
        assert!(screen.contains("Rule 1: P5 is no longer empty"));
    }

    #[test]
    fn test_narrow_log_keeps_newest_entry_visible() {
        let mut app = App::new("Ada", "Alan");
        app.handle_key(KeyCode::Enter);
        for digit in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(digit));
        }
        let screen = render_sized(&app, 60, 30);
        assert!(screen.contains("Rule 3: Win detected for X"));
        assert!(!screen.contains("Initial Knowledge Base:"));
    }

    #[test]
    fn test_wrap_rows_splits_long_entries() {
        assert_eq!(wrap_rows("Rule 1: P5", 4), vec!["Rule", " 1: ", "P5"]);
        assert_eq!(wrap_rows("Win(X)", 28), vec!["Win(X)"]);
        assert_eq!(wrap_rows("", 28), vec![""]);
    }
}
