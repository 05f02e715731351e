pub mod status_bar;
pub mod todo_list;

use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &mut AppState) {
    if state.mode == Mode::Insert {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Todo list
                Constraint::Length(3), // Creation form
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        todo_list::render(f, state, chunks[0]);
        render_new_todo_form(f, state, chunks[1]);
        status_bar::render(f, state, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Todo list
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        todo_list::render(f, state, chunks[0]);
        status_bar::render(f, state, chunks[1]);
    }
}

/// The expanded creation form: a single-line input with the terminal cursor
/// tracking the edit position.
fn render_new_todo_form(f: &mut Frame, state: &AppState, area: Rect) {
    let title = if state.creating {
        " New todo (saving…) "
    } else {
        " New todo "
    };

    let input = Paragraph::new(state.edit_buffer.as_str())
        .style(Style::default().fg(state.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(state.theme.accent)),
        );
    f.render_widget(input, area);

    let cursor_col = state.edit_buffer[..state.edit_cursor_pos].width() as u16;
    let x = (area.x + 1 + cursor_col).min(area.x + area.width.saturating_sub(2));
    f.set_cursor_position(Position::new(x, area.y + 1));
}
