use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = if state.loading {
        " To Do (syncing…) "
    } else {
        " To Do "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(state.theme.background));

    if state.todo_list.is_empty() {
        let hint = if state.loading {
            ""
        } else {
            " Nothing to do — press n to add a todo"
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(state.theme.done))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .todo_list
        .items
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let in_flight = state.is_in_flight(todo.id);
            let selected = i == state.cursor_position;

            // The checkbox always shows the last server-confirmed state
            let checkbox = if todo.completed { "[x]" } else { "[ ]" };

            let row_style = if in_flight {
                Style::default().fg(state.theme.pending)
            } else if todo.completed {
                Style::default()
                    .fg(state.theme.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(state.theme.foreground)
            };

            let mut spans = vec![
                Span::styled(format!(" {checkbox} "), Style::default().fg(state.theme.accent)),
                Span::styled(todo.description.clone(), row_style),
            ];

            // The delete control only shows on the row under the cursor
            if selected && state.mode == Mode::Navigate {
                spans.push(Span::styled(
                    "  d to delete",
                    Style::default().fg(state.theme.done),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");

    f.render_stateful_widget(list, area, &mut state.list_state);
}
