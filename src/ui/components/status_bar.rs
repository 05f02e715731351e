use crate::app::AppState;
use crate::app::mode::Mode;
use crate::app::state::{StatusKind, StatusMessage};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(message) = &state.status_message {
        render_status_message(f, message, area);
        return;
    }

    let mode_text = format!("{}", state.mode);
    let sync_indicator = if state.loading { " [syncing]" } else { "" };

    let key_hints = match state.mode {
        Mode::Navigate => "n new  x done  d delete  r refresh  q quit",
        Mode::Insert => "Enter save  Esc cancel",
    };
    let version_text = format!("v{VERSION}");

    let left_content = format!(
        " {} | {} items{}",
        mode_text,
        state.todo_list.len(),
        sync_indicator
    );

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + key_hints.len() as u16 + version_text.len() as u16 + 3,
    );

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {} ",
        left_content,
        key_hints,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &StatusMessage, area: Rect) {
    let display_message = format!(" {} ", message.text);

    let bg = match message.kind {
        StatusKind::Info => Color::Rgb(0, 100, 0),
        StatusKind::Error => Color::Rgb(140, 30, 30),
    };
    let style = Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(display_message.len() as u16);
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
