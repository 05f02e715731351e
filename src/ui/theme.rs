use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Completed items
    pub done: Color,
    /// Rows with a round trip still in flight
    pub pending: Color,
    pub accent: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            done: Color::DarkGray,
            pending: Color::Rgb(130, 130, 130),
            accent: Color::Cyan,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            done: Color::DarkGray,
            pending: Color::Rgb(130, 130, 130),
            accent: Color::Cyan,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            done: Color::Gray,
            pending: Color::Rgb(120, 120, 120),
            accent: Color::Blue,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
