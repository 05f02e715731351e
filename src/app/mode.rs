use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the list; the creation form is collapsed.
    #[default]
    Navigate,
    /// The creation form is expanded and owns keyboard input.
    Insert,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Navigate => write!(f, "NAVIGATE"),
            Mode::Insert => write!(f, "INSERT"),
        }
    }
}
