//! ANSI colors for terminal output.

/// Resets all attributes
pub const RESET: &str = "\u{1b}[0m";

/// Clears the screen and moves the cursor to the top-left corner
pub const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

/// Foreground colors used by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
}

impl Color {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\u{1b}[31m",
            Self::Green => "\u{1b}[32m",
            Self::Yellow => "\u{1b}[33m",
            Self::Blue => "\u{1b}[34m",
            Self::Purple => "\u{1b}[35m",
            Self::Cyan => "\u{1b}[36m",
        }
    }
}

/// Wraps `text` in `color`, or returns it untouched when colors are off.
#[must_use]
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}{text}{RESET}", color.code())
    } else {
        text.to_string()
    }
}
