//! Colored line prefixes for each kind of message

use colored::{Color, ColoredString, Colorize};
use std::fmt;

/// Message category shown at the start of every console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Info,
    Question,
    Ok,
    Warning,
    Error,
    Fatal,
}

impl Indicator {
    /// Plain-text tag, without color
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "[ i ]",
            Self::Question => "[ ? ]",
            Self::Ok => "[ ✓ ]",
            Self::Warning => "[ ! ]",
            Self::Error => "[ × ]",
            Self::Fatal => "[×××]",
        }
    }

    const fn color(self) -> Color {
        match self {
            Self::Info => Color::Magenta,
            Self::Question => Color::Blue,
            Self::Ok => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error | Self::Fatal => Color::Red,
        }
    }

    /// Bold, colored tag
    #[must_use]
    pub fn styled(self) -> ColoredString {
        self.label().bold().color(self.color())
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}
