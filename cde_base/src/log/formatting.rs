//! Contains the ANSI escape codes used to style and color console messages.

use std::fmt::Display;

const RESET: &str = "\x1B[0m";

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Formatted<T> {
        Formatted {
            code: match self {
                Self::Bold => "\x1B[1m",
            },
            display,
        }
    }
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Formatted<T> {
        Formatted {
            code: match self {
                Self::Red => "\x1B[31m",
                Self::Green => "\x1B[32m",
                Self::Yellow => "\x1B[33m",
                Self::Cyan => "\x1B[36m",
            },
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object in an escape code and
/// resets the terminal afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Formatted<T> {
    code: &'static str,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for Formatted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{RESET}", self.code, self.display)
    }
}
