//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use cde_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};
use derive_more::From;
use enum_as_inner::EnumAsInner;

/// The source code contains a character that can't start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnexpectedCharacter {
    /// The span of the character.
    pub span: Span,

    /// The character found.
    pub character: char,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("unexpected character `{}`", self.character.escape_debug())
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// A `"` string literal isn't closed before the end of the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnterminatedString {
    /// The span of the opening `"`.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(&self.span, Some("this `\"` is never closed"))
        )
    }
}

/// A `[` escape isn't closed by `]` before the end of the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnterminatedEscape {
    /// The span of the opening `[`.
    pub span: Span,
}

impl Display for UnterminatedEscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated escape"),
            SourceCodeDisplay::new(&self.span, Some("this `[` is never closed by a `]`"))
        )
    }
}

/// A character literal with nothing between its quotes: `''`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EmptyCharacterLiteral {
    /// The span of both quotes.
    pub span: Span,
}

impl Display for EmptyCharacterLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an empty character literal"),
            SourceCodeDisplay::new(&self.span, Some("put exactly one character between the quotes"))
        )
    }
}

/// A character literal that isn't closed by `'` right after its character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnterminatedCharacterLiteral {
    /// The span from the opening `'` to the last character read.
    pub span: Span,
}

impl Display for UnterminatedCharacterLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated character literal"),
            SourceCodeDisplay::new(&self.span, Some("expected a `'` after the character"))
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedCharacter(UnexpectedCharacter),
    UnterminatedString(UnterminatedString),
    UnterminatedEscape(UnterminatedEscape),
    EmptyCharacterLiteral(EmptyCharacterLiteral),
    UnterminatedCharacterLiteral(UnterminatedCharacterLiteral),
}

impl Error {
    /// Gets the span of the source code where the error occurred.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedCharacter(err) => &err.span,
            Self::UnterminatedString(err) => &err.span,
            Self::UnterminatedEscape(err) => &err.span,
            Self::EmptyCharacterLiteral(err) => &err.span,
            Self::UnterminatedCharacterLiteral(err) => &err.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnterminatedEscape(err) => write!(f, "{err}"),
            Self::EmptyCharacterLiteral(err) => write!(f, "{err}"),
            Self::UnterminatedCharacterLiteral(err) => write!(f, "{err}"),
        }
    }
}
