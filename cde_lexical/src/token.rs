//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, str::FromStr};

use cde_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, Span},
};
use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::error::{
    self, EmptyCharacterLiteral, UnexpectedCharacter, UnterminatedCharacterLiteral,
    UnterminatedEscape, UnterminatedString,
};

/// Is an enumeration representing the reserved words of the CODE programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Code,
    Begin,
    End,
    Int,
    Char,
    Bool,
    Float,
    If,
    Else,
    While,
    Display,
    Scan,
    And,
    Or,
    Not,
}

impl std::fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`Keyword`] in [`FromStr`]
/// trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    ///
    /// Keywords are case sensitive and always written in upper case.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "CODE",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Int => "INT",
            Self::Char => "CHAR",
            Self::Bool => "BOOL",
            Self::Float => "FLOAT",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Display => "DISPLAY",
            Self::Scan => "SCAN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// Is an enumeration of the operators and separators of the CODE programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Concatenate,
    Assign,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Lesser,
    LesserEqual,
    LeftParenthesis,
    RightParenthesis,
    Comma,
    Colon,
}

impl OperatorKind {
    /// Gets the string representation of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Concatenate => "&",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "<>",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Lesser => "<",
            Self::LesserEqual => "<=",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Comma => ",",
            Self::Colon => ":",
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the CODE programming language.
///
/// Whitespaces and `#` comments separate tokens but never make up a token on their own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Keyword(Keyword),
    Operator(Operator),
    Numeric(Numeric),
    Character(Character),
    String(StringLiteral),
    Boolean(Boolean),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Identifier(token) => &token.span,
            Self::Keyword(token) => &token.span,
            Self::Operator(token) => &token.span,
            Self::Numeric(token) => &token.span,
            Self::Character(token) => &token.span,
            Self::String(token) => &token.span,
            Self::Boolean(token) => &token.span,
        }
    }
}

/// Represents a name given to a variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

/// Represents an operator or a separator made of one or two characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operator {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`OperatorKind`] that the token represents.
    pub operator: OperatorKind,
}

/// Is an enumeration of the two kinds of numeric literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    /// A whole number such as `42`.
    Integer,

    /// A number with a fractional part such as `4.2`.
    Float,
}

/// Represents a hardcoded numeric literal value in the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the kind of number the literal spells.
    pub kind: NumericKind,
}

/// Represents a character literal such as `'a'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Character {
    /// Is the span that makes up the token, including the quotes.
    pub span: Span,

    /// Is the character enclosed by the quotes.
    pub value: char,
}

/// Is an enumeration of the ways a string literal can be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringKind {
    /// Text enclosed by double quotes: `"hello"`.
    Quoted,

    /// Text enclosed by square brackets, taken verbatim: `[#]`.
    Escaped,

    /// The `$` character, standing for a line break.
    NewLine,
}

/// Represents a string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// Is the span that makes up the token, including its delimiters.
    pub span: Span,

    /// Is the text the literal stands for.
    pub value: String,

    /// Is the way the literal was written.
    pub kind: StringKind,
}

/// Represents a boolean literal, written as the string `"TRUE"` or `"FALSE"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boolean {
    /// Is the span that makes up the token, including the quotes.
    pub span: Span,

    /// Is the value of the literal.
    pub value: bool,
}

/// Is an error that can occur when invoking the [`Token::lex`] method.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error, From,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error("encountered a lexical error, the characters read are discarded.")]
    FatalLexicalError,

    #[error("the iterator argument is at the end of the source code.")]
    EndOfSourceCodeIteratorArgument,
}

impl Token {
    /// Increments the iterator until the predicate returns false.
    fn walk_iter(iter: &mut source_file::Iterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Creates a span from the given start location to the current location of the iterator.
    fn create_span(start: ByteIndex, iter: &mut source_file::Iterator) -> Span {
        let end = iter
            .peek()
            .map_or_else(|| iter.source_file().content().len(), |(index, _)| index);

        Span::new(iter.source_file().clone(), start, end)
            .expect("the iterator always stops at a character boundary")
    }

    /// Moves the iterator past the next character if it equals the expected one.
    fn eat(iter: &mut source_file::Iterator, expected: char) -> bool {
        if iter.peek().map(|(_, character)| character) == Some(expected) {
            iter.next();
            true
        } else {
            false
        }
    }

    fn is_first_identifier_character(character: char) -> bool {
        character == '_' || character.is_alphabetic()
    }

    fn is_identifier_character(character: char) -> bool {
        Self::is_first_identifier_character(character) || character.is_ascii_digit()
    }

    fn handle_identifier_and_keyword(iter: &mut source_file::Iterator, start: ByteIndex) -> Self {
        Self::walk_iter(iter, Self::is_identifier_character);

        let span = Self::create_span(start, iter);

        match KeywordKind::from_str(span.str()) {
            Ok(keyword) => Keyword { span, keyword }.into(),
            Err(KeywordParseError) => Identifier { span }.into(),
        }
    }

    fn handle_numeric_literal(iter: &mut source_file::Iterator, start: ByteIndex) -> Self {
        Self::walk_iter(iter, |character| character.is_ascii_digit());

        // the dot belongs to the number only if a digit follows it
        let mut lookahead = iter.clone();
        let has_fraction = lookahead.next().map(|(_, character)| character) == Some('.')
            && lookahead
                .peek()
                .map_or(false, |(_, character)| character.is_ascii_digit());

        let kind = if has_fraction {
            iter.next();
            Self::walk_iter(iter, |character| character.is_ascii_digit());
            NumericKind::Float
        } else {
            NumericKind::Integer
        };

        Numeric {
            span: Self::create_span(start, iter),
            kind,
        }
        .into()
    }

    fn handle_operator(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        character: char,
    ) -> Option<Self> {
        let operator = match character {
            '+' => OperatorKind::Add,
            '-' => OperatorKind::Subtract,
            '*' => OperatorKind::Multiply,
            '/' => OperatorKind::Divide,
            '%' => OperatorKind::Modulo,
            '&' => OperatorKind::Concatenate,
            '(' => OperatorKind::LeftParenthesis,
            ')' => OperatorKind::RightParenthesis,
            ',' => OperatorKind::Comma,
            ':' => OperatorKind::Colon,
            '=' if Self::eat(iter, '=') => OperatorKind::Equal,
            '=' => OperatorKind::Assign,
            '>' if Self::eat(iter, '=') => OperatorKind::GreaterEqual,
            '>' => OperatorKind::Greater,
            '<' if Self::eat(iter, '>') => OperatorKind::NotEqual,
            '<' if Self::eat(iter, '=') => OperatorKind::LesserEqual,
            '<' => OperatorKind::Lesser,
            _ => return None,
        };

        Some(
            Operator {
                span: Self::create_span(start, iter),
                operator,
            }
            .into(),
        )
    }

    /// Reads the characters up to the closing delimiter. Returns the enclosed text, or [`None`] if
    /// the source code ends first.
    fn read_enclosed(iter: &mut source_file::Iterator, close: char) -> Option<String> {
        let mut value = String::new();

        for (_, character) in iter.by_ref() {
            if character == close {
                return Some(value);
            }

            value.push(character);
        }

        None
    }

    fn handle_quoted_string(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, Error> {
        let Some(value) = Self::read_enclosed(iter, '"') else {
            handler.receive(
                UnterminatedString {
                    span: Span::new(iter.source_file().clone(), start, start + 1)
                        .expect("the quote is a single byte"),
                }
                .into(),
            );
            return Err(Error::FatalLexicalError);
        };

        let span = Self::create_span(start, iter);

        Ok(match value.as_str() {
            "TRUE" => Boolean { span, value: true }.into(),
            "FALSE" => Boolean { span, value: false }.into(),
            _ => StringLiteral {
                span,
                value,
                kind: StringKind::Quoted,
            }
            .into(),
        })
    }

    fn handle_escaped_string(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, Error> {
        let Some(value) = Self::read_enclosed(iter, ']') else {
            handler.receive(
                UnterminatedEscape {
                    span: Span::new(iter.source_file().clone(), start, start + 1)
                        .expect("the bracket is a single byte"),
                }
                .into(),
            );
            return Err(Error::FatalLexicalError);
        };

        Ok(StringLiteral {
            span: Self::create_span(start, iter),
            value,
            kind: StringKind::Escaped,
        }
        .into())
    }

    fn handle_character_literal(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, Error> {
        if Self::eat(iter, '\'') {
            handler.receive(
                EmptyCharacterLiteral {
                    span: Self::create_span(start, iter),
                }
                .into(),
            );
            return Err(Error::FatalLexicalError);
        }

        let value = iter
            .peek()
            .map(|(_, character)| character)
            .filter(|character| *character != '\n' && *character != '\r');

        if let Some(value) = value {
            iter.next();

            if Self::eat(iter, '\'') {
                return Ok(Character {
                    span: Self::create_span(start, iter),
                    value,
                }
                .into());
            }
        }

        handler.receive(
            UnterminatedCharacterLiteral {
                span: Self::create_span(start, iter),
            }
            .into(),
        );
        Err(Error::FatalLexicalError)
    }

    /// Moves the iterator past the whitespaces and `#` comments and returns the first character
    /// of the next token.
    fn skip_insignificant(iter: &mut source_file::Iterator) -> Option<(ByteIndex, char)> {
        loop {
            let (start, character) = iter.next()?;

            if character.is_whitespace() {
                continue;
            }

            if character == '#' {
                Self::walk_iter(iter, |character| character != '\n');
                continue;
            }

            return Some((start, character));
        }
    }

    /// Lexes the source code from the given iterator.
    ///
    /// Whitespaces and comments in front of the token are skipped. After the token is made, the
    /// iterator is left at the next character that is not part of the token. Every lexical error
    /// is sent to the `handler` before [`Error::FatalLexicalError`] is returned, the iterator is
    /// then left past the malformed characters so lexing can carry on.
    ///
    /// # Errors
    /// - [`Error::EndOfSourceCodeIteratorArgument`] - No token is left in the source code.
    /// - [`Error::FatalLexicalError`] - A lexical error occurred.
    pub fn lex(
        iter: &mut source_file::Iterator,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, Error> {
        let (start, character) =
            Self::skip_insignificant(iter).ok_or(Error::EndOfSourceCodeIteratorArgument)?;

        match character {
            '"' => Self::handle_quoted_string(iter, start, handler),
            '[' => Self::handle_escaped_string(iter, start, handler),
            '\'' => Self::handle_character_literal(iter, start, handler),
            '$' => Ok(StringLiteral {
                span: Self::create_span(start, iter),
                value: "\n".to_string(),
                kind: StringKind::NewLine,
            }
            .into()),
            character if Self::is_first_identifier_character(character) => {
                Ok(Self::handle_identifier_and_keyword(iter, start))
            }
            character if character.is_ascii_digit() => {
                Ok(Self::handle_numeric_literal(iter, start))
            }
            character => Self::handle_operator(iter, start, character).ok_or_else(|| {
                handler.receive(
                    UnexpectedCharacter {
                        span: Self::create_span(start, iter),
                        character,
                    }
                    .into(),
                );
                Error::FatalLexicalError
            }),
        }
    }
}
