//! Provides the functions related to logging/printing messages to the console.
//!
//! Every message printed by the interpreter goes through [`Message`], which prefixes the text
//! with a colored `[error]:`, `[warning]:` or `[info]:` header depending on its [`Severity`].

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints the line of source code a span starts on, with
/// the spanned characters marked underneath.
///
/// ```text
///  --> main.code:2:9
///   |
/// 2 | INT x = @
///   |         ^ help: remove this character
///   |
/// ```
///
/// Spans covering several lines only mark the part of their first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_location = self.span.start_location();
        let end_location = self.span.end_location();
        let line = self
            .span
            .source_file()
            .get_line(start_location.line)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r']);

        let gutter_width = start_location.line.to_string().len();
        let pipe = Style::Bold.with(Color::Cyan.with("|"));

        writeln!(
            f,
            "{:gutter_width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().full_path().display(),
            start_location.line,
            start_location.column
        )?;
        writeln!(f, "{:gutter_width$} {pipe}", "")?;

        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(start_location.line))
        )?;
        for character in line.chars() {
            if character == '\t' {
                write!(f, "    ")?;
            } else {
                write!(f, "{character}")?;
            }
        }
        writeln!(f)?;

        // marks from the start column up to the end column, or the end of the line
        let line_length = line.chars().count();
        let marked_end = if end_location.line == start_location.line {
            end_location.column.min(line_length + 1)
        } else {
            line_length + 1
        };

        write!(f, "{:gutter_width$} {pipe} ", "")?;
        for character in line.chars().take(start_location.column.saturating_sub(1)) {
            write!(f, "{}", if character == '\t' { "    " } else { " " })?;
        }

        let marker_count = marked_end.saturating_sub(start_location.column).max(1);
        write!(
            f,
            "{}",
            Style::Bold.with(Color::Red.with("^".repeat(marker_count)))
        )?;

        if let Some(help_display) = &self.help_display {
            write!(f, " {}: {help_display}", Style::Bold.with("help"))?;
        }
        writeln!(f)?;

        write!(f, "{:gutter_width$} {pipe}", "")
    }
}
