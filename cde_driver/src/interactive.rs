//! Contains the interactive prompt: reads one line at a time and tokenizes it.

use std::io::{self, BufRead, Read, Write};

use cde_base::{
    log::{Message, Severity},
    source_file::SourceFile,
};
use cde_lexical::token_source::TokenSource;

use crate::{Config, Printer, Status};

/// The text printed before reading each line.
pub const PROMPT: &str = ">>> ";

/// The line that ends the interactive session.
pub const EXIT_COMMAND: &str = "exit";

const HELP: &str = "Type a line of CODE to tokenize it.\nType \"credits\" to see who made \
                    the CODE language, or \"exit\" to leave. The session also ends at the end of \
                    the input (Ctrl-D, or Ctrl-Z then Enter on Windows).";

const CREDITS: &str = "The CODE programming language was designed by Hitsuji Labs.";

/// Represents a line read by [`read_line`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Line {
    /// The whole line, without its line terminator.
    Complete(String),

    /// The first `max_line_length` bytes of a longer line. The rest of that line was discarded.
    Truncated(String),

    /// There's nothing left to read.
    EndOfInput,
}

/// Reads the next line from the `input`, keeping at most `max_line_length` bytes of it.
///
/// The trailing `\n` or `\r\n` isn't part of the returned line. Bytes that aren't valid UTF-8 are
/// replaced by `U+FFFD`.
///
/// # Errors
/// Returns the error of the underlying reader.
pub fn read_line(input: &mut impl BufRead, max_line_length: usize) -> io::Result<Line> {
    // room for the `\r\n` of a line that fits exactly
    let limit = max_line_length.saturating_add(2);
    let mut buffer = Vec::new();

    let read = input
        .by_ref()
        .take(u64::try_from(limit).unwrap_or(u64::MAX))
        .read_until(b'\n', &mut buffer)?;

    if read == 0 {
        return Ok(Line::EndOfInput);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    } else if buffer.len() == limit {
        discard_rest_of_line(input)?;
    }

    let truncated = buffer.len() > max_line_length;
    buffer.truncate(max_line_length);

    let line = String::from_utf8_lossy(&buffer).into_owned();

    Ok(if truncated {
        Line::Truncated(line)
    } else {
        Line::Complete(line)
    })
}

/// Skips everything up to and including the next `\n` without buffering it.
fn discard_rest_of_line(input: &mut impl BufRead) -> io::Result<()> {
    loop {
        let (consumed, found_newline) = {
            let available = input.fill_buf()?;

            if available.is_empty() {
                return Ok(());
            }

            available
                .iter()
                .position(|byte| *byte == b'\n')
                .map_or((available.len(), false), |position| (position + 1, true))
        };

        input.consume(consumed);

        if found_newline {
            return Ok(());
        }
    }
}

/// Runs the interactive mode: prints the banner, then prompts, reads and tokenizes lines until the
/// end of the `input` or the `exit` line.
///
/// Each line is submitted as its own source, so nothing carries over from one line to the next.
/// Lexical errors are printed and the prompt goes on. The run fails only if reading the `input` or
/// writing the `output` fails.
pub fn run<S: TokenSource + ?Sized>(
    mut input: impl BufRead,
    mut output: impl Write,
    token_source: &S,
    config: Config,
) -> Status {
    match prompt_loop(&mut input, &mut output, token_source, config) {
        Ok(()) => Status::Success,
        Err(error) => {
            eprintln!(
                "{}",
                Message::new(
                    Severity::Error,
                    format!("the interactive prompt stopped: {error}")
                )
            );
            Status::Failure
        }
    }
}

fn prompt_loop<S: TokenSource + ?Sized>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    token_source: &S,
    config: Config,
) -> io::Result<()> {
    writeln!(
        output,
        "CODE {}\nType \"help\" or \"credits\" for more information.",
        env!("CARGO_PKG_VERSION")
    )?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match read_line(input, config.max_line_length())? {
            Line::Complete(line) => line,
            Line::Truncated(line) => {
                eprintln!(
                    "{}",
                    Message::new(
                        Severity::Warning,
                        format!(
                            "the line is longer than {} bytes, the rest of it is ignored",
                            config.max_line_length()
                        )
                    )
                );
                line
            }
            Line::EndOfInput => {
                // leaves the shell prompt on its own line
                writeln!(output)?;
                return Ok(());
            }
        };

        match line.trim() {
            EXIT_COMMAND => return Ok(()),
            "help" => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            "credits" => {
                writeln!(output, "{CREDITS}")?;
                continue;
            }
            _ => {}
        }

        let source_file = SourceFile::from_stdin_line(line);
        let printer = Printer::new();
        let token_stream = token_source.tokenize(&source_file, &printer);

        if config.dump_tokens() {
            writeln!(output, "{token_stream:#?}")?;
        }
    }
}
