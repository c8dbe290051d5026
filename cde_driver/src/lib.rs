//! Drives the front end of the CODE interpreter: picks the execution mode out of the command line
//! arguments and feeds the source code to a [`TokenSource`].
//!
//! - With a source file argument, the whole file is tokenized once (batch mode).
//! - Without arguments, lines are read from the interactive prompt and tokenized one by one until
//!   the end of the input.
//!
//! The program accepts at most one argument, always taken as a path. The settings are read from
//! the `CDE_DUMP_TOKENS` and `CDE_MAX_LINE_LENGTH` environment variables instead.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    cell::Cell,
    ffi::OsString,
    fmt::Display,
    fs::File,
    io, iter,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use cde_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use cde_lexical::token_source::{Lexer, TokenSource};
pub use clap::Parser;
use derive_new::new;
use getset::CopyGetters;

pub mod interactive;

/// The maximum number of bytes of a line read by the interactive prompt.
pub const MAX_LINE_LENGTH: usize = 512;

/// The usage line printed along with invalid arguments.
pub const USAGE: &str = "cde [CODE source file]";

/// The environment variable that, when set to anything but an empty string or `0`, prints the
/// tokens of every tokenized source.
pub const DUMP_TOKENS_VARIABLE: &str = "CDE_DUMP_TOKENS";

/// The environment variable overriding [`MAX_LINE_LENGTH`].
pub const MAX_LINE_LENGTH_VARIABLE: &str = "CDE_MAX_LINE_LENGTH";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "cde",
    about = "CODE programming language interpreter.",
    override_usage = USAGE,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Argument {
    /// The source file to run. The interactive prompt starts when it's omitted.
    #[clap(allow_hyphen_values = true)]
    pub file: Option<PathBuf>,
}

/// Is an enumeration of the two ways the interpreter runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Tokenizes the whole file at the given path once.
    Batch(PathBuf),

    /// Reads and tokenizes lines from the prompt until the end of the input.
    Interactive,
}

impl Argument {
    /// Parses the command line arguments, the first one being the program name.
    ///
    /// The argument following the program name is taken as a path even if it looks like an
    /// option.
    ///
    /// # Errors
    /// - [`Error::TooManyArguments`]: more than one argument follows the program name.
    /// - [`Error::InvalidArgument`]: the arguments were rejected by the parser.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("cde"));
        let arguments = args.collect::<Vec<_>>();

        if arguments.len() > 1 {
            return Err(Error::TooManyArguments {
                count: arguments.len(),
            });
        }

        // everything after `--` is positional
        Self::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(arguments),
        )
        .map_err(Error::from)
    }

    /// Gets the [`Mode`] selected by the arguments.
    #[must_use]
    pub fn mode(&self) -> Mode { self.file.clone().map_or(Mode::Interactive, Mode::Batch) }
}

/// Is the outcome of a run, turned into the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The selected mode completed its work.
    Success,

    /// The arguments were invalid or the source couldn't be read.
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// Contains the settings shared by both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters, new)]
pub struct Config {
    /// Gets the maximum number of bytes of a line read by the interactive prompt.
    #[get_copy = "pub"]
    max_line_length: usize,

    /// Gets whether the tokens are printed after each tokenization.
    #[get_copy = "pub"]
    dump_tokens: bool,
}

impl Default for Config {
    fn default() -> Self { Self::new(MAX_LINE_LENGTH, false) }
}

impl Config {
    /// Reads the settings from the [`DUMP_TOKENS_VARIABLE`] and [`MAX_LINE_LENGTH_VARIABLE`]
    /// environment variables.
    #[must_use]
    pub fn from_env() -> Self { Self::from_lookup(|name| std::env::var(name).ok()) }

    /// Builds the settings out of the variables returned by `lookup`.
    ///
    /// An invalid line length is reported and replaced by [`MAX_LINE_LENGTH`].
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dump_tokens = lookup(DUMP_TOKENS_VARIABLE)
            .is_some_and(|value| !value.is_empty() && value != "0");

        let max_line_length = lookup(MAX_LINE_LENGTH_VARIABLE).map_or(MAX_LINE_LENGTH, |value| {
            match value.trim().parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => {
                    eprintln!(
                        "{}",
                        Message::new(
                            Severity::Warning,
                            format!(
                                "`{MAX_LINE_LENGTH_VARIABLE}` must be a positive number of \
                                 bytes, using {MAX_LINE_LENGTH} instead of `{value}`"
                            )
                        )
                    );
                    MAX_LINE_LENGTH
                }
            }
        });

        Self::new(max_line_length, dump_tokens)
    }
}

/// Is an error that stops the driver before any source code is tokenized.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More than one argument was given to the program.
    #[error("expected at most one source file, found {count} arguments")]
    TooManyArguments {
        /// The number of arguments following the program name.
        count: usize,
    },

    /// The arguments were rejected by the parser.
    #[error(transparent)]
    InvalidArgument(#[from] clap::Error),

    /// The source file couldn't be opened.
    #[error(
        "can't open file `{}` from the working directory `{}`: {source}",
        path.display(),
        working_directory.display()
    )]
    OpenFile {
        /// The path given by the user.
        path: PathBuf,

        /// The directory relative paths are resolved against.
        working_directory: PathBuf,

        /// The error reported by the operating system.
        source: io::Error,
    },

    /// The source file was opened but its content couldn't be read as text.
    #[error("can't read file `{}`: {source}", path.display())]
    LoadFile {
        /// The path given by the user.
        path: PathBuf,

        /// The reason the content couldn't be loaded.
        source: source_file::Error,
    },
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Printer {
    printed: Cell<usize>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(0),
        }
    }

    fn printed_count(&self) -> usize { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(self.printed.get() + 1);
    }
}

/// Parses the command line arguments and runs the selected mode.
///
/// Invalid arguments, such as more than one source file, are reported along with the usage and
/// nothing else is done.
pub fn run_with_args<I, T>(args: I) -> Status
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match Argument::try_from_args(args) {
        Ok(argument) => run(&argument),
        Err(error) => {
            eprintln!(
                "{}",
                Message::new(
                    Severity::Error,
                    format!("invalid arguments, refer below to get started\n{error}")
                )
            );
            eprintln!("{}", Message::new(Severity::Info, format!("usage: {USAGE}")));
            Status::Failure
        }
    }
}

/// Runs the mode selected by the arguments with the CODE [`Lexer`] and the settings of
/// [`Config::from_env`].
#[must_use]
pub fn run(argument: &Argument) -> Status {
    let config = Config::from_env();

    match argument.mode() {
        Mode::Batch(path) => run_source_file(&path, &Lexer, config),
        Mode::Interactive => {
            interactive::run(io::stdin().lock(), io::stdout().lock(), &Lexer, config)
        }
    }
}

/// Opens and loads the source file at the given path.
///
/// # Errors
/// - [`Error::OpenFile`]: the file can't be opened.
/// - [`Error::LoadFile`]: the file can't be mapped into memory or isn't valid UTF-8.
pub fn open_source_file(path: &Path) -> Result<Arc<SourceFile>, Error> {
    let file = File::open(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        source,
    })?;

    SourceFile::load(file, path.to_path_buf()).map_err(|source| Error::LoadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the batch mode: tokenizes the whole source file at the given path once.
///
/// The run succeeds once the content has been submitted to the `token_source`, lexical errors are
/// only reported. It fails if the file can't be opened or read.
pub fn run_source_file<S: TokenSource + ?Sized>(
    path: &Path,
    token_source: &S,
    config: Config,
) -> Status {
    let source_file = match open_source_file(path) {
        Ok(source_file) => source_file,
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, &error));

            if matches!(error, Error::OpenFile { .. }) {
                eprintln!(
                    "{}",
                    Message::new(Severity::Info, "make sure such file or directory exists")
                );
            }

            return Status::Failure;
        }
    };

    let printer = Printer::new();
    let token_stream = token_source.tokenize(&source_file, &printer);

    if printer.printed_count() > 0 {
        eprintln!(
            "{}",
            Message::new(
                Severity::Info,
                format!(
                    "found {} lexical error(s) in `{}`",
                    printer.printed_count(),
                    path.display()
                )
            )
        );
    }

    if config.dump_tokens() {
        println!("{token_stream:#?}");
    }

    Status::Success
}

#[cfg(test)]
mod tests;
