use std::{cell::RefCell, collections::HashMap, ffi::OsString, io::Write, path::Path, sync::Arc};

use cde_base::{diagnostic::Handler, source_file::SourceFile};
use cde_lexical::{
    error,
    token_source::{Lexer, TokenSource},
    token_stream::TokenStream,
};

use crate::{Argument, Config, Error, Mode, Status};

/// Records the content of every source submitted to it before lexing it.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) submissions: RefCell<Vec<String>>,
}

impl TokenSource for Recorder {
    fn tokenize(
        &self,
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
    ) -> TokenStream {
        self.submissions
            .borrow_mut()
            .push(source_file.content().to_owned());

        Lexer.tokenize(source_file, handler)
    }
}

#[test]
fn mode_selection() {
    let interactive = Argument::try_from_args(["cde"]).unwrap();
    let batch = Argument::try_from_args(["cde", "main.code"]).unwrap();

    assert_eq!(interactive.mode(), Mode::Interactive);
    assert_eq!(batch.mode(), Mode::Batch("main.code".into()));
}

#[test]
fn single_argument_is_always_a_path() {
    for argument in ["--dump-tokens", "-x.code", "--help", "--version", "--"] {
        assert_eq!(
            Argument::try_from_args(["cde", argument]).unwrap().mode(),
            Mode::Batch(argument.into())
        );
    }
}

#[test]
fn too_many_arguments() {
    for args in [
        &["cde", "a.code", "b.code"][..],
        &["cde", "--max-line-length", "5"],
        &["cde", "a.code", "b.code", "c.code"],
    ] {
        assert!(matches!(
            Argument::try_from_args(args.iter().copied()),
            Err(Error::TooManyArguments { count }) if count == args.len() - 1
        ));
        assert_eq!(crate::run_with_args(args.iter().copied()), Status::Failure);
    }
}

#[test]
fn too_many_arguments_with_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    assert_eq!(
        crate::run_with_args([
            OsString::from("cde"),
            file.path().as_os_str().to_owned(),
            OsString::from("--dump-tokens"),
        ]),
        Status::Failure
    );
}

#[test]
fn option_like_argument_runs_the_batch_mode() {
    // no such file, so the batch mode fails instead of the prompt starting
    assert_eq!(
        crate::run_with_args(["cde", "--no-such-option.code"]),
        Status::Failure
    );
}

#[test]
fn config_from_variables() {
    let variables = HashMap::from([
        (crate::DUMP_TOKENS_VARIABLE, "1"),
        (crate::MAX_LINE_LENGTH_VARIABLE, " 16 "),
    ]);
    let config = Config::from_lookup(|name| variables.get(name).map(ToString::to_string));

    assert_eq!(config, Config::new(16, true));
    assert_eq!(Config::from_lookup(|_| None), Config::default());
    assert_eq!(Config::default().max_line_length(), crate::MAX_LINE_LENGTH);
}

#[test]
fn invalid_config_variables() {
    for (dump_tokens, max_line_length) in [("0", "0"), ("", "-3"), ("0", "many")] {
        let variables = HashMap::from([
            (crate::DUMP_TOKENS_VARIABLE, dump_tokens),
            (crate::MAX_LINE_LENGTH_VARIABLE, max_line_length),
        ]);
        let config = Config::from_lookup(|name| variables.get(name).map(ToString::to_string));

        assert_eq!(config, Config::default());
    }
}

#[test]
fn missing_source_file() {
    let path = Path::new("/no/such/file.src");
    let recorder = Recorder::default();
    let working_directory = std::env::current_dir().unwrap();

    let error = crate::open_source_file(path).unwrap_err();
    let message = error.to_string();
    assert!(matches!(error, Error::OpenFile { .. }));
    assert!(message.contains("/no/such/file.src"));
    assert!(message.contains(&working_directory.display().to_string()));

    assert_eq!(
        crate::run_source_file(path, &recorder, Config::default()),
        Status::Failure
    );
    assert!(recorder.submissions.borrow().is_empty());
}

#[test]
fn non_utf8_source_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'1', 0xFF, b'\n']).unwrap();

    let error = crate::open_source_file(file.path()).unwrap_err();
    assert!(matches!(error, Error::LoadFile { .. }));

    let recorder = Recorder::default();
    assert_eq!(
        crate::run_source_file(file.path(), &recorder, Config::default()),
        Status::Failure
    );
    assert!(recorder.submissions.borrow().is_empty());
}

#[test]
fn empty_source_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let recorder = Recorder::default();

    assert_eq!(
        crate::run_source_file(file.path(), &recorder, Config::default()),
        Status::Success
    );
    assert_eq!(*recorder.submissions.borrow(), [String::new()]);
}

#[test]
fn source_file_submitted_once() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "INT x = 5\nDISPLAY: x\n").unwrap();
    let recorder = Recorder::default();

    assert_eq!(
        crate::run_source_file(file.path(), &recorder, Config::new(8, true)),
        Status::Success
    );
    assert_eq!(
        *recorder.submissions.borrow(),
        ["INT x = 5\nDISPLAY: x\n".to_string()]
    );
}

#[test]
fn lexical_errors_do_not_fail_the_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "INT x = @").unwrap();

    assert_eq!(
        crate::run_source_file(file.path(), &Lexer, Config::default()),
        Status::Success
    );
}
