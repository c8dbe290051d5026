//! Contains the [`TokenSource`] trait, the contract the driver relies on to turn text into tokens.

use std::sync::Arc;

use cde_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{error, token_stream::TokenStream};

/// Represents a stage that turns the content of a source file into a [`TokenStream`].
///
/// The tokenization succeeded if no error was sent to the `handler`. Every error carries the span
/// of the malformed text, which is enough to point the user at it.
pub trait TokenSource {
    /// Tokenizes the whole content of the given source file.
    fn tokenize(
        &self,
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
    ) -> TokenStream;
}

/// Is the [`TokenSource`] that lexes the CODE programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lexer;

impl TokenSource for Lexer {
    fn tokenize(
        &self,
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
    ) -> TokenStream {
        TokenStream::tokenize(source_file, handler)
    }
}
