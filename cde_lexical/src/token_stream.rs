//! Contains the [`TokenStream`] struct, the list of tokens produced out of a source file.

use std::sync::Arc;

use cde_base::{array_list::ArrayList, diagnostic::Handler, source_file::SourceFile};
use derive_more::Deref;

use crate::{
    error,
    token::{self, Token},
};

/// Is the list of [`Token`]s of a source file, in the order they appear in the source code.
///
/// This struct is the final output of the lexical analysis phase. The tokens are owned by the
/// underlying [`ArrayList`] and can only be borrowed out of it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: ArrayList<Token>,
}

impl TokenStream {
    /// Tokenizes the whole content of the given source file.
    ///
    /// This function calls [`Token::lex()`] repeatedly until the source code is exhausted. The
    /// lexical errors are sent to the `handler` and the malformed parts of the source code don't
    /// produce any token; tokenizing carries on after them.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        let mut tokens = ArrayList::new();
        let mut source_file_iterator = source_file.iter();

        loop {
            match Token::lex(&mut source_file_iterator, handler) {
                Ok(token) => tokens.push(token),
                Err(token::Error::EndOfSourceCodeIteratorArgument) => break,
                Err(token::Error::FatalLexicalError) => (),
            }
        }

        Self { tokens }
    }
}
