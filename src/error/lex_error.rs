use thiserror::Error;

/// Classifies what went wrong while scanning.
///
/// This is also the error type of the underlying `logos` lexer, which is
/// why it has a `Default`: logos reports any character that starts no token
/// with the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexErrorKind {
    /// A character that cannot start any token, such as `_`, `&` or `>`.
    #[default]
    UnrecognizedCharacter,
    /// A fractional literal followed directly by another `.`, as in `3.5.`.
    MalformedNumber,
    /// A string literal whose closing delimiter is missing on its line.
    UnterminatedString,
    /// An `@` that is not followed by `eq`, `le` or `gt`.
    MalformedKeyword,
}

/// A lexical error together with the offending text.
///
/// `lexeme` is the run of input that was consumed while recognizing the bad
/// construct and `line` is the line on which that construct started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error-Unrecognized Lexeme {{{lexeme}}}")]
pub struct LexError {
    /// What kind of construct failed to scan.
    pub kind:   LexErrorKind,
    /// The consumed source text.
    pub lexeme: String,
    /// The source line where the construct started.
    pub line:   usize,
}
