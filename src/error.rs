/// Lexical errors.
///
/// Defines the error produced by the scanner when it meets input that does
/// not form any token: malformed numeric literals, unterminated strings,
/// unknown characters and malformed `@` keywords. A lexical error always
/// ends the run.
pub mod lex_error;
/// Runtime errors.
///
/// Contains every error the evaluator can raise. The evaluator is
/// fail-fast, so these cover both grammar violations met while executing
/// and semantic failures such as undefined variables or operand type
/// mismatches.
pub mod runtime_error;
/// Syntax diagnostics.
///
/// Defines the messages the syntax checker accumulates while it recovers
/// from errors, and the line-tagged `Diagnostic` that carries them.
pub mod syntax_error;

pub use lex_error::{LexError, LexErrorKind};
pub use runtime_error::{OperationFamily, RuntimeError};
pub use syntax_error::{Diagnostic, SyntaxError};
