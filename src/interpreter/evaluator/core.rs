use std::{collections::HashMap, io::Write};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, TokenKind},
        value::{core::Value, policy::CoercionPolicy},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` that ends the run.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a program while it parses it.
///
/// Every grammar rule computes its value directly instead of building a
/// tree. The first error of any kind ends the run. `println` output and
/// the closing report are written to `out`.
///
/// ## Usage
///
/// An `Interpreter` runs one source unit. It owns its variable store and
/// lookahead buffer, so separate runs never share state.
///
/// # Example
/// ```
/// use bpl::interpreter::{evaluator::core::Interpreter, value::policy::CoercionPolicy};
///
/// let mut out = Vec::new();
/// let report = Interpreter::new("x = 5;\nprintln(\"x = \", x);", CoercionPolicy::Strict, &mut out)
///     .run()
///     .unwrap();
///
/// assert!(report.is_success());
/// assert_eq!(String::from_utf8(out).unwrap(), "x = 5.0\n\n\nDONE\n");
/// ```
pub struct Interpreter<'src, W: Write> {
    pub(super) cursor:        TokenCursor<'src>,
    /// Variables bound by assignments, readable only once bound.
    pub(super) variables:     HashMap<String, Value>,
    /// The operator table of this run.
    pub(super) policy:        CoercionPolicy,
    pub(super) out:           W,
    pub(super) consumed_line: usize,
}

impl<'src, W: Write> Interpreter<'src, W> {
    /// Creates an interpreter for `source` that writes to `out`.
    #[must_use]
    pub fn new(source: &'src str, policy: CoercionPolicy, out: W) -> Self {
        Self { cursor: TokenCursor::new(source),
               variables: HashMap::new(),
               policy,
               out,
               consumed_line: 1 }
    }

    /// Runs the whole program and writes the closing report.
    ///
    /// On success the output ends with two blank lines and `DONE`. On
    /// failure the error is listed with its line, followed by
    /// `Unsuccessful Interpretation` and the error count.
    ///
    /// # Errors
    /// Only failures to write to the output are returned as errors; program
    /// errors are part of the [`RunReport`].
    pub fn run(mut self) -> std::io::Result<RunReport> {
        let error = match self.program() {
            Ok(()) => {
                write!(self.out, "\n\nDONE\n")?;
                None
            },
            Err(RuntimeError::Output(source)) => return Err(source),
            Err(error) => {
                debug!(%error, line = error.line(), "run failed");
                writeln!(self.out, "1. Line {}: {error}", error.line())?;
                write!(self.out, "\nUnsuccessful Interpretation\nNumber of Errors 1\n")?;
                Some(error)
            },
        };
        self.out.flush()?;

        Ok(RunReport { error,
                       variables: self.variables })
    }

    /// Runs `;`-terminated statements up to the end of input.
    ///
    /// The rule is: `program := (statement ";")*`
    fn program(&mut self) -> EvalResult<()> {
        let mut executed = 0_usize;
        loop {
            let kind = self.peek_kind()?;
            if kind == TokenKind::End {
                return Ok(());
            }
            if !kind.starts_statement() {
                let line = self.peek_line();
                return Err(if executed == 0 {
                               RuntimeError::InvalidStatement { line }
                           } else {
                               RuntimeError::TrailingInput { line }
                           });
            }
            self.statement()?;
            self.expect_semicolon()?;
            executed += 1;
        }
    }

    /// Runs the statements of a clause body, at least one.
    ///
    /// The rule is: `block := (statement ";")+`
    pub(super) fn block(&mut self) -> EvalResult<()> {
        if !self.peek_kind()?.starts_statement() {
            return Err(RuntimeError::InvalidStatement { line: self.peek_line() });
        }
        while self.peek_kind()?.starts_statement() {
            self.statement()?;
            self.expect_semicolon()?;
        }
        Ok(())
    }

    fn expect_semicolon(&mut self) -> EvalResult<()> {
        match self.accept(TokenKind::Semicolon)? {
            Some(_) => Ok(()),
            None => Err(RuntimeError::MissingSemicolon { line: self.consumed_line }),
        }
    }

    /// Takes the next token, failing on a lexical error.
    pub(super) fn next(&mut self) -> EvalResult<Token> {
        let token = self.cursor.next();
        if let Some(error) = token.lex_error() {
            return Err(error.into());
        }
        if token.kind != TokenKind::End {
            self.consumed_line = token.line;
        }
        Ok(token)
    }

    /// The kind of the next token, failing on a lexical error.
    pub(super) fn peek_kind(&mut self) -> EvalResult<TokenKind> {
        let token = self.cursor.peek();
        match token.lex_error() {
            Some(error) => Err(error.into()),
            None => Ok(token.kind),
        }
    }

    pub(super) fn peek_line(&mut self) -> usize {
        self.cursor.peek().line
    }

    /// Consumes the next token if it is of the given kind.
    pub(super) fn accept(&mut self, kind: TokenKind) -> EvalResult<Option<Token>> {
        if self.peek_kind()? == kind { self.next().map(Some) } else { Ok(None) }
    }

    /// Consumes a token of the given kind or fails with `missing`, which
    /// receives the line of the offending token.
    pub(super) fn expect(&mut self,
                         kind: TokenKind,
                         missing: impl FnOnce(usize) -> RuntimeError)
                         -> EvalResult<Token> {
        match self.accept(kind)? {
            Some(token) => Ok(token),
            None => Err(missing(self.peek_line())),
        }
    }
}

/// The outcome of a run.
#[derive(Debug)]
pub struct RunReport {
    /// The error that ended the run, if any.
    pub error:     Option<RuntimeError>,
    /// The variable store as the run left it.
    pub variables: HashMap<String, Value>,
}

impl RunReport {
    /// Returns `true` if every statement ran.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The number of errors reported, which is at most one.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        if self.error.is_some() { 1 } else { 0 }
    }
}
