use std::fmt;

use tracing::debug;

use crate::{
    error::{Diagnostic, SyntaxError},
    interpreter::{
        checker::latch::{Latch, Trip},
        cursor::TokenCursor,
        lexer::{Token, TokenKind},
    },
};

/// Marks a rule that failed after its diagnostics were recorded.
///
/// The checker never aborts: a failed rule unwinds to a recovery point,
/// which resynchronizes and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failed;

/// Result type used by the checker's grammar rules.
pub type CheckResult<T = ()> = Result<T, Failed>;

/// Validates the structure of a program without running it.
///
/// The checker walks the grammar by recursive descent, records every
/// diagnostic it can find (resynchronizing after each one) and collects the
/// names of all assigned variables. All state is created fresh for each
/// checker, so two checks of the same source produce identical reports.
///
/// # Example
/// ```
/// use bpl::interpreter::checker::core::SyntaxChecker;
///
/// let report = SyntaxChecker::new("b = 1;\na = b + 2;\n").check();
/// assert!(report.is_success());
/// assert_eq!(report.to_string(), "Declared Variables:\na, b\n\nDONE\n");
///
/// let report = SyntaxChecker::new("a = 1\nb = 2;\n").check();
/// assert_eq!(report.to_string(),
///            "1. Line 1: Missing semicolon at end of Statement\n\
///             Unsuccessful Parsing\n\
///             Number of Syntax Errors 1\n");
/// ```
pub struct SyntaxChecker<'src> {
    pub(super) cursor:          TokenCursor<'src>,
    pub(super) diagnostics:     Vec<Diagnostic>,
    pub(super) declared:        Vec<String>,
    /// Armed by a missing `)`; reports only the first half of the operand
    /// pair.
    pub(super) single:          Latch,
    /// Armed by a missing exponent operand or an empty parenthesis.
    pub(super) pair:            Latch,
    /// Set once a lexical error was recorded. Nothing is reported after it.
    pub(super) halted:          bool,
    /// Set when a recovery already consumed the `;` of the failed statement.
    pub(super) resynced:        bool,
    pub(super) consumed_line:   usize,
    pub(super) last_error_line: usize,
}

impl<'src> SyntaxChecker<'src> {
    /// Creates a checker for `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { cursor:          TokenCursor::new(source),
               diagnostics:     Vec::new(),
               declared:        Vec::new(),
               single:          Latch::Idle,
               pair:            Latch::Idle,
               halted:          false,
               resynced:        false,
               consumed_line:   1,
               last_error_line: 1, }
    }

    /// Checks the whole program and consumes the checker.
    ///
    /// The program is a sequence of `;`-terminated statements, possibly
    /// empty. After a failed statement the checker skips to the next `;`
    /// (unless the failure already did), discards stray tokens left over
    /// from the broken construct and resumes at the next statement.
    #[must_use]
    pub fn check(mut self) -> CheckReport {
        let mut failed = false;

        loop {
            self.single.reset();
            self.pair.reset();
            self.resynced = false;

            let token = self.next();
            match token.kind {
                TokenKind::End => break,
                kind if kind.starts_statement() => {
                    self.cursor.push_back(token);
                    if self.terminated_statement().is_err() {
                        failed = true;
                        if !self.resynced {
                            self.cursor.skip_until(&[TokenKind::Semicolon]);
                        }
                    }
                },
                TokenKind::Else => {
                    self.error(token.line, SyntaxError::IllegalElse);
                    failed = true;
                    if self.accept(TokenKind::LBrace).is_some() {
                        let _ = self.cursor.skip_block();
                    }
                },
                _ if failed => {
                    debug!(lexeme = %token.lexeme, line = token.line, "discarding stray token");
                },
                _ => {
                    self.error(token.line, SyntaxError::IncorrectStatement);
                    failed = true;
                },
            }
        }

        let self_explanatory = matches!(self.diagnostics.as_slice(),
                                        [only] if only.error.is_self_explanatory());
        if failed && !self.halted && !self_explanatory {
            self.error(self.last_error_line, SyntaxError::ProgramBody);
        }

        let mut declared = self.declared;
        declared.sort();

        CheckReport { diagnostics: self.diagnostics,
                      declared }
    }

    /// A top-level statement and its terminating `;`.
    fn terminated_statement(&mut self) -> CheckResult {
        self.statement()?;
        self.expect_semicolon()
    }

    /// Requires a `;` after a statement, resynchronizing past the next one
    /// when it is missing.
    pub(super) fn expect_semicolon(&mut self) -> CheckResult {
        if self.accept(TokenKind::Semicolon).is_some() {
            return Ok(());
        }
        self.error(self.consumed_line, SyntaxError::MissingSemicolon);
        self.resync(&[TokenKind::Semicolon]);
        Err(Failed)
    }

    /// Discards tokens up to and including one of `sync`.
    pub(super) fn resync(&mut self, sync: &[TokenKind]) {
        if let Some(token) = self.cursor.skip_until(sync)
           && token.kind == TokenKind::Semicolon
        {
            self.resynced = true;
        }
    }

    /// Takes the next token. A lexical error is recorded once and then seen
    /// as the end of input, which stops checking.
    pub(super) fn next(&mut self) -> Token {
        let token = self.cursor.next();
        let token = self.screen(token);
        if token.kind != TokenKind::End {
            self.consumed_line = token.line;
        }
        token
    }

    /// Looks at the next token, screening lexical errors like
    /// [`SyntaxChecker::next`].
    pub(super) fn peek(&mut self) -> &Token {
        if matches!(self.cursor.peek().kind, TokenKind::Error(_)) {
            let token = self.cursor.next();
            let token = self.screen(token);
            self.cursor.push_back(token);
        }
        self.cursor.peek()
    }

    pub(super) fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    pub(super) fn peek_line(&mut self) -> usize {
        self.peek().line
    }

    /// Consumes the next token if it is of the given kind.
    pub(super) fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == kind { Some(self.next()) } else { None }
    }

    fn screen(&mut self, token: Token) -> Token {
        let Some(error) = token.lex_error() else {
            return token;
        };
        if !self.halted {
            debug!(%error, line = error.line, "lexical error stops checking");
            self.diagnostics.push(Diagnostic::new(error.line, error.into()));
            self.halted = true;
        }
        Token::end(token.line)
    }

    /// Records a diagnostic unless checking was halted by a lexical error.
    pub(super) fn error(&mut self, line: usize, error: SyntaxError) {
        if self.halted {
            return;
        }
        debug!(line, %error, "syntax error");
        self.diagnostics.push(Diagnostic::new(line, error));
        self.last_error_line = line;
    }

    /// Reports a missing operand once per episode.
    ///
    /// An armed single latch yields only the first half of the pair; an
    /// armed pair latch yields both halves. Without an armed latch the pair
    /// is reported directly and the episode is closed.
    pub(super) fn operand_missing(&mut self, line: usize) {
        match self.single.trip() {
            Trip::Fire => return self.error(line, SyntaxError::MissingOperandFor),
            Trip::Spent => return,
            Trip::Idle => {},
        }
        match self.pair.trip() {
            Trip::Spent => return,
            Trip::Idle => self.pair.exhaust(),
            Trip::Fire => {},
        }
        self.error(line, SyntaxError::MissingOperandFor);
        self.error(line, SyntaxError::MissingOperandAfter);
    }

    /// Records a variable as declared, keeping first-assignment order.
    pub(super) fn declare(&mut self, name: &str) {
        if !self.is_declared(name) {
            self.declared.push(name.to_string());
        }
    }

    pub(super) fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|n| n == name)
    }

    /// Number of diagnostics recorded so far.
    pub(super) fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// The outcome of a syntax check.
///
/// `Display` renders the user-facing report: the numbered diagnostics and
/// the failure summary, or the sorted declared variables and `DONE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Sorted names of every assigned variable.
    pub declared:    Vec<String>,
}

impl CheckReport {
    /// Returns `true` if no diagnostic was recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            writeln!(f, "Declared Variables:")?;
            writeln!(f, "{}", self.declared.join(", "))?;
            writeln!(f)?;
            return writeln!(f, "DONE");
        }

        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            writeln!(f, "{}. {diagnostic}", i + 1)?;
        }
        writeln!(f, "Unsuccessful Parsing")?;
        writeln!(f, "Number of Syntax Errors {}", self.diagnostics.len())
    }
}
