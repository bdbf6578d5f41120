use thiserror::Error;

use crate::error::LexError;

/// Every diagnostic the syntax checker can emit.
///
/// The display text of each variant is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A statement was not closed by `;`.
    #[error("Missing semicolon at end of Statement")]
    MissingSemicolon,
    /// An operator lacks one of its operands.
    #[error("Missing operand for an operator")]
    MissingOperandFor,
    /// Companion of [`SyntaxError::MissingOperandFor`] for the right operand.
    #[error("Missing operand after operator")]
    MissingOperandAfter,
    /// Framing error appended when the program body failed to check.
    #[error("Syntactic error in Program Body")]
    ProgramBody,
    /// A token that cannot start a statement was found where one was
    /// expected.
    #[error("Incorrect Statement")]
    IncorrectStatement,
    /// An assignment target is not followed by `=`, `+=`, `-=` or `.=`.
    #[error("Missing Assignment Operator")]
    MissingAssignOp,
    /// The right-hand side of an assignment is missing.
    #[error("Missing Expression in Assignment Statement")]
    MissingAssignExpr,
    /// Contextual error for a malformed assignment.
    #[error("Incorrect Assignment Statement")]
    IncorrectAssign,
    /// Contextual error for a malformed `println`.
    #[error("Incorrect PrintLn Statement")]
    IncorrectPrintln,
    /// `println` not followed by `(`.
    #[error("Missing Left Parenthesis of PrintLn Statement")]
    PrintlnMissingLeftParen,
    /// `println(...` not closed by `)`.
    #[error("Missing Right Parenthesis of PrintLn Statement")]
    PrintlnMissingRightParen,
    /// Contextual error for a malformed `if`.
    #[error("Incorrect If-Statement")]
    IncorrectIf,
    /// `if` not followed by `(`.
    #[error("Missing Left Parenthesis of If condition")]
    IfMissingLeftParen,
    /// The `if` condition is not closed by `)`.
    #[error("Missing Right Parenthesis of If condition")]
    IfMissingRightParen,
    /// The `if` clause does not open with `{`.
    #[error("Missing left brace for If Statement Clause")]
    IfMissingLeftBrace,
    /// The `if` clause does not close with `}`.
    #[error("Missing right brace for If Statement Clause")]
    IfMissingRightBrace,
    /// `else` not followed by `{`.
    #[error("Missing left brace for an Else-Clause")]
    ElseMissingLeftBrace,
    /// The `else` clause does not close with `}`.
    #[error("Missing right brace for an Else-Clause")]
    ElseMissingRightBrace,
    /// An `else` where no `if` clause can take it.
    #[error("Illegal If Statement Else-Clause")]
    IllegalElse,
    /// The `if` clause holds no statement.
    #[error("Missing Statement for If Statement Clause")]
    MissingIfClauseStatement,
    /// The `else` clause holds no statement.
    #[error("Missing Statement for Else-Clause")]
    MissingElseClauseStatement,
    /// `**` without a right operand.
    #[error("Missing exponent operand after exponentiation")]
    MissingExponentOperand,
    /// `(` not followed by an expression.
    #[error("Missing expression after Left Parenthesis")]
    MissingParenExpression,
    /// A parenthesized expression not closed by `)`.
    #[error("Missing right Parenthesis after expression")]
    MissingRightParen,
    /// A variable read before any assignment to it.
    #[error("Using Undefined Variable: {0}")]
    UndefinedVariable(String),
    /// The scanner failed; checking stops here.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl SyntaxError {
    /// Returns `true` for errors that explain themselves when they are the
    /// only diagnostic of a run, so no program-body framing is added.
    #[must_use]
    pub const fn is_self_explanatory(&self) -> bool {
        matches!(self, Self::MissingSemicolon | Self::IllegalElse)
    }
}

/// A line-tagged diagnostic.
///
/// Diagnostics are kept in emission order, which follows the order of the
/// recovery points rather than strict source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source line the diagnostic is anchored to.
    pub line:  usize,
    /// What was wrong.
    pub error: SyntaxError,
}

impl Diagnostic {
    #[must_use]
    pub const fn new(line: usize, error: SyntaxError) -> Self {
        Self { line, error }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}
