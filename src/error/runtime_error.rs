use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can stop the evaluator.
///
/// The evaluator re-derives program structure while it executes, so besides
/// semantic failures this also covers grammar violations. The first error
/// ends the run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The scanner met input that forms no token.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// A statement does not start with `if`, `println` or an identifier.
    #[error("Invalid Statement")]
    InvalidStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement was not closed by `;`.
    #[error("Missing semicolon at end of Statement")]
    MissingSemicolon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input continues after the last statement of the program.
    #[error("Unexpected token after program end")]
    TrailingInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `println` not followed by `(`.
    #[error("Missing '(' in PrintLn")]
    PrintlnMissingLeftParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `println(...` not closed by `)`.
    #[error("Missing ')' in PrintLn")]
    PrintlnMissingRightParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `if` not followed by `(`.
    #[error("Missing '(' in If condition")]
    IfMissingLeftParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `if` condition is not closed by `)`.
    #[error("Missing ')' in If condition")]
    IfMissingRightParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `if` clause does not open with `{`.
    #[error("Missing '{{' after If condition")]
    IfMissingLeftBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `if` clause does not close with `}`.
    #[error("Missing '}}' after If block")]
    IfMissingRightBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `else` not followed by `{`.
    #[error("Missing '{{' in Else clause")]
    ElseMissingLeftBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `else` clause does not close with `}`.
    #[error("Missing '}}' in Else clause")]
    ElseMissingRightBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input ended inside a branch that was being skipped.
    #[error("Missing '}}' in skipped {clause} block")]
    UnclosedSkippedBlock {
        /// `"If"` or `"Else"`.
        clause: &'static str,
        /// The source line where the skipped block started.
        line:   usize,
    },
    /// An assignment target is not followed by an assignment operator.
    #[error("Missing assignment operator")]
    MissingAssignOp {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right-hand side of an assignment is missing.
    #[error("Missing Expression in Assignment")]
    MissingAssignExpr {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator without a right operand.
    #[error("Missing operand for {operator}")]
    MissingOperand {
        /// Human readable operator description, such as `||` or
        /// `+ or - or .`.
        operator: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A relational operator without a right operand.
    #[error("Missing relational operand")]
    MissingRelationalOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `**` without a right operand.
    #[error("Missing exponent operand")]
    MissingExponentOperand {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parenthesized expression not closed by `)`.
    #[error("Missing closing parenthesis")]
    MissingClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot start an operand.
    #[error("Invalid Primary Expression")]
    InvalidPrimary {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable read, or compound-assigned, before any assignment to it.
    #[error("Using Undefined Variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator produced the error value for the given operands.
    #[error("{}", .family.message())]
    IllegalOperation {
        /// Which group of operators failed.
        family: OperationFamily,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A plain assignment of a Boolean value.
    #[error("Run-Time Error-Illegal assignment of Boolean")]
    BooleanAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing `println` output failed. Not a program error; the run is
    /// abandoned and the I/O error handed back to the caller.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Groups operators by the grammar level that evaluates them, which is what
/// a runtime failure message names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFamily {
    /// `||`
    Or,
    /// `&&`
    And,
    /// `== >= < @eq @le @gt`
    Relational,
    /// `+ - .`
    Additive,
    /// `* / % .x.`
    Multiplicative,
    /// `!`
    Not,
    /// Unary `-` or `+` on a non-number.
    Sign,
    /// `**`
    Exponentiation,
    /// `+= -= .=`
    Assignment,
}

impl OperationFamily {
    const fn message(self) -> &'static str {
        match self {
            Self::Or => "Run-Time Error-Illegal OR Operation",
            Self::And => "Run-Time Error-Illegal AND Operation",
            Self::Relational => "Illegal Relational operation.",
            Self::Additive => "Run-Time Error-Illegal Additive Operation",
            Self::Multiplicative => "Run-Time Error-Illegal Multiplicative Operation",
            Self::Not => "Run-Time Error-Illegal NOT operation",
            Self::Sign => "Run-Time Error-Illegal operand type for sign operation",
            Self::Exponentiation => "Run-Time Error-Illegal Exponentiation",
            Self::Assignment => "Run-Time Error-Illegal Assignment Operation",
        }
    }
}

impl RuntimeError {
    /// Returns the source line the error is anchored to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical(e) => e.line,
            Self::InvalidStatement { line }
            | Self::MissingSemicolon { line }
            | Self::TrailingInput { line }
            | Self::PrintlnMissingLeftParen { line }
            | Self::PrintlnMissingRightParen { line }
            | Self::IfMissingLeftParen { line }
            | Self::IfMissingRightParen { line }
            | Self::IfMissingLeftBrace { line }
            | Self::IfMissingRightBrace { line }
            | Self::ElseMissingLeftBrace { line }
            | Self::ElseMissingRightBrace { line }
            | Self::UnclosedSkippedBlock { line, .. }
            | Self::MissingAssignOp { line }
            | Self::MissingAssignExpr { line }
            | Self::MissingOperand { line, .. }
            | Self::MissingRelationalOperand { line }
            | Self::MissingExponentOperand { line }
            | Self::MissingClosingParen { line }
            | Self::InvalidPrimary { line }
            | Self::UndefinedVariable { line, .. }
            | Self::IllegalOperation { line, .. }
            | Self::BooleanAssignment { line } => *line,
            Self::Output(_) => 0,
        }
    }
}
