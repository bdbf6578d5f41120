use std::{collections::VecDeque, io::Write};

use tracing::{debug, trace};

use crate::{
    error::{OperationFamily, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::TokenKind,
        value::{core::Value, operator::BinaryOperator},
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Executes one statement, without its terminating `;`.
    ///
    /// The rule is: `statement := if | println | assignment`
    pub(super) fn statement(&mut self) -> EvalResult<()> {
        let kind = self.peek_kind()?;
        debug!(?kind, line = self.peek_line(), "executing statement");

        match kind {
            TokenKind::If => self.if_statement(),
            TokenKind::Println => self.println_statement(),
            TokenKind::Ident => self.assignment(),
            _ => Err(RuntimeError::InvalidStatement { line: self.peek_line() }),
        }
    }

    /// Executes an assignment.
    ///
    /// A plain `=` binds the value as is, but refuses Booleans. A compound
    /// operator evaluates its right-hand side first, then combines it with
    /// the current value of the target, which must already be bound.
    ///
    /// The rule is: `assignment := IDENT ("=" | "+=" | "-=" | ".=") expr`
    fn assignment(&mut self) -> EvalResult<()> {
        let target = self.next()?;
        let op = self.next()?;
        if !op.kind.is_assign_op() {
            return Err(RuntimeError::MissingAssignOp { line: op.line });
        }
        if !self.peek_kind()?.starts_operand() {
            return Err(RuntimeError::MissingAssignExpr { line: self.peek_line() });
        }
        let value = self.expression()?;

        let value = match BinaryOperator::from_token(op.kind) {
            None => {
                if matches!(value, Value::Bool(_)) {
                    return Err(RuntimeError::BooleanAssignment { line: op.line });
                }
                value
            },
            Some(operator) => {
                let Some(current) = self.variables.get(&target.lexeme) else {
                    return Err(RuntimeError::UndefinedVariable { name: target.lexeme,
                                                                 line: target.line });
                };
                let result = self.policy.apply_binary(operator, current, &value);
                if result.is_error() {
                    return Err(RuntimeError::IllegalOperation { family: OperationFamily::Assignment,
                                                                line:   op.line, });
                }
                result
            },
        };

        trace!(name = %target.lexeme, %value, "bind");
        self.variables.insert(target.lexeme, value);
        Ok(())
    }

    /// Executes a `println` statement.
    ///
    /// Every argument is evaluated before anything is written, so a failing
    /// argument prints nothing. The values are then written without
    /// separators, followed by a newline.
    ///
    /// The rule is: `println := "println" "(" expr ("," expr)* ")"`
    fn println_statement(&mut self) -> EvalResult<()> {
        self.next()?;
        self.expect(TokenKind::LParen,
                    |line| RuntimeError::PrintlnMissingLeftParen { line })?;

        let mut values = VecDeque::new();
        loop {
            values.push_back(self.expression()?);
            if self.accept(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.expect(TokenKind::RParen,
                    |line| RuntimeError::PrintlnMissingRightParen { line })?;

        while let Some(value) = values.pop_front() {
            write!(self.out, "{value}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Executes an `if` statement.
    ///
    /// The condition is evaluated once. The taken branch runs and the other
    /// one is skipped by brace balancing without being evaluated.
    ///
    /// The rule is: `if := "if" "(" expr ")" "{" block "}" ("else" "{" block
    /// "}")?`
    fn if_statement(&mut self) -> EvalResult<()> {
        self.next()?;
        self.expect(TokenKind::LParen, |line| RuntimeError::IfMissingLeftParen { line })?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen, |line| RuntimeError::IfMissingRightParen { line })?;

        let taken = condition.truthy().unwrap_or(false);
        debug!(%condition, taken, "if condition");

        let open = self.expect(TokenKind::LBrace, |line| RuntimeError::IfMissingLeftBrace { line })?;
        if taken {
            self.block()?;
            self.expect(TokenKind::RBrace, |line| RuntimeError::IfMissingRightBrace { line })?;
        } else {
            self.skip_branch("If", open.line)?;
        }

        if self.accept(TokenKind::Else)?.is_none() {
            return Ok(());
        }
        let open = self.expect(TokenKind::LBrace,
                               |line| RuntimeError::ElseMissingLeftBrace { line })?;
        if taken {
            self.skip_branch("Else", open.line)?;
        } else {
            self.block()?;
            self.expect(TokenKind::RBrace,
                        |line| RuntimeError::ElseMissingRightBrace { line })?;
        }
        Ok(())
    }

    /// Skips a branch whose `{` was consumed on line `line`.
    fn skip_branch(&mut self, clause: &'static str, line: usize) -> EvalResult<()> {
        debug!(clause, line, "skipping branch");
        match self.cursor.skip_block() {
            Ok(()) => Ok(()),
            Err(token) => match token.lex_error() {
                Some(error) => Err(error.into()),
                None => Err(RuntimeError::UnclosedSkippedBlock { clause, line }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::RuntimeError,
        interpreter::{
            evaluator::core::{Interpreter, RunReport},
            value::{core::Value, policy::CoercionPolicy},
        },
    };

    fn run(source: &str) -> (String, RunReport) {
        let mut out = Vec::new();
        let report = Interpreter::new(source, CoercionPolicy::Strict, &mut out).run()
                                                                             .unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn println_writes_arguments_without_separators() {
        let (out, report) = run("x = 5;\nprintln(\"x is \", x, \"!\");");
        assert!(report.is_success());
        assert_eq!(out, "x is 5.0!\n\n\nDONE\n");
    }

    #[test]
    fn only_the_taken_branch_runs() {
        let (out, report) = run("x = 0;\nif (x == 0) { x = 1; } else { x = 2; };\nprintln(x);");
        assert!(report.is_success());
        assert_eq!(out, "1.0\n\n\nDONE\n");
        assert_eq!(report.variables["x"], Value::Number(1.0));
    }

    #[test]
    fn else_branch_runs_when_condition_is_false() {
        let (out, _) = run("if (1 < 0) { println('then'); } else { println('else'); };");
        assert_eq!(out, "else\n\n\nDONE\n");
    }

    #[test]
    fn skipped_branch_is_not_evaluated() {
        let (out, report) = run("if (0) { println(undefined ** 'x'); };\nprintln('after');");
        assert!(report.is_success());
        assert_eq!(out, "after\n\n\nDONE\n");
    }

    #[test]
    fn nested_braces_in_a_skipped_branch() {
        let (out, _) = run("if (0) { if (1) { println('no'); }; } else { println('yes'); };");
        assert_eq!(out, "yes\n\n\nDONE\n");
    }

    #[test]
    fn unclosed_skipped_branch() {
        let (_, report) = run("if (0) {\n println('no');\n");
        assert!(matches!(report.error,
                         Some(RuntimeError::UnclosedSkippedBlock { clause: "If", line: 1 })));
    }

    #[test]
    fn compound_assignment_needs_a_bound_target() {
        let (_, report) = run("x += 1;");
        assert!(matches!(report.error, Some(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "x"));
    }

    #[test]
    fn compound_assignments() {
        let (out, _) = run("a = 1; a += 2; a -= 0.5; s = 'n'; s .= a; println(a, ' ', s);");
        assert_eq!(out, "2.5 n2.5\n\n\nDONE\n");
    }

    #[test]
    fn boolean_assignment_is_refused() {
        let (out, report) = run("y = 3;\ny = 3 @eq 3;");
        assert_eq!(report.error_count(), 1);
        assert_eq!(out,
                   "1. Line 2: Run-Time Error-Illegal assignment of Boolean\n\nUnsuccessful \
                    Interpretation\nNumber of Errors 1\n");
        assert_eq!(report.variables["y"], Value::Number(3.0));
    }

    #[test]
    fn missing_semicolon_stops_the_run() {
        let (out, report) = run("println(1)\nprintln(2);");
        assert!(matches!(report.error, Some(RuntimeError::MissingSemicolon { line: 1 })));
        assert_eq!(out,
                   "1.0\n1. Line 1: Missing semicolon at end of Statement\n\nUnsuccessful \
                    Interpretation\nNumber of Errors 1\n");
    }

    #[test]
    fn trailing_input_after_the_program() {
        let (_, report) = run("x = 1;\n}");
        assert!(matches!(report.error, Some(RuntimeError::TrailingInput { line: 2 })));
    }

    #[test]
    fn program_must_start_with_a_statement() {
        let (_, report) = run("5;");
        assert!(matches!(report.error, Some(RuntimeError::InvalidStatement { line: 1 })));
    }

    #[test]
    fn failing_println_argument_prints_nothing() {
        let (out, report) = run("println('a', -'b');");
        assert!(!report.is_success());
        assert!(out.starts_with("1. Line 1: Run-Time Error-Illegal operand type for sign operation"));
    }

    #[test]
    fn println_needs_both_parentheses() {
        let (_, report) = run("println 1;");
        assert!(matches!(report.error, Some(RuntimeError::PrintlnMissingLeftParen { line: 1 })));

        let (out, report) = run("println('a', 1\n;");
        assert!(matches!(report.error, Some(RuntimeError::PrintlnMissingRightParen { line: 2 })));
        assert!(out.starts_with("1. Line 2: "));
    }

    #[test]
    fn if_needs_its_delimiters() {
        let (_, report) = run("if 1) { x = 1; };");
        assert!(matches!(report.error, Some(RuntimeError::IfMissingLeftParen { line: 1 })));

        let (_, report) = run("if (1)
x = 1;");
        assert!(matches!(report.error, Some(RuntimeError::IfMissingLeftBrace { line: 2 })));

        let (_, report) = run("if (1) { x = 1; } else
x = 2;");
        assert!(matches!(report.error, Some(RuntimeError::ElseMissingLeftBrace { line: 2 })));
    }
}
