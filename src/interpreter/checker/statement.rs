use tracing::debug;

use crate::{
    error::SyntaxError,
    interpreter::{
        checker::{
            core::{CheckResult, Failed, SyntaxChecker},
            latch::Latch,
        },
        lexer::TokenKind,
    },
};

/// Which branch of an `if` a statement list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    If,
    Else,
}

impl SyntaxChecker<'_> {
    /// Checks one statement, without its terminating `;`.
    ///
    /// The rule is: `statement := if | println | assignment`
    pub(super) fn statement(&mut self) -> CheckResult {
        let token = self.peek().clone();
        debug!(kind = ?token.kind, line = token.line, "checking statement");

        match token.kind {
            TokenKind::If => self.if_statement(),
            TokenKind::Println => self.println_statement(),
            TokenKind::Ident => self.assignment(),
            _ => {
                self.next();
                self.error(token.line, SyntaxError::IncorrectStatement);
                Err(Failed)
            },
        }
    }

    /// Checks an assignment.
    ///
    /// The target is declared before its right-hand side is checked, so it
    /// is never reported as undefined on its own line.
    ///
    /// The rule is: `assignment := IDENT ("=" | "+=" | "-=" | ".=") expr`
    fn assignment(&mut self) -> CheckResult {
        let target = self.next();
        self.declare(&target.lexeme);

        if !self.peek_kind().is_assign_op() {
            self.error(target.line, SyntaxError::MissingAssignOp);
            self.error(target.line, SyntaxError::IncorrectAssign);
            return Err(Failed);
        }
        self.next();

        if self.expression().is_err() {
            let line = self.cursor.line();
            if self.pair == Latch::Idle {
                self.error(line, SyntaxError::MissingAssignExpr);
            }
            self.error(line, SyntaxError::IncorrectAssign);
            return Err(Failed);
        }
        Ok(())
    }

    /// Checks a `println` statement.
    ///
    /// The rule is: `println := "println" "(" expr ("," expr)* ")"`
    fn println_statement(&mut self) -> CheckResult {
        let keyword = self.next();

        if self.accept(TokenKind::LParen).is_none() {
            let line = self.peek_line();
            self.error(line, SyntaxError::PrintlnMissingLeftParen);
            self.error(keyword.line, SyntaxError::IncorrectPrintln);
            return Err(Failed);
        }

        loop {
            self.clause_expression(keyword.line, SyntaxError::IncorrectPrintln)?;
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }

        if self.accept(TokenKind::RParen).is_none() {
            self.error(keyword.line, SyntaxError::PrintlnMissingRightParen);
            self.error(keyword.line, SyntaxError::IncorrectPrintln);
            return Err(Failed);
        }
        Ok(())
    }

    /// Checks an `if` statement with its optional `else` clause.
    ///
    /// The rule is: `if := "if" "(" expr ")" "{" stmts "}" ("else" "{" stmts
    /// "}")?`
    fn if_statement(&mut self) -> CheckResult {
        let keyword = self.next();

        if self.accept(TokenKind::LParen).is_none() {
            self.error(keyword.line, SyntaxError::IfMissingLeftParen);
            self.error(keyword.line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        self.clause_expression(keyword.line, SyntaxError::IncorrectIf)?;
        if self.accept(TokenKind::RParen).is_none() {
            self.error(keyword.line, SyntaxError::IfMissingRightParen);
            self.error(keyword.line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }

        let brace_line = self.peek_line();
        if self.accept(TokenKind::LBrace).is_none() {
            self.error(brace_line, SyntaxError::IfMissingLeftBrace);
            self.error(brace_line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        if self.clause(Clause::If).is_err() {
            self.error(keyword.line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        if self.accept(TokenKind::RBrace).is_none() {
            let line = self.consumed_line;
            self.error(line, SyntaxError::IfMissingRightBrace);
            self.error(line, SyntaxError::IncorrectIf);
            if let Some(stray) = self.accept(TokenKind::Else) {
                self.error(stray.line, SyntaxError::IllegalElse);
            }
            return Err(Failed);
        }

        let Some(else_keyword) = self.accept(TokenKind::Else) else {
            return Ok(());
        };
        if self.accept(TokenKind::LBrace).is_none() {
            self.error(else_keyword.line, SyntaxError::ElseMissingLeftBrace);
            self.error(else_keyword.line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        if self.clause(Clause::Else).is_err() {
            self.error(else_keyword.line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        if self.accept(TokenKind::RBrace).is_none() {
            let line = self.consumed_line;
            self.error(line, SyntaxError::ElseMissingRightBrace);
            self.error(line, SyntaxError::IncorrectIf);
            return Err(Failed);
        }
        Ok(())
    }

    /// Checks the statements of a clause body: at least one statement, each
    /// followed by `;`, up to the first token that cannot start another.
    fn clause(&mut self, clause: Clause) -> CheckResult {
        if !self.peek_kind().starts_statement() {
            let line = self.peek_line();
            let error = match clause {
                Clause::If => SyntaxError::MissingIfClauseStatement,
                Clause::Else => SyntaxError::MissingElseClauseStatement,
            };
            self.error(line, error);
            return Err(Failed);
        }

        while self.peek_kind().starts_statement() {
            self.statement()?;
            self.expect_semicolon()?;
        }
        Ok(())
    }

    /// Checks the expression of an `if` condition or a `println` argument.
    ///
    /// An expression that fails without reporting anything has no operand
    /// at all, which is reported against the statement's keyword.
    fn clause_expression(&mut self, line: usize, context: SyntaxError) -> CheckResult {
        let before = self.error_count();
        if self.expression().is_err() {
            if self.error_count() == before {
                self.error(line, SyntaxError::MissingOperandFor);
            }
            self.error(line, context);
            return Err(Failed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{error::Diagnostic, interpreter::checker::core::SyntaxChecker};

    fn diagnostics(source: &str) -> Vec<(usize, String)> {
        SyntaxChecker::new(source).check()
                                  .diagnostics
                                  .iter()
                                  .map(|Diagnostic { line, error }| (*line, error.to_string()))
                                  .collect()
    }

    fn expected(lines: &[(usize, &str)]) -> Vec<(usize, String)> {
        lines.iter().map(|&(line, message)| (line, message.to_string())).collect()
    }

    #[test]
    fn if_without_left_parenthesis() {
        assert_eq!(diagnostics("if 1) { x = 1; };"),
                   expected(&[(1, "Missing Left Parenthesis of If condition"),
                              (1, "Incorrect If-Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn if_without_right_parenthesis() {
        assert_eq!(diagnostics("x = 1;\nif (x { y = 1; };"),
                   expected(&[(2, "Missing Right Parenthesis of If condition"),
                              (2, "Incorrect If-Statement"),
                              (2, "Syntactic error in Program Body")]));
    }

    #[test]
    fn if_clause_without_left_brace() {
        assert_eq!(diagnostics("x = 1;\nif (x)\n y = 2; };"),
                   expected(&[(3, "Missing left brace for If Statement Clause"),
                              (3, "Incorrect If-Statement"),
                              (3, "Syntactic error in Program Body")]));
    }

    #[test]
    fn if_clause_without_right_brace() {
        assert_eq!(diagnostics("x = 1;\nif (x) {\n y = 2;\nprintln(y);"),
                   expected(&[(4, "Missing right brace for If Statement Clause"),
                              (4, "Incorrect If-Statement"),
                              (4, "Syntactic error in Program Body")]));
    }

    #[test]
    fn empty_if_clause() {
        assert_eq!(diagnostics("if (1) { };"),
                   expected(&[(1, "Missing Statement for If Statement Clause"),
                              (1, "Incorrect If-Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn empty_else_clause() {
        assert_eq!(diagnostics("if (1) { x = 1; } else { };"),
                   expected(&[(1, "Missing Statement for Else-Clause"),
                              (1, "Incorrect If-Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn else_without_left_brace() {
        assert_eq!(diagnostics("x = 1;\nif (x) { x = 2; }\nelse x = 3;"),
                   expected(&[(3, "Missing left brace for an Else-Clause"),
                              (3, "Incorrect If-Statement"),
                              (3, "Syntactic error in Program Body")]));
    }

    #[test]
    fn else_without_right_brace() {
        assert_eq!(diagnostics("if (1) { x = 1; } else { x = 2;\n"),
                   expected(&[(1, "Missing right brace for an Else-Clause"),
                              (1, "Incorrect If-Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn else_after_an_unclosed_if_clause() {
        assert_eq!(diagnostics("x = 1;\nif (x) { y = 2;\nelse { y = 3; };"),
                   expected(&[(2, "Missing right brace for If Statement Clause"),
                              (2, "Incorrect If-Statement"),
                              (3, "Illegal If Statement Else-Clause"),
                              (3, "Syntactic error in Program Body")]));
    }

    #[test]
    fn lone_else_is_its_own_explanation() {
        let report = SyntaxChecker::new("x = 1;\nelse { x = 2; };\n").check();
        assert_eq!(report.to_string(),
                   "1. Line 2: Illegal If Statement Else-Clause\nUnsuccessful Parsing\nNumber of \
                    Syntax Errors 1\n");
    }

    #[test]
    fn else_after_a_failed_statement_is_still_reported() {
        assert_eq!(diagnostics("a = 1 +;\nelse { b = 2; };"),
                   expected(&[(1, "Missing operand for an operator"),
                              (1, "Missing operand after operator"),
                              (1, "Incorrect Assignment Statement"),
                              (2, "Illegal If Statement Else-Clause"),
                              (2, "Syntactic error in Program Body")]));
    }

    #[test]
    fn println_without_left_parenthesis() {
        assert_eq!(diagnostics("println 1;"),
                   expected(&[(1, "Missing Left Parenthesis of PrintLn Statement"),
                              (1, "Incorrect PrintLn Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn println_without_arguments() {
        assert_eq!(diagnostics("println();"),
                   expected(&[(1, "Missing operand for an operator"),
                              (1, "Incorrect PrintLn Statement"),
                              (1, "Syntactic error in Program Body")]));
    }

    #[test]
    fn assignment_without_operator() {
        assert_eq!(diagnostics("x 1;"),
                   expected(&[(1, "Missing Assignment Operator"),
                              (1, "Incorrect Assignment Statement"),
                              (1, "Syntactic error in Program Body")]));
    }
}
