use crate::{
    error::SyntaxError,
    interpreter::{
        checker::core::{CheckResult, Failed, SyntaxChecker},
        lexer::TokenKind,
    },
};

impl SyntaxChecker<'_> {
    /// Checks an expression.
    ///
    /// The rule is: `expr := or`
    pub(super) fn expression(&mut self) -> CheckResult {
        self.or_expression()
    }

    /// The rule is: `or := and ("||" and)*`
    fn or_expression(&mut self) -> CheckResult {
        self.binary_level(&[TokenKind::Or], Self::and_expression)
    }

    /// The rule is: `and := relational ("&&" relational)*`
    fn and_expression(&mut self) -> CheckResult {
        self.binary_level(&[TokenKind::And], Self::relational)
    }

    /// Checks a relational expression. Relational operators do not chain.
    ///
    /// The rule is: `relational := additive (("==" | ">=" | "<" | "@eq" |
    /// "@le" | "@gt") additive)?`
    fn relational(&mut self) -> CheckResult {
        self.additive()?;

        let kind = self.peek_kind();
        if !matches!(kind,
                     TokenKind::NumEq
                     | TokenKind::NumGe
                     | TokenKind::NumLt
                     | TokenKind::StrEq
                     | TokenKind::StrLe
                     | TokenKind::StrGt)
        {
            return Ok(());
        }
        let op = self.next();
        self.right_operand(op.line, Self::additive)
    }

    /// The rule is: `additive := multiplicative (("+" | "-" | ".")
    /// multiplicative)*`
    fn additive(&mut self) -> CheckResult {
        self.binary_level(&[TokenKind::Plus, TokenKind::Minus, TokenKind::Cat],
                          Self::multiplicative)
    }

    /// The rule is: `multiplicative := unary (("*" | "/" | "%" | ".x.")
    /// unary)*`
    fn multiplicative(&mut self) -> CheckResult {
        self.binary_level(&[TokenKind::Mult, TokenKind::Div, TokenKind::Rem, TokenKind::Repeat],
                          Self::unary)
    }

    /// Checks a left-associative level: an operand, then any number of
    /// operator and operand pairs.
    fn binary_level(&mut self,
                    operators: &[TokenKind],
                    operand: fn(&mut Self) -> CheckResult)
                    -> CheckResult {
        operand(self)?;
        while operators.contains(&self.peek_kind()) {
            let op = self.next();
            self.right_operand(op.line, operand)?;
        }
        Ok(())
    }

    /// Checks the right operand of a binary operator, reporting it as
    /// missing when nothing that can start an operand follows.
    fn right_operand(&mut self, line: usize, operand: fn(&mut Self) -> CheckResult) -> CheckResult {
        if !self.peek_kind().starts_operand() || operand(self).is_err() {
            self.operand_missing(line);
            return Err(Failed);
        }
        Ok(())
    }

    /// Checks an optionally prefixed operand.
    ///
    /// Without a prefix and without anything that can start a primary, the
    /// rule fails silently so that the enclosing statement names what is
    /// missing.
    ///
    /// The rule is: `unary := ("+" | "-" | "!")? exponent`
    fn unary(&mut self) -> CheckResult {
        let prefix = match self.peek_kind() {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Not => Some(self.next()),
            _ => None,
        };

        if !self.peek_kind().starts_primary() {
            if let Some(op) = prefix {
                self.operand_missing(op.line);
            }
            return Err(Failed);
        }
        if self.exponent().is_err() {
            let line = self.cursor.line();
            self.operand_missing(line);
            return Err(Failed);
        }
        Ok(())
    }

    /// Checks an exponentiation chain. Each right operand is a primary.
    ///
    /// The rule is: `exponent := primary ("**" primary)*`
    fn exponent(&mut self) -> CheckResult {
        self.primary()?;
        while self.accept(TokenKind::Pow).is_some() {
            if !self.peek_kind().starts_primary() || self.primary().is_err() {
                let line = self.consumed_line;
                self.error(line, SyntaxError::MissingExponentOperand);
                self.pair.arm();
                return Err(Failed);
            }
        }
        Ok(())
    }

    /// Checks a primary: a variable, a literal or a parenthesized
    /// expression.
    ///
    /// Reading a variable that no earlier assignment declared is reported
    /// on the spot but does not fail the rule.
    ///
    /// The rule is: `primary := IDENT | ICONST | FCONST | SCONST | "(" expr
    /// ")"`
    fn primary(&mut self) -> CheckResult {
        let token = self.next();
        match token.kind {
            TokenKind::Ident => {
                if !self.is_declared(&token.lexeme) {
                    self.error(token.line, SyntaxError::UndefinedVariable(token.lexeme));
                }
                Ok(())
            },
            TokenKind::IntConst | TokenKind::FloatConst | TokenKind::StringConst => Ok(()),
            TokenKind::LParen => {
                if !self.peek_kind().starts_operand() || self.expression().is_err() {
                    self.error(token.line, SyntaxError::MissingParenExpression);
                    self.pair.arm();
                    self.resync(&[TokenKind::RParen, TokenKind::Semicolon]);
                    return Err(Failed);
                }
                if self.accept(TokenKind::RParen).is_none() {
                    self.error(token.line, SyntaxError::MissingRightParen);
                    self.single.arm();
                    self.resync(&[TokenKind::RParen, TokenKind::Semicolon]);
                    return Err(Failed);
                }
                Ok(())
            },
            _ => {
                self.cursor.push_back(token);
                Err(Failed)
            },
        }
    }
}
