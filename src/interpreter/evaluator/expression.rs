use std::io::Write;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::{
            core::Value,
            operator::{BinaryOperator, UnaryOperator},
        },
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Evaluates an expression.
    ///
    /// The rule is: `expr := or`
    pub(super) fn expression(&mut self) -> EvalResult<Value> {
        self.or_expression()
    }

    /// The rule is: `or := and ("||" and)*`
    fn or_expression(&mut self) -> EvalResult<Value> {
        self.binary_level(&[TokenKind::Or], "||", Self::and_expression)
    }

    /// The rule is: `and := relational ("&&" relational)*`
    fn and_expression(&mut self) -> EvalResult<Value> {
        self.binary_level(&[TokenKind::And], "&&", Self::relational)
    }

    /// Evaluates at most one relational operator; they do not chain.
    ///
    /// The rule is: `relational := additive (("==" | ">=" | "<" | "@eq" |
    /// "@le" | "@gt") additive)?`
    fn relational(&mut self) -> EvalResult<Value> {
        let lhs = self.additive()?;

        let kind = self.peek_kind()?;
        if !matches!(kind,
                     TokenKind::NumEq
                     | TokenKind::NumGe
                     | TokenKind::NumLt
                     | TokenKind::StrEq
                     | TokenKind::StrLe
                     | TokenKind::StrGt)
        {
            return Ok(lhs);
        }
        let op = self.next()?;
        if !self.peek_kind()?.starts_operand() {
            return Err(RuntimeError::MissingRelationalOperand { line: op.line });
        }
        let rhs = self.additive()?;
        self.apply(&op, &lhs, &rhs)
    }

    /// The rule is: `additive := multiplicative (("+" | "-" | ".")
    /// multiplicative)*`
    fn additive(&mut self) -> EvalResult<Value> {
        self.binary_level(&[TokenKind::Plus, TokenKind::Minus, TokenKind::Cat],
                          "+ or - or .",
                          Self::multiplicative)
    }

    /// The rule is: `multiplicative := unary (("*" | "/" | "%" | ".x.")
    /// unary)*`
    fn multiplicative(&mut self) -> EvalResult<Value> {
        self.binary_level(&[TokenKind::Mult, TokenKind::Div, TokenKind::Rem, TokenKind::Repeat],
                          "multiplicative operator",
                          Self::unary)
    }

    /// Evaluates a left-associative level.
    ///
    /// # Parameters
    /// - `operators`: The token kinds handled at this level.
    /// - `described`: How a missing right operand names the operator.
    /// - `operand`: The rule for the next tighter level.
    fn binary_level(&mut self,
                    operators: &[TokenKind],
                    described: &'static str,
                    operand: fn(&mut Self) -> EvalResult<Value>)
                    -> EvalResult<Value> {
        let mut lhs = operand(self)?;
        while operators.contains(&self.peek_kind()?) {
            let op = self.next()?;
            if !self.peek_kind()?.starts_operand() {
                return Err(RuntimeError::MissingOperand { operator: described,
                                                          line:     op.line, });
            }
            let rhs = operand(self)?;
            lhs = self.apply(&op, &lhs, &rhs)?;
        }
        Ok(lhs)
    }

    /// Evaluates an optionally prefixed operand.
    ///
    /// A sign binds to the base of an exponentiation, so `-2 ** 2` is `4`.
    /// Negation applies to the whole exponentiation.
    ///
    /// The rule is: `unary := ("+" | "-" | "!")? exponent`
    fn unary(&mut self) -> EvalResult<Value> {
        let prefix = match self.peek_kind()? {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Not => Some(self.next()?),
            _ => None,
        };

        match prefix {
            Some(token) if token.kind == TokenKind::Not => {
                let operand = self.exponent(None)?;
                self.apply_prefix(&token, &operand)
            },
            sign => self.exponent(sign.as_ref()),
        }
    }

    /// Evaluates a right-associative exponentiation. The right operand of
    /// `**` is a primary, possibly raised further, and never signed.
    ///
    /// The rule is: `exponent := primary ("**" exponent)?`
    fn exponent(&mut self, sign: Option<&Token>) -> EvalResult<Value> {
        let mut base = self.primary()?;
        if let Some(sign) = sign {
            base = self.apply_prefix(sign, &base)?;
        }

        let Some(op) = self.accept(TokenKind::Pow)? else {
            return Ok(base);
        };
        if !self.peek_kind()?.starts_primary() {
            return Err(RuntimeError::MissingExponentOperand { line: op.line });
        }
        let power = self.exponent(None)?;
        self.apply(&op, &base, &power)
    }

    /// Evaluates a variable, a literal or a parenthesized expression.
    ///
    /// The rule is: `primary := IDENT | ICONST | FCONST | SCONST | "(" expr
    /// ")"`
    fn primary(&mut self) -> EvalResult<Value> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Ident => match self.variables.get(&token.lexeme) {
                Some(value) => Ok(value.clone()),
                None => Err(RuntimeError::UndefinedVariable { name: token.lexeme,
                                                              line: token.line }),
            },
            TokenKind::IntConst | TokenKind::FloatConst => {
                token.lexeme
                     .parse::<f64>()
                     .map(Value::Number)
                     .map_err(|_| RuntimeError::InvalidPrimary { line: token.line })
            },
            TokenKind::StringConst => Ok(Value::from(token.text())),
            TokenKind::LParen => {
                let value = self.expression()?;
                self.expect(TokenKind::RParen,
                            |line| RuntimeError::MissingClosingParen { line })?;
                Ok(value)
            },
            _ => Err(RuntimeError::InvalidPrimary { line: token.line }),
        }
    }

    /// Applies a binary operator token under the run's policy.
    fn apply(&self, op: &Token, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
        let Some(operator) = BinaryOperator::from_token(op.kind) else {
            return Err(RuntimeError::InvalidPrimary { line: op.line });
        };
        let result = self.policy.apply_binary(operator, lhs, rhs);
        trace!(%lhs, op = operator.symbol(), %rhs, %result, "binary");

        if result.is_error() {
            debug!(op = operator.symbol(),
                   lhs = lhs.type_name(),
                   rhs = rhs.type_name(),
                   line = op.line,
                   "illegal operand types");
            return Err(RuntimeError::IllegalOperation { family: operator.family(),
                                                        line:   op.line, });
        }
        Ok(result)
    }

    fn apply_prefix(&self, op: &Token, operand: &Value) -> EvalResult<Value> {
        let Some(operator) = UnaryOperator::from_token(op.kind) else {
            return Err(RuntimeError::InvalidPrimary { line: op.line });
        };
        let result = self.policy.apply_unary(operator, operand);
        if result.is_error() {
            debug!(?operator, operand = operand.type_name(), line = op.line, "illegal operand type");
            return Err(RuntimeError::IllegalOperation { family: operator.family(),
                                                        line:   op.line, });
        }
        Ok(result)
    }
}
