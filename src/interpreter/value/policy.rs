use clap::ValueEnum;

use crate::interpreter::value::{
    core::Value,
    mixed,
    operator::{BinaryOperator, UnaryOperator},
    strict,
};

/// Selects the operator table a program runs with.
///
/// The two tables disagree on how strings and numbers mix, so a run uses
/// exactly one of them and never merges the two.
///
/// # Example
/// ```
/// use bpl::interpreter::value::{core::Value, operator::BinaryOperator, policy::CoercionPolicy};
///
/// let text = Value::from("3");
/// let two = Value::from(2.0);
///
/// assert_eq!(CoercionPolicy::Strict.apply_binary(BinaryOperator::Mul, &text, &two),
///            Value::Error);
/// assert_eq!(CoercionPolicy::Mixed.apply_binary(BinaryOperator::Mul, &text, &two),
///            Value::Number(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CoercionPolicy {
    /// Arithmetic and relational operators want operands that already have
    /// the right type; only `/` and `%` coerce.
    #[default]
    Strict,
    /// Strings that read as whole numbers take part in `*`, `<`, `.x.` and
    /// `@eq` as numbers; catenation refuses booleans and prints numbers in
    /// general notation.
    Mixed,
}

impl CoercionPolicy {
    /// Applies a binary operator.
    ///
    /// An `Error` operand always yields `Error`, whatever the operator.
    #[must_use]
    pub fn apply_binary(self, op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
        if lhs.is_error() || rhs.is_error() {
            return Value::Error;
        }
        match self {
            Self::Strict => strict::binary(op, lhs, rhs),
            Self::Mixed => mixed::binary(op, lhs, rhs),
        }
    }

    /// Applies a prefix operator. Both policies share the same unary table.
    #[must_use]
    pub fn apply_unary(self, op: UnaryOperator, operand: &Value) -> Value {
        if operand.is_error() {
            return Value::Error;
        }
        strict::unary(op, operand)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_BINARY: [BinaryOperator; 16] = [BinaryOperator::Add,
                                              BinaryOperator::Sub,
                                              BinaryOperator::Mul,
                                              BinaryOperator::Div,
                                              BinaryOperator::Rem,
                                              BinaryOperator::Pow,
                                              BinaryOperator::Cat,
                                              BinaryOperator::Repeat,
                                              BinaryOperator::NumEq,
                                              BinaryOperator::NumGe,
                                              BinaryOperator::NumLt,
                                              BinaryOperator::StrEq,
                                              BinaryOperator::StrLe,
                                              BinaryOperator::StrGt,
                                              BinaryOperator::And,
                                              BinaryOperator::Or];

    fn samples() -> Vec<Value> {
        vec![Value::from(0.0),
             Value::from(3.5),
             Value::from(""),
             Value::from("12"),
             Value::from("abc"),
             Value::from(true),
             Value::from(false),
             Value::Error]
    }

    #[test]
    fn error_operands_are_infectious() {
        for policy in [CoercionPolicy::Strict, CoercionPolicy::Mixed] {
            for op in ALL_BINARY {
                for v in samples() {
                    assert_eq!(policy.apply_binary(op, &v, &Value::Error),
                               Value::Error,
                               "{policy:?}: {v:?} {} Error",
                               op.symbol());
                    assert_eq!(policy.apply_binary(op, &Value::Error, &v),
                               Value::Error,
                               "{policy:?}: Error {} {v:?}",
                               op.symbol());
                }
            }
            for op in [UnaryOperator::Plus, UnaryOperator::Minus, UnaryOperator::Not] {
                assert_eq!(policy.apply_unary(op, &Value::Error), Value::Error);
            }
        }
    }

    #[test]
    fn policies_share_the_untouched_operators() {
        let lhs = Value::from("7");
        let rhs = Value::from(2.0);
        for op in [BinaryOperator::Add, BinaryOperator::Div, BinaryOperator::Rem, BinaryOperator::Pow] {
            assert_eq!(CoercionPolicy::Strict.apply_binary(op, &lhs, &rhs),
                       CoercionPolicy::Mixed.apply_binary(op, &lhs, &rhs),
                       "{}",
                       op.symbol());
        }
    }

    #[test]
    fn strict_is_the_default() {
        assert_eq!(CoercionPolicy::default(), CoercionPolicy::Strict);
    }
}
