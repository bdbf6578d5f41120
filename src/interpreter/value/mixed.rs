use crate::{
    interpreter::value::{core::Value, operator::BinaryOperator, strict},
    util::num::{format_general, parse_whole},
};

/// Applies a binary operator under the mixed-mode table.
pub(super) fn binary(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    match op {
        BinaryOperator::Mul => match (numeric(lhs), numeric(rhs)) {
            (Some(a), Some(b)) => Value::Number(a * b),
            _ => Value::Error,
        },
        BinaryOperator::NumLt => match (numeric(lhs), numeric(rhs)) {
            (Some(a), Some(b)) => Value::Bool(a < b),
            _ => Value::Error,
        },
        BinaryOperator::Cat => match (plain_text(lhs), plain_text(rhs)) {
            (Some(a), Some(b)) => Value::String(a + &b),
            _ => Value::Error,
        },
        BinaryOperator::Repeat => repeat(lhs, rhs),
        BinaryOperator::StrEq => equal(lhs, rhs),
        _ => strict::binary(op, lhs, rhs),
    }
}

/// A number, or a string that reads as a number in its entirety.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => parse_whole(s),
        _ => None,
    }
}

/// Text of a string or a number in general notation. Booleans have none.
fn plain_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format_general(*n)),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Repeats the left operand's text.
///
/// The count's text must contain a digit, and its integer part (before any
/// `.`, surrounding blanks removed) must consist of digits only.
fn repeat(lhs: &Value, rhs: &Value) -> Value {
    let (Some(text), Some(count)) = (plain_text(lhs), plain_text(rhs)) else {
        return Value::Error;
    };
    if !count.bytes().any(|b| b.is_ascii_digit()) {
        return Value::Error;
    }

    let integer_part = count.split('.').next().unwrap_or_default().trim();
    if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
        return Value::Error;
    }

    integer_part.parse::<usize>()
                .map_or(Value::Error, |n| strict::repeat_text(&text, n))
}

/// `@eq` across strings and numbers.
///
/// Two numeric operands compare as numbers, two non-numeric strings as
/// text, and a numeric operand never equals a non-numeric string.
#[allow(clippy::float_cmp)]
fn equal(lhs: &Value, rhs: &Value) -> Value {
    match (numeric(lhs), numeric(rhs)) {
        (Some(a), Some(b)) => Value::Bool(a == b),
        (None, None) => match (lhs, rhs) {
            (Value::String(a), Value::String(b)) => Value::Bool(a == b),
            _ => Value::Error,
        },
        (Some(_), None) if matches!(rhs, Value::String(_)) => Value::Bool(false),
        (None, Some(_)) if matches!(lhs, Value::String(_)) => Value::Bool(false),
        _ => Value::Error,
    }
}
