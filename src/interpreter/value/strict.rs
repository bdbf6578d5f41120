use std::cmp::Ordering;

use crate::{
    interpreter::value::{
        core::Value,
        operator::{BinaryOperator, UnaryOperator},
    },
    util::num::{parse_leading, parse_whole, to_count, to_integer},
};

/// Applies a binary operator under the strict table.
///
/// Operands are never `Error` here; the policy filters them out first.
pub(super) fn binary(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    match op {
        BinaryOperator::Add => numeric(lhs, rhs, |a, b| a + b),
        BinaryOperator::Sub => numeric(lhs, rhs, |a, b| a - b),
        BinaryOperator::Mul => numeric(lhs, rhs, |a, b| a * b),
        BinaryOperator::Pow => numeric(lhs, rhs, f64::powf),
        BinaryOperator::Div => divide(lhs, rhs),
        BinaryOperator::Rem => remainder(lhs, rhs),
        BinaryOperator::Cat => catenate(lhs, rhs),
        BinaryOperator::Repeat => repeat(lhs, rhs),
        BinaryOperator::NumEq => compare_numbers(lhs, rhs, |o| o == Ordering::Equal),
        BinaryOperator::NumGe => compare_numbers(lhs, rhs, |o| o != Ordering::Less),
        BinaryOperator::NumLt => compare_numbers(lhs, rhs, |o| o == Ordering::Less),
        BinaryOperator::StrEq => compare_strings(lhs, rhs, |o| o == Ordering::Equal),
        BinaryOperator::StrLe => compare_strings(lhs, rhs, |o| o != Ordering::Greater),
        BinaryOperator::StrGt => compare_strings(lhs, rhs, |o| o == Ordering::Greater),
        BinaryOperator::And => logical(lhs, rhs, |a, b| a && b),
        BinaryOperator::Or => logical(lhs, rhs, |a, b| a || b),
    }
}

/// Applies a prefix operator. `-` wants a number, `+` passes its operand
/// through, `!` negates truthiness.
pub(super) fn unary(op: UnaryOperator, operand: &Value) -> Value {
    match (op, operand) {
        (UnaryOperator::Minus, Value::Number(n)) => Value::Number(-n),
        (UnaryOperator::Minus, _) => Value::Error,
        (UnaryOperator::Plus, v) => v.clone(),
        (UnaryOperator::Not, v) => v.truthy().map_or(Value::Error, |t| Value::Bool(!t)),
    }
}

fn numeric(lhs: &Value, rhs: &Value, f: impl Fn(f64, f64) -> f64) -> Value {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Value::Number(f(*a, *b)),
        _ => Value::Error,
    }
}

/// Division coerces both operands uniformly and fails on a zero divisor.
fn divide(lhs: &Value, rhs: &Value) -> Value {
    match (lhs.coerce_number(), rhs.coerce_number()) {
        (Some(_), Some(b)) if b == 0.0 => Value::Error,
        (Some(a), Some(b)) => Value::Number(a / b),
        _ => Value::Error,
    }
}

/// Integer remainder after truncating both operands toward zero.
///
/// A string divisor is rejected outright; a string dividend must read as a
/// number in its entirety.
#[allow(clippy::cast_precision_loss)]
fn remainder(lhs: &Value, rhs: &Value) -> Value {
    if matches!(rhs, Value::String(_)) {
        return Value::Error;
    }
    let dividend = match lhs {
        Value::String(s) => parse_whole(s),
        other => other.coerce_number(),
    };

    let result = dividend.and_then(to_integer)
                         .zip(rhs.coerce_number().and_then(to_integer))
                         .and_then(|(a, b)| a.checked_rem(b));

    result.map_or(Value::Error, |r| Value::Number(r as f64))
}

fn catenate(lhs: &Value, rhs: &Value) -> Value {
    match (lhs.catenation_text(), rhs.catenation_text()) {
        (Some(a), Some(b)) => Value::String(a + &b),
        _ => Value::Error,
    }
}

/// Repeats the text of the left operand.
///
/// The count is a number or a string with a readable leading number,
/// truncated toward zero; a negative count is an error.
fn repeat(lhs: &Value, rhs: &Value) -> Value {
    let count = match rhs {
        Value::Number(n) => Some(*n),
        Value::String(s) => parse_leading(s),
        _ => None,
    };

    match (lhs.catenation_text(), count.and_then(to_count)) {
        (Some(text), Some(count)) => repeat_text(&text, count),
        _ => Value::Error,
    }
}

/// Longest string, in bytes, that `.x.` may produce.
pub(super) const MAX_REPEAT_LEN: usize = 1 << 24;

/// Repeats `text`, or yields the error value when the result would exceed
/// [`MAX_REPEAT_LEN`].
pub(super) fn repeat_text(text: &str, count: usize) -> Value {
    match text.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEAT_LEN => Value::String(text.repeat(count)),
        _ => Value::Error,
    }
}

/// Numeric comparison. Both operands must already be numbers.
fn compare_numbers(lhs: &Value, rhs: &Value, test: impl Fn(Ordering) -> bool) -> Value {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => {
            a.partial_cmp(b).map_or(Value::Bool(false), |o| Value::Bool(test(o)))
        },
        _ => Value::Error,
    }
}

/// Text comparison. Strings compare as they are and numbers as their
/// catenation text; a boolean operand is an error.
fn compare_strings(lhs: &Value, rhs: &Value, test: impl Fn(Ordering) -> bool) -> Value {
    fn text(value: &Value) -> Option<String> {
        match value {
            Value::String(_) | Value::Number(_) => value.catenation_text(),
            Value::Bool(_) | Value::Error => None,
        }
    }

    match (text(lhs), text(rhs)) {
        (Some(a), Some(b)) => Value::Bool(test(a.cmp(&b))),
        _ => Value::Error,
    }
}

fn logical(lhs: &Value, rhs: &Value, f: impl Fn(bool, bool) -> bool) -> Value {
    match (lhs.truthy(), rhs.truthy()) {
        (Some(a), Some(b)) => Value::Bool(f(a, b)),
        _ => Value::Error,
    }
}
