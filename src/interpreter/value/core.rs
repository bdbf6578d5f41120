use std::fmt;

use crate::util::num::{format_catenated, format_fixed1, parse_leading};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operator returns a new one. `Error` is both
/// "no value" and "operation failed", and it is infectious: an operator
/// applied to an `Error` operand yields `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A double precision number. Integer and fractional literals both
    /// produce this variant.
    Number(f64),
    /// A text value produced by a string literal, catenation or repeat.
    String(String),
    /// A boolean produced by relational and logical operators. It can be
    /// printed and tested, but never stored by a plain assignment.
    Bool(bool),
    /// The failed or missing value.
    #[default]
    Error,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns `true` for the error value.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the name of the variant, for logging.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Bool(_) => "Bool",
            Self::Error => "Error",
        }
    }

    /// Maps the value to a boolean for logical operators and `if` guards.
    ///
    /// Numbers are true unless zero, strings are true unless empty or `"0"`,
    /// and booleans are taken as they are.
    ///
    /// # Returns
    /// `None` for the error value.
    ///
    /// # Example
    /// ```
    /// use bpl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(2.0).truthy(), Some(true));
    /// assert_eq!(Value::from("0").truthy(), Some(false));
    /// assert_eq!(Value::from("00").truthy(), Some(true));
    /// assert_eq!(Value::Error.truthy(), None);
    /// ```
    #[must_use]
    pub fn truthy(&self) -> Option<bool> {
        match self {
            Self::Number(n) => Some(*n != 0.0),
            Self::String(s) => Some(!(s.is_empty() || s == "0")),
            Self::Bool(b) => Some(*b),
            Self::Error => None,
        }
    }

    /// Converts the value to a number the uniform way.
    ///
    /// Booleans become `0` or `1`, strings are read up to the first
    /// character that cannot continue a number and become `0` when nothing
    /// can be read.
    ///
    /// # Returns
    /// `None` for the error value.
    #[must_use]
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => Some(parse_leading(s).unwrap_or(0.0)),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Error => None,
        }
    }

    /// The text a value contributes to a catenation.
    ///
    /// Integral numbers lose their fraction, other numbers keep one decimal
    /// digit, booleans read `true` or `false`.
    ///
    /// # Returns
    /// `None` for the error value.
    #[must_use]
    pub fn catenation_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(format_catenated(*n)),
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Error => None,
        }
    }
}

/// Prints a value the way `println` shows it: numbers with exactly one
/// decimal digit, strings raw, booleans as `true` or `false`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_fixed1(*n)),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numbers_print_with_one_decimal() {
        assert_eq!(Value::from(5.0).to_string(), "5.0");
        assert_eq!(Value::from(5.25).to_string(), "5.3");
        assert_eq!(Value::from(-3.14159).to_string(), "-3.1");
        assert_eq!(Value::from(1e6).to_string(), "1000000.0");
    }

    #[test]
    fn strings_and_booleans_print_raw() {
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(false).to_string(), "false");
    }

    #[test]
    fn uniform_coercion() {
        assert_eq!(Value::from(true).coerce_number(), Some(1.0));
        assert_eq!(Value::from("12abc").coerce_number(), Some(12.0));
        assert_eq!(Value::from("abc").coerce_number(), Some(0.0));
        assert_eq!(Value::Error.coerce_number(), None);
    }

    #[test]
    fn catenation_text_forms() {
        assert_eq!(Value::from(4.0).catenation_text().as_deref(), Some("4"));
        assert_eq!(Value::from(4.5).catenation_text().as_deref(), Some("4.5"));
        assert_eq!(Value::from(false).catenation_text().as_deref(), Some("false"));
        assert_eq!(Value::Error.catenation_text(), None);
    }

    #[test]
    fn string_truthiness() {
        assert_eq!(Value::from("").truthy(), Some(false));
        assert_eq!(Value::from("abc").truthy(), Some(true));
        assert_eq!(Value::from(0.0).truthy(), Some(false));
    }
}
