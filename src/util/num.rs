/// Measures the longest prefix of `text` that reads as a decimal number.
///
/// Leading whitespace is skipped. The prefix may carry a sign, needs at
/// least one digit in its mantissa, and takes an exponent only when digits
/// follow the `e`/`E` marker.
///
/// Returns the byte length of the whitespace plus the number, or `None` when
/// no number starts the text.
fn numeric_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = 0;
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    Some(i)
}

/// Parses the leading number of a string, ignoring whatever follows it.
///
/// # Example
/// ```
/// use bpl::util::num::parse_leading;
///
/// assert_eq!(parse_leading("  42abc"), Some(42.0));
/// assert_eq!(parse_leading("2.5e1x"), Some(25.0));
/// assert_eq!(parse_leading("abc"), None);
/// ```
#[must_use]
pub fn parse_leading(text: &str) -> Option<f64> {
    let len = numeric_prefix_len(text)?;
    text[..len].trim_start().parse().ok()
}

/// Parses a string only if it is a number in its entirety.
///
/// Leading whitespace is accepted, trailing characters of any kind are not.
///
/// # Example
/// ```
/// use bpl::util::num::parse_whole;
///
/// assert_eq!(parse_whole("3.5"), Some(3.5));
/// assert_eq!(parse_whole(" 7"), Some(7.0));
/// assert_eq!(parse_whole("7 "), None);
/// assert_eq!(parse_whole(""), None);
/// ```
#[must_use]
pub fn parse_whole(text: &str) -> Option<f64> {
    match numeric_prefix_len(text) {
        Some(len) if len == text.len() => text.trim_start().parse().ok(),
        _ => None,
    }
}

/// Formats a number with exactly one decimal digit.
///
/// Ties round away from zero, so `5.25` becomes `5.3`.
///
/// # Example
/// ```
/// use bpl::util::num::format_fixed1;
///
/// assert_eq!(format_fixed1(5.0), "5.0");
/// assert_eq!(format_fixed1(5.25), "5.3");
/// assert_eq!(format_fixed1(-0.75), "-0.8");
/// ```
#[must_use]
pub fn format_fixed1(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// Formats a number the way string catenation shows it: integral values
/// without a fraction, everything else with one decimal digit.
#[must_use]
pub fn format_catenated(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format_fixed1(value)
    }
}

/// Formats a number in general notation with six significant digits,
/// dropping trailing zeros, and switching to scientific notation for very
/// small or very large magnitudes.
///
/// # Example
/// ```
/// use bpl::util::num::format_general;
///
/// assert_eq!(format_general(3.0), "3");
/// assert_eq!(format_general(2.5), "2.5");
/// assert_eq!(format_general(1.0 / 3.0), "0.333333");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    format_significant(value, 6)
}

/// Formats a literal value for the token listing: integral values as
/// integers, everything else with up to fifteen significant digits.
///
/// # Example
/// ```
/// use bpl::util::num::format_literal;
///
/// assert_eq!(format_literal(12.0), "12");
/// assert_eq!(format_literal(0.125), "0.125");
/// assert_eq!(format_literal(2.5e-7), "2.5e-07");
/// ```
#[must_use]
pub fn format_literal(value: f64) -> String {
    const EXACT: f64 = 9_007_199_254_740_992.0;

    let rounded = value.round();
    if rounded.abs() <= EXACT
       && (value - rounded).abs() < 1e-12
       && let Some(integer) = to_integer(rounded)
    {
        return integer.to_string();
    }
    format_significant(value, 15)
}

/// `%g`-style formatting with `significant` digits.
fn format_significant(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }

    // `{:e}` rounds the mantissa first, which settles the decimal exponent.
    let scientific = format!("{:.*e}", significant.saturating_sub(1), value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let limit = i64::try_from(significant).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Truncates a number toward zero into a repeat count.
///
/// Returns `None` for negative or non-finite values.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_count(value: f64) -> Option<usize> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 {
        return None;
    }
    Some(truncated as usize)
}

/// Truncates a number toward zero into an `i64` for integer remainder.
///
/// Returns `None` for non-finite values.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_integer(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn leading_parse_follows_prefix_rules() {
        assert_eq!(parse_leading("12.5.3"), Some(12.5));
        assert_eq!(parse_leading(".5"), Some(0.5));
        assert_eq!(parse_leading("5."), Some(5.0));
        assert_eq!(parse_leading("-3e"), Some(-3.0));
        assert_eq!(parse_leading("1e3"), Some(1000.0));
        assert_eq!(parse_leading("."), None);
        assert_eq!(parse_leading("-"), None);
        assert_eq!(parse_leading(""), None);
    }

    #[test]
    fn whole_parse_rejects_trailing_text() {
        assert_eq!(parse_whole("12"), Some(12.0));
        assert_eq!(parse_whole("-0.5"), Some(-0.5));
        assert_eq!(parse_whole("12a"), None);
        assert_eq!(parse_whole("1e"), None);
        assert_eq!(parse_whole("abc"), None);
    }

    #[test]
    fn catenation_format_drops_integral_fraction() {
        assert_eq!(format_catenated(4.0), "4");
        assert_eq!(format_catenated(-12.0), "-12");
        assert_eq!(format_catenated(4.25), "4.3");
        assert_eq!(format_catenated(0.5), "0.5");
    }

    #[test]
    fn general_format_matches_six_significant_digits() {
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(1000000.0), "1e+06");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(-2.75), "-2.75");
        assert_eq!(format_general(123.456789), "123.457");
    }

    #[test]
    fn literal_format_keeps_fifteen_digits() {
        assert_eq!(format_literal(3.0), "3");
        assert_eq!(format_literal(-4.0), "-4");
        assert_eq!(format_literal(1.0 / 3.0), "0.333333333333333");
        assert_eq!(format_literal(1.5e20), "1.5e+20");
        assert_eq!(format_literal(1.25e-9), "1.25e-09");
    }

    #[test]
    fn counts_truncate_toward_zero() {
        assert_eq!(to_count(3.9), Some(3));
        assert_eq!(to_count(-0.5), Some(0));
        assert_eq!(to_count(-1.0), None);
        assert_eq!(to_integer(-7.8), Some(-7));
        assert_eq!(to_integer(f64::NAN), None);
    }
}
