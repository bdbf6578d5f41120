/// Numeric parsing and formatting helpers.
///
/// This module provides the two string-to-number readings used by the value
/// model (a best-effort leading-prefix parse and a strict whole-string
/// parse), the number formats used for printing and catenation, and the
/// truncating conversions used for remainders and repeat counts.
///
/// All conversions return an `Option` instead of silently wrapping.
pub mod num;
