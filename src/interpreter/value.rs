/// The runtime value type.
///
/// Defines the four-variant `Value` (number, string, boolean and the error
/// value), how values print, and the conversions operators build on:
/// uniform numeric coercion, truthiness and catenation text.
pub mod core;
/// Operator names.
///
/// Declares `BinaryOperator` and `UnaryOperator`, their token mapping and
/// the operation family each belongs to for error reporting.
pub mod operator;
/// Coercion policy selection.
///
/// `CoercionPolicy` picks the operator table used by a run and applies the
/// error-infection rule before dispatching.
pub mod policy;

/// Operator table for mixed-mode programs.
///
/// Overrides multiplication, `<`, catenation, string repeat and `@eq` with
/// implicit string-to-number coercion. Every other operator falls back to
/// the strict table.
mod mixed;
/// Operator table for strictly typed programs.
mod strict;
