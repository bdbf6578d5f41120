/// Checker state, token access, diagnostics and the program loop.
///
/// Holds `SyntaxChecker`, the `CheckReport` it produces, and the top-level
/// recovery that keeps checking after a statement failed.
pub mod core;
/// Expression rules.
///
/// One method per precedence level, from `||` down to primaries, together
/// with the missing-operand reporting that the latches deduplicate.
pub mod expression;
/// Duplicate-diagnostic suppression.
pub mod latch;
/// Statement rules: assignments, `println`, `if` with its clauses.
pub mod statement;
