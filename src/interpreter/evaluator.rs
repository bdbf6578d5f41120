/// Interpreter state and token access.
///
/// Contains the `Interpreter` itself, the variable store, the `RunReport`
/// it produces and the helpers that turn lexical error tokens into runtime
/// errors.
pub mod core;

/// Expression evaluation.
///
/// One method per precedence level. Each level checks that an operand can
/// start before descending and turns an error value produced by the coercion
/// policy into the runtime error of its operation family.
pub mod expression;

/// Statement execution.
///
/// Runs assignments and `println`, and executes exactly one branch of an
/// `if` while skipping the other by brace balancing.
pub mod statement;
