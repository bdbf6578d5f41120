/// The checker module validates program structure without running it.
///
/// The syntax checker walks the grammar by recursive descent and keeps going
/// after an error: it reports the problem, resynchronizes at a statement
/// boundary and checks the rest of the program. It also collects the names
/// of all assigned variables.
///
/// # Responsibilities
/// - Reports every grammar violation it can find, each with its line.
/// - Reports reads of variables that no earlier assignment declared.
/// - Keeps cascading operand diagnostics down to one per episode.
pub mod checker;
/// A one-token lookahead buffer shared by the checker and the evaluator.
pub mod cursor;
/// The evaluator module executes programs while parsing them.
///
/// The evaluator re-derives the grammar on its own and computes values as it
/// goes. It stops at the first error of any kind.
///
/// # Responsibilities
/// - Runs assignments, `println` and exactly one branch of every `if`.
/// - Manages the variable store.
/// - Reports runtime errors such as illegal operand types or undefined
///   variables.
pub mod evaluator;
/// The lexer module tokenizes source code.
///
/// The scanner reads the raw source text on demand and produces tokens, each
/// carrying its kind, its exact lexeme and its line. This is the first stage
/// of both checking and running.
///
/// # Responsibilities
/// - Recognizes numbers, `'…'`, `"…"` and `<…>` strings, identifiers,
///   case-insensitive keywords, operators and punctuation.
/// - Skips whitespace and `#` comments while counting lines.
/// - Reports malformed input as a terminal error token.
pub mod lexer;
/// Token listing with a summary of what the source contains.
pub mod listing;
/// The value module defines the runtime data type and its operators.
///
/// # Responsibilities
/// - Defines the `Value` enum: number, string, boolean and the error value.
/// - Implements every operator under the strict and mixed coercion policies.
/// - Makes the error value infectious across all operators.
pub mod value;
