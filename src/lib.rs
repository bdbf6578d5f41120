//! # bpl
//!
//! bpl is a scanner, syntax checker and interpreter for BPL, a small
//! dynamically typed scripting language with numbers, strings, assignments,
//! `println` and `if`/`else`.
//!
//! The same source can be listed token by token, checked for every syntax
//! error it contains, or run until its first error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    checker::core::{CheckReport, SyntaxChecker},
    evaluator::core::{Interpreter, RunReport},
    listing::TokenListing,
    value::policy::CoercionPolicy,
};

/// Provides unified error types for scanning, checking and running.
///
/// This module defines every error that can be raised while scanning,
/// checking or running a program. Each error carries the source line it is
/// anchored to and renders the exact message users see.
///
/// # Responsibilities
/// - Defines the lexical, syntax and runtime error enums.
/// - Pairs syntax errors with their lines as diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates scanning, checking and running.
///
/// This module ties together the scanner, the syntax checker, the evaluator
/// and the value model, and exposes them to the entry points below.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, checker, evaluator and values.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Parsing and formatting routines shared by the value model and its
/// operators.
pub mod util;

/// Checks a program and returns every syntax error it contains.
///
/// The report renders the user-facing output through `Display`: either the
/// declared variables followed by `DONE`, or the numbered diagnostics and the
/// error count.
///
/// # Examples
/// ```
/// use bpl::check_program;
///
/// let report = check_program("x = 1;\nprintln(x + y);\n");
/// assert!(!report.is_success());
/// assert_eq!(report.to_string(),
///            "1. Line 2: Using Undefined Variable: y\n\
///             Unsuccessful Parsing\n\
///             Number of Syntax Errors 1\n");
/// ```
#[must_use]
pub fn check_program(source: &str) -> CheckReport {
    SyntaxChecker::new(source).check()
}

/// Runs a program under the given coercion policy, writing its output and
/// the closing report to `out`.
///
/// # Errors
/// Returns an error only if writing to `out` fails. Program errors are part
/// of the returned [`RunReport`].
///
/// # Examples
/// ```
/// use bpl::{interpreter::value::policy::CoercionPolicy, run_program};
///
/// let mut out = Vec::new();
/// let report = run_program("x = 5.25;\nprintln(x);", CoercionPolicy::Strict, &mut out).unwrap();
///
/// assert!(report.is_success());
/// assert_eq!(String::from_utf8(out).unwrap(), "5.3\n\n\nDONE\n");
/// ```
pub fn run_program<W: Write>(source: &str,
                             policy: CoercionPolicy,
                             out: W)
                             -> std::io::Result<RunReport> {
    Interpreter::new(source, policy, out).run()
}

/// Scans a program and returns its tokens with a summary.
///
/// # Examples
/// ```
/// use bpl::list_tokens;
///
/// let listing = list_tokens("n = 'two' . 2;");
/// assert_eq!(listing.identifiers(), 1);
/// assert_eq!(listing.string_literals(), 1);
/// assert_eq!(listing.numeric_literals(), 1);
/// ```
#[must_use]
pub fn list_tokens(source: &str) -> TokenListing {
    TokenListing::scan(source)
}
