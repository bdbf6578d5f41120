use std::fs;

use bpl::{
    check_program,
    error::RuntimeError,
    interpreter::{evaluator::core::RunReport, value::core::Value, value::policy::CoercionPolicy},
    list_tokens,
    run_program,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs every `tests/scripts/*.bpl` and compares the run output with the
/// sibling `.out` file and, if present, the check report with the sibling
/// `.check` file.
#[test]
fn golden_scripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "bpl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing run output for {path:?}: {e}"));
        let (output, _) = run(&source);
        assert_eq!(output, expected, "run output of {path:?}");

        if let Ok(expected) = fs::read_to_string(path.with_extension("check")) {
            assert_eq!(check_program(&source).to_string(), expected, "check report of {path:?}");
        }
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> (String, RunReport) {
    run_with(src, CoercionPolicy::Strict)
}

fn run_with(src: &str, policy: CoercionPolicy) -> (String, RunReport) {
    let mut out = Vec::new();
    let report = run_program(src, policy, &mut out).unwrap_or_else(|e| panic!("I/O error: {e}"));
    (String::from_utf8(out).expect("output is UTF-8"), report)
}

fn assert_output(src: &str, printed: &str) {
    let (output, report) = run(src);
    if let Some(e) = report.error {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, format!("{printed}\n\nDONE\n"));
}

fn assert_failure(src: &str) -> RuntimeError {
    let (output, report) = run(src);
    assert!(output.ends_with("\nUnsuccessful Interpretation\nNumber of Errors 1\n"),
            "unexpected output: {output}");
    report.error.expect("Script succeeded but was expected to fail")
}

#[test]
fn assignment_and_printing() {
    assert_output("x = 5;\nprintln(x);", "5.0\n");
    assert_output("x = 5.25;\nprintln(x);", "5.3\n");
    assert_output("println('a', \"b\", <c d>);", "abc d\n");
}

#[test]
fn program_without_statements() {
    assert_output("", "");
    assert_output("# only a comment\n", "");
}

#[test]
fn only_one_branch_runs() {
    let (output, report) = run("x = 0;\nif (1) { x = 1; } else { x = 2; };\nprintln(x);");
    assert_eq!(output, "1.0\n\n\nDONE\n");
    assert_eq!(report.variables["x"], Value::Number(1.0));
}

#[test]
fn boolean_assignment_fails_under_strict() {
    let error = assert_failure("y = 3; y = 3 @eq 3;");
    assert!(matches!(error, RuntimeError::BooleanAssignment { line: 1 }));
}

#[test]
fn lexical_errors_stop_everything() {
    let error = assert_failure("x = 'abc;\nprintln(x);");
    assert!(matches!(error, RuntimeError::Lexical(_)));

    let report = check_program("x = 'abc;\nprintln(y);");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.to_string(),
               "1. Line 1: Error-Unrecognized Lexeme {'abc;}\nUnsuccessful Parsing\nNumber of \
                Syntax Errors 1\n");
}

#[test]
fn checking_is_repeatable() {
    let source = "a = 1 +;\nprintln(a;\nelse { b = 2; };\n";
    assert_eq!(check_program(source), check_program(source));
}

#[test]
fn a_single_missing_semicolon_is_one_diagnostic() {
    let report = check_program("a = 1;\nb = a + 1\nprintln(b);\n");
    assert_eq!(report.to_string(),
               "1. Line 2: Missing semicolon at end of Statement\nUnsuccessful Parsing\nNumber \
                of Syntax Errors 1\n");
}

#[test]
fn checker_reports_every_broken_statement() {
    let report = check_program("x = 1;\ny = (x;\nz = ;\nprintln(x, y, z);\n");
    let lines: Vec<usize> = report.diagnostics.iter().map(|d| d.line).collect();
    assert!(lines.contains(&2));
    assert!(lines.contains(&3));
    assert!(!report.is_success());
}

#[test]
fn checker_lists_declared_variables() {
    let report = check_program("zeta = 1;\nalpha = zeta;\nif (alpha) { mid = 2; };\n");
    assert_eq!(report.declared, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn runtime_errors_report_their_line() {
    let error = assert_failure("a = 1;\n\nb = a + 'x';\n");
    assert_eq!(error.line(), 3);
    assert_eq!(error.to_string(), "Run-Time Error-Illegal Additive Operation");
}

#[test]
fn policies_are_chosen_per_run() {
    let source = "n = '4' * 2;\nprintln(n);";
    let (_, strict) = run_with(source, CoercionPolicy::Strict);
    assert!(!strict.is_success());

    let (output, mixed) = run_with(source, CoercionPolicy::Mixed);
    assert!(mixed.is_success());
    assert_eq!(output, "8.0\n\n\nDONE\n");
}

#[test]
fn token_listing_summary() {
    let listing = list_tokens("x = 1;\nprintln(x . \"!\");\n");
    assert_eq!(listing.to_string(),
               "\nLines: 2\nTotal Tokens: 11\nIdentifiers: 2\nNumeric Literals: 1\nString \
                Literals: 1\n");
}
