use std::{fs, io, process::ExitCode};

use bpl::{
    check_program,
    interpreter::{listing::Sections, value::policy::CoercionPolicy},
    list_tokens,
    run_program,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

/// What to do with the program.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Mode {
    /// Execute the program, stopping at the first error.
    #[default]
    Run,
    /// Report every syntax error and list the declared variables.
    Check,
    /// List the tokens of the program with a summary.
    Tokens,
}

/// bpl scans, checks and runs programs written in BPL, a small scripting
/// language with numbers, strings, `println` and `if`/`else`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bpl to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// What to do with the program.
    #[arg(short, long, value_enum, default_value_t)]
    mode: Mode,

    /// The operator table used when running.
    #[arg(short, long, value_enum, default_value_t)]
    policy: CoercionPolicy,

    /// Lists every token in `tokens` mode, not only the summary.
    #[arg(short, long)]
    verbose: bool,

    /// Lists the unique identifiers and literals in `tokens` mode.
    #[arg(long = "ids")]
    identifiers: bool,

    /// Lists every string literal in `tokens` mode.
    #[arg(long = "str")]
    strings: bool,

    /// Lists every numeric literal in `tokens` mode.
    #[arg(long = "num")]
    numbers: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the level, warnings only by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let success = match args.mode {
        Mode::Run => match run_program(&script, args.policy, io::stdout().lock()) {
            Ok(report) => report.is_success(),
            Err(e) => {
                eprintln!("{e}");
                false
            },
        },
        Mode::Check => {
            let report = check_program(&script);
            print!("{report}");
            report.is_success()
        },
        Mode::Tokens => {
            let sections = Sections { identifiers: args.identifiers,
                                      strings:     args.strings,
                                      numbers:     args.numbers, };
            let listing = list_tokens(&script).verbose(args.verbose).sections(sections);
            print!("{listing}");
            listing.error.is_none()
        },
    };

    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
