use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use abacus::{
    Calculator, Key,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NESTING, Limits},
    error::{DIVISION_BY_ZERO_TEXT, GENERIC_ERROR_TEXT},
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// abacus evaluates arithmetic expressions safely: only numbers, parentheses
/// and `+ - * / % ** //` are accepted.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What to do with each expression.
    #[arg(short, long, value_enum, default_value_t = Action::Equals)]
    action: Action,

    /// Treat EXPRESSION as a path and evaluate each non-empty line of the
    /// file.
    #[arg(short, long, requires = "expression")]
    file: bool,

    /// Maximum nesting of parentheses, prefix operators and powers.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Maximum depth of an expression tree.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The expression to evaluate. Reads one expression per line from stdin
    /// when omitted.
    expression: Option<String>,
}

/// The calculator key applied after entering an expression.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Evaluate the expression.
    Equals,
    /// Evaluate the expression and negate the result.
    Negate,
    /// Evaluate the expression and divide the result by 100.
    Percent,
}

impl From<Action> for Key {
    fn from(action: Action) -> Self {
        match action {
            Action::Equals => Self::Equals,
            Action::Negate => Self::ToggleSign,
            Action::Percent => Self::Percent,
        }
    }
}

/// Evaluates one line and prints the display text. Returns `false` if the
/// display shows an error.
fn run_line(line: &str, action: Action, limits: Limits) -> bool {
    let mut calculator = Calculator::with_limits(limits);
    calculator.set_display(line.trim());
    calculator.press(action.into());

    let display = calculator.display();
    println!("{display}");
    !is_error_text(display)
}

fn is_error_text(display: &str) -> bool {
    display == DIVISION_BY_ZERO_TEXT || display == GENERIC_ERROR_TEXT
}

/// Reads every line of `reader`, failing on the first unreadable line
/// instead of stopping early.
fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Collects the expressions to evaluate, or a message saying why they could
/// not be read.
fn read_input(args: &Args) -> Result<Vec<String>, String> {
    match (&args.expression, args.file) {
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) => Err(format!("Failed to read the input file '{path}': {e}")),
        },
        (Some(expression), false) => Ok(vec![expression.clone()]),
        (None, _) => match read_lines(io::stdin().lock()) {
            Ok(lines) => Ok(lines),
            Err(e) => Err(format!("Failed to read standard input: {e}")),
        },
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let limits = Limits { max_nesting: args.max_nesting,
                          max_depth:   args.max_depth, };

    let lines = match read_input(&args) {
        Ok(lines) => lines,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    let mut ok = true;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        tracing::debug!(expression = %line, action = ?args.action, "evaluating");
        ok &= run_line(line, args.action, limits);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
