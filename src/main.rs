use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use reckon::{evaluate, to_rpn, util::num::format_result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions over `+ - * /` and parentheses.
///
/// Each expression is printed back as a history line, `expr = result`, or
/// `expr = Error` when it cannot be evaluated.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix (Reverse Polish) form instead of the value.
    #[arg(short, long)]
    postfix: bool,

    /// Logs each evaluation at debug level. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or the file path with `--file`. Expressions are read
    /// from standard input when omitted.
    contents: Option<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().compact()
                             .with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .without_time()
                             .init();
}

/// Evaluates one line and prints its history entry. Returns whether it
/// succeeded.
fn report(line: &str, postfix: bool) -> bool {
    let outcome = if postfix {
        to_rpn(line)
    } else {
        evaluate(line).map(format_result)
    };

    match outcome {
        Ok(text) => {
            println!("{line} = {text}");
            true
        },
        Err(e) => {
            warn!("{line}: {e}");
            println!("{line} = Error");
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let lines: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(text) => text.lines().map(str::to_owned).collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        },
        (Some(expr), false) => vec![expr.clone()],
        (None, _) => io::stdin().lock().lines().map_while(Result::ok).collect(),
    };

    let mut all_ok = true;
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        all_ok &= report(line, args.postfix);
    }

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
