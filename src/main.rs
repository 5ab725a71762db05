use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

use calcr::evaluate;

/// calcr is an interactive calculator for integer arithmetic expressions
/// with the usual precedence rules.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    #[arg(short, long)]
    eval: Option<String>,

    /// Keep the prompt running after a line fails to evaluate.
    #[arg(short, long)]
    keep_going: bool,

    /// Echo every token the lexer produces to the diagnostic stream.
    #[arg(short, long)]
    trace_tokens: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.trace_tokens {
        EnvFilter::new("calcr=trace")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    if let Some(expression) = args.eval {
        match evaluate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = repl(args.keep_going) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Reads lines from the prompt until end of input, evaluating each one.
///
/// An evaluation error ends the session unless `keep_going` is set.
fn repl(keep_going: bool) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(&line).ok();

                match evaluate(&line) {
                    Ok(result) => println!("{result}"),
                    Err(e) => {
                        eprintln!("{e}");
                        if !keep_going {
                            break;
                        }
                    },
                }
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
