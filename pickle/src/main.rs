//! Pickle Interpreter
//!
//! Evaluates the built-in reference program and reports the final environment.

use clap::Parser;
use pickle::{Environment, Evaluator, demo};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about = "Evaluator for the pickle intermediate representation")]
struct Args {
    /// Print the program before evaluating it
    #[arg(long)]
    dump_program: bool,

    /// Log the environment produced by every operation
    #[arg(long)]
    trace: bool,

    /// Leave out the trailing operation that reads an unbound name
    #[arg(long)]
    no_error_op: bool,
}

fn main() -> ExitCode {
    let log_level = std::env::var("PICKLE_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let args = Args::parse();
    let program = demo::reference_program(!args.no_error_op);

    if args.dump_program {
        print!("{program}");
    }

    let run = Evaluator::new()
        .with_trace(args.trace)
        .run_with_history(&program, Environment::new());

    println!("{}", run.last_good());

    match (run.failed_at(), run.error()) {
        (Some(location), Some(err)) => {
            error!("Evaluation failed at {}: {}", location, err);
            ExitCode::FAILURE
        }
        _ => {
            info!("Evaluation completed after {} operation(s)", run.steps());
            ExitCode::SUCCESS
        }
    }
}
