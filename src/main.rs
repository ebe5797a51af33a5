//! Crossing demo CLI
//!
//! Usage:
//!   crossing                    # one cycle, attention episode, one cycle
//!   crossing --cycles 3         # three cycles before and after attention
//!   crossing --json             # print each readout as a JSON array
//!   crossing -v                 # debug logs on stderr

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crossing::{LightError, LightGroup};

/// Advances per cycle: emit, then advance and emit three times.
const ADVANCES_PER_CYCLE: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "crossing",
    version,
    about = "Drive a four-light \"+\"-crossing through its signal cycle",
    long_about = "Runs the crossing demo script: full cycles, an attention\n\
                  (yellow blinking) episode, then full cycles again.\n\n\
                  Lanes:\n  \
                  1, 2 - wired red\n  \
                  3, 4 - wired green"
)]
struct Args {
    /// Cycles to run before and after the attention episode
    #[arg(long, default_value_t = 1)]
    cycles: usize,

    /// Print each readout as a JSON array of signals
    #[arg(long)]
    json: bool,

    /// Log every transition to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "crossing=debug"
    } else {
        "crossing=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), LightError> {
    let mut group = LightGroup::new();
    tracing::info!(lights = group.len(), cycles = args.cycles, "crossing ready");

    for _ in 0..args.cycles {
        run_cycle(&mut group, args)?;
    }

    group.attention_on_all();
    print_signals(&group, args);
    group.attention_off_all();

    for _ in 0..args.cycles {
        run_cycle(&mut group, args)?;
    }

    Ok(())
}

fn run_cycle(group: &mut LightGroup, args: &Args) -> Result<(), LightError> {
    print_signals(group, args);
    for _ in 0..ADVANCES_PER_CYCLE {
        group.advance_all()?;
        print_signals(group, args);
    }
    Ok(())
}

fn print_signals(group: &LightGroup, args: &Args) {
    let signals = group.emit_all();
    if args.json {
        match serde_json::to_string(&signals) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::warn!(error = %err, "failed to encode signals"),
        }
    } else {
        for signal in &signals {
            println!("{signal}");
        }
    }
}
