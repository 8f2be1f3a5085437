// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hashcost::clock::MonotonicClock;
use hashcost::cost::CostLevel;
use hashcost::hasher::BcryptHasher;
use hashcost::sweep::{Sweep, SweepConfig};
use hashcost_cli::error::CliError;
use hashcost_cli::password::resolve_password;
use hashcost_cli::progress::Spinner;
use hashcost_cli::report::{write_banner, write_json_report, write_report, BenchmarkSettings};
use rand::rngs::OsRng;
use std::io::{IsTerminal, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone, Debug)]
#[command(name = "bcrypt-bench")]
#[command(about = "Measure how long bcrypt takes over a range of cost values", long_about = None)]
struct Arguments {
    /// Starting cost value.
    #[clap(long, default_value_t = 10)]
    start: u32,

    /// Ending cost value.
    #[clap(long, default_value_t = 16)]
    end: u32,

    /// Password to hash.
    #[clap(long, default_value = "correct-horse-battery-staple")]
    password: String,

    /// Generate a random password of the given length (overrides --password).
    #[clap(long, default_value_t = 0)]
    generate: usize,

    /// Number of iterations per cost level.
    #[clap(long, default_value_t = 3)]
    iterations: usize,

    /// Print the results as JSON instead of tables.
    #[clap(long)]
    json: bool,

    /// Log filter, e.g. "info" or "hashcost=debug". Logs go to stderr.
    #[clap(long, default_value = "warn")]
    log: String,
}

fn main() {
    let args = Arguments::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let show_progress = !args.json && std::io::stderr().is_terminal();
    let stdout = std::io::stdout();
    match execute(&args, &mut stdout.lock(), show_progress) {
        Ok(()) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Both ends of the range must be costs bcrypt accepts. The order of the range and the iteration
/// count are checked by [SweepConfig::validate].
fn sweep_range(args: &Arguments) -> Result<(CostLevel, CostLevel), CliError> {
    let start_cost = CostLevel::new(args.start)?;
    let end_cost = CostLevel::new(args.end)?;
    Ok((start_cost, end_cost))
}

fn execute<W: Write>(args: &Arguments, out: &mut W, show_progress: bool) -> Result<(), CliError> {
    let (start_cost, end_cost) = sweep_range(args)?;
    let (password, password_source) = resolve_password(&mut OsRng, &args.password, args.generate);

    let config = SweepConfig {
        start_cost,
        end_cost,
        iterations: args.iterations,
        payload: &password,
    };
    config.validate()?;
    info!(
        "starting bcrypt cost sweep over costs {}..={}, {} iterations each, password length {}",
        start_cost,
        end_cost,
        args.iterations,
        password.len()
    );

    let settings = BenchmarkSettings {
        start_cost,
        end_cost,
        iterations: args.iterations,
        password_length: password.len(),
        password_source,
    };

    if !args.json {
        write_banner(out)?;
        out.flush()?;
    }

    let spinner = show_progress.then(|| Spinner::new(std::io::stderr()));
    let outcome = Sweep::new(BcryptHasher, MonotonicClock::new())
        .with_observer(spinner)
        .run(&config);

    let (summaries, error) = match outcome {
        Ok(summaries) => (summaries, None),
        Err(mut aborted) => (std::mem::take(&mut aborted.completed), Some(aborted)),
    };

    if args.json {
        write_json_report(
            out,
            &settings,
            &summaries,
            error.as_ref().map(ToString::to_string),
        )?;
    } else {
        write_report(out, &settings, &summaries)?;
    }

    match error {
        Some(aborted) => Err(aborted.into()),
        None => Ok(()),
    }
}
