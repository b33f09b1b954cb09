//! Sway simulator CLI
//!
//! Runs one simulation and exits with 0 when it converged, 2 when it hit
//! the step cap, and 1 on any error.

mod args;

use std::process::ExitCode;

use clap::Parser;
use sway_engine::{RunOutcome, SimError, Simulation, TracingObserver};
use sway_snapshot::{CsvDirSink, NullSink, SnapshotSink};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;

fn run(args: &Args) -> Result<RunOutcome, SimError> {
    let config = args.to_config();
    let sink: Box<dyn SnapshotSink> = match &args.out {
        Some(dir) => Box::new(CsvDirSink::new(dir)?),
        None => Box::new(NullSink),
    };

    info!(
        side = config.side,
        sources = config.sources.len(),
        coverage = config.coverage,
        seed = config.seed,
        "starting run"
    );
    let sim = Simulation::with_hooks(config, TracingObserver, sink)?;
    info!(strategy = sim.strategy_name(), "initialized");
    sim.run()
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to set tracing subscriber");
    }

    match run(&args) {
        Ok(RunOutcome::Converged { steps, lattice }) => {
            info!(steps, sources = lattice.count_sources(), "converged");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::DidNotConverge { steps, lattice }) => {
            warn!(
                steps,
                fraction = lattice.source_fraction(),
                "step cap reached before the stop fraction"
            );
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}
