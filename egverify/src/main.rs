#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! `egverify`: verifies a published ElectionGuard election artifact against
//! the ElectionGuard Design Specification v2.1.0 and reports which stage, if
//! any, first fails.

mod clargs;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::{filter_fn, LevelFilter};
use tracing_subscriber::prelude::*;

use clargs::Args;
use eg::engine::Orchestrator;

fn init_tracing(verbose: bool, no_warn: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false).without_time();
    let warn_filter = filter_fn(move |metadata| !(no_warn && *metadata.level() == tracing::Level::WARN));

    tracing_subscriber::registry()
        .with(level)
        .with(warn_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose, args.no_warn);

    let config = args.to_loader_config();
    let artifact = match eg::loader::load(&config) {
        Ok(artifact) => artifact,
        Err(err) => {
            eprintln!("failed to load artifact: {err}");
            return ExitCode::FAILURE;
        }
    };

    let orchestrator = Orchestrator::new();
    let verdict = orchestrator.run(&artifact);

    if args.verbose {
        for stage in &verdict.stages {
            let status = if stage.valid { "PASS" } else { "FAIL" };
            println!("[{status}] {}", stage.title);
            for label in &stage.failed_labels {
                println!("    failed: {label}");
            }
        }
    }

    if verdict.cancelled {
        println!("Election verification cancelled.");
        return ExitCode::FAILURE;
    }

    if verdict.valid {
        println!("Election valid.");
        ExitCode::SUCCESS
    } else {
        println!("Election invalid.");
        ExitCode::FAILURE
    }
}
