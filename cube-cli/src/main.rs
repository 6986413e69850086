//! Cubes CLI - Command-line interface for running the cube game and calibration puzzles

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import cube-solutions to link the solver plugins
use cube_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use cube_solver::{RegistryBuilder, SolverRegistry};
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!(
        capacities = %config.settings.capacities,
        error_policy = ?config.settings.error_policy,
        threads = config.thread_count,
        input_dir = %config.input_dir.display(),
        "resolved configuration"
    );

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.storage().len(), "registry built");

    let inputs = match (config.day_filter, &config.input_file) {
        (Some(day), Some(file)) => {
            InputStore::new(config.input_dir.clone()).with_file(day, file.clone())
        }
        _ => InputStore::new(config.input_dir.clone()),
    };

    let executor =
        Executor::new(registry, inputs, &config).map_err(|e| CliError::Executor(e.into()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs are reported per part as they come through
    let missing: Vec<_> = work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.day))
        .map(|w| executor.inputs().input_path(w.day))
        .collect();
    if !missing.is_empty() && !config.quiet {
        println!("Missing {} input file(s):", missing.len());
        for path in &missing {
            println!("  - {}", path.display());
        }
    }

    run_executor(executor, config.quiet)
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts
                .clone()
                .map(move |part| aggregator::ResultKey { day: w.day, part })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_record_failures(&results);
    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::Failed(failed)),
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
