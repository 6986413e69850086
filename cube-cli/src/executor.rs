//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use cube_solver::{DynSolver, RunSettings, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// None when the input never made it through the parser
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    settings: RunSettings,
    parallelize_by: ParallelizeBy,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(
        registry: SolverRegistry,
        inputs: InputStore,
        config: &Config,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs,
                settings: config.settings,
                parallelize_by: config.parallelize_by,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Input store the executor reads from
    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;
        debug!(
            work_items = work_items.len(),
            parallelize_by = ?cfg.parallelize_by,
            "executing"
        );

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_work_item(work, &tx, cfg).err())
                .reduce(ArcExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .map(|work| run_work_item(&work, &tx, cfg).err())
                    .reduce_with(|err1, err2| match err2 {
                        Some(e) => Some(ArcExecutorError::combine_opt(err1, e)),
                        None => err1,
                    })
                    .flatten()
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Read the input and run every part of one work item
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match cfg.inputs.get(work.day) {
        Ok(input) => input,
        Err(source) => {
            warn!(day = work.day, error = %source, "skipping day");
            let error = SolverError::InputUnavailable {
                day: work.day,
                reason: source.to_string(),
            };
            for part in work.parts.clone() {
                send(tx, failed_result(work.day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, cfg)
    } else {
        run_parts_sequential(work, &input, tx, cfg)
    }
}

/// Parse once, then solve each part in order on the same instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    match cfg.registry.create_solver(work.day, input, &cfg.settings) {
        Ok(mut solver) => {
            for part in work.parts.clone() {
                send(tx, solve_part(work.day, part, &mut *solver))?;
            }
        }
        Err(error) => {
            for part in work.parts.clone() {
                send(tx, failed_result(work.day, part, error.clone()))?;
            }
        }
    }
    Ok(())
}

/// Solve parts concurrently, each on its own parsed instance, emitting in
/// part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let day = work.day;
    // collect keeps part order
    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match cfg.registry.create_solver(day, input, &cfg.settings) {
            Ok(mut solver) => solve_part(day, part, &mut *solver),
            Err(error) => failed_result(day, part, error),
        })
        .collect();

    results
        .into_iter()
        .try_for_each(|result| send(tx, result))
}

/// Solve a single part with timing
fn solve_part(day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => SolverResult {
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

/// Result for a part that never reached its solver
fn failed_result(day: u8, part: u8, error: SolverError) -> SolverResult {
    debug!(day, part, %error, "part failed before solving");
    SolverResult {
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}
