//! Puzzle Solver Library
//!
//! A small, type-safe framework for running line-oriented puzzles. Each
//! puzzle is a solver with its own input parsing and one or more parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - Run settings (cube capacities, error policy, parallelism) passed to every parser
//! - A registry for looking solvers up by day
//! - Timed, type-erased solver instances
//!
//! # Quick Example
//!
//! ```
//! use cube_solver::{ParseError, PuzzleParser, RegistryBuilder, RunSettings, SolveError, Solver};
//!
//! pub struct Sum;
//!
//! impl PuzzleParser for Sum {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<Vec<i32>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Sum {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Vec<i32>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register_solver::<Sum>(1, "sum").unwrap().build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3", &RunSettings::default()).unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolver)]` to register a solver automatically:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[puzzle(day = 2, name = "cube-conundrum", tags = ["parsing"])]
//! struct CubeConundrum;
//! ```
//!
//! [`RegistryBuilder::register_all_plugins`] then picks it up.

mod error;
mod instance;
mod registry;
mod settings;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use registry::{
    FactoryInfo, MAX_DAY, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, SolverStorage,
};
pub use settings::RunSettings;
pub use solver::{PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use cube_solver_macros::AutoRegisterSolver;
