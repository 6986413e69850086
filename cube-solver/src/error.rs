//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// One or more game records could not be parsed or folded
    #[error("Invalid records: {0}")]
    Records(#[from] cube_game::AggregateError),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
}

/// Error type for solver operations
#[derive(Debug, Clone, Error)]
pub enum SolverError {
    /// No solver is registered for the given day
    #[error("Solver not found for day {0}")]
    NotFound(u8),
    /// The day's puzzle input could not be read
    #[error("Input for day {day} unavailable: {reason}")]
    InputUnavailable { day: u8, reason: String },
    /// The day is outside 1..=25
    #[error("Day {0} is out of range")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// The day is outside 1..=25
    #[error("Day {0} is out of range")]
    InvalidDay(u8),
}
