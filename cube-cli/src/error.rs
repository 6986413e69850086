//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read or parsed
    #[error("Config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: ConfigFileError,
    },

    /// Invalid capacity overrides
    #[error("Invalid capacities: {0}")]
    Capacity(#[from] cube_game::CapacityError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] cube_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// One or more solvers failed; details were already printed
    #[error("{0} solver result(s) failed")]
    Failed(usize),
}

/// Reasons a config file is unusable
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one, flattening nested `Multiple`s
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for the day
    #[error("missing input file {}", .0.display())]
    Missing(PathBuf),

    /// IO error
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
