//! Configuration resolution from config file and CLI args
//!
//! Precedence: built-in defaults, then the TOML config file, then flags.

use crate::cli::{Args, ParallelizeBy};
use crate::error::{CliError, ConfigFileError};
use cube_game::{CapacityTable, ErrorPolicy};
use cube_solver::RunSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_INPUT_DIR: &str = "~/.cache/cubes";

/// On-disk configuration
///
/// ```toml
/// error_policy = "collect-all"
/// parallel_lines = true
/// threads = 4
/// input_dir = "~/puzzles"
///
/// [capacities]
/// red = 12
/// green = 13
/// blue = 14
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub capacities: Option<CapacityTable>,
    pub error_policy: Option<ErrorPolicy>,
    pub parallel_lines: Option<bool>,
    pub threads: Option<usize>,
    pub input_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let wrap = |source: ConfigFileError| CliError::ConfigFile {
            path: path.to_path_buf(),
            source,
        };
        let content = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        toml::from_str(&content).map_err(|e| wrap(e.into()))
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding `dayNN.txt` inputs
    pub input_dir: PathBuf,
    /// Explicit input file for the selected day
    pub input_file: Option<PathBuf>,
    /// Settings handed to every parser
    pub settings: RunSettings,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, reading the config file if there is one
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(&expand_tilde(path))?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    debug!(path = %path.display(), "using default config file");
                    FileConfig::load(&path)?
                }
                None => FileConfig::default(),
            },
        };
        Self::resolve(args, file)
    }

    /// Merge a loaded config file with CLI args
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self, CliError> {
        let mut capacities = file.capacities.unwrap_or_default();
        if let Some(overrides) = &args.capacities {
            capacities.apply_overrides(overrides)?;
        }

        let settings = RunSettings {
            capacities,
            error_policy: args
                .error_policy
                .map(Into::into)
                .or(file.error_policy)
                .unwrap_or_default(),
            parallel: args.parallel_lines || file.parallel_lines.unwrap_or(false),
        };

        let thread_count = args.threads.or(file.threads).unwrap_or_else(num_cpus);
        if thread_count == 0 {
            return Err(CliError::Config("thread count must be at least 1".to_string()));
        }

        let input_dir = args
            .input_dir
            .or(file.input_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        Ok(Config {
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            settings,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// `~/.config/cubes/config.toml` (platform equivalent)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cubes").join("config.toml"))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cubes").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Config::resolve(args(&[]), FileConfig::default()).unwrap();
        assert_eq!(config.settings, RunSettings::default());
        assert!(config.thread_count >= 1);
        assert!(config.input_dir.ends_with(".cache/cubes"));
    }

    #[test]
    fn test_flags_override_file() {
        let file: FileConfig = toml::from_str(
            r#"
            error_policy = "collect-all"
            threads = 3
            [capacities]
            red = 1
            green = 2
            "#,
        )
        .unwrap();
        let config = Config::resolve(
            args(&["--capacities", "green=9", "--error-policy", "fail-fast"]),
            file,
        )
        .unwrap();
        assert_eq!(config.settings.capacities, CapacityTable::new(1, 9, 14));
        assert_eq!(config.settings.error_policy, ErrorPolicy::FailFast);
        assert_eq!(config.thread_count, 3);
    }

    #[test]
    fn test_file_error_policy_applies() {
        let file: FileConfig = toml::from_str(r#"error_policy = "collect-all""#).unwrap();
        let config = Config::resolve(args(&[]), file).unwrap();
        assert_eq!(config.settings.error_policy, ErrorPolicy::CollectAll);
    }

    #[test]
    fn test_bad_capacity_override() {
        let result = Config::resolve(args(&["--capacities", "red=lots"]), FileConfig::default());
        assert!(matches!(result, Err(CliError::Capacity(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = Config::resolve(args(&["--threads", "0"]), FileConfig::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_file_and_unknown_key() {
        let mut good = NamedTempFile::new().unwrap();
        writeln!(good, "parallel_lines = true\n[capacities]\nblue = 40").unwrap();
        let file = FileConfig::load(good.path()).unwrap();
        assert_eq!(file.parallel_lines, Some(true));
        assert_eq!(file.capacities, Some(CapacityTable::new(12, 13, 40)));

        let mut bad = NamedTempFile::new().unwrap();
        writeln!(bad, "colour = 3").unwrap();
        assert!(matches!(
            FileConfig::load(bad.path()),
            Err(CliError::ConfigFile {
                source: ConfigFileError::Toml(_),
                ..
            })
        ));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
        assert_eq!(expand_tilde(Path::new("rel/x")), PathBuf::from("rel/x"));
    }
}
