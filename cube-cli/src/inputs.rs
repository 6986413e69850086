//! Puzzle input lookup on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{dir}/day{day:02}.txt`. A single explicit file can
/// stand in for one day's input.
pub struct InputStore {
    dir: PathBuf,
    explicit: Option<(u8, PathBuf)>,
}

impl InputStore {
    /// Create a store reading from `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            explicit: None,
        }
    }

    /// Read `day`'s input from `path` instead of the directory
    pub fn with_file(mut self, day: u8, path: PathBuf) -> Self {
        self.explicit = Some((day, path));
        self
    }

    /// Get the input path for a specific day
    pub fn input_path(&self, day: u8) -> PathBuf {
        match &self.explicit {
            Some((d, path)) if *d == day => path.clone(),
            _ => self.dir.join(format!("day{:02}.txt", day)),
        }
    }

    /// Check if input exists
    pub fn contains(&self, day: u8) -> bool {
        self.input_path(day).is_file()
    }

    /// Read the input for a day
    pub fn get(&self, day: u8) -> Result<String, InputError> {
        let path = self.input_path(day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}
