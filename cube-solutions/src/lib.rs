//! Puzzle solutions with automatic registration
//!
//! Each puzzle derives `AutoRegisterSolver`, so linking this crate is enough
//! for `RegistryBuilder::register_all_plugins` to find it.

pub mod puzzles;
