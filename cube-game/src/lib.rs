//! Cube game records
//!
//! Parses lines such as `Game 4: 1 red, 3 green, 6 blue; 2 blue, 1 red`,
//! checks each game against a per-color [`CapacityTable`], and folds a
//! sequence of lines into two totals: the sum of the ids of games that fit
//! the capacities, and the sum of every game's power (the product of the
//! largest count of each color it shows).
//!
//! # Quick Example
//!
//! ```
//! use cube_game::{aggregate, CapacityTable, Totals};
//!
//! let input = "\
//! Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
//! Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red";
//!
//! let totals = aggregate(input.lines(), &CapacityTable::default()).unwrap();
//! assert_eq!(totals, Totals { valid_id_sum: 1, power_sum: 48 + 1560 });
//! ```
//!
//! The crate also carries the [`calibration`] job, which shares the same
//! lines-in, number-out shape.

mod aggregate;
pub mod calibration;
mod capacity;
mod color;
mod error;
mod game;
mod parser;

pub use aggregate::{ErrorPolicy, Totals, aggregate, aggregate_parallel, aggregate_with};
pub use calibration::{Lexer, calibration_sum, calibration_value};
pub use capacity::CapacityTable;
pub use color::{Color, ColorCounts};
pub use error::{AggregateError, CapacityError, GameParseError, LineError};
pub use game::{Cube, DrawSet, Game};
pub use parser::parse_game;
