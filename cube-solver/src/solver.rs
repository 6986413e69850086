//! Puzzle traits: one parse per input, any number of parts over the result

use crate::error::{ParseError, SolveError};
use crate::settings::RunSettings;

/// Turns raw puzzle input into the data every part works on
///
/// `RunSettings` carries the cube capacities, the record error policy and
/// whether lines may be folded in parallel; parsers that don't care ignore it.
///
/// # Example
///
/// ```
/// use cube_game::{Game, parse_game};
/// use cube_solver::{ParseError, PuzzleParser, RunSettings};
///
/// struct Games;
///
/// impl PuzzleParser for Games {
///     type SharedData<'a> = Vec<Game>;
///
///     fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<Vec<Game>, ParseError> {
///         input
///             .lines()
///             .map(|line| parse_game(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
///             .collect()
///     }
/// }
///
/// let games = Games::parse("Game 1: 2 red\nGame 2: 1 blue", &RunSettings::default()).unwrap();
/// assert_eq!(games.len(), 2);
/// ```
pub trait PuzzleParser {
    /// Parsed input plus anything the parts want to cache between them
    ///
    /// May borrow from the input (`Vec<&'a str>`) or own it outright.
    type SharedData<'a>: 'a;

    fn parse<'a>(
        input: &'a str,
        settings: &RunSettings,
    ) -> Result<Self::SharedData<'a>, ParseError>;
}

/// A puzzle with `PARTS` answers computed from one parsed input
///
/// # Example
///
/// ```
/// use cube_game::{Game, parse_game};
/// use cube_solver::{ParseError, PuzzleParser, RunSettings, SolveError, Solver, SolverExt};
///
/// struct HighestId;
///
/// impl PuzzleParser for HighestId {
///     type SharedData<'a> = Vec<Game>;
///
///     fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<Vec<Game>, ParseError> {
///         input
///             .lines()
///             .map(|line| parse_game(line).map_err(|e| ParseError::Other(e.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for HighestId {
///     const PARTS: u8 = 1;
///
///     fn solve_part(games: &mut Vec<Game>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(games.iter().map(|g| g.id).max().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut games = HighestId::parse("Game 4: 1 red\nGame 9: 2 green", &RunSettings::default()).unwrap();
/// assert_eq!(HighestId::solve_part_checked_range(&mut games, 1).unwrap(), "9");
/// assert!(HighestId::solve_part_checked_range(&mut games, 2).is_err());
/// ```
pub trait Solver: PuzzleParser {
    const PARTS: u8;

    /// Answer for `part`; parts may mutate the shared data to pass results on
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Part-number guard over [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// `PartOutOfRange` for part 0 or anything above `PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            1.. if part <= Self::PARTS => Self::solve_part(shared, part),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
