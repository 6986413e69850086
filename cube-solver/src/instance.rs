//! Timed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::settings::RunSettings;
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval of one parse or solve step (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `f`, recording when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Span) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Span { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// One answered part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Parsed input for one day, ready to answer its parts
pub struct SolverInstance<'a, S: Solver> {
    day: u8,
    shared: S::SharedData<'a>,
    parse: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(day: u8, input: &'a str, settings: &RunSettings) -> Result<Self, ParseError> {
        let (shared, parse) = Span::measure(|| S::parse(input, settings));
        Ok(Self {
            day,
            shared: shared?,
            parse,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// # Example
///
/// ```no_run
/// use cube_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("day {} part {part}: {} in {}", solver.day(), result.answer, result.duration());
///     }
///     println!("parsed in {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When the input was parsed
    fn parse_span(&self) -> Span;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parse
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PuzzleParser;

    struct Lines;

    impl PuzzleParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<Vec<&'a str>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::InvalidFormat("no lines".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 1;

        fn solve_part(lines: &mut Vec<&str>, _: u8) -> Result<String, SolveError> {
            Ok(lines.len().to_string())
        }
    }

    #[test]
    fn test_span_is_ordered() {
        let (value, span) = Span::measure(|| 7);
        assert_eq!(value, 7);
        assert!(span.end >= span.start);
        assert!(span.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_instance_solves_and_reports_metadata() {
        let mut instance =
            SolverInstance::<Lines>::new(2, "a\nb\nc", &RunSettings::default()).unwrap();
        assert_eq!(instance.day(), 2);
        assert_eq!(instance.parts(), 1);
        assert_eq!(instance.solve(1).unwrap().answer, "3");
        assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(SolverInstance::<Lines>::new(1, "", &RunSettings::default()).is_err());
    }
}
