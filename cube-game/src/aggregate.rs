//! Folding parsed records into the two running totals

use crate::capacity::CapacityTable;
use crate::error::{AggregateError, LineError};
use crate::parser::parse_game;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, trace};

/// What to do when a record fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first malformed record
    #[default]
    FailFast,
    /// Keep scanning so every malformed record is reported
    CollectAll,
}

/// The two aggregate outputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of the ids of games that fit the capacities
    pub valid_id_sum: u64,
    /// Sum of every game's power
    pub power_sum: u64,
}

impl Totals {
    fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            valid_id_sum: self.valid_id_sum.checked_add(other.valid_id_sum)?,
            power_sum: self.power_sum.checked_add(other.power_sum)?,
        })
    }
}

/// Everything the aggregator needs from one game
#[derive(Debug, Clone, Copy)]
struct GameSummary {
    id: u32,
    valid: bool,
    power: u64,
}

impl GameSummary {
    fn totals(&self) -> Totals {
        Totals {
            valid_id_sum: if self.valid { u64::from(self.id) } else { 0 },
            power_sum: self.power,
        }
    }
}

/// Outcome of one line: a summary or a failure
enum LineOutcome {
    Summary(GameSummary),
    Failed(LineError),
    Overflow,
}

/// Parse and evaluate one line; the game itself is dropped here.
/// `Ok(None)` means the game's power does not fit in `u64`.
fn summarize(
    line_number: usize,
    line: &str,
    capacities: &CapacityTable,
) -> Result<Option<GameSummary>, LineError> {
    let game = parse_game(line).map_err(|source| LineError {
        line_number,
        line: line.to_string(),
        source,
    })?;
    let valid = game.is_valid(capacities);
    let Some(power) = game.power() else {
        return Ok(None);
    };
    trace!(line_number, id = game.id, valid, power, "summarized game");
    Ok(Some(GameSummary {
        id: game.id,
        valid,
        power,
    }))
}

fn outcome(line_number: usize, line: &str, capacities: &CapacityTable) -> LineOutcome {
    match summarize(line_number, line, capacities) {
        Ok(Some(summary)) => LineOutcome::Summary(summary),
        Ok(None) => LineOutcome::Overflow,
        Err(e) => {
            debug!(line_number, error = %e.source, "record failed to parse");
            LineOutcome::Failed(e)
        }
    }
}

/// Sequential, fail-fast aggregation
///
/// # Example
///
/// ```
/// use cube_game::{aggregate, CapacityTable};
///
/// let lines = ["Game 1: 3 blue, 4 red", "Game 3: 20 red"];
/// let totals = aggregate(lines, &CapacityTable::default()).unwrap();
/// assert_eq!(totals.valid_id_sum, 1);
/// assert_eq!(totals.power_sum, 0);
/// ```
pub fn aggregate<I, S>(lines: I, capacities: &CapacityTable) -> Result<Totals, AggregateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_with(lines, capacities, ErrorPolicy::FailFast)
}

/// Sequential aggregation under the given error policy
///
/// A failed record never reaches the totals; any failure makes the whole
/// call return `Err`. Under `FailFast` the first malformed line or overflow
/// is reported, whichever comes first. Under `CollectAll` scanning goes on
/// past an overflow so every malformed line still reaches the caller inside
/// [`AggregateError::Overflow`].
pub fn aggregate_with<I, S>(
    lines: I,
    capacities: &CapacityTable,
    policy: ErrorPolicy,
) -> Result<Totals, AggregateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fold = Fold::new(policy);
    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        if !fold.push(line_number, outcome(line_number, line.as_ref(), capacities)) {
            break;
        }
    }
    fold.finish()
}

/// Parallel aggregation over an in-memory slice of lines
///
/// Parsing fans out across the rayon pool; the outcomes are then folded in
/// line order, so the result is exactly that of [`aggregate_with`],
/// including which error is reported and at which line.
pub fn aggregate_parallel<S>(
    lines: &[S],
    capacities: &CapacityTable,
    policy: ErrorPolicy,
) -> Result<Totals, AggregateError>
where
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<LineOutcome> = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| outcome(index + 1, line.as_ref(), capacities))
        .collect();

    let mut fold = Fold::new(policy);
    for (index, outcome) in outcomes.into_iter().enumerate() {
        if !fold.push(index + 1, outcome) {
            break;
        }
    }
    fold.finish()
}

/// Running state of an aggregation, fed one line outcome at a time
struct Fold {
    policy: ErrorPolicy,
    totals: Totals,
    failures: Vec<LineError>,
    overflow_at: Option<usize>,
}

impl Fold {
    fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            totals: Totals::default(),
            failures: Vec::new(),
            overflow_at: None,
        }
    }

    /// Returns `false` once there is nothing left to learn from later lines
    fn push(&mut self, line_number: usize, outcome: LineOutcome) -> bool {
        match outcome {
            LineOutcome::Summary(summary) if self.overflow_at.is_none() => {
                match self.totals.checked_add(summary.totals()) {
                    Some(totals) => self.totals = totals,
                    None => self.overflow_at = Some(line_number),
                }
            }
            LineOutcome::Summary(_) => {}
            LineOutcome::Overflow => {
                self.overflow_at.get_or_insert(line_number);
            }
            LineOutcome::Failed(e) => self.failures.push(e),
        }
        match self.policy {
            ErrorPolicy::FailFast => self.failures.is_empty() && self.overflow_at.is_none(),
            ErrorPolicy::CollectAll => true,
        }
    }

    fn finish(self) -> Result<Totals, AggregateError> {
        if let Some(line_number) = self.overflow_at {
            return Err(AggregateError::Overflow {
                line_number,
                failures: self.failures,
            });
        }
        if let Some(err) = AggregateError::from_failures(self.failures) {
            return Err(err);
        }
        debug!(
            valid_id_sum = self.totals.valid_id_sum,
            power_sum = self.totals.power_sum,
            "aggregation finished"
        );
        Ok(self.totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameParseError;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn test_sample_totals() {
        let totals = aggregate(SAMPLE.lines(), &CapacityTable::default()).unwrap();
        assert_eq!(
            totals,
            Totals {
                valid_id_sum: 8,
                power_sum: 2286
            }
        );
    }

    #[test]
    fn test_capacities_change_validity_only() {
        let loose = aggregate(SAMPLE.lines(), &CapacityTable::new(100, 100, 100)).unwrap();
        assert_eq!(loose.valid_id_sum, 15);
        assert_eq!(loose.power_sum, 2286);
    }

    #[test]
    fn test_absent_color_gives_zero_power() {
        let totals = aggregate(["Game 1: 3 blue, 4 red"], &CapacityTable::default()).unwrap();
        assert_eq!(totals.valid_id_sum, 1);
        assert_eq!(totals.power_sum, 0);
    }

    #[test]
    fn test_invalid_game_excluded() {
        let totals = aggregate(["Game 3: 20 red"], &CapacityTable::default()).unwrap();
        assert_eq!(totals.valid_id_sum, 0);
    }

    #[test]
    fn test_fail_fast_reports_first_line() {
        let lines = ["Game 1: 1 red", "Game 2: 1 pink", "Game x: 1 red"];
        let err = aggregate(lines, &CapacityTable::default()).unwrap_err();
        let AggregateError::Line(e) = &err else {
            panic!("expected a single line error, got {err:?}");
        };
        assert_eq!(e.line_number, 2);
        assert_eq!(e.line, "Game 2: 1 pink");
        assert_eq!(e.source, GameParseError::UnknownColor { name: "pink".into() });
    }

    #[test]
    fn test_collect_all_reports_every_line() {
        let lines = ["Game 1: 1 red", "Game 2: 1 pink", "", "Game 4: 2 blue"];
        let err = aggregate_with(lines, &CapacityTable::default(), ErrorPolicy::CollectAll)
            .unwrap_err();
        let numbers: Vec<_> = err.line_errors().iter().map(|e| e.line_number).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<&str> = SAMPLE.lines().collect();
        let caps = CapacityTable::default();
        assert_eq!(
            aggregate_parallel(&lines, &caps, ErrorPolicy::FailFast),
            aggregate(lines.iter(), &caps)
        );
    }

    #[test]
    fn test_parallel_fail_fast_reports_earliest() {
        let lines = ["Game 1: 1 red", "Game 2: x red", "Game 3 1 red", "Game 4: 1 red"];
        let err = aggregate_parallel(&lines, &CapacityTable::default(), ErrorPolicy::FailFast)
            .unwrap_err();
        assert!(matches!(err, AggregateError::Line(ref e) if e.line_number == 2));
    }

    const HUGE_POWER: &str = "Game 9: 4294967295 red, 4294967295 green, 4294967295 blue";

    fn both(lines: &[&str], policy: ErrorPolicy) -> Result<Totals, AggregateError> {
        let caps = CapacityTable::default();
        let sequential = aggregate_with(lines, &caps, policy);
        assert_eq!(aggregate_parallel(lines, &caps, policy), sequential);
        sequential
    }

    #[test]
    fn test_power_sum_overflow() {
        // u32 ids cannot overflow a u64 sum in practice, so exercise the power sum
        let big = "Game 1: 4294967295 red, 4294967295 green, 1 blue";
        let lines = vec![big; 8];
        for policy in [ErrorPolicy::FailFast, ErrorPolicy::CollectAll] {
            assert_eq!(
                both(&lines, policy),
                Err(AggregateError::Overflow {
                    line_number: 2,
                    failures: vec![]
                })
            );
        }
    }

    #[test]
    fn test_fail_fast_reports_earlier_of_failure_and_overflow() {
        let err = both(&["Game 1: 1 pink", HUGE_POWER], ErrorPolicy::FailFast).unwrap_err();
        assert!(matches!(err, AggregateError::Line(ref e) if e.line_number == 1));

        let err = both(&[HUGE_POWER, "Game 2: 1 pink"], ErrorPolicy::FailFast).unwrap_err();
        assert_eq!(
            err,
            AggregateError::Overflow {
                line_number: 1,
                failures: vec![]
            }
        );
    }

    #[test]
    fn test_collect_all_keeps_failures_around_overflow() {
        let lines = ["Game 1: 1 pink", HUGE_POWER, "Game 3: 1 red", "Game 4 2 red"];
        let err = both(&lines, ErrorPolicy::CollectAll).unwrap_err();
        assert!(matches!(err, AggregateError::Overflow { line_number: 2, .. }));
        let numbers: Vec<_> = err.line_errors().iter().map(|e| e.line_number).collect();
        assert_eq!(numbers, vec![1, 4]);
    }
}
