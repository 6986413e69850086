use cube_game::{Totals, aggregate_parallel, aggregate_with};
use cube_solver::{AutoRegisterSolver, ParseError, PuzzleParser, RunSettings, SolveError, Solver};
use tracing::info;

/// Cube game records: part 1 sums the ids of games that fit the configured
/// capacities, part 2 sums the power of every game
///
/// Records are parsed and folded in one pass; no game outlives its line.
#[derive(AutoRegisterSolver)]
#[puzzle(day = 2, name = "cube-conundrum", tags = ["parsing", "cubes"])]
pub struct CubeConundrum;

impl PuzzleParser for CubeConundrum {
    type SharedData<'a> = Totals;

    fn parse<'a>(input: &'a str, settings: &RunSettings) -> Result<Totals, ParseError> {
        let lines: Vec<&str> = input.trim_end().lines().collect();
        let totals = if settings.parallel {
            aggregate_parallel(&lines, &settings.capacities, settings.error_policy)?
        } else {
            aggregate_with(&lines, &settings.capacities, settings.error_policy)?
        };
        info!(
            games = lines.len(),
            capacities = %settings.capacities,
            parallel = settings.parallel,
            "folded cube game records"
        );
        Ok(totals)
    }
}

impl Solver for CubeConundrum {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Totals, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.valid_id_sum.to_string()),
            2 => Ok(shared.power_sum.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
