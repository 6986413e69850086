use cube_game::{Lexer, calibration_sum};
use cube_solver::{AutoRegisterSolver, ParseError, PuzzleParser, RunSettings, SolveError, Solver};

/// Calibration values: part 1 reads digits only, part 2 also spelled-out words
#[derive(AutoRegisterSolver)]
#[puzzle(day = 1, name = "trebuchet", tags = ["calibration", "scanning"])]
pub struct Trebuchet;

impl PuzzleParser for Trebuchet {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str, _: &RunSettings) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.trim_end().lines().collect())
    }
}

impl Solver for Trebuchet {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let lexer = match part {
            1 => Lexer::Digits,
            2 => Lexer::Spelled,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(calibration_sum(shared.iter(), lexer).to_string())
    }
}
