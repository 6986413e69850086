//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use cube_game::LineError;
use cube_solver::{ParseError, SolverError};
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing info
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_line(result)),
            Err(_) => eprintln!("{}", format_line(result)),
        }
    }

    /// Print the offending records behind failed parses, once per day
    pub fn print_record_failures(&self, results: &[SolverResult]) {
        for (day, errors) in results
            .iter()
            .filter_map(|r| record_failures(r).map(|errors| (r.day, errors)))
            .unique_by(|(day, _)| *day)
        {
            eprintln!("Day {:02}: {} malformed record(s)", day, errors.len());
            for error in errors {
                eprintln!("  {}", error);
            }
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let (successes, failures) = results
            .iter()
            .fold((0, 0), |(ok, err), r| match r.answer {
                Ok(_) => (ok + 1, err),
                Err(_) => (ok, err + 1),
            });

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// `Day NN Part P: answer (parse: .., solve: ..)` or the error
fn format_line(result: &SolverResult) -> String {
    let prefix = format!("Day {:02} Part {}", result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

/// Line failures carried by a result, if its records failed to parse
fn record_failures(result: &SolverResult) -> Option<&[LineError]> {
    match &result.answer {
        Err(SolverError::ParseError(ParseError::Records(err))) => Some(err.line_errors()),
        _ => None,
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format_duration(TimeDelta::from_std(d).unwrap_or(TimeDelta::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_game::{AggregateError, GameParseError};

    fn ok(day: u8, part: u8, answer: &str) -> SolverResult {
        SolverResult {
            day,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(3),
        }
    }

    fn records_failed(day: u8, part: u8) -> SolverResult {
        let line = LineError {
            line_number: 4,
            line: "Game 4: 2 pink".to_string(),
            source: GameParseError::UnknownColor {
                name: "pink".to_string(),
            },
        };
        SolverResult {
            day,
            part,
            answer: Err(ParseError::Records(AggregateError::Line(line)).into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(&ok(2, 1, "8")),
            "Day 02 Part 1: 8 (parse: 250µs, solve: 3.00ms)"
        );
        let mut no_parse = ok(12, 2, "2286");
        no_parse.parse_duration = None;
        assert_eq!(format_line(&no_parse), "Day 12 Part 2: 2286 (solve: 3.00ms)");
    }

    #[test]
    fn test_format_error_line() {
        let line = format_line(&records_failed(2, 1));
        assert!(line.starts_with("Day 02 Part 1: Error - "));
    }

    #[test]
    fn test_record_failures_only_for_parse_errors() {
        assert!(record_failures(&ok(1, 1, "142")).is_none());
        let failed = records_failed(2, 2);
        let errors = record_failures(&failed).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number, 4);
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(
            format_std_duration(std::time::Duration::from_micros(42)),
            "42µs"
        );
    }
}
