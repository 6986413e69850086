//! Calibration values: first and last digit of a line as a two-digit number

use tracing::debug;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Which tokens count as digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexer {
    /// ASCII `0`-`9` only
    Digits,
    /// ASCII digits plus the words `one` through `nine`
    Spelled,
}

impl Lexer {
    /// Digit starting at byte `i`, if any
    fn digit_at(self, line: &str, i: usize) -> Option<u32> {
        let bytes = line.as_bytes();
        if bytes[i].is_ascii_digit() {
            return Some(u32::from(bytes[i] - b'0'));
        }
        match self {
            Lexer::Digits => None,
            Lexer::Spelled => SPELLED
                .iter()
                .position(|word| bytes[i..].starts_with(word.as_bytes()))
                .map(|p| p as u32 + 1),
        }
    }

    /// All digits of `line` in order, overlapping words included
    pub fn digits<'a>(self, line: &'a str) -> impl Iterator<Item = u32> + 'a {
        (0..line.len()).filter_map(move |i| self.digit_at(line, i))
    }
}

/// First digit times ten plus last digit; `None` if the line has no digit
///
/// # Example
///
/// ```
/// use cube_game::{calibration_value, Lexer};
///
/// assert_eq!(calibration_value("treb7uchet", Lexer::Digits), Some(77));
/// assert_eq!(calibration_value("eightwothree", Lexer::Spelled), Some(83));
/// ```
pub fn calibration_value(line: &str, lexer: Lexer) -> Option<u32> {
    let mut digits = lexer.digits(line);
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

/// Sum of the calibration values of all lines
///
/// A line without any digit contributes zero.
pub fn calibration_sum<I, S>(lines: I, lexer: Lexer) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            calibration_value(line, lexer).map_or_else(
                || {
                    debug!(line_number = index + 1, line, "no digit on line");
                    0
                },
                u64::from,
            )
        })
        .sum()
}
