//! Record parser
//!
//! Grammar, with every delimiter followed by exactly one space:
//!
//! ```text
//! record  := "Game " id ":" drawset (";" drawset)*
//! drawset := cube ("," cube)*
//! cube    := " " count " " color
//! ```

use crate::color::Color;
use crate::error::GameParseError;
use crate::game::{Cube, DrawSet, Game};
use std::str::FromStr;

const HEADER_PREFIX: &str = "Game ";

/// Parse one record line into a [`Game`]
///
/// # Example
///
/// ```
/// use cube_game::{parse_game, Color};
///
/// let game = parse_game("Game 2: 1 red, 2 red; 5 blue").unwrap();
/// assert_eq!(game.id, 2);
/// assert_eq!(game.draws[0].count(Color::Red), 3);
/// assert_eq!(game.draws[1].count(Color::Blue), 5);
/// ```
pub fn parse_game(line: &str) -> Result<Game, GameParseError> {
    let (id, body) = parse_header(line)?;
    let draws = body
        .split(';')
        .enumerate()
        .map(|(index, segment)| parse_draw_set(index, segment))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Game { id, draws })
}

impl FromStr for Game {
    type Err = GameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_game(s)
    }
}

fn parse_header(line: &str) -> Result<(u32, &str), GameParseError> {
    let rest = line
        .strip_prefix(HEADER_PREFIX)
        .ok_or(GameParseError::MalformedHeader {
            reason: "missing `Game ` prefix",
        })?;
    let (id, body) = rest.split_once(':').ok_or(GameParseError::MalformedHeader {
        reason: "missing `:` after game id",
    })?;
    let id = parse_decimal(id).ok_or(GameParseError::MalformedHeader {
        reason: "game id is not a decimal number",
    })?;
    Ok((id, body))
}

fn parse_draw_set(index: usize, segment: &str) -> Result<DrawSet, GameParseError> {
    if segment.trim().is_empty() {
        return Err(GameParseError::EmptySegment { index });
    }
    let cubes = segment
        .split(',')
        .map(parse_cube)
        .collect::<Result<Vec<_>, _>>()?;
    DrawSet::from_cubes(cubes).ok_or_else(|| GameParseError::MalformedCube {
        token: segment.trim().to_string(),
        reason: "color total overflows",
    })
}

fn parse_cube(token: &str) -> Result<Cube, GameParseError> {
    let malformed = |reason| GameParseError::MalformedCube {
        token: token.to_string(),
        reason,
    };
    let body = token
        .strip_prefix(' ')
        .ok_or_else(|| malformed("expected one space before cube"))?;
    let (count, color) = body
        .split_once(' ')
        .ok_or_else(|| malformed("missing space between count and color"))?;
    let count = parse_decimal(count).ok_or_else(|| malformed("count is not a decimal number"))?;
    let color = color.parse::<Color>()?;
    Ok(Cube { color, count })
}

/// Plain ASCII digits only: rejects signs, whitespace and empty input
fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
