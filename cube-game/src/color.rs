//! The closed set of cube colors and per-color count vectors

use crate::error::GameParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Cube color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All colors in canonical order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Name as it appears in a record
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }
}

impl FromStr for Color {
    type Err = GameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(GameParseError::UnknownColor { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One count per color
///
/// Colors that were never touched read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorCounts([u32; 3]);

impl ColorCounts {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self([red, green, blue])
    }

    pub fn get(&self, color: Color) -> u32 {
        self.0[color.index()]
    }

    /// Add `count` to `color`, returning `None` on overflow
    pub fn checked_add(&mut self, color: Color, count: u32) -> Option<()> {
        let slot = &mut self.0[color.index()];
        *slot = slot.checked_add(count)?;
        Some(())
    }

    /// Elementwise maximum of two vectors
    pub fn max(self, other: Self) -> Self {
        let [r, g, b] = self.0;
        let [or, og, ob] = other.0;
        Self([r.max(or), g.max(og), b.max(ob)])
    }

    /// Product of all three counts
    ///
    /// Three `u32` factors can exceed `u64`, so the product is computed in
    /// `u128` and `None` is returned when it does not fit.
    pub fn power(&self) -> Option<u64> {
        let product = self.0.iter().map(|&c| u128::from(c)).product::<u128>();
        u64::try_from(product).ok()
    }

    /// Iterate `(color, count)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Index<Color> for ColorCounts {
    type Output = u32;

    fn index(&self, color: Color) -> &u32 {
        &self.0[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_color_is_case_sensitive() {
        assert_eq!(
            "Red".parse::<Color>(),
            Err(GameParseError::UnknownColor { name: "Red".into() })
        );
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_counts_max_is_elementwise() {
        let a = ColorCounts::new(1, 7, 0);
        let b = ColorCounts::new(4, 2, 3);
        assert_eq!(a.max(b), ColorCounts::new(4, 7, 3));
    }

    #[test]
    fn test_power_with_zero_component() {
        assert_eq!(ColorCounts::new(5, 0, 9).power(), Some(0));
        assert_eq!(ColorCounts::new(4, 2, 6).power(), Some(48));
    }

    #[test]
    fn test_power_overflow() {
        assert_eq!(ColorCounts::new(u32::MAX, u32::MAX, u32::MAX).power(), None);
    }

    #[test]
    fn test_checked_add_overflow() {
        let mut counts = ColorCounts::new(u32::MAX, 0, 0);
        assert_eq!(counts.checked_add(Color::Red, 1), None);
        assert_eq!(counts.checked_add(Color::Green, 3), Some(()));
        assert_eq!(counts[Color::Green], 3);
    }
}
