//! Game records and the draw-set validation rules

use crate::capacity::CapacityTable;
use crate::color::{Color, ColorCounts};
use std::fmt;

/// A number of cubes of one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    pub color: Color,
    pub count: u32,
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.color)
    }
}

/// Cubes drawn together, accumulated per color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawSet {
    counts: ColorCounts,
}

impl DrawSet {
    /// Sum the cubes per color
    ///
    /// Returns `None` if a color's total overflows `u32`.
    pub fn from_cubes<I>(cubes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cube>,
    {
        let mut counts = ColorCounts::default();
        for cube in cubes {
            counts.checked_add(cube.color, cube.count)?;
        }
        Some(Self { counts })
    }

    pub fn count(&self, color: Color) -> u32 {
        self.counts.get(color)
    }

    pub fn counts(&self) -> &ColorCounts {
        &self.counts
    }

    /// True if no color exceeds its capacity (equal is allowed)
    pub fn is_within(&self, capacities: &CapacityTable) -> bool {
        capacities.admits(&self.counts)
    }

    /// Non-zero cubes in canonical color order
    pub fn cubes(&self) -> impl Iterator<Item = Cube> + '_ {
        self.counts
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(color, count)| Cube { color, count })
    }
}

impl fmt::Display for DrawSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cubes = self.cubes();
        match cubes.next() {
            Some(first) => write!(f, "{first}")?,
            // An all-zero set still needs one cube to stay parseable
            None => write!(f, "0 {}", Color::Red)?,
        }
        for cube in cubes {
            write!(f, ", {cube}")?;
        }
        Ok(())
    }
}

/// One parsed record: an id plus its draw-sets in drawn order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<DrawSet>,
}

impl Game {
    /// A game is valid when every draw-set fits the capacities
    pub fn is_valid(&self, capacities: &CapacityTable) -> bool {
        self.draws.iter().all(|d| d.is_within(capacities))
    }

    /// Per color, the largest count seen in any draw-set
    pub fn minimal_counts(&self) -> ColorCounts {
        self.draws
            .iter()
            .fold(ColorCounts::default(), |acc, d| acc.max(*d.counts()))
    }

    /// Product of the minimal counts, `None` if it does not fit in `u64`
    pub fn power(&self) -> Option<u64> {
        self.minimal_counts().power()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}:", self.id)?;
        for (i, draw) in self.draws.iter().enumerate() {
            let sep = if i == 0 { "" } else { ";" };
            write!(f, "{sep} {draw}")?;
        }
        Ok(())
    }
}
