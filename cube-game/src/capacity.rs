//! Per-color capacity configuration

use crate::color::{Color, ColorCounts};
use crate::error::CapacityError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Maximum number of cubes of each color a single draw-set may show
///
/// Deserializes from a `{ red, green, blue }` table; missing keys keep the
/// default ceiling for that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CapacityTable {
    red: u32,
    green: u32,
    blue: u32,
}

impl CapacityTable {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub fn capacity(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Blue => self.blue,
        }
    }

    pub fn set(&mut self, color: Color, capacity: u32) {
        match color {
            Color::Red => self.red = capacity,
            Color::Green => self.green = capacity,
            Color::Blue => self.blue = capacity,
        }
    }

    /// True if no color in `counts` exceeds its capacity
    pub fn admits(&self, counts: &ColorCounts) -> bool {
        counts.iter().all(|(color, n)| n <= self.capacity(color))
    }

    /// Apply `red=12,green=13,blue=14` style overrides on top of this table
    ///
    /// Any subset of colors may be given, in any order; the rest keep their
    /// current value. Nothing is changed if any entry is invalid.
    pub fn apply_overrides(&mut self, overrides: &str) -> Result<(), CapacityError> {
        let mut table = *self;
        for entry in overrides.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| CapacityError::MissingSeparator(entry.to_string()))?;
            let color: Color = name.trim().parse()?;
            let value = value.trim();
            let capacity = value.parse().map_err(|_| CapacityError::InvalidCount {
                color: color.to_string(),
                value: value.to_string(),
            })?;
            table.set(color, capacity);
        }
        *self = table;
        Ok(())
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::new(12, 13, 14)
    }
}

/// Parses `red=12,green=13,blue=14` over the default table
impl FromStr for CapacityTable {
    type Err = CapacityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = Self::default();
        table.apply_overrides(s)?;
        Ok(table)
    }
}

impl fmt::Display for CapacityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "red={},green={},blue={}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let caps = CapacityTable::default();
        assert_eq!(caps.capacity(Color::Red), 12);
        assert_eq!(caps.capacity(Color::Green), 13);
        assert_eq!(caps.capacity(Color::Blue), 14);
    }

    #[test]
    fn test_parse_partial_override() {
        let caps: CapacityTable = "blue=3, red=1".parse().unwrap();
        assert_eq!(caps, CapacityTable::new(1, 13, 3));
    }

    #[test]
    fn test_parse_display_round_trip() {
        let caps = CapacityTable::new(7, 8, 9);
        assert_eq!(caps.to_string().parse::<CapacityTable>().unwrap(), caps);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "red:4".parse::<CapacityTable>(),
            Err(CapacityError::MissingSeparator(_))
        ));
        assert!(matches!(
            "pink=4".parse::<CapacityTable>(),
            Err(CapacityError::Color(_))
        ));
        assert!(matches!(
            "red=-1".parse::<CapacityTable>(),
            Err(CapacityError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_failed_override_leaves_table_unchanged() {
        let mut caps = CapacityTable::new(1, 2, 3);
        assert!(caps.apply_overrides("red=9,blue=x").is_err());
        assert_eq!(caps, CapacityTable::new(1, 2, 3));
        caps.apply_overrides("green=5").unwrap();
        assert_eq!(caps, CapacityTable::new(1, 5, 3));
    }

    #[test]
    fn test_admits_tie() {
        let caps = CapacityTable::default();
        assert!(caps.admits(&ColorCounts::new(12, 13, 14)));
        assert!(!caps.admits(&ColorCounts::new(12, 14, 14)));
    }

    #[test]
    fn test_deserialize_partial_table() {
        let caps: CapacityTable = toml::from_str("green = 2").unwrap();
        assert_eq!(caps, CapacityTable::new(12, 2, 14));
    }
}
