//! Compass directions for neighbor queries.

use std::fmt;

/// One of the eight compass directions.
///
/// The set is closed and independent of topology; each [`Topology`]
/// declares which subset it supports via
/// [`Topology::directions`](crate::Topology::directions). Asking a
/// grid for a neighbor in a direction its topology does not support
/// fails with
/// [`GridError::UnsupportedDirection`](crate::GridError::UnsupportedDirection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up: `(0, -1)` on square grids.
    North,
    /// Up-right diagonal.
    Northeast,
    /// Right: `(1, 0)`.
    East,
    /// Down-right diagonal.
    Southeast,
    /// Down: `(0, 1)`.
    South,
    /// Down-left diagonal.
    Southwest,
    /// Left: `(-1, 0)`.
    West,
    /// Up-left diagonal.
    Northwest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_direction_once() {
        assert_eq!(Direction::ALL.len(), 8);
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Direction::North.to_string(), "north");
        assert_eq!(Direction::Southwest.to_string(), "southwest");
    }
}
