//! Grid topologies and their direction-offset tables.

use crate::direction::Direction;
use std::fmt;

/// The neighbor structure of a grid.
///
/// Each topology maps a fixed subset of [`Direction`]s to unit
/// coordinate deltas. Square topologies use ordinary row/column
/// offsets; the two hex topologies use offset coordinates on a
/// rectangular storage grid, so their diagonal deltas differ from
/// the square diagonals and the on-axis pair perpendicular to the
/// hex orientation is absent entirely ([`VerticalHex`](Self::VerticalHex)
/// has no east/west, [`HorizontalHex`](Self::HorizontalHex) no
/// north/south).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// 4-connected square grid: N/E/S/W.
    #[default]
    Square,
    /// 8-connected square grid: N/E/S/W plus the four diagonals.
    SquareWithDiagonals,
    /// Hexes stacked in vertical columns; 6 neighbors, no E/W.
    VerticalHex,
    /// Hexes stacked in horizontal rows; 6 neighbors, no N/S.
    HorizontalHex,
}

impl Topology {
    /// The coordinate delta for one step in `direction`, or `None`
    /// when this topology does not support that direction.
    ///
    /// Pure table lookup; the tables are fixed for the lifetime of
    /// the process.
    pub const fn offset(self, direction: Direction) -> Option<(i32, i32)> {
        match self {
            Self::Square => match direction {
                Direction::North => Some((0, -1)),
                Direction::East => Some((1, 0)),
                Direction::South => Some((0, 1)),
                Direction::West => Some((-1, 0)),
                _ => None,
            },
            Self::SquareWithDiagonals => match direction {
                Direction::North => Some((0, -1)),
                Direction::Northeast => Some((1, -1)),
                Direction::East => Some((1, 0)),
                Direction::Southeast => Some((1, 1)),
                Direction::South => Some((0, 1)),
                Direction::Southwest => Some((-1, 1)),
                Direction::West => Some((-1, 0)),
                Direction::Northwest => Some((-1, -1)),
            },
            Self::VerticalHex => match direction {
                Direction::North => Some((0, -1)),
                Direction::Northeast => Some((1, 0)),
                Direction::Southeast => Some((1, 1)),
                Direction::South => Some((0, 1)),
                Direction::Southwest => Some((-1, 1)),
                Direction::Northwest => Some((-1, 0)),
                _ => None,
            },
            Self::HorizontalHex => match direction {
                Direction::East => Some((1, 0)),
                Direction::Southeast => Some((1, 1)),
                Direction::Southwest => Some((0, 1)),
                Direction::West => Some((-1, 0)),
                Direction::Northwest => Some((0, -1)),
                Direction::Northeast => Some((1, -1)),
                _ => None,
            },
        }
    }

    /// The directions this topology supports, in table order.
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Square => &[
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ],
            Self::SquareWithDiagonals => &[
                Direction::North,
                Direction::Northeast,
                Direction::East,
                Direction::Southeast,
                Direction::South,
                Direction::Southwest,
                Direction::West,
                Direction::Northwest,
            ],
            Self::VerticalHex => &[
                Direction::North,
                Direction::Northeast,
                Direction::Southeast,
                Direction::South,
                Direction::Southwest,
                Direction::Northwest,
            ],
            Self::HorizontalHex => &[
                Direction::East,
                Direction::Southeast,
                Direction::Southwest,
                Direction::West,
                Direction::Northwest,
                Direction::Northeast,
            ],
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::SquareWithDiagonals => "square with diagonals",
            Self::VerticalHex => "vertical hex",
            Self::HorizontalHex => "horizontal hex",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_supports_exactly_the_cardinals() {
        let t = Topology::Square;
        assert_eq!(t.offset(Direction::North), Some((0, -1)));
        assert_eq!(t.offset(Direction::East), Some((1, 0)));
        assert_eq!(t.offset(Direction::South), Some((0, 1)));
        assert_eq!(t.offset(Direction::West), Some((-1, 0)));
        assert_eq!(t.offset(Direction::Northeast), None);
        assert_eq!(t.offset(Direction::Southeast), None);
        assert_eq!(t.offset(Direction::Southwest), None);
        assert_eq!(t.offset(Direction::Northwest), None);
    }

    #[test]
    fn square_with_diagonals_supports_all_eight() {
        let t = Topology::SquareWithDiagonals;
        for direction in Direction::ALL {
            assert!(t.offset(direction).is_some(), "missing {direction}");
        }
        assert_eq!(t.offset(Direction::Northeast), Some((1, -1)));
        assert_eq!(t.offset(Direction::Southeast), Some((1, 1)));
        assert_eq!(t.offset(Direction::Southwest), Some((-1, 1)));
        assert_eq!(t.offset(Direction::Northwest), Some((-1, -1)));
    }

    #[test]
    fn vertical_hex_has_no_east_west() {
        let t = Topology::VerticalHex;
        assert_eq!(t.offset(Direction::East), None);
        assert_eq!(t.offset(Direction::West), None);
        assert_eq!(t.offset(Direction::Northeast), Some((1, 0)));
        assert_eq!(t.offset(Direction::Southwest), Some((-1, 1)));
        assert_eq!(t.directions().len(), 6);
    }

    #[test]
    fn horizontal_hex_has_no_north_south() {
        let t = Topology::HorizontalHex;
        assert_eq!(t.offset(Direction::North), None);
        assert_eq!(t.offset(Direction::South), None);
        assert_eq!(t.offset(Direction::Northwest), Some((0, -1)));
        assert_eq!(t.offset(Direction::Southwest), Some((0, 1)));
        assert_eq!(t.directions().len(), 6);
    }

    #[test]
    fn directions_agrees_with_offset_table() {
        for topology in [
            Topology::Square,
            Topology::SquareWithDiagonals,
            Topology::VerticalHex,
            Topology::HorizontalHex,
        ] {
            for direction in Direction::ALL {
                let supported = topology.directions().contains(&direction);
                assert_eq!(
                    topology.offset(direction).is_some(),
                    supported,
                    "{topology}: {direction} table mismatch"
                );
            }
        }
    }

    #[test]
    fn default_topology_is_square() {
        assert_eq!(Topology::default(), Topology::Square);
    }
}
