//! Error types for grid operations.

use crate::direction::Direction;
use crate::topology::Topology;
use std::fmt;
use tessera_core::{GridId, Position, Size};

/// Errors arising from grid lookups, cell insertion, subgrid
/// attachment, or neighbor resolution.
///
/// All failures are immediate and terminal for the call; no operation
/// leaves partial state behind (subgrid validation completes fully
/// before the single storage write).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A position is outside the target grid's declared size.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The grid's size.
        size: Size,
    },
    /// Subgrid attachment on a grid constructed without subgrid
    /// support.
    SubgridsDisallowed,
    /// The subgrid's topology differs from the parent's.
    TopologyMismatch {
        /// Topology of the grid being attached to.
        parent: Topology,
        /// Topology of the rejected subgrid.
        subgrid: Topology,
    },
    /// A subgrid is already attached at the same origin.
    OriginOccupied {
        /// The contested origin.
        origin: Position,
    },
    /// The subgrid's origin is already covered by a materialized cell
    /// or an attached subgrid's positions.
    OriginContained {
        /// The contained origin.
        origin: Position,
    },
    /// The subgrid's covered positions intersect positions already
    /// covered by the grid.
    FootprintOverlap {
        /// Origin of the rejected subgrid.
        origin: Position,
    },
    /// A neighbor query was made with a cell that belongs to neither
    /// the queried grid nor any of its descendants.
    ForeignCell {
        /// Identity of the grid the cell was created in.
        cell_grid: GridId,
        /// Identity of the grid that was queried.
        grid: GridId,
    },
    /// A neighbor query used a direction the grid's topology does not
    /// define.
    UnsupportedDirection {
        /// The unsupported direction.
        direction: Direction,
        /// The grid's topology.
        topology: Topology,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { position, size } => {
                write!(f, "position {position} is out of bounds of {size}")
            }
            Self::SubgridsDisallowed => write!(f, "grid does not allow subgrids"),
            Self::TopologyMismatch { parent, subgrid } => {
                write!(
                    f,
                    "subgrid topology '{subgrid}' does not match parent topology '{parent}'"
                )
            }
            Self::OriginOccupied { origin } => {
                write!(f, "a subgrid is already attached at origin {origin}")
            }
            Self::OriginContained { origin } => {
                write!(f, "origin {origin} is already covered by the grid")
            }
            Self::FootprintOverlap { origin } => {
                write!(
                    f,
                    "subgrid at origin {origin} overlaps positions already covered by the grid"
                )
            }
            Self::ForeignCell { cell_grid, grid } => {
                write!(
                    f,
                    "cell belongs to grid {cell_grid}, not grid {grid} or its subgrids"
                )
            }
            Self::UnsupportedDirection {
                direction,
                topology,
            } => {
                write!(
                    f,
                    "direction '{direction}' is not valid for topology '{topology}'"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_values() {
        let err = GridError::OutOfBounds {
            position: Position::new(5, 5),
            size: Size::new(5, 5),
        };
        assert_eq!(err.to_string(), "position (5, 5) is out of bounds of (5, 5)");

        let err = GridError::UnsupportedDirection {
            direction: Direction::East,
            topology: Topology::VerticalHex,
        };
        assert_eq!(
            err.to_string(),
            "direction 'east' is not valid for topology 'vertical hex'"
        );
    }
}
