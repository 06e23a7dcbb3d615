//! Tessera: a sparse, composable 2D grid container.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Tessera sub-crates. For most users, adding `tessera` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::{Direction, Grid, Position, Topology};
//!
//! // A 5×5 square board whose cells default to "floor".
//! let mut board = Grid::new((5, 5), Topology::Square)
//!     .with_default_value("floor".to_string());
//!
//! // Cells materialize on first access.
//! let here = board.get((2, 2)).unwrap().clone();
//! assert_eq!(here.value().map(String::as_str), Some("floor"));
//!
//! // Neighbor resolution follows the board's topology.
//! let east = board.neighbour(&here, Direction::East).unwrap().unwrap();
//! assert_eq!(east.position(), Position::new(3, 2));
//!
//! // Smaller grids nest inside larger ones at fixed offsets.
//! let mut room = Grid::new((2, 2), Topology::Square)
//!     .with_origin((0, 0))
//!     .with_default_value("room".to_string());
//! room.add((0, 0), "door".to_string()).unwrap();
//! board.add_subgrid(room).unwrap();
//! assert!(board.contains((0, 0)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tessera_core::{GridId, Position, Size};
pub use tessera_grid::{Cell, Direction, Grid, GridError, Topology};
