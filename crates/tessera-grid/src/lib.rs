//! Sparse, composable 2D grid container.
//!
//! This crate defines [`Grid`] — a rectangular coordinate space with
//! sparse cell storage, nested subgrid composition, and direction-based
//! neighbor resolution parameterized by [`Topology`] — along with the
//! [`Cell`] record and the closed [`Direction`]/[`Topology`] enums.
//!
//! # Model
//!
//! A grid stores arbitrary values at integer coordinates. Cells
//! materialize lazily: [`Grid::get`] is read-or-create and inserts a
//! default-valued cell the first time a position is touched. Smaller
//! grids can be attached inside a parent at fixed offsets; lookups
//! that land inside an attached subgrid's footprint are delegated to
//! it with the position translated into its local frame. Overlap and
//! collision validation runs once, at attachment time.
//!
//! Neighbor queries walk a fixed per-topology direction table
//! ([`Topology::offset`]) and resolve the adjacent position through
//! the same lookup path as [`Grid::get`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod topology;

pub use cell::Cell;
pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use topology::Topology;
