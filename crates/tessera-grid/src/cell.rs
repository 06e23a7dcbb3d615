//! The cell record stored at each materialized grid position.

use tessera_core::{GridId, Position};

/// An immutable record binding a position, an owning grid, and a
/// value.
///
/// The owning grid is referenced by its [`GridId`] rather than by
/// pointer, so a cell never keeps its grid alive and two cells
/// compare equal exactly when their owning grid identity, position,
/// and value all match.
///
/// Cells are created lazily by [`Grid::get`](crate::Grid::get) or
/// explicitly by [`Grid::add`](crate::Grid::add); once created they
/// are immutable (re-adding at the same position replaces the whole
/// entry).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell<T> {
    grid: GridId,
    position: Position,
    value: Option<T>,
}

impl<T> Cell<T> {
    /// Create a cell bound to the grid identified by `grid`.
    pub const fn new(grid: GridId, position: Position, value: Option<T>) -> Self {
        Self {
            grid,
            position,
            value,
        }
    }

    /// Identity of the grid this cell was created in.
    pub const fn grid(&self) -> GridId {
        self.grid
    }

    /// The cell's position, local to its owning grid.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The stored value, if any.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_requires_grid_position_and_value() {
        let a = GridId::next();
        let b = GridId::next();
        let p = Position::new(1, 2);

        let cell = Cell::new(a, p, Some("foo"));
        assert_eq!(cell, Cell::new(a, p, Some("foo")));
        assert_ne!(cell, Cell::new(b, p, Some("foo")));
        assert_ne!(cell, Cell::new(a, Position::new(2, 1), Some("foo")));
        assert_ne!(cell, Cell::new(a, p, Some("bar")));
        assert_ne!(cell, Cell::new(a, p, None));
    }

    #[test]
    fn value_is_optional() {
        let cell: Cell<String> = Cell::new(GridId::next(), Position::new(0, 0), None);
        assert_eq!(cell.value(), None);
    }
}
