//! Integer coordinates and grid dimensions.

use std::fmt;

/// A coordinate within a grid's local frame.
///
/// Positions are signed so that neighbor arithmetic and frame
/// translation can step outside a grid's bounds; bounds are enforced
/// by [`Size::contains`] at the point of use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal component, increasing eastward.
    pub x: i32,
    /// Vertical component, increasing southward.
    pub y: i32,
}

impl Position {
    /// Create a position from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by a delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// This position re-expressed in the frame *containing* `origin`:
    /// component-wise addition.
    pub const fn translate(self, origin: Self) -> Self {
        Self::new(self.x + origin.x, self.y + origin.y)
    }

    /// This position re-expressed in the frame *anchored at* `origin`:
    /// component-wise subtraction. Inverse of [`translate`](Self::translate).
    pub const fn relative_to(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The fixed dimensions of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Size {
    /// Create a size from its dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `position` falls inside `[0, width) × [0, height)`.
    pub const fn contains(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}
