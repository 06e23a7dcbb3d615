//! The sparse composable grid container.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::GridError;
use crate::topology::Topology;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::fmt;
use tessera_core::{GridId, Position, Size};

/// A rectangular coordinate space with sparse cell storage, nested
/// subgrid composition, and topology-aware neighbor resolution.
///
/// A grid's size, origin, topology, default value, and subgrid policy
/// are fixed at construction; only its cell and subgrid storage
/// mutate afterwards. Cells materialize lazily: [`get`](Self::get) is
/// read-or-create and inserts a default-valued cell the first time a
/// position is touched, which is why it takes `&mut self`.
///
/// Smaller grids attach inside a parent at fixed origins via
/// [`add_subgrid`](Self::add_subgrid), which validates that the
/// child's covered positions collide with nothing already covered.
/// After attachment the parent owns the child exclusively; dropping
/// the root releases the whole tree. Lookups that land inside an
/// attached subgrid's rectangular footprint are delegated to it with
/// the position translated into its local frame — delegation is
/// structural and does not require a cell to exist there yet.
///
/// Two grids compare equal exactly when they are the same instance
/// (same [`GridId`]), regardless of contents.
///
/// # Examples
///
/// ```
/// use tessera_grid::{Direction, Grid, Topology};
///
/// let mut board = Grid::new((5, 5), Topology::Square)
///     .with_default_value("foo".to_string());
///
/// let cell = board.get((2, 2)).unwrap().clone();
/// assert_eq!(cell.value().map(String::as_str), Some("foo"));
///
/// let north = board.neighbour(&cell, Direction::North).unwrap();
/// assert_eq!(north.map(|c| c.position()), Some((2, 1).into()));
///
/// // (0, 0) has no north neighbour on a square grid.
/// let corner = board.get((0, 0)).unwrap().clone();
/// assert!(board.neighbour(&corner, Direction::North).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct Grid<T> {
    id: GridId,
    size: Size,
    origin: Position,
    topology: Topology,
    default_value: Option<T>,
    allow_subgrids: bool,
    cells: IndexMap<Position, Cell<T>>,
    subgrids: IndexMap<Position, Grid<T>>,
}

impl<T> Grid<T> {
    /// Create an empty grid of the given size and topology, with a
    /// fresh unique identity, origin `(0, 0)`, no default value, and
    /// subgrids allowed.
    ///
    /// Construction never fails; a zero-area size is representable
    /// and simply rejects every position as out of bounds.
    pub fn new(size: impl Into<Size>, topology: Topology) -> Self {
        Self {
            id: GridId::next(),
            size: size.into(),
            origin: Position::new(0, 0),
            topology,
            default_value: None,
            allow_subgrids: true,
            cells: IndexMap::new(),
            subgrids: IndexMap::new(),
        }
    }

    /// Set the origin: this grid's offset in the coordinate space of
    /// whichever grid it is later attached to.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Position>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the fallback value used when a cell is materialized
    /// without an explicit value.
    #[must_use]
    pub fn with_default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Forbid subgrid attachment; any later
    /// [`add_subgrid`](Self::add_subgrid) fails with
    /// [`GridError::SubgridsDisallowed`].
    #[must_use]
    pub fn without_subgrids(mut self) -> Self {
        self.allow_subgrids = false;
        self
    }

    /// This grid's unique identity.
    pub const fn id(&self) -> GridId {
        self.id
    }

    /// The fixed dimensions.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Offset in the parent grid's frame (`(0, 0)` for a root grid).
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// The neighbor structure.
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// The configured fallback value, if any.
    pub const fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// Whether subgrids may be attached.
    pub const fn allows_subgrids(&self) -> bool {
        self.allow_subgrids
    }

    /// Store a cell bound to this grid at `position`, overwriting any
    /// existing entry in this grid's own map. Never delegated into a
    /// subgrid, even when `position` lies inside one's footprint.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when `position` is outside this
    /// grid's size.
    pub fn add(&mut self, position: impl Into<Position>, value: T) -> Result<&Cell<T>, GridError> {
        let position = position.into();
        self.add_cell(Cell::new(self.id, position, Some(value)))
    }

    /// Store a pre-built cell, with the same placement rules as
    /// [`add`](Self::add).
    ///
    /// The cell's embedded owning-grid id is stored as-is: a cell
    /// built against one grid may be re-homed into another, and its
    /// back-reference keeps pointing at the grid it was created in.
    /// Callers are responsible for consistency.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when the cell's position is outside
    /// this grid's size.
    pub fn add_cell(&mut self, cell: Cell<T>) -> Result<&Cell<T>, GridError> {
        let position = cell.position();
        self.check_bounds(position)?;
        self.cells.insert(position, cell);
        Ok(&self.cells[&position])
    }

    /// Attach a child grid at its configured origin.
    ///
    /// Validation runs in order, and fully precedes the single
    /// storage write:
    ///
    /// 1. this grid allows subgrids;
    /// 2. the child's topology matches;
    /// 3. no subgrid is already keyed at the child's origin;
    /// 4. the child's origin is not among the positions this grid
    ///    already covers ([`positions`](Self::positions) with origins
    ///    applied);
    /// 5. the child's covered positions intersect nothing this grid
    ///    already covers.
    ///
    /// On success the parent takes ownership of the child.
    ///
    /// # Errors
    ///
    /// [`GridError::SubgridsDisallowed`],
    /// [`GridError::TopologyMismatch`],
    /// [`GridError::OriginOccupied`],
    /// [`GridError::OriginContained`], or
    /// [`GridError::FootprintOverlap`], matching the failed check.
    pub fn add_subgrid(&mut self, subgrid: Grid<T>) -> Result<(), GridError> {
        if !self.allow_subgrids {
            return Err(GridError::SubgridsDisallowed);
        }
        if self.topology != subgrid.topology {
            return Err(GridError::TopologyMismatch {
                parent: self.topology,
                subgrid: subgrid.topology,
            });
        }
        if self.subgrids.contains_key(&subgrid.origin) {
            return Err(GridError::OriginOccupied {
                origin: subgrid.origin,
            });
        }
        let occupied = self.positions(true);
        if occupied.contains(&subgrid.origin) {
            return Err(GridError::OriginContained {
                origin: subgrid.origin,
            });
        }
        if subgrid
            .positions(true)
            .iter()
            .any(|position| occupied.contains(position))
        {
            return Err(GridError::FootprintOverlap {
                origin: subgrid.origin,
            });
        }
        self.subgrids.insert(subgrid.origin, subgrid);
        Ok(())
    }

    /// Whether `position` is in bounds and holds a materialized cell,
    /// either directly in this grid or (recursively, with the
    /// position translated) in an attached subgrid.
    ///
    /// Returns `false` immediately for anything outside this grid's
    /// own size — the bound checked is always that of the grid the
    /// method is invoked on.
    pub fn contains(&self, position: impl Into<Position>) -> bool {
        let position = position.into();
        if !self.size.contains(position) {
            return false;
        }
        self.cells.contains_key(&position)
            || self
                .subgrids
                .values()
                .any(|subgrid| subgrid.contains(position.relative_to(subgrid.origin)))
    }

    /// The set of materialized cell positions, merged recursively
    /// with every attached subgrid's positions.
    ///
    /// When `include_origin` is `true`, each recursion level
    /// translates the merged set by its *own* origin before returning
    /// it, so positions are absolute only when this is called on the
    /// true root; invoked on an interior grid they come back offset
    /// relative to that grid's origin. When `false`, subgrid
    /// positions are merged untranslated (raw local coordinates).
    pub fn positions(&self, include_origin: bool) -> IndexSet<Position> {
        let mut result: IndexSet<Position> = self.cells.keys().copied().collect();
        for subgrid in self.subgrids.values() {
            result.extend(subgrid.positions(include_origin));
        }
        if include_origin {
            result
                .into_iter()
                .map(|position| position.translate(self.origin))
                .collect()
        } else {
            result
        }
    }

    /// The in-bounds neighbor positions of `position` under this
    /// grid's topology, in table order.
    ///
    /// Read-only companion to [`neighbour`](Self::neighbour): does
    /// not materialize cells and ignores subgrid structure.
    pub fn neighbour_positions(&self, position: impl Into<Position>) -> SmallVec<[Position; 8]> {
        let position = position.into();
        let mut result = SmallVec::new();
        for &direction in self.topology.directions() {
            if let Some((dx, dy)) = self.topology.offset(direction) {
                let candidate = position.offset(dx, dy);
                if self.size.contains(candidate) {
                    result.push(candidate);
                }
            }
        }
        result
    }

    /// Whether `id` names this grid or any descendant subgrid.
    fn owns(&self, id: GridId) -> bool {
        self.id == id || self.subgrids.values().any(|subgrid| subgrid.owns(id))
    }

    /// Whether `position`, expressed in this grid's parent frame,
    /// falls inside this grid's rectangular footprint.
    fn covers(&self, position: Position) -> bool {
        self.size.contains(position.relative_to(self.origin))
    }

    fn check_bounds(&self, position: Position) -> Result<(), GridError> {
        if self.size.contains(position) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Fetch the cell at `position`, materializing it with the
    /// configured default value if nothing exists there yet.
    ///
    /// Resolution order: this grid's own cell map first; then, if the
    /// position lies inside an attached subgrid's footprint, the
    /// lookup delegates to that subgrid with the position translated
    /// into its frame (so the returned cell's position is local to
    /// the grid that owns it); otherwise a new cell materializes in
    /// this grid's own map.
    ///
    /// This is a read-or-create operation, not a pure accessor —
    /// hence `&mut self`.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when `position` is outside this
    /// grid's size.
    pub fn get(&mut self, position: impl Into<Position>) -> Result<&Cell<T>, GridError> {
        self.resolve(position.into(), None)
    }

    /// [`get`](Self::get), but a cell materialized by *this* call is
    /// valued with `default_value` instead of the grid's configured
    /// default. An already-existing cell is returned unchanged, and
    /// the override does not propagate into subgrid delegation.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] when `position` is outside this
    /// grid's size.
    pub fn get_with_default(
        &mut self,
        position: impl Into<Position>,
        default_value: T,
    ) -> Result<&Cell<T>, GridError> {
        self.resolve(position.into(), Some(default_value))
    }

    /// Fetch the cell one step from `source` in `direction`, or
    /// `Ok(None)` when that step leaves this grid's bounds.
    ///
    /// The source cell must belong to this grid or one of its
    /// descendant subgrids, and its position is interpreted in this
    /// grid's frame. The target resolves through the same
    /// read-or-create path as [`get`](Self::get), so a neighbor query
    /// can materialize a default-valued cell.
    ///
    /// # Errors
    ///
    /// [`GridError::ForeignCell`] when `source` belongs to an
    /// unrelated grid; [`GridError::UnsupportedDirection`] when this
    /// grid's topology has no entry for `direction`.
    pub fn neighbour(
        &mut self,
        source: &Cell<T>,
        direction: Direction,
    ) -> Result<Option<&Cell<T>>, GridError> {
        if !self.owns(source.grid()) {
            return Err(GridError::ForeignCell {
                cell_grid: source.grid(),
                grid: self.id,
            });
        }
        let (dx, dy) = self
            .topology
            .offset(direction)
            .ok_or(GridError::UnsupportedDirection {
                direction,
                topology: self.topology,
            })?;
        let target = source.position().offset(dx, dy);
        if !self.size.contains(target) {
            return Ok(None);
        }
        self.resolve(target, None).map(Some)
    }

    /// Shared resolution path for [`get`](Self::get) and
    /// [`neighbour`](Self::neighbour).
    fn resolve(
        &mut self,
        position: Position,
        override_default: Option<T>,
    ) -> Result<&Cell<T>, GridError> {
        self.check_bounds(position)?;
        if !self.cells.contains_key(&position) {
            let covering = self
                .subgrids
                .values()
                .find(|subgrid| subgrid.covers(position))
                .map(|subgrid| subgrid.origin);
            if let Some(origin) = covering {
                // Key just probed above, so the index cannot miss.
                let subgrid = &mut self.subgrids[&origin];
                return subgrid.resolve(position.relative_to(origin), None);
            }
            let value = override_default.or_else(|| self.default_value.clone());
            self.cells.insert(position, Cell::new(self.id, position, value));
        }
        Ok(&self.cells[&position])
    }
}

impl<T> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Grid<T> {}

impl<T> std::hash::Hash for Grid<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:",
            self.id, self.size, self.origin, self.topology
        )?;
        if let Some(value) = &self.default_value {
            write!(f, "{value}")?;
        }
        write!(f, ":{}", self.allow_subgrids)
    }
}
