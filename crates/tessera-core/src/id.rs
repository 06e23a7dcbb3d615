//! Unique per-instance grid identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`GridId`] allocation.
static GRID_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a grid.
///
/// Allocated from a monotonic atomic counter via [`GridId::next`].
/// Two distinct grid instances always have different IDs, even when
/// they have identical size, topology, and contents. Grid equality
/// and hashing are defined over this identity alone, and cells carry
/// it as a non-owning back-reference to the grid they were created
/// in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(u64);

impl GridId {
    /// Allocate a fresh, unique grid ID.
    ///
    /// Each call returns an ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_allocates_distinct_ids() {
        let a = GridId::next();
        let b = GridId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn copies_compare_equal() {
        let a = GridId::next();
        let b = a;
        assert_eq!(a, b);
    }
}
