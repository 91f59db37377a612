//! The `Topology` trait implemented by every grid geometry.

use crate::grid::Grid;
use smallvec::SmallVec;

/// Neighbour, distance, and line primitives for a grid geometry.
///
/// Coordinates are `(x, y)` pairs. Implementations are pure: they know
/// nothing about map contents, and [`step`](Self::step) happily returns
/// cells outside any particular [`Grid`].
pub trait Topology {
    /// Number of movement directions (8 for square, 6 for hex).
    fn direction_count(&self) -> usize;

    /// `(dx, dy)` for direction index `direction` when standing on
    /// `(x, y)`, or `None` for an index outside the table.
    fn offset(&self, x: i32, y: i32, direction: usize) -> Option<(i32, i32)>;

    /// The cell one step from `(x, y)` in `direction`.
    ///
    /// May be out of bounds; `None` only for an invalid direction index.
    fn step(&self, x: i32, y: i32, direction: usize) -> Option<(i32, i32)> {
        let (dx, dy) = self.offset(x, y, direction)?;
        Some((x + dx, y + dy))
    }

    /// In-bounds neighbours of `(x, y)`, in direction-table order.
    fn neighbours(&self, grid: &Grid, x: i32, y: i32) -> SmallVec<[(i32, i32); 8]> {
        (0..self.direction_count())
            .filter_map(|d| self.step(x, y, d))
            .filter(|&(nx, ny)| grid.contains(nx, ny))
            .collect()
    }

    /// Graph-geodesic step count between two cells.
    fn distance(&self, a: (i32, i32), b: (i32, i32)) -> u32;

    /// Cells on the line from `a` to `b`, both endpoints included.
    ///
    /// Consecutive cells are exactly one step apart.
    fn line(&self, a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)>;
}
