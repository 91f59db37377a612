//! Line of sight and field-of-view masks.

use crate::map::Map;
use rck_space::{Grid, Topology};

/// Raw visibility between two cells of one map.
///
/// The map manager adds range limits and entity resolution on top; an
/// engine only answers whether light gets through.
pub trait VisibilityEngine: Send + Sync {
    /// Whether `to` can be seen from `from`. Out-of-bounds cells are
    /// never visible.
    fn line_of_sight(&self, map: &Map, from: (i32, i32), to: (i32, i32)) -> bool;
}

/// Walks the geometry line between the two cells.
///
/// Any cell strictly between the endpoints whose content blocks sight
/// stops the ray. A wall can itself be seen, but not seen through.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaySight;

impl VisibilityEngine for RaySight {
    fn line_of_sight(&self, map: &Map, from: (i32, i32), to: (i32, i32)) -> bool {
        if !map.contains(from.0, from.1) || !map.contains(to.0, to.1) {
            return false;
        }
        let line = map.geometry().line(from, to);
        let interior = line.len().saturating_sub(1);
        line.iter()
            .take(interior)
            .skip(1)
            .all(|&(x, y)| map.content(x, y).is_some_and(|c| !c.blocks_sight()))
    }
}

/// Cells visible from one origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FovMask {
    grid: Grid,
    origin: (i32, i32),
    visible: Vec<bool>,
}

impl FovMask {
    /// The cell the mask was computed from.
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// Whether `(x, y)` is visible. False outside the map.
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.visible[i])
    }

    /// Number of visible cells.
    pub fn count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Visible cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.grid
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(xy, &v)| v.then_some(xy))
    }
}

/// Visibility from `origin` to every cell within `radius` steps.
///
/// A radius of 0 means unlimited. An origin outside the map sees nothing.
pub fn compute_fov(
    engine: &dyn VisibilityEngine,
    map: &Map,
    origin: (i32, i32),
    radius: u32,
) -> FovMask {
    let grid = *map.grid();
    let geometry = map.geometry();
    let mut visible = vec![false; grid.cell_count()];
    if map.contains(origin.0, origin.1) {
        for (i, xy) in grid.iter().enumerate() {
            let in_range = radius == 0 || geometry.distance(origin, xy) <= radius;
            visible[i] = in_range && engine.line_of_sight(map, origin, xy);
        }
    }
    FovMask {
        grid,
        origin,
        visible,
    }
}
