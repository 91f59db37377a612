//! Walk-cost callback shared by path search and external engines.

use crate::config::TerrainCosts;
use crate::content::Content;
use crate::map::Map;

/// Cost reported for moves that cannot be made.
pub const NON_TRAVERSABLE: f32 = f32::INFINITY;

/// Per-step cost function over one grid.
///
/// This is the callback a path engine drives. Implementations return
/// [`NON_TRAVERSABLE`] for moves out of bounds or into blocking cells and
/// a positive finite cost otherwise.
pub trait PathCost {
    /// Cost of moving from `from` into the adjacent cell `to`.
    fn cost(&self, from: (i32, i32), to: (i32, i32)) -> f32;

    /// Lower bound on any finite step cost, used to keep heuristics
    /// admissible. Default: 1.
    fn min_step_cost(&self) -> f32 {
        1.0
    }
}

/// [`PathCost`] over a single map's content.
#[derive(Clone, Copy, Debug)]
pub struct MapCostView<'a> {
    map: &'a Map,
    costs: &'a TerrainCosts,
}

impl<'a> MapCostView<'a> {
    /// View `map` through a cost table.
    pub fn new(map: &'a Map, costs: &'a TerrainCosts) -> Self {
        Self { map, costs }
    }

    /// The map being costed.
    pub fn map(&self) -> &'a Map {
        self.map
    }
}

impl PathCost for MapCostView<'_> {
    fn cost(&self, from: (i32, i32), to: (i32, i32)) -> f32 {
        if !self.map.contains(from.0, from.1) {
            return NON_TRAVERSABLE;
        }
        match self.map.content(to.0, to.1) {
            Some(content) => self.costs.content_cost(self.map.kind(), content),
            None => NON_TRAVERSABLE,
        }
    }

    fn min_step_cost(&self) -> f32 {
        let kind = self.map.kind();
        Content::ALL
            .into_iter()
            .map(|c| self.costs.content_cost(kind, c))
            .filter(|c| c.is_finite())
            .fold(NON_TRAVERSABLE, f32::min)
            .min(1.0)
    }
}
