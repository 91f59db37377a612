//! A* path search over a map's geometry.

use crate::cost::PathCost;
use rck_space::{Grid, Topology};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A found route, start and goal included.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// Cells from start to goal.
    pub steps: Vec<(i32, i32)>,
    /// Sum of step costs.
    pub cost: f32,
}

impl Path {
    /// Number of moves (one less than the number of cells).
    pub fn len(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// True when start and goal coincide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug)]
struct Frontier {
    priority: f32,
    index: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.index.cmp(&other.index))
    }
}

/// Cheapest route from `start` to `goal` on `grid`.
///
/// Neighbours come from `topology` in direction-table order; the
/// heuristic is geometry distance scaled by `cost.min_step_cost()`.
/// Returns `None` when either end is out of bounds or no finite-cost
/// route exists.
pub fn find_path(
    topology: &dyn Topology,
    grid: &Grid,
    cost: &dyn PathCost,
    start: (i32, i32),
    goal: (i32, i32),
) -> Option<Path> {
    let start_idx = grid.index(start.0, start.1)?;
    let goal_idx = grid.index(goal.0, goal.1)?;
    let scale = cost.min_step_cost();
    let heuristic = |p: (i32, i32)| topology.distance(p, goal) as f32 * scale;

    let mut best = vec![f32::INFINITY; grid.cell_count()];
    let mut came_from: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut closed = vec![false; grid.cell_count()];
    let mut open = BinaryHeap::new();

    best[start_idx] = 0.0;
    open.push(Reverse(Frontier {
        priority: heuristic(start),
        index: start_idx,
    }));

    while let Some(Reverse(Frontier { index, .. })) = open.pop() {
        if index == goal_idx {
            return Some(rebuild(grid, &came_from, goal_idx, best[goal_idx]));
        }
        if closed[index] {
            continue;
        }
        closed[index] = true;
        let here = grid.coords(index);
        for next in topology.neighbours(grid, here.0, here.1) {
            let step = cost.cost(here, next);
            if !step.is_finite() {
                continue;
            }
            let Some(next_idx) = grid.index(next.0, next.1) else {
                continue;
            };
            if closed[next_idx] {
                continue;
            }
            let tentative = best[index] + step;
            if tentative < best[next_idx] {
                best[next_idx] = tentative;
                came_from[next_idx] = Some(index);
                open.push(Reverse(Frontier {
                    priority: tentative + heuristic(next),
                    index: next_idx,
                }));
            }
        }
    }
    None
}

fn rebuild(grid: &Grid, came_from: &[Option<usize>], goal: usize, cost: f32) -> Path {
    let mut steps = vec![grid.coords(goal)];
    let mut cur = goal;
    while let Some(prev) = came_from[cur] {
        steps.push(grid.coords(prev));
        cur = prev;
    }
    steps.reverse();
    Path { steps, cost }
}
