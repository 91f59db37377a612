//! Topology compliance test helpers.
//!
//! These functions verify that a [`Topology`] implementation satisfies
//! the invariants the map layer relies on. Reused across the backend
//! test modules (Square8, HexOffset, Geometry).

use crate::grid::Grid;
use crate::topology::Topology;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(topo: &dyn Topology, grid: &Grid) {
    for a in grid.iter() {
        assert_eq!(topo.distance(a, a), 0, "distance({a:?}, {a:?}) != 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(topo: &dyn Topology, grid: &Grid) {
    for a in grid.iter() {
        for b in grid.iter() {
            assert_eq!(
                topo.distance(a, b),
                topo.distance(b, a),
                "distance asymmetric between {a:?} and {b:?}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(topo: &dyn Topology, grid: &Grid) {
    let cells: Vec<_> = grid.iter().collect();
    for &a in &cells {
        for &b in &cells {
            for &c in &cells {
                assert!(
                    topo.distance(a, c) <= topo.distance(a, b) + topo.distance(b, c),
                    "triangle inequality violated for {a:?}, {b:?}, {c:?}"
                );
            }
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and
/// that every neighbour is exactly one step away.
pub fn assert_neighbours_symmetric(topo: &dyn Topology, grid: &Grid) {
    for (x, y) in grid.iter() {
        for nb in topo.neighbours(grid, x, y) {
            assert_eq!(topo.distance((x, y), nb), 1, "{nb:?} is not adjacent to ({x}, {y})");
            assert!(
                topo.neighbours(grid, nb.0, nb.1).contains(&(x, y)),
                "neighbour symmetry violated: {nb:?} in N(({x}, {y})) but not the reverse"
            );
        }
    }
}

/// Assert that every in-range direction index yields a step, and the
/// first out-of-range index yields `None`.
pub fn assert_direction_table_complete(topo: &dyn Topology, grid: &Grid) {
    let n = topo.direction_count();
    for (x, y) in grid.iter() {
        for d in 0..n {
            assert!(topo.step(x, y, d).is_some(), "direction {d} missing at ({x}, {y})");
        }
        assert!(topo.step(x, y, n).is_none());
    }
}

/// Assert that lines start and end at their endpoints and advance one
/// step at a time.
pub fn assert_lines_connected(topo: &dyn Topology, grid: &Grid) {
    for a in grid.iter() {
        for b in grid.iter() {
            let line = topo.line(a, b);
            assert_eq!(line.first(), Some(&a));
            assert_eq!(line.last(), Some(&b));
            for pair in line.windows(2) {
                assert_eq!(topo.distance(pair[0], pair[1]), 1, "gap in line {a:?} -> {b:?}");
            }
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(topo: &dyn Topology, grid: &Grid) {
    assert_distance_reflexive(topo, grid);
    assert_distance_symmetric(topo, grid);
    assert_distance_triangle_inequality(topo, grid);
    assert_neighbours_symmetric(topo, grid);
    assert_direction_table_complete(topo, grid);
    assert_lines_connected(topo, grid);
}
