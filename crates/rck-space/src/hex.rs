//! Hex grid in odd-row-shifted offset coordinates.

use crate::direction::{HEX_OFFSETS_EVEN, HEX_OFFSETS_ODD};
use crate::topology::Topology;

/// Hex-grid geometry used by wilderness and region maps.
///
/// Cells are stored in offset coordinates `(x, y)` with odd rows shifted
/// half a cell right, so the neighbour table depends on `y` parity.
/// Distance and lines are computed in axial coordinates, where
/// `q = x - floor(y / 2)` and `r = y`; distance is the cube distance
/// `max(|dq|, |dr|, |dq + dr|)`.
///
/// # Examples
///
/// ```
/// use rck_space::{Grid, HexOffset, Topology};
///
/// let grid = Grid::new(5, 5).unwrap();
/// // Interior cell has 6 neighbours.
/// assert_eq!(HexOffset.neighbours(&grid, 2, 2).len(), 6);
/// // Right-up from an even row stays in the same column.
/// assert_eq!(HexOffset.step(2, 2, 0), Some((2, 1)));
/// // ...but moves one column right from an odd row.
/// assert_eq!(HexOffset.step(2, 1, 0), Some((3, 0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexOffset;

impl HexOffset {
    /// Offset `(x, y)` to axial `(q, r)`.
    pub fn to_axial(x: i32, y: i32) -> (i32, i32) {
        (x - y.div_euclid(2), y)
    }

    /// Axial `(q, r)` to offset `(x, y)`.
    pub fn from_axial(q: i32, r: i32) -> (i32, i32) {
        (q + r.div_euclid(2), r)
    }

    /// Round fractional cube coordinates to the nearest hex.
    fn cube_round(q: f64, r: f64) -> (i32, i32) {
        let s = -q - r;
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();
        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();
        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        (rq as i32, rr as i32)
    }
}

impl Topology for HexOffset {
    fn direction_count(&self) -> usize {
        HEX_OFFSETS_EVEN.len()
    }

    fn offset(&self, _x: i32, y: i32, direction: usize) -> Option<(i32, i32)> {
        if y.rem_euclid(2) == 0 {
            HEX_OFFSETS_EVEN.get(direction).copied()
        } else {
            HEX_OFFSETS_ODD.get(direction).copied()
        }
    }

    fn distance(&self, a: (i32, i32), b: (i32, i32)) -> u32 {
        let (q1, r1) = Self::to_axial(a.0, a.1);
        let (q2, r2) = Self::to_axial(b.0, b.1);
        let dq = q1 - q2;
        let dr = r1 - r2;
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max((dq + dr).unsigned_abs())
    }

    fn line(&self, a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        let n = self.distance(a, b);
        if n == 0 {
            return vec![a];
        }
        let (q1, r1) = Self::to_axial(a.0, a.1);
        let (q2, r2) = Self::to_axial(b.0, b.1);
        // Nudge both ends off the hex edges so ties round consistently.
        let (q1, r1) = (q1 as f64 + 1e-6, r1 as f64 + 2e-6);
        let (q2, r2) = (q2 as f64 + 1e-6, r2 as f64 + 2e-6);
        let steps = n as f64;
        (0..=n)
            .map(|i| {
                let t = i as f64 / steps;
                let (q, r) = Self::cube_round(q1 + (q2 - q1) * t, r1 + (r2 - r1) * t);
                Self::from_axial(q, r)
            })
            .collect()
    }
}
