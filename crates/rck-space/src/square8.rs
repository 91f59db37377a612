//! Square grid with 8-connected movement (cardinal + diagonal).

use crate::direction::SQUARE_OFFSETS;
use crate::topology::Topology;

/// Square-grid geometry used by dungeon maps.
///
/// One cell is five feet. Diagonal steps count as one step, so distance
/// is Chebyshev (L-inf), consistent with 8-connected movement. Lines
/// are Bresenham.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square8;

impl Topology for Square8 {
    fn direction_count(&self) -> usize {
        SQUARE_OFFSETS.len()
    }

    fn offset(&self, _x: i32, _y: i32, direction: usize) -> Option<(i32, i32)> {
        SQUARE_OFFSETS.get(direction).copied()
    }

    fn distance(&self, a: (i32, i32), b: (i32, i32)) -> u32 {
        let dx = (a.0 - b.0).unsigned_abs();
        let dy = (a.1 - b.1).unsigned_abs();
        dx.max(dy)
    }

    fn line(&self, a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        let (mut x, mut y) = a;
        let dx = (b.0 - a.0).abs();
        let dy = -(b.1 - a.1).abs();
        let sx = if a.0 < b.0 { 1 } else { -1 };
        let sy = if a.1 < b.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut out = Vec::with_capacity(dx.max(-dy) as usize + 1);
        loop {
            out.push((x, y));
            if (x, y) == b {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        out
    }
}
