//! The per-map geometry capability.

use crate::hex::HexOffset;
use crate::square8::Square8;
use crate::topology::Topology;

/// Which [`Topology`] a map uses, fixed when the map is built.
///
/// Dungeons are square; wilderness and region maps are hex. Call sites
/// ask the map for its geometry instead of re-checking map flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// 8-connected square grid.
    Square,
    /// Odd-row-shifted hex grid.
    Hex,
}

impl Geometry {
    fn topology(&self) -> &'static dyn Topology {
        match self {
            Self::Square => &Square8,
            Self::Hex => &HexOffset,
        }
    }
}

impl Topology for Geometry {
    fn direction_count(&self) -> usize {
        self.topology().direction_count()
    }

    fn offset(&self, x: i32, y: i32, direction: usize) -> Option<(i32, i32)> {
        self.topology().offset(x, y, direction)
    }

    fn distance(&self, a: (i32, i32), b: (i32, i32)) -> u32 {
        self.topology().distance(a, b)
    }

    fn line(&self, a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        self.topology().line(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::grid::Grid;

    #[test]
    fn dispatch_matches_backends() {
        assert_eq!(Geometry::Square.direction_count(), 8);
        assert_eq!(Geometry::Hex.direction_count(), 6);
        assert_eq!(Geometry::Square.step(3, 3, 4), Square8.step(3, 3, 4));
        assert_eq!(Geometry::Hex.step(3, 3, 0), HexOffset.step(3, 3, 0));
        assert_eq!(Geometry::Hex.distance((0, 0), (0, 4)), 4);
        assert_eq!(Geometry::Square.distance((0, 0), (0, 4)), 4);
    }

    #[test]
    fn compliance_both_geometries() {
        let grid = Grid::new(5, 4).unwrap();
        compliance::run_full_compliance(&Geometry::Square, &grid);
        compliance::run_full_compliance(&Geometry::Hex, &grid);
    }
}
