use rck_space::{Geometry, Grid, HexDirection, SquareDirection, Topology};

#[test]
fn square_directions_follow_table_order() {
    for dir in SquareDirection::ALL {
        assert_eq!(Geometry::Square.step(5, 5, dir.index()), {
            let (dx, dy) = dir.offset();
            Some((5 + dx, 5 + dy))
        });
    }
}

#[test]
fn hex_directions_follow_row_parity() {
    for y in [4, 5] {
        for dir in HexDirection::ALL {
            let (dx, dy) = dir.offset(y);
            assert_eq!(Geometry::Hex.step(3, y, dir.index()), Some((3 + dx, y + dy)));
        }
    }
}

#[test]
fn step_then_bounds_check_flags_edges() {
    let grid = Grid::new(4, 3).unwrap();
    for geometry in [Geometry::Square, Geometry::Hex] {
        for (x, y) in grid.iter() {
            for d in 0..geometry.direction_count() {
                let (nx, ny) = geometry.step(x, y, d).unwrap();
                let inside = nx >= 0 && nx < 4 && ny >= 0 && ny < 3;
                assert_eq!(grid.contains(nx, ny), inside);
                assert_eq!(grid.index(nx, ny).is_some(), inside);
            }
        }
    }
}

#[test]
fn hex_walk_around_returns_home() {
    // Walking one step in each direction in table order traces a hexagon
    // around the start and ends one step right-up of where it began.
    let start = (4, 4);
    let mut at = Geometry::Hex.step(start.0, start.1, HexDirection::RightUp.index()).unwrap();
    let ring = [
        HexDirection::RightDown,
        HexDirection::LeftDown,
        HexDirection::Left,
        HexDirection::LeftUp,
        HexDirection::RightUp,
        HexDirection::Right,
    ];
    for dir in ring {
        at = Geometry::Hex.step(at.0, at.1, dir.index()).unwrap();
        assert_eq!(Geometry::Hex.distance(start, at), 1, "left the ring at {dir:?}");
    }
    assert_eq!(Geometry::Hex.step(start.0, start.1, HexDirection::RightUp.index()), Some(at));
}
