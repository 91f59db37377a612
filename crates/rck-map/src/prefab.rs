//! Hand-authored map layouts used by region spawning.

use crate::content::{Content, MapKind};
use crate::text::parse_rows;
use rck_core::BuildError;
use rck_space::Grid;

/// A fixed map layout with a designated entry cell.
///
/// The entry is where a party arriving from the region map appears and
/// where the link back to the region is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefab {
    /// Display name.
    pub name: String,
    /// Kind of map built from the layout.
    pub kind: MapKind,
    /// Map text rows.
    pub rows: Vec<String>,
    /// Entry cell `(x, y)`.
    pub entry: (i32, i32),
}

impl Prefab {
    /// A prefab from its parts.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        kind: MapKind,
        rows: impl IntoIterator<Item = S>,
        entry: (i32, i32),
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            rows: rows.into_iter().map(Into::into).collect(),
            entry,
        }
    }

    /// A small walled ruin with a door on the south wall.
    pub fn ruins() -> Self {
        Self::new(
            "ruins",
            MapKind::Dungeon,
            [
                "############",
                "#..........#",
                "#..^...T...#",
                "#...####...#",
                "#...#..#...#",
                "#..........#",
                "#####+######",
            ],
            (5, 6),
        )
    }

    /// Parse the layout and check the entry cell.
    ///
    /// The entry must lie inside the layout on a cell that does not block
    /// movement.
    pub fn parse(&self) -> Result<(Grid, Vec<Content>), BuildError> {
        let (grid, cells) = parse_rows(&self.rows)?;
        let (x, y) = self.entry;
        let usable = grid
            .index(x, y)
            .is_some_and(|i| !cells[i].blocks_movement());
        if !usable {
            return Err(BuildError::InvalidEntry { x, y });
        }
        Ok((grid, cells))
    }
}
