//! A single bounded grid of cells.

use crate::cell::Cell;
use crate::content::{Content, MapKind};
use indexmap::IndexMap;
use rck_core::{MapId, Position, QueryError, RegionCoord, TransitionTarget};
use rck_space::{Geometry, Grid};

/// Where a spawned local map came from on the region map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionOrigin {
    /// The region cell the map was spawned for.
    pub coord: RegionCoord,
    /// The local cell that leads back to the region.
    pub entry: (i32, i32),
}

/// A rectangular grid of [`Cell`]s with its transition table.
///
/// Cells are stored row-major. The transition table maps a cell index
/// to that cell's target and is the only place targets are recorded;
/// the map manager keeps it symmetric across maps.
#[derive(Clone, Debug)]
pub struct Map {
    id: MapId,
    kind: MapKind,
    grid: Grid,
    cells: Vec<Cell>,
    transitions: IndexMap<usize, TransitionTarget>,
    origin: Option<RegionOrigin>,
}

impl Map {
    /// A map from row-major content tags. Missing trailing cells are empty.
    pub(crate) fn from_contents(
        id: MapId,
        kind: MapKind,
        grid: Grid,
        contents: impl IntoIterator<Item = Content>,
    ) -> Self {
        let mut cells: Vec<Cell> = contents
            .into_iter()
            .take(grid.cell_count())
            .map(Cell::with_content)
            .collect();
        cells.resize_with(grid.cell_count(), Cell::default);
        Self {
            id,
            kind,
            grid,
            cells,
            transitions: IndexMap::new(),
            origin: None,
        }
    }

    /// Registry id.
    pub fn id(&self) -> MapId {
        self.id
    }

    /// Scale and geometry class.
    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// Geometry fixed by the map kind.
    pub fn geometry(&self) -> Geometry {
        self.kind.geometry()
    }

    /// Whether the map is outdoors.
    pub fn is_outdoor(&self) -> bool {
        self.kind.is_outdoor()
    }

    /// Bounds.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Whether `(x, y)` lies inside the map.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.grid.contains(x, y)
    }

    /// The position `(x, y)` on this map.
    pub fn position(&self, x: i32, y: i32) -> Position {
        Position::new(self.id, x, y)
    }

    /// Cell at `(x, y)`.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.grid.index(x, y).map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.grid.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Content tag at `(x, y)`.
    pub fn content(&self, x: i32, y: i32) -> Option<Content> {
        self.cell(x, y).map(Cell::content)
    }

    /// Row-major index of `(x, y)`, or the out-of-bounds error.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, QueryError> {
        self.grid.index(x, y).ok_or(QueryError::OutOfBounds {
            at: self.position(x, y),
            width: self.width(),
            height: self.height(),
        })
    }

    /// Where the transition at `(x, y)` leads.
    pub fn transition(&self, x: i32, y: i32) -> Option<TransitionTarget> {
        let idx = self.grid.index(x, y)?;
        self.transitions.get(&idx).copied()
    }

    /// Every linked transition cell and its target, in link order.
    pub fn transitions(&self) -> impl Iterator<Item = (Position, TransitionTarget)> + '_ {
        self.transitions.iter().map(move |(&idx, &target)| {
            let (x, y) = self.grid.coords(idx);
            (self.position(x, y), target)
        })
    }

    pub(crate) fn set_transition(&mut self, idx: usize, target: TransitionTarget) {
        self.transitions.insert(idx, target);
    }

    /// The region cell this map was spawned for, if any.
    pub fn origin(&self) -> Option<RegionOrigin> {
        self.origin
    }

    pub(crate) fn set_origin(&mut self, origin: RegionOrigin) {
        self.origin = Some(origin);
    }

    /// Render content back to map text, one string per row.
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width() as usize)
            .map(|row| row.iter().map(|c| c.content().glyph()).collect())
            .collect()
    }
}
