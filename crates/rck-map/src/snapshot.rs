//! Read-only views handed to renderers.

use crate::content::{Content, MapKind};
use crate::map::Map;
use rck_core::{EntityHandle, ItemId, MapId, TransitionTarget};

/// What a renderer needs to draw one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Content tag.
    pub content: Content,
    /// Top of the item pile.
    pub top_item: Option<ItemId>,
    /// Number of items in the pile.
    pub item_count: usize,
    /// Mob standing here.
    pub mob: Option<EntityHandle>,
    /// Character standing here.
    pub character: Option<EntityHandle>,
    /// Where the cell's transition leads.
    pub transition: Option<TransitionTarget>,
}

impl CellView {
    /// Glyph a text renderer would draw: occupant first, then item, then
    /// content.
    pub fn glyph(&self) -> char {
        if self.character.is_some() {
            '@'
        } else if self.mob.is_some() {
            'm'
        } else if self.top_item.is_some() {
            '*'
        } else {
            self.content.glyph()
        }
    }
}

/// A detached copy of one map's visible state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapSnapshot {
    /// Map id.
    pub map: MapId,
    /// Map kind.
    pub kind: MapKind,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
}

impl MapSnapshot {
    /// Copy the current state of `map`.
    pub fn of(map: &Map) -> Self {
        let cells = map
            .grid()
            .iter()
            .zip(map.cells())
            .map(|((x, y), cell)| CellView {
                x,
                y,
                content: cell.content(),
                top_item: cell.top_item(),
                item_count: cell.items().len(),
                mob: cell.mob(),
                character: cell.character(),
                transition: map.transition(x, y),
            })
            .collect();
        Self {
            map: map.id(),
            kind: map.kind(),
            width: map.width(),
            height: map.height(),
            cells,
        }
    }

    /// Cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Option<&CellView> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Text rendering using [`CellView::glyph`].
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(CellView::glyph).collect())
            .collect()
    }
}
