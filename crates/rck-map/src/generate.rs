//! Local map layouts for region cells.

use crate::config::MapConfig;
use crate::content::{Content, MapKind, RegionTerrain};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rck_core::{BuildError, RegionCoord};
use rck_space::Grid;

/// Cell contents and entry point for a map about to be registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LocalLayout {
    pub kind: MapKind,
    pub grid: Grid,
    pub cells: Vec<Content>,
    pub entry: (i32, i32),
}

/// Per-cell RNG seed. Depends only on the base seed and the coordinate,
/// so spawn order never changes what a cell generates.
pub(crate) fn local_seed(base: u64, coord: RegionCoord) -> u64 {
    let packed = (u64::from(coord.x as u32) << 32) | u64::from(coord.y as u32);
    // splitmix64 finaliser
    let mut z = (base ^ packed).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Bottom-row centre.
pub(crate) fn default_entry(grid: &Grid) -> (i32, i32) {
    ((grid.width() / 2) as i32, grid.height() as i32 - 1)
}

/// Layout for the region cell at `coord`: the configured prefab for its
/// terrain, or a seeded wilderness scatter.
pub(crate) fn layout_for(
    config: &MapConfig,
    coord: RegionCoord,
    terrain: RegionTerrain,
) -> Result<LocalLayout, BuildError> {
    if let Some(prefab) = config.prefabs.get(&terrain) {
        let (grid, cells) = prefab.parse()?;
        return Ok(LocalLayout {
            kind: prefab.kind,
            grid,
            cells,
            entry: prefab.entry,
        });
    }

    let (w, h) = config.local_size(terrain);
    let grid = Grid::new(w, h)?;
    let (trees, rocks) = terrain.scatter();
    let mut rng = ChaCha8Rng::seed_from_u64(local_seed(config.seed, coord));
    let cells = (0..grid.cell_count())
        .map(|_| {
            let roll: f64 = rng.random();
            if roll < trees {
                Content::Tree
            } else if roll < trees + rocks {
                Content::Rocks
            } else {
                Content::None
            }
        })
        .collect();
    Ok(LocalLayout {
        kind: MapKind::Wilderness,
        grid,
        cells,
        entry: default_entry(&grid),
    })
}
