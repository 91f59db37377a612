//! Ready-made managers and maps.
//!
//! - [`manager`]: default config, 8x8 plains region, [`RaySight`](rck_map::RaySight)
//! - [`manager_with`]: custom config, region, and sight engine
//! - [`dungeon_5x5`]: an empty 5x5 dungeon
//! - [`linked_dungeons`]: two dungeons joined by stairs

use std::sync::Arc;

use rck_core::{MapId, Position};
use rck_map::{
    Collaborators, MapConfig, MapKind, MapManager, RegionMap, RegionTerrain, VisibilityEngine,
};

use crate::StubRoster;

/// A manager plus the rosters it consults.
pub struct Harness {
    pub manager: MapManager,
    pub characters: Arc<StubRoster>,
    pub mobs: Arc<StubRoster>,
}

pub fn manager_with(
    config: MapConfig,
    region: RegionMap,
    sight: impl VisibilityEngine + 'static,
) -> Harness {
    let characters = StubRoster::characters();
    let mobs = StubRoster::mobs();
    let collaborators =
        Collaborators::new(characters.clone(), mobs.clone()).with_sight(sight);
    let manager = MapManager::new(config, region, collaborators)
        .expect("fixture config must validate");
    Harness {
        manager,
        characters,
        mobs,
    }
}

pub fn manager() -> Harness {
    let region = RegionMap::new(8, 8, RegionTerrain::Plains).expect("8x8 region");
    manager_with(MapConfig::default(), region, rck_map::RaySight)
}

pub fn dungeon_5x5(harness: &mut Harness) -> MapId {
    harness
        .manager
        .build_empty_map(5, 5, MapKind::Dungeon)
        .expect("5x5 dungeon")
}

/// Two 5x5 dungeons with stairs at `(4, 4)` on the first and `(0, 0)`
/// on the second.
pub fn linked_dungeons(harness: &mut Harness) -> (Position, Position) {
    let a = dungeon_5x5(harness);
    let b = dungeon_5x5(harness);
    let pa = Position::new(a, 4, 4);
    let pb = Position::new(b, 0, 0);
    harness
        .manager
        .connect_maps(pa, pb)
        .expect("fresh dungeons link");
    (pa, pb)
}
