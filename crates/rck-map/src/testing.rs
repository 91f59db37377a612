//! In-crate stubs for unit tests.

use crate::config::MapConfig;
use crate::content::RegionTerrain;
use crate::manager::{Collaborators, MapManager};
use crate::region::RegionMap;
use rck_core::{Arena, EntityDirectory, EntityHandle, EntityKind};
use std::sync::{Arc, Mutex};

pub(crate) struct Stub {
    kind: EntityKind,
    speeds: Mutex<Arena<f64>>,
}

impl Stub {
    pub(crate) fn new(kind: EntityKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            speeds: Mutex::new(Arena::new()),
        })
    }

    pub(crate) fn spawn(&self, speed: f64) -> EntityHandle {
        self.speeds.lock().unwrap().insert(speed)
    }

    pub(crate) fn despawn(&self, handle: EntityHandle) {
        self.speeds.lock().unwrap().remove(handle);
    }
}

impl EntityDirectory for Stub {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn owns(&self, handle: EntityHandle) -> bool {
        self.speeds.lock().unwrap().contains(handle)
    }

    fn speed(&self, handle: EntityHandle) -> Option<f64> {
        self.speeds.lock().unwrap().get(handle).copied()
    }
}

pub(crate) struct Fixture {
    pub manager: MapManager,
    pub characters: Arc<Stub>,
    pub mobs: Arc<Stub>,
}

pub(crate) fn fixture_with(config: MapConfig, region: RegionMap) -> Fixture {
    let characters = Stub::new(EntityKind::Character);
    let mobs = Stub::new(EntityKind::Mob);
    let manager = MapManager::new(
        config,
        region,
        Collaborators::new(characters.clone(), mobs.clone()),
    )
    .unwrap();
    Fixture {
        manager,
        characters,
        mobs,
    }
}

pub(crate) fn fixture() -> Fixture {
    fixture_with(
        MapConfig::default(),
        RegionMap::new(4, 4, RegionTerrain::Plains).unwrap(),
    )
}
