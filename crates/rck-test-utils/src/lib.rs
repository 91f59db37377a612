//! Stub collaborators and map fixtures for RCK development.
//!
//! Provides a [`StubRoster`] standing in for the character and mob
//! managers, a [`ClearSight`] engine that ignores walls, and builders in
//! [`fixtures`] that wire them into a ready [`MapManager`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, MutexGuard};

use rck_core::{Arena, EntityDirectory, EntityHandle, EntityKind, EntityRef};
use rck_map::{Map, MapManager, VisibilityEngine};

pub use fixtures::{dungeon_5x5, linked_dungeons, manager, manager_with, Harness};

/// What the roster stores per entity.
#[derive(Clone, Debug, PartialEq)]
pub struct StubEntity {
    pub name: String,
    pub speed: f64,
}

/// An [`EntityDirectory`] backed by a generation-checked [`Arena`].
///
/// Handles stay valid until [`despawn`](StubRoster::despawn); after that
/// the map layer must reject them.
pub struct StubRoster {
    kind: EntityKind,
    entities: Mutex<Arena<StubEntity>>,
}

impl StubRoster {
    pub fn new(kind: EntityKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            entities: Mutex::new(Arena::new()),
        })
    }

    pub fn characters() -> Arc<Self> {
        Self::new(EntityKind::Character)
    }

    pub fn mobs() -> Arc<Self> {
        Self::new(EntityKind::Mob)
    }

    fn lock(&self) -> MutexGuard<'_, Arena<StubEntity>> {
        self.entities
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create an entity and return its typed reference.
    pub fn spawn(&self, name: impl Into<String>, speed: f64) -> EntityRef {
        let handle = self.lock().insert(StubEntity {
            name: name.into(),
            speed,
        });
        EntityRef {
            kind: self.kind,
            handle,
        }
    }

    /// Destroy an entity. Its handle goes stale.
    pub fn despawn(&self, entity: EntityRef) -> Option<StubEntity> {
        self.lock().remove(entity.handle)
    }

    pub fn set_speed(&self, entity: EntityRef, speed: f64) {
        if let Some(e) = self.lock().get_mut(entity.handle) {
            e.speed = speed;
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl EntityDirectory for StubRoster {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn owns(&self, handle: EntityHandle) -> bool {
        self.lock().contains(handle)
    }

    fn speed(&self, handle: EntityHandle) -> Option<f64> {
        self.lock().get(handle).map(|e| e.speed)
    }

    fn label(&self, handle: EntityHandle) -> Option<String> {
        self.lock().get(handle).map(|e| e.name.clone())
    }
}

/// Sees every in-bounds cell from every other, walls included.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClearSight;

impl VisibilityEngine for ClearSight {
    fn line_of_sight(&self, map: &Map, from: (i32, i32), to: (i32, i32)) -> bool {
        map.contains(from.0, from.1) && map.contains(to.0, to.1)
    }
}

/// Positions of every entity on `map`, for assertions.
pub fn positions_on(manager: &MapManager, map: rck_core::MapId) -> Vec<(EntityRef, (i32, i32))> {
    manager
        .occupants(map)
        .map(|list| list.into_iter().map(|(e, at)| (e, at.xy())).collect())
        .unwrap_or_default()
}
