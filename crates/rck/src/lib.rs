//! RCK: a multi-scale map layer for roguelike and tabletop games.
//!
//! This is the facade crate that re-exports the public API of the RCK
//! sub-crates. Most users only need `rck` as a dependency.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use rck::prelude::*;
//!
//! // A one-entity character roster.
//! struct Roster(Mutex<Arena<f64>>);
//! impl EntityDirectory for Roster {
//!     fn kind(&self) -> EntityKind { EntityKind::Character }
//!     fn owns(&self, h: EntityHandle) -> bool { self.0.lock().unwrap().contains(h) }
//!     fn speed(&self, h: EntityHandle) -> Option<f64> {
//!         self.0.lock().unwrap().get(h).copied()
//!     }
//! }
//! struct NoMobs;
//! impl EntityDirectory for NoMobs {
//!     fn kind(&self) -> EntityKind { EntityKind::Mob }
//!     fn owns(&self, _: EntityHandle) -> bool { false }
//!     fn speed(&self, _: EntityHandle) -> Option<f64> { None }
//! }
//!
//! let roster = Arc::new(Roster(Mutex::new(Arena::new())));
//! let hero = EntityRef::character(roster.0.lock().unwrap().insert(30.0));
//!
//! let region = RegionMap::new(4, 4, RegionTerrain::Plains).unwrap();
//! let collaborators = Collaborators::new(roster.clone(), Arc::new(NoMobs));
//! let mut maps = MapManager::new(MapConfig::default(), region, collaborators).unwrap();
//!
//! let room = maps.build_map_from_text(&["...", ".#.", "..."], false).unwrap();
//! maps.place(hero, Position::new(room, 0, 0)).unwrap();
//! let outcome = maps.step(hero, SquareDirection::Right.index()).unwrap();
//! assert_eq!(outcome, StepOutcome::Moved(Position::new(room, 1, 0)));
//! assert!(maps.walk_cost(room, (1, 0), (1, 1)).unwrap().is_infinite());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rck-core` | IDs, positions, errors, collaborator traits |
//! | [`space`] | `rck-space` | Grid bounds, square and hex movement tables |
//! | [`map`] | `rck-map` | Map manager, region map, paths, visibility |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`rck-core`).
///
/// Contains positions, entity handles, the [`types::Arena`] used by entity
/// managers, and the collaborator traits [`types::EntityDirectory`] and
/// [`types::ItemCatalog`].
pub use rck_core as types;

/// Grid geometry (`rck-space`).
///
/// Provides the [`space::Topology`] trait with [`space::Square8`] for
/// dungeons and [`space::HexOffset`] for outdoor maps.
pub use rck_space as space;

/// The map layer itself (`rck-map`).
///
/// [`map::MapManager`] owns every local map and the [`map::RegionMap`].
pub use rck_map as map;

/// Common imports for typical RCK usage.
///
/// ```rust
/// use rck::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rck_core::{
        Arena, EntityDirectory, EntityHandle, EntityKind, EntityRef, ItemCatalog, ItemId, MapId,
        PartyId, Position, RegionCoord, TransitionTarget,
    };

    // Errors
    pub use rck_core::{BuildError, QueryError};
    pub use rck_map::ConfigError;

    // Space
    pub use rck_space::{Geometry, HexDirection, SquareDirection, Topology};

    // Maps
    pub use rck_map::{
        Collaborators, Content, MapConfig, MapKind, MapManager, RegionMap, RegionTerrain,
        StepOutcome, VisibilityEngine, NON_TRAVERSABLE,
    };
}
