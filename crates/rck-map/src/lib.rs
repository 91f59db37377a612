//! The spatial substrate of the game: maps, the region map, and the
//! queries every other system asks of them.
//!
//! [`MapManager`] owns every [`Map`] plus the single [`RegionMap`]. It
//! builds maps (empty, from text, from a [`Prefab`], or procedurally
//! from a region cell), links them with bidirectional transitions,
//! positions characters and mobs under an at-most-one-per-kind rule,
//! keeps LIFO item piles, and answers walk-cost, movement-time,
//! field-of-view, and path queries.
//!
//! Entities and items are owned elsewhere. The manager consults the
//! character and mob managers through [`EntityDirectory`] handles injected
//! at construction, and checks every handle's generation before acting
//! on it.
//!
//! [`EntityDirectory`]: rck_core::EntityDirectory

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod content;
pub mod cost;
mod generate;
pub mod items;
pub mod manager;
pub mod map;
mod occupancy;
pub mod path;
pub mod prefab;
mod query;
pub mod region;
pub mod sight;
pub mod snapshot;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use cell::Cell;
pub use config::{ConfigError, MapConfig, ScaleConfig, TerrainCosts};
pub use content::{Content, MapKind, RegionTerrain};
pub use cost::{MapCostView, PathCost, NON_TRAVERSABLE};
pub use items::ItemLedger;
pub use manager::{Collaborators, MapManager, PartyMove};
pub use map::{Map, RegionOrigin};
pub use occupancy::StepOutcome;
pub use path::Path;
pub use prefab::Prefab;
pub use region::{RegionCell, RegionMap};
pub use sight::{FovMask, RaySight, VisibilityEngine};
pub use snapshot::{CellView, MapSnapshot};
