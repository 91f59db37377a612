//! Core types and traits for the RCK map layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the geometry and map crates: strongly-typed
//! ids, positions, generation-checked entity handles, error enums, and
//! the collaborator traits through which the map layer consults the
//! external entity and item managers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod id;
pub mod traits;

pub use arena::Arena;
pub use error::{BuildError, QueryError};
pub use id::{
    EntityHandle, EntityKind, EntityRef, ItemId, MapId, PartyId, Position, RegionCoord,
    TransitionTarget,
};
pub use traits::{EntityDirectory, ItemCatalog};
