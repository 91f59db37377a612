//! Collaborator traits implemented by the external entity and item managers.
//!
//! The map layer never owns entities or items; it only positions them.
//! These traits are the narrow surface it consults, injected into the
//! map manager at construction so tests can supply stubs.

use crate::id::{EntityHandle, EntityKind, ItemId};

/// The map layer's view of a character or mob manager.
///
/// `Send + Sync` so a directory can be shared behind an `Arc` with the
/// systems that mutate it between turns.
pub trait EntityDirectory: Send + Sync {
    /// Which kind of entity this manager owns.
    fn kind(&self) -> EntityKind;

    /// Whether `handle` names a live entity of this manager.
    fn owns(&self, handle: EntityHandle) -> bool;

    /// Movement speed in feet per round, or `None` if the handle does
    /// not resolve.
    fn speed(&self, handle: EntityHandle) -> Option<f64>;

    /// A short display label for debug dumps.
    ///
    /// Defaults to `None`; dumps then fall back to the handle itself.
    fn label(&self, handle: EntityHandle) -> Option<String> {
        let _ = handle;
        None
    }
}

/// Describes items for UI purposes.
pub trait ItemCatalog {
    /// Description of `item`, or `None` if the catalog does not know it.
    fn describe(&self, item: ItemId) -> Option<String>;
}
