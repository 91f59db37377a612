//! Names for loose items dropped by description rather than by id.

use indexmap::IndexMap;
use rck_core::{ItemCatalog, ItemId};

/// Mints [`ItemId`]s for named items and describes them.
///
/// Ids are minted from `first_id` upward and never reused, so they can
/// share an id space with an external item manager that hands out
/// lower ids.
#[derive(Clone, Debug)]
pub struct ItemLedger {
    next: Option<u32>,
    names: IndexMap<ItemId, String>,
}

impl ItemLedger {
    /// Default first id, high enough to stay clear of catalog ids.
    pub const DEFAULT_FIRST_ID: u32 = 1 << 24;

    /// A ledger that mints ids starting at `first_id`.
    pub fn starting_at(first_id: u32) -> Self {
        Self {
            next: Some(first_id),
            names: IndexMap::new(),
        }
    }

    /// Register a name and return its new id.
    ///
    /// Returns `None` once the id space above `first_id` is used up.
    pub fn mint(&mut self, name: impl Into<String>) -> Option<ItemId> {
        let id = ItemId(self.next?);
        self.next = self.next.and_then(|n| n.checked_add(1));
        self.names.insert(id, name.into());
        Some(id)
    }

    /// Name of a minted item.
    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.names.get(&item).map(String::as_str)
    }

    /// Number of minted items.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing has been minted.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ItemLedger {
    fn default() -> Self {
        Self::starting_at(Self::DEFAULT_FIRST_ID)
    }
}

impl ItemCatalog for ItemLedger {
    fn describe(&self, item: ItemId) -> Option<String> {
        self.name(item).map(str::to_owned)
    }
}
