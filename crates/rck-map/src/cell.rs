//! The per-position state of a map.

use crate::content::Content;
use rck_core::{EntityHandle, EntityKind, ItemId};

/// One grid position: content tag, item pile, and occupants.
///
/// A cell holds at most one mob and at most one character. Occupant
/// handles are non-owning; the map manager keeps them consistent with
/// its reverse position index. Transition targets live in the owning
/// [`Map`](crate::Map)'s transition table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    content: Content,
    items: Vec<ItemId>,
    mob: Option<EntityHandle>,
    character: Option<EntityHandle>,
}

impl Cell {
    pub(crate) fn with_content(content: Content) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Content tag.
    pub fn content(&self) -> Content {
        self.content
    }

    pub(crate) fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Item pile, bottom first. The last element is the top of the pile.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Top of the item pile.
    pub fn top_item(&self) -> Option<ItemId> {
        self.items.last().copied()
    }

    pub(crate) fn push_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub(crate) fn pop_item(&mut self) -> Option<ItemId> {
        self.items.pop()
    }

    /// Mob standing here.
    pub fn mob(&self) -> Option<EntityHandle> {
        self.mob
    }

    /// Character standing here.
    pub fn character(&self) -> Option<EntityHandle> {
        self.character
    }

    /// Occupant of the given kind.
    pub fn occupant(&self, kind: EntityKind) -> Option<EntityHandle> {
        match kind {
            EntityKind::Mob => self.mob,
            EntityKind::Character => self.character,
        }
    }

    pub(crate) fn set_occupant(&mut self, kind: EntityKind, handle: Option<EntityHandle>) {
        match kind {
            EntityKind::Mob => self.mob = handle,
            EntityKind::Character => self.character = handle,
        }
    }

    /// True when neither kind of entity stands here.
    pub fn is_vacant(&self) -> bool {
        self.mob.is_none() && self.character.is_none()
    }
}
