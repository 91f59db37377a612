//! Generation-checked slot arena for entity records.
//!
//! Entity managers keep their records in an [`Arena`] and hand out
//! [`EntityHandle`]s. A destroyed entity's handle carries a stale
//! generation and resolves to `None` instead of silently aliasing
//! whatever record later reuses the slot. Double-remove is a no-op.

use crate::id::EntityHandle;

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// A slot+generation arena mapping [`EntityHandle`]s to owned records.
///
/// Reuses slots via a free list. Generation counters increment on removal.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live: usize,
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Insert a record and return its handle.
    pub fn insert(&mut self, value: T) -> EntityHandle {
        self.live += 1;
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            EntityHandle::new(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                data: Some(value),
            });
            EntityHandle::new(slot_idx, 0)
        }
    }

    /// Borrow the record behind a handle.
    ///
    /// Returns `None` if the handle is stale or was never issued.
    pub fn get(&self, handle: EntityHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.data.as_ref()
    }

    /// Mutably borrow the record behind a handle.
    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.data.as_mut()
    }

    /// Whether `handle` names a live record.
    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Remove the record behind a handle, returning it.
    ///
    /// A slot whose generation would wrap back to 0 is retired instead of
    /// being returned to the free list, so a handle from the slot's first
    /// lifetime can never resolve again.
    pub fn remove(&mut self, handle: EntityHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        let value = slot.data.take()?;
        self.live -= 1;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(handle.index());
        }
        Some(value)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the arena holds no live records.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live records with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.data
                .as_ref()
                .map(|v| (EntityHandle::new(i as u32, slot.generation), v))
        })
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn insert_get_round_trip() {
        let mut arena = Arena::new();
        let h = arena.insert(42i32);
        assert_eq!(arena.get(h), Some(&42));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn get_mut_modifies_value() {
        let mut arena = Arena::new();
        let h = arena.insert(10i32);
        if let Some(v) = arena.get_mut(h) {
            *v = 20;
        }
        assert_eq!(arena.get(h), Some(&20));
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut arena = Arena::new();
        let h1 = arena.insert("goblin");
        assert_eq!(arena.remove(h1), Some("goblin"));
        let h2 = arena.insert("orc");
        assert_eq!(h1.index(), h2.index());
        assert_ne!(h1.generation(), h2.generation());
        assert_eq!(arena.get(h1), None);
        assert_eq!(arena.get(h2), Some(&"orc"));
    }

    #[test]
    fn double_remove_is_noop() {
        let mut arena = Arena::new();
        let h = arena.insert(1u8);
        assert_eq!(arena.remove(h), Some(1));
        assert_eq!(arena.remove(h), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn never_issued_handle_is_none() {
        let arena: Arena<i32> = Arena::new();
        assert!(!arena.contains(EntityHandle::new(999, 0)));
    }

    #[test]
    fn wrapped_generation_retires_slot() {
        let mut arena = Arena::new();
        let h = arena.insert(1i32);
        arena.remove(h);
        arena.slots[0].generation = u32::MAX;
        let h2 = arena.insert(2i32);
        assert_eq!(h2.generation(), u32::MAX);
        arena.remove(h2);
        assert_eq!(arena.slots[0].generation, 0);
        assert!(!arena.free_list.contains(&0));
        assert!(!arena.contains(EntityHandle::new(0, 0)));
        let h3 = arena.insert(3i32);
        assert_ne!(h3.index(), 0);
    }

    #[test]
    fn iter_skips_removed() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        arena.remove(a);
        let live: Vec<_> = arena.iter().collect();
        assert_eq!(live, vec![(b, &'b')]);
    }

    proptest! {
        #[test]
        fn live_count_tracks_inserts_and_removes(
            ops in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut arena = Arena::new();
            let mut handles = Vec::new();
            for insert in ops {
                if insert || handles.is_empty() {
                    handles.push(arena.insert(()));
                } else if let Some(h) = handles.pop() {
                    prop_assert!(arena.remove(h).is_some());
                }
            }
            prop_assert_eq!(arena.len(), handles.len());
            for h in handles {
                prop_assert!(arena.contains(h));
            }
        }
    }
}
