//! Entity placement, movement through the grid and transitions, and
//! item piles.
//!
//! Every mutation checks first and writes second: a rejected move
//! leaves cells, the reverse index, and the entity's position exactly as
//! they were.

use rck_core::{
    EntityHandle, EntityKind, EntityRef, ItemCatalog, ItemId, MapId, Position, QueryError,
    RegionCoord, TransitionTarget,
};
use rck_space::Topology;
use tracing::trace;

use crate::manager::MapManager;

/// Where a single step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ordinary move to an adjacent cell.
    Moved(Position),
    /// Stepped onto the transition at `from` and arrived at `to`.
    Transitioned {
        /// The transition cell stepped onto.
        from: Position,
        /// The linked cell now occupied.
        to: Position,
    },
    /// Stepped onto a local map's exit to the region. The entity stays
    /// on the exit cell; moving the party is up to the caller.
    ReachedRegion(RegionCoord),
}

impl MapManager {
    // ── Resolution ─────────────────────────────────────────────────

    /// Fail unless the owning manager still recognises `entity`.
    pub fn resolve(&self, entity: EntityRef) -> Result<(), QueryError> {
        if self.directory(entity.kind).owns(entity.handle) {
            Ok(())
        } else {
            Err(QueryError::UnresolvedEntity { entity })
        }
    }

    /// Current position of a live, placed entity.
    pub fn position_of(&self, entity: EntityRef) -> Result<Position, QueryError> {
        self.resolve(entity)?;
        self.placed
            .get(&entity)
            .copied()
            .ok_or(QueryError::NotPlaced { entity })
    }

    /// Live occupant of `kind` at `at`. Handles the owning manager has
    /// destroyed read as vacant.
    fn occupant(&self, at: Position, kind: EntityKind) -> Result<Option<EntityHandle>, QueryError> {
        let map = self.map(at.map)?;
        let idx = map.index_of(at.x, at.y)?;
        Ok(map.cells()[idx]
            .occupant(kind)
            .filter(|&h| self.directory(kind).owns(h)))
    }

    // ── Occupancy ──────────────────────────────────────────────────

    /// Character standing at `at`.
    pub fn character_at(&self, at: Position) -> Result<Option<EntityHandle>, QueryError> {
        self.occupant(at, EntityKind::Character)
    }

    /// Mob standing at `at`.
    pub fn mob_at(&self, at: Position) -> Result<Option<EntityHandle>, QueryError> {
        self.occupant(at, EntityKind::Mob)
    }

    /// Whichever entity occupies `at`, preferring the character when a
    /// mob shares the cell.
    pub fn managed_entity_at(&self, at: Position) -> Result<Option<EntityRef>, QueryError> {
        if let Some(h) = self.character_at(at)? {
            return Ok(Some(EntityRef::character(h)));
        }
        Ok(self.mob_at(at)?.map(EntityRef::mob))
    }

    /// Put `entity` on `at`, moving it if it is already placed elsewhere.
    ///
    /// Rejected if the entity does not resolve, the cell blocks movement,
    /// or a different entity of the same kind already stands there.
    pub fn place(&mut self, entity: EntityRef, at: Position) -> Result<(), QueryError> {
        self.resolve(entity)?;
        self.check_enterable(entity, at)?;
        self.relocate(entity, at);
        Ok(())
    }

    /// [`place`](Self::place) for a character.
    pub fn set_character(&mut self, handle: EntityHandle, at: Position) -> Result<(), QueryError> {
        self.place(EntityRef::character(handle), at)
    }

    /// [`place`](Self::place) for a mob.
    pub fn set_mob(&mut self, handle: EntityHandle, at: Position) -> Result<(), QueryError> {
        self.place(EntityRef::mob(handle), at)
    }

    /// Take `entity` off its map and return where it was.
    ///
    /// Removing an entity that is not placed does nothing. Stale handles
    /// are accepted so destroyed entities can still be cleared.
    pub fn remove(&mut self, entity: EntityRef) -> Option<Position> {
        let at = self.placed.shift_remove(&entity)?;
        if let Ok(map) = self.map_mut(at.map) {
            if let Some(cell) = map.cell_mut(at.x, at.y) {
                if cell.occupant(entity.kind) == Some(entity.handle) {
                    cell.set_occupant(entity.kind, None);
                }
            }
        }
        trace!(%entity, %at, "entity removed");
        Some(at)
    }

    /// [`remove`](Self::remove) for a character.
    pub fn remove_character(&mut self, handle: EntityHandle) -> Option<Position> {
        self.remove(EntityRef::character(handle))
    }

    /// [`remove`](Self::remove) for a mob.
    pub fn remove_mob(&mut self, handle: EntityHandle) -> Option<Position> {
        self.remove(EntityRef::mob(handle))
    }

    /// Remove every placed entity its manager no longer recognises.
    pub fn purge_stale(&mut self) -> Vec<EntityRef> {
        let stale: Vec<EntityRef> = self
            .placed
            .keys()
            .copied()
            .filter(|e| self.resolve(*e).is_err())
            .collect();
        for entity in &stale {
            self.remove(*entity);
        }
        stale
    }

    /// Placed entities on `map`, in placement order.
    pub fn occupants(&self, map: MapId) -> Result<Vec<(EntityRef, Position)>, QueryError> {
        self.map(map)?;
        Ok(self
            .placed
            .iter()
            .filter(|(_, at)| at.map == map)
            .map(|(&e, &at)| (e, at))
            .collect())
    }

    fn check_enterable(&self, entity: EntityRef, at: Position) -> Result<(), QueryError> {
        let map = self.map(at.map)?;
        let idx = map.index_of(at.x, at.y)?;
        let cell = &map.cells()[idx];
        if cell.content().blocks_movement() {
            return Err(QueryError::Blocked { at });
        }
        let live = cell
            .occupant(entity.kind)
            .filter(|&h| self.directory(entity.kind).owns(h));
        match live {
            Some(h) if h != entity.handle => Err(QueryError::CellOccupied {
                at,
                occupant: EntityRef {
                    kind: entity.kind,
                    handle: h,
                },
            }),
            _ => Ok(()),
        }
    }

    /// Move without checks. Callers run `check_enterable` first, so any
    /// other same-kind occupant left at `to` is stale and gets evicted.
    fn relocate(&mut self, entity: EntityRef, to: Position) {
        if let Some(from) = self.placed.get(&entity).copied() {
            if from == to {
                return;
            }
            if let Ok(map) = self.map_mut(from.map) {
                if let Some(cell) = map.cell_mut(from.x, from.y) {
                    cell.set_occupant(entity.kind, None);
                }
            }
        }
        let stale = self
            .map(to.map)
            .ok()
            .and_then(|m| m.cell(to.x, to.y))
            .and_then(|c| c.occupant(entity.kind))
            .filter(|&h| h != entity.handle);
        if let Some(handle) = stale {
            let evicted = EntityRef {
                kind: entity.kind,
                handle,
            };
            self.placed.shift_remove(&evicted);
            trace!(entity = %evicted, at = %to, "stale occupant evicted");
        }
        if let Ok(map) = self.map_mut(to.map) {
            if let Some(cell) = map.cell_mut(to.x, to.y) {
                cell.set_occupant(entity.kind, Some(entity.handle));
            }
        }
        self.placed.insert(entity, to);
        trace!(%entity, %to, "entity moved");
    }

    // ── Movement ───────────────────────────────────────────────────

    /// The cell one step from `(x, y)` on `map` in direction `direction`.
    ///
    /// The start must be on the map; the result may not be. Check it with
    /// [`is_out_of_bounds`](Self::is_out_of_bounds).
    pub fn shift(
        &self,
        map: MapId,
        x: i32,
        y: i32,
        direction: usize,
    ) -> Result<(i32, i32), QueryError> {
        let m = self.map(map)?;
        m.index_of(x, y)?;
        let geometry = m.geometry();
        geometry
            .step(x, y, direction)
            .ok_or(QueryError::InvalidDirection {
                index: direction,
                count: geometry.direction_count(),
            })
    }

    /// Whether `(x, y)` falls outside `map`.
    pub fn is_out_of_bounds(&self, map: MapId, x: i32, y: i32) -> Result<bool, QueryError> {
        Ok(!self.map(map)?.contains(x, y))
    }

    /// Move `entity` one step, following a transition if it lands on one.
    pub fn step(&mut self, entity: EntityRef, direction: usize) -> Result<StepOutcome, QueryError> {
        let from = self.position_of(entity)?;
        let (x, y) = self.shift(from.map, from.x, from.y, direction)?;
        let map = self.map(from.map)?;
        let dest = map.position(x, y);
        map.index_of(x, y)?;
        if !self.walk_cost(from.map, from.xy(), (x, y))?.is_finite() {
            return Err(QueryError::Blocked { at: dest });
        }
        match map.transition(x, y) {
            Some(TransitionTarget::Map(to)) => {
                self.check_enterable(entity, to)?;
                self.relocate(entity, to);
                Ok(StepOutcome::Transitioned { from: dest, to })
            }
            Some(TransitionTarget::Region(coord)) => {
                self.check_enterable(entity, dest)?;
                self.relocate(entity, dest);
                Ok(StepOutcome::ReachedRegion(coord))
            }
            None => {
                self.check_enterable(entity, dest)?;
                self.relocate(entity, dest);
                Ok(StepOutcome::Moved(dest))
            }
        }
    }

    /// Follow the transition `entity` is standing on.
    pub fn take_transition(&mut self, entity: EntityRef) -> Result<StepOutcome, QueryError> {
        let from = self.position_of(entity)?;
        let target = self
            .map(from.map)?
            .transition(from.x, from.y)
            .ok_or(QueryError::NotOnTransition { entity })?;
        match target {
            TransitionTarget::Map(to) => {
                self.check_enterable(entity, to)?;
                self.relocate(entity, to);
                Ok(StepOutcome::Transitioned { from, to })
            }
            TransitionTarget::Region(coord) => Ok(StepOutcome::ReachedRegion(coord)),
        }
    }

    // ── Items ──────────────────────────────────────────────────────

    /// Drop `item` on top of the pile at `at`.
    pub fn add_item(&mut self, at: Position, item: ItemId) -> Result<(), QueryError> {
        let map = self.map_mut(at.map)?;
        map.index_of(at.x, at.y)?;
        if let Some(cell) = map.cell_mut(at.x, at.y) {
            cell.push_item(item);
        }
        Ok(())
    }

    /// Drop a loose item known only by name, minting an id for it.
    pub fn add_named_item(
        &mut self,
        at: Position,
        name: impl Into<String>,
    ) -> Result<ItemId, QueryError> {
        self.map(at.map)?.index_of(at.x, at.y)?;
        let item = self
            .ledger
            .mint(name)
            .ok_or(QueryError::ItemIdsExhausted)?;
        self.add_item(at, item)?;
        Ok(item)
    }

    /// The pile at `at`, bottom first.
    pub fn items(&self, at: Position) -> Result<&[ItemId], QueryError> {
        let map = self.map(at.map)?;
        let idx = map.index_of(at.x, at.y)?;
        Ok(map.cells()[idx].items())
    }

    /// Remove and return the most recently dropped item at `at`.
    pub fn take_top_item(&mut self, at: Position) -> Result<Option<ItemId>, QueryError> {
        let map = self.map_mut(at.map)?;
        map.index_of(at.x, at.y)?;
        Ok(map.cell_mut(at.x, at.y).and_then(|c| c.pop_item()))
    }

    /// Describe the top item at `at` without taking it.
    ///
    /// Minted names win, then the attached catalog, then `"item #<id>"`.
    pub fn item_desc(&self, at: Position) -> Result<Option<String>, QueryError> {
        let Some(&top) = self.items(at)?.last() else {
            return Ok(None);
        };
        let desc = self
            .ledger
            .describe(top)
            .or_else(|| self.catalog.as_ref().and_then(|c| c.describe(top)))
            .unwrap_or_else(|| format!("item #{top}"));
        Ok(Some(desc))
    }
}
