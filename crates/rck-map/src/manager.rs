//! The map registry, transition graph, and region spawning.
//!
//! [`MapManager`] exclusively owns every [`Map`] and the [`RegionMap`].
//! Map ids are registry indices: maps are never removed, so an id stays
//! valid for the whole session. Construction operations return
//! [`BuildError`] and register nothing on failure.
//!
//! Occupancy, items, and movement live in `occupancy.rs`; cost, time,
//! visibility, and path queries in `query.rs`. All three are `impl`
//! blocks on the same struct.

use std::sync::Arc;

use indexmap::IndexMap;
use rck_core::{
    BuildError, EntityDirectory, EntityKind, EntityRef, ItemCatalog, MapId, PartyId, Position,
    QueryError, RegionCoord, TransitionTarget,
};
use rck_space::{Grid, HexDirection};
use tracing::debug;

use crate::config::{ConfigError, MapConfig};
use crate::content::{Content, MapKind};
use crate::generate;
use crate::items::ItemLedger;
use crate::map::{Map, RegionOrigin};
use crate::prefab::Prefab;
use crate::region::RegionMap;
use crate::sight::{RaySight, VisibilityEngine};
use crate::text::parse_rows;

// ── Collaborators ──────────────────────────────────────────────────

/// External managers the map layer consults but does not own.
pub struct Collaborators {
    /// Resolves character handles.
    pub characters: Arc<dyn EntityDirectory>,
    /// Resolves mob handles.
    pub mobs: Arc<dyn EntityDirectory>,
    /// Raw line-of-sight engine. Default: [`RaySight`].
    pub sight: Box<dyn VisibilityEngine>,
    /// Describes item ids the manager did not mint itself.
    pub catalog: Option<Box<dyn ItemCatalog + Send + Sync>>,
}

impl Collaborators {
    /// Entity directories with the default sight engine and no catalog.
    pub fn new(characters: Arc<dyn EntityDirectory>, mobs: Arc<dyn EntityDirectory>) -> Self {
        Self {
            characters,
            mobs,
            sight: Box::new(RaySight),
            catalog: None,
        }
    }

    /// Replace the sight engine.
    pub fn with_sight(mut self, sight: impl VisibilityEngine + 'static) -> Self {
        self.sight = Box::new(sight);
        self
    }

    /// Attach an item catalog.
    pub fn with_catalog(mut self, catalog: impl ItemCatalog + Send + Sync + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }
}

// ── PartyMove ──────────────────────────────────────────────────────

/// Result of moving a party on the region map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartyMove {
    /// The party that moved.
    pub party: PartyId,
    /// Where it started.
    pub from: RegionCoord,
    /// Where it ended.
    pub to: RegionCoord,
    /// The destination's local map, if it has been spawned.
    pub local_map: Option<MapId>,
}

// ── MapManager ─────────────────────────────────────────────────────

/// Owner of all maps, the region, and every entity position.
pub struct MapManager {
    pub(crate) config: MapConfig,
    pub(crate) maps: Vec<Map>,
    pub(crate) region: RegionMap,
    pub(crate) characters: Arc<dyn EntityDirectory>,
    pub(crate) mobs: Arc<dyn EntityDirectory>,
    pub(crate) sight: Box<dyn VisibilityEngine>,
    pub(crate) catalog: Option<Box<dyn ItemCatalog + Send + Sync>>,
    pub(crate) ledger: ItemLedger,
    /// Reverse position index, kept in lockstep with cell occupants.
    pub(crate) placed: IndexMap<EntityRef, Position>,
}

impl MapManager {
    /// Validate `config` and take ownership of `region`.
    pub fn new(
        config: MapConfig,
        region: RegionMap,
        collaborators: Collaborators,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if collaborators.characters.kind() != EntityKind::Character {
            return Err(ConfigError::DirectoryKindMismatch { slot: "characters" });
        }
        if collaborators.mobs.kind() != EntityKind::Mob {
            return Err(ConfigError::DirectoryKindMismatch { slot: "mobs" });
        }
        Ok(Self {
            config,
            maps: Vec::new(),
            region,
            characters: collaborators.characters,
            mobs: collaborators.mobs,
            sight: collaborators.sight,
            catalog: collaborators.catalog,
            ledger: ItemLedger::default(),
            placed: IndexMap::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The region map.
    pub fn region(&self) -> &RegionMap {
        &self.region
    }

    /// Names minted for loose items.
    pub fn item_ledger(&self) -> &ItemLedger {
        &self.ledger
    }

    /// Number of registered maps.
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// All maps in id order.
    pub fn maps(&self) -> impl Iterator<Item = &Map> {
        self.maps.iter()
    }

    /// Map by id.
    pub fn map(&self, id: MapId) -> Result<&Map, QueryError> {
        self.maps
            .get(id.0 as usize)
            .ok_or(QueryError::UnknownMap { map: id })
    }

    pub(crate) fn map_mut(&mut self, id: MapId) -> Result<&mut Map, QueryError> {
        self.maps
            .get_mut(id.0 as usize)
            .ok_or(QueryError::UnknownMap { map: id })
    }

    /// Emit a debug event on the map target.
    pub fn debug_log(&self, message: &str) {
        debug!(target: "rck::map", "{message}");
    }

    // ── Construction ───────────────────────────────────────────────

    fn register(
        &mut self,
        kind: MapKind,
        grid: Grid,
        contents: impl IntoIterator<Item = Content>,
    ) -> Result<MapId, BuildError> {
        let count = self.maps.len();
        let raw = u32::try_from(count).map_err(|_| BuildError::DimensionTooLarge {
            name: "map count",
            value: count as u64,
            max: u32::MAX,
        })?;
        let id = MapId(raw);
        self.maps.push(Map::from_contents(id, kind, grid, contents));
        debug!(map = %id, %kind, width = grid.width(), height = grid.height(), "map registered");
        Ok(id)
    }

    /// Register an empty map of the configured indoor or outdoor size.
    ///
    /// Outdoor maps are wilderness hex maps; indoor maps are dungeons.
    pub fn create_map(&mut self, outdoor: bool) -> Result<MapId, BuildError> {
        let (kind, (w, h)) = if outdoor {
            (MapKind::Wilderness, self.config.outdoor_size)
        } else {
            (MapKind::Dungeon, self.config.indoor_size)
        };
        self.build_empty_map(w, h, kind)
    }

    /// Register a `width` × `height` map of open ground.
    pub fn build_empty_map(
        &mut self,
        width: u32,
        height: u32,
        kind: MapKind,
    ) -> Result<MapId, BuildError> {
        let grid = Grid::new(width, height)?;
        self.register(
            kind,
            grid,
            std::iter::repeat_n(Content::None, grid.cell_count()),
        )
    }

    /// Parse map text and register the result.
    ///
    /// Transition glyphs are left unlinked until [`connect_maps`](Self::connect_maps).
    pub fn build_map_from_text<S: AsRef<str>>(
        &mut self,
        rows: &[S],
        outdoor: bool,
    ) -> Result<MapId, BuildError> {
        let (grid, cells) = parse_rows(rows)?;
        let kind = if outdoor {
            MapKind::Wilderness
        } else {
            MapKind::Dungeon
        };
        self.register(kind, grid, cells)
    }

    /// Build and register a prefab layout.
    pub fn generate_map_from_prefab(&mut self, prefab: &Prefab) -> Result<MapId, BuildError> {
        let (grid, cells) = prefab.parse()?;
        let id = self.register(prefab.kind, grid, cells)?;
        debug!(map = %id, prefab = %prefab.name, "prefab built");
        Ok(id)
    }

    /// Link `a` and `b` with a two-way transition.
    ///
    /// Cells that are not already transitions are retagged as stairs,
    /// doors, or zones depending on the two map kinds. Relinking the same
    /// pair does nothing; relinking either cell elsewhere is rejected.
    pub fn connect_maps(&mut self, a: Position, b: Position) -> Result<(), BuildError> {
        if a == b {
            return Err(BuildError::SelfLink { at: a });
        }
        let (kind_a, idx_a, existing_a) = self.link_slot(a)?;
        let (kind_b, idx_b, existing_b) = self.link_slot(b)?;
        let to_b = TransitionTarget::Map(b);
        let to_a = TransitionTarget::Map(a);
        match (existing_a, existing_b) {
            (Some(ta), Some(tb)) if ta == to_b && tb == to_a => return Ok(()),
            (Some(existing), _) if existing != to_b => {
                return Err(BuildError::TransitionConflict { at: a, existing })
            }
            (_, Some(existing)) if existing != to_a => {
                return Err(BuildError::TransitionConflict { at: b, existing })
            }
            _ => {}
        }
        let tag = Content::transition_between(kind_a, kind_b);
        self.write_link(a, idx_a, tag, to_b);
        self.write_link(b, idx_b, tag, to_a);
        debug!(from = %a, to = %b, ?tag, "maps connected");
        Ok(())
    }

    fn link_slot(
        &self,
        at: Position,
    ) -> Result<(MapKind, usize, Option<TransitionTarget>), QueryError> {
        let map = self.map(at.map)?;
        let idx = map.index_of(at.x, at.y)?;
        Ok((map.kind(), idx, map.transition(at.x, at.y)))
    }

    fn write_link(&mut self, at: Position, idx: usize, tag: Content, target: TransitionTarget) {
        if let Ok(map) = self.map_mut(at.map) {
            if let Some(cell) = map.cell_mut(at.x, at.y) {
                if !cell.content().is_transition() {
                    cell.set_content(tag);
                }
            }
            map.set_transition(idx, target);
        }
    }

    /// Change the content of one cell.
    ///
    /// A linked transition cell cannot be retagged as non-transition
    /// content, and a cell with an occupant cannot become a wall.
    pub fn set_content(&mut self, at: Position, content: Content) -> Result<(), BuildError> {
        let map = self.map(at.map)?;
        map.index_of(at.x, at.y)?;
        if let Some(existing) = map.transition(at.x, at.y) {
            if !content.is_transition() {
                return Err(BuildError::TransitionConflict { at, existing });
            }
        }
        if content.blocks_movement() {
            if let Some(occupant) = self.managed_entity_at(at)? {
                return Err(QueryError::CellOccupied { at, occupant }.into());
            }
        }
        let map = self.map_mut(at.map)?;
        if let Some(cell) = map.cell_mut(at.x, at.y) {
            cell.set_content(content);
        }
        Ok(())
    }

    /// Validate the whole transition graph.
    ///
    /// Every transition-tagged cell must be linked, every map target must
    /// exist and link straight back, and every region target must be the
    /// region cell that spawned the map.
    pub fn check_transitions(&self) -> Result<(), BuildError> {
        for map in &self.maps {
            for (x, y) in map.grid().iter() {
                let is_tagged = map.content(x, y).is_some_and(Content::is_transition);
                if is_tagged && map.transition(x, y).is_none() {
                    return Err(BuildError::UnlinkedTransition {
                        at: map.position(x, y),
                    });
                }
            }
            for (at, target) in map.transitions() {
                match target {
                    TransitionTarget::Map(to) => {
                        let back = self
                            .map(to.map)
                            .ok()
                            .filter(|m| m.contains(to.x, to.y))
                            .ok_or(BuildError::DanglingTransition { at, target })?
                            .transition(to.x, to.y);
                        if back != Some(TransitionTarget::Map(at)) {
                            return Err(BuildError::AsymmetricTransition { at, target: to });
                        }
                    }
                    TransitionTarget::Region(coord) => {
                        if self.region.local_map(coord) != Some(map.id()) {
                            return Err(BuildError::DanglingTransition { at, target });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    // ── Region ─────────────────────────────────────────────────────

    /// The local map for a region cell, generating it on first use.
    ///
    /// Idempotent: once spawned, the same id is returned for the cell for
    /// the rest of the session. The new map's entry cell leads back to
    /// the region cell.
    pub fn spawn_local_map(&mut self, coord: RegionCoord) -> Result<MapId, BuildError> {
        let region_idx = self.region.index_of(coord)?;
        if let Some(existing) = self.region.local_map(coord) {
            return Ok(existing);
        }
        let terrain = self
            .region
            .terrain(coord)
            .ok_or(QueryError::RegionOutOfBounds {
                x: coord.x,
                y: coord.y,
            })?;
        let layout = generate::layout_for(&self.config, coord, terrain)?;
        let (ex, ey) = layout.entry;
        let entry_idx = layout
            .grid
            .index(ex, ey)
            .ok_or(BuildError::InvalidEntry { x: ex, y: ey })?;
        let kind = layout.kind;

        let id = self.register(kind, layout.grid, layout.cells)?;
        let map = self.map_mut(id)?;
        if let Some(cell) = map.cell_mut(ex, ey) {
            if !cell.content().is_transition() {
                cell.set_content(Content::transition_between(kind, MapKind::Region));
            }
        }
        map.set_transition(entry_idx, TransitionTarget::Region(coord));
        map.set_origin(RegionOrigin {
            coord,
            entry: layout.entry,
        });
        let id = self.region.set_local_map(region_idx, id);
        debug!(map = %id, %coord, %terrain, "local map spawned");
        Ok(id)
    }

    /// Spawn if needed and return the local map's entry cell.
    pub fn enter_local_map(&mut self, coord: RegionCoord) -> Result<Position, BuildError> {
        let id = self.spawn_local_map(coord)?;
        let map = self.map(id)?;
        let (x, y) = map
            .origin()
            .map(|o| o.entry)
            .unwrap_or_else(|| generate::default_entry(map.grid()));
        Ok(map.position(x, y))
    }

    /// Put a party on the region map.
    pub fn place_party(&mut self, party: PartyId, coord: RegionCoord) -> Result<(), QueryError> {
        self.region.place_party(party, coord, &self.config.costs)
    }

    /// Take a party off the region map. Absent parties are ignored.
    pub fn remove_party(&mut self, party: PartyId) -> Option<RegionCoord> {
        self.region.remove_party(party)
    }

    /// Move a party one hex, spawning the destination's local map when
    /// its terrain is configured to auto-spawn.
    pub fn move_party(
        &mut self,
        party: PartyId,
        direction: HexDirection,
    ) -> Result<PartyMove, BuildError> {
        let from = self
            .region
            .party_position(party)
            .ok_or(QueryError::UnknownParty { party })?;
        let to = self
            .region
            .party_destination(party, direction, &self.config.costs)?;
        let auto = self
            .region
            .terrain(to)
            .is_some_and(|t| self.config.auto_spawns(t));
        let local_map = if auto {
            Some(self.spawn_local_map(to)?)
        } else {
            self.region.local_map(to)
        };
        self.region
            .move_party(party, direction, &self.config.costs)?;
        tracing::trace!(%party, %from, %to, "party moved");
        Ok(PartyMove {
            party,
            from,
            to,
            local_map,
        })
    }

    pub(crate) fn directory(&self, kind: EntityKind) -> &dyn EntityDirectory {
        match kind {
            EntityKind::Character => self.characters.as_ref(),
            EntityKind::Mob => self.mobs.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RegionTerrain;
    use crate::testing::{fixture, fixture_with, Stub};

    #[test]
    fn ids_are_sequential_and_stable() {
        let mut f = fixture();
        let a = f.manager.create_map(false).unwrap();
        let b = f.manager.create_map(true).unwrap();
        assert_eq!((a, b), (MapId(0), MapId(1)));
        assert_eq!(f.manager.map(a).unwrap().kind(), MapKind::Dungeon);
        assert_eq!(f.manager.map(a).unwrap().width(), 46);
        assert_eq!(f.manager.map(b).unwrap().kind(), MapKind::Wilderness);
        assert_eq!(f.manager.map(b).unwrap().height(), 10);
        assert_eq!(
            f.manager.map(MapId(2)).unwrap_err(),
            QueryError::UnknownMap { map: MapId(2) }
        );
    }

    #[test]
    fn failed_build_registers_nothing() {
        let mut f = fixture();
        assert!(f.manager.build_map_from_text(&["..", "."], false).is_err());
        assert!(f.manager.build_empty_map(0, 3, MapKind::Dungeon).is_err());
        assert_eq!(f.manager.map_count(), 0);
    }

    #[test]
    fn wrong_directory_kind_rejected() {
        let mobs = Stub::new(EntityKind::Mob);
        let err = MapManager::new(
            MapConfig::default(),
            RegionMap::new(1, 1, RegionTerrain::Plains).unwrap(),
            Collaborators::new(mobs.clone(), mobs),
        )
        .err();
        assert_eq!(
            err,
            Some(ConfigError::DirectoryKindMismatch { slot: "characters" })
        );
    }

    #[test]
    fn connect_tags_by_kind_and_is_symmetric() {
        let mut f = fixture();
        let d1 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let d2 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let w = f.manager.build_empty_map(3, 3, MapKind::Wilderness).unwrap();
        let a = Position::new(d1, 2, 2);
        let b = Position::new(d2, 0, 0);
        let c = Position::new(w, 1, 1);
        f.manager.connect_maps(a, b).unwrap();
        f.manager.connect_maps(Position::new(d1, 0, 0), c).unwrap();

        let m1 = f.manager.map(d1).unwrap();
        assert_eq!(m1.content(2, 2), Some(Content::Stairs));
        assert_eq!(m1.content(0, 0), Some(Content::Door));
        assert_eq!(m1.transition(2, 2), Some(TransitionTarget::Map(b)));
        assert_eq!(
            f.manager.map(d2).unwrap().transition(0, 0),
            Some(TransitionTarget::Map(a))
        );
        assert_eq!(f.manager.map(w).unwrap().content(1, 1), Some(Content::Door));
        assert!(f.manager.check_transitions().is_ok());
    }

    #[test]
    fn relink_rules() {
        let mut f = fixture();
        let d1 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let d2 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let a = Position::new(d1, 1, 1);
        let b = Position::new(d2, 1, 1);
        f.manager.connect_maps(a, b).unwrap();
        // Same pair, either order: no-op.
        f.manager.connect_maps(a, b).unwrap();
        f.manager.connect_maps(b, a).unwrap();
        // Elsewhere: conflict, nothing written.
        let c = Position::new(d2, 2, 2);
        assert_eq!(
            f.manager.connect_maps(a, c),
            Err(BuildError::TransitionConflict {
                at: a,
                existing: TransitionTarget::Map(b)
            })
        );
        assert_eq!(f.manager.map(d2).unwrap().transition(2, 2), None);
        assert_eq!(f.manager.connect_maps(a, a), Err(BuildError::SelfLink { at: a }));
    }

    #[test]
    fn connect_rejects_bad_references_before_writing() {
        let mut f = fixture();
        let d = f.manager.build_empty_map(2, 2, MapKind::Dungeon).unwrap();
        let err = f
            .manager
            .connect_maps(Position::new(d, 0, 0), Position::new(MapId(7), 0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::Reference(QueryError::UnknownMap { map: MapId(7) })
        );
        assert_eq!(f.manager.map(d).unwrap().transition(0, 0), None);
        assert_eq!(f.manager.map(d).unwrap().content(0, 0), Some(Content::None));
    }

    #[test]
    fn unlinked_text_transition_fails_check() {
        let mut f = fixture();
        let d = f.manager.build_map_from_text(&[".>"], false).unwrap();
        assert_eq!(
            f.manager.check_transitions(),
            Err(BuildError::UnlinkedTransition {
                at: Position::new(d, 1, 0)
            })
        );
    }

    #[test]
    fn set_content_guards_links_and_occupants() {
        let mut f = fixture();
        let d1 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let d2 = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let a = Position::new(d1, 0, 0);
        f.manager.connect_maps(a, Position::new(d2, 0, 0)).unwrap();
        assert!(matches!(
            f.manager.set_content(a, Content::Wall),
            Err(BuildError::TransitionConflict { .. })
        ));
        f.manager.set_content(a, Content::Door).unwrap();

        let hero = f.characters.spawn(30.0);
        let spot = Position::new(d1, 1, 1);
        f.manager.set_character(hero, spot).unwrap();
        assert!(matches!(
            f.manager.set_content(spot, Content::Wall),
            Err(BuildError::Reference(QueryError::CellOccupied { .. }))
        ));
        f.manager.set_content(spot, Content::Tree).unwrap();
        assert_eq!(f.manager.map(d1).unwrap().content(1, 1), Some(Content::Tree));
    }

    #[test]
    fn spawn_is_idempotent_and_links_back() {
        let mut f = fixture();
        let coord = RegionCoord::new(1, 2);
        let id = f.manager.spawn_local_map(coord).unwrap();
        assert_eq!(f.manager.spawn_local_map(coord).unwrap(), id);
        assert_eq!(f.manager.map_count(), 1);

        let map = f.manager.map(id).unwrap();
        let origin = map.origin().unwrap();
        assert_eq!(origin.coord, coord);
        let (ex, ey) = origin.entry;
        assert_eq!(map.content(ex, ey), Some(Content::Zone));
        assert_eq!(map.transition(ex, ey), Some(TransitionTarget::Region(coord)));
        assert_eq!(f.manager.region().local_map(coord), Some(id));
        assert!(f.manager.check_transitions().is_ok());
    }

    #[test]
    fn spawn_out_of_region_fails_without_registering() {
        let mut f = fixture();
        assert_eq!(
            f.manager.spawn_local_map(RegionCoord::new(9, 0)),
            Err(BuildError::Reference(QueryError::RegionOutOfBounds { x: 9, y: 0 }))
        );
        assert_eq!(f.manager.map_count(), 0);
    }

    #[test]
    fn generation_does_not_depend_on_spawn_order() {
        let region = || RegionMap::new(3, 3, RegionTerrain::Forest).unwrap();
        let mut a = fixture_with(MapConfig::default(), region());
        let mut b = fixture_with(MapConfig::default(), region());
        let p = RegionCoord::new(0, 0);
        let q = RegionCoord::new(2, 1);
        let ap = a.manager.spawn_local_map(p).unwrap();
        let aq = a.manager.spawn_local_map(q).unwrap();
        let bq = b.manager.spawn_local_map(q).unwrap();
        let bp = b.manager.spawn_local_map(p).unwrap();
        let text = |m: &MapManager, id| m.map(id).unwrap().to_text();
        assert_eq!(text(&a.manager, ap), text(&b.manager, bp));
        assert_eq!(text(&a.manager, aq), text(&b.manager, bq));
    }

    #[test]
    fn ruins_spawn_dungeon_prefab_with_door_entry() {
        let region = RegionMap::from_text(&["R."]).unwrap();
        let mut f = fixture_with(MapConfig::default(), region);
        let entry = f.manager.enter_local_map(RegionCoord::new(0, 0)).unwrap();
        let map = f.manager.map(entry.map).unwrap();
        assert_eq!(map.kind(), MapKind::Dungeon);
        assert_eq!(entry.xy(), (5, 6));
        assert_eq!(map.content(5, 6), Some(Content::Door));
    }

    #[test]
    fn party_entering_ruins_auto_spawns() {
        let region = RegionMap::from_text(&["..R", "..."]).unwrap();
        let mut f = fixture_with(MapConfig::default(), region);
        let p = PartyId(1);
        f.manager.place_party(p, RegionCoord::new(1, 0)).unwrap();
        let mv = f.manager.move_party(p, HexDirection::Right).unwrap();
        assert_eq!(mv.to, RegionCoord::new(2, 0));
        let spawned = mv.local_map.unwrap();
        assert_eq!(f.manager.region().local_map(mv.to), Some(spawned));

        let mv = f.manager.move_party(p, HexDirection::Left).unwrap();
        assert_eq!(mv.local_map, None);
        assert_eq!(f.manager.map_count(), 1);
    }

    #[test]
    fn party_move_errors_leave_state_alone() {
        let mut f = fixture();
        assert_eq!(
            f.manager.move_party(PartyId(4), HexDirection::Right),
            Err(BuildError::Reference(QueryError::UnknownParty { party: PartyId(4) }))
        );
        f.manager.place_party(PartyId(4), RegionCoord::new(0, 0)).unwrap();
        assert!(f.manager.move_party(PartyId(4), HexDirection::Left).is_err());
        assert_eq!(
            f.manager.region().party_position(PartyId(4)),
            Some(RegionCoord::new(0, 0))
        );
        assert_eq!(f.manager.remove_party(PartyId(4)), Some(RegionCoord::new(0, 0)));
        assert_eq!(f.manager.remove_party(PartyId(4)), None);
    }

    #[test]
    fn failed_auto_spawn_leaves_party_in_place() {
        let mut config = MapConfig::default();
        config
            .local_map_size
            .insert(RegionTerrain::Plains, (Grid::MAX_DIM + 1, 1));
        config.auto_spawn.push(RegionTerrain::Plains);
        let region = RegionMap::new(3, 3, RegionTerrain::Plains).unwrap();
        let mut f = fixture_with(config, region);
        let p = PartyId(2);
        f.manager.place_party(p, RegionCoord::new(1, 1)).unwrap();

        assert!(matches!(
            f.manager.move_party(p, HexDirection::Right),
            Err(BuildError::DimensionTooLarge { name: "width", .. })
        ));
        assert_eq!(
            f.manager.region().party_position(p),
            Some(RegionCoord::new(1, 1))
        );
        assert_eq!(f.manager.map_count(), 0);
        assert_eq!(f.manager.region().local_map(RegionCoord::new(2, 1)), None);
    }
}
