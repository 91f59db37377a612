//! Walk cost, movement time, visibility, path, and snapshot queries.

use rck_core::{EntityRef, MapId, QueryError, RegionCoord};
use rck_space::Topology;
use tracing::warn;

use crate::content::MapKind;
use crate::cost::{MapCostView, PathCost, NON_TRAVERSABLE};
use crate::manager::MapManager;
use crate::path::{self, Path};
use crate::sight::{self, FovMask};
use crate::snapshot::MapSnapshot;

fn check_speed(speed: f64) -> Result<f64, QueryError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(QueryError::InvalidSpeed { speed })
    }
}

impl MapManager {
    // ── Cost ───────────────────────────────────────────────────────

    /// The path-engine view of `map`.
    pub fn cost_view(&self, map: MapId) -> Result<MapCostView<'_>, QueryError> {
        Ok(MapCostView::new(self.map(map)?, &self.config.costs))
    }

    /// Cost of moving from `from` to `to` on `map`.
    ///
    /// Out-of-bounds coordinates and blocking content yield
    /// [`NON_TRAVERSABLE`]; only an unknown map is an error.
    pub fn walk_cost(
        &self,
        map: MapId,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<f32, QueryError> {
        Ok(self.cost_view(map)?.cost(from, to))
    }

    /// Cost of entering region cell `to` from `from`.
    pub fn region_walk_cost(&self, from: RegionCoord, to: RegionCoord) -> f32 {
        if !self.region.contains(from) {
            return NON_TRAVERSABLE;
        }
        self.region
            .terrain(to)
            .map_or(NON_TRAVERSABLE, |t| self.config.costs.region_cost(t))
    }

    // ── Time ───────────────────────────────────────────────────────

    /// Rounds needed to cross one cell of `map` at `speed` feet per round.
    pub fn movement_time(&self, map: MapId, speed: f64) -> Result<f64, QueryError> {
        let kind = self.map(map)?.kind();
        Ok(self.config.scale.cell_feet(kind) / check_speed(speed)?)
    }

    /// Rounds needed to cross one region hex at `speed` feet per round.
    pub fn region_movement_time(&self, speed: f64) -> Result<f64, QueryError> {
        Ok(self.config.scale.cell_feet(MapKind::Region) / check_speed(speed)?)
    }

    /// [`movement_time`](Self::movement_time) for a placed entity, using
    /// the speed its manager reports.
    pub fn entity_movement_time(&self, entity: EntityRef) -> Result<f64, QueryError> {
        let at = self.position_of(entity)?;
        let speed = self
            .directory(entity.kind)
            .speed(entity.handle)
            .ok_or(QueryError::UnresolvedEntity { entity })?;
        self.movement_time(at.map, speed)
    }

    // ── Visibility ─────────────────────────────────────────────────

    /// Whether `source` can see `target`.
    ///
    /// Entities on different maps never see each other. `range` limits
    /// geometry distance; 0 means unlimited.
    pub fn is_in_fov(
        &self,
        source: EntityRef,
        target: EntityRef,
        range: u32,
    ) -> Result<bool, QueryError> {
        let from = self.position_of(source)?;
        let to = self.position_of(target)?;
        if from.map != to.map {
            return Ok(false);
        }
        let map = self.map(from.map)?;
        if range > 0 && map.geometry().distance(from.xy(), to.xy()) > range {
            return Ok(false);
        }
        Ok(self.sight.line_of_sight(map, from.xy(), to.xy()))
    }

    /// The visible subset of `targets`, in input order.
    ///
    /// A bad source is an error. Targets that no longer resolve or are not
    /// placed are skipped with a warning.
    pub fn filter_by_fov(
        &self,
        source: EntityRef,
        targets: &[EntityRef],
        range: u32,
    ) -> Result<Vec<EntityRef>, QueryError> {
        self.position_of(source)?;
        let mut visible = Vec::with_capacity(targets.len());
        for &target in targets {
            match self.is_in_fov(source, target, range) {
                Ok(true) => visible.push(target),
                Ok(false) => {}
                Err(e) => warn!(%source, %target, error = %e, "skipping target"),
            }
        }
        Ok(visible)
    }

    /// Every cell visible from `(x, y)` within `radius` (0 = unlimited).
    pub fn compute_fov(
        &self,
        map: MapId,
        x: i32,
        y: i32,
        radius: u32,
    ) -> Result<FovMask, QueryError> {
        let m = self.map(map)?;
        m.index_of(x, y)?;
        Ok(sight::compute_fov(self.sight.as_ref(), m, (x, y), radius))
    }

    // ── Paths ──────────────────────────────────────────────────────

    /// Cheapest route between two cells of `map`, if one exists.
    pub fn find_path(
        &self,
        map: MapId,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<Option<Path>, QueryError> {
        let m = self.map(map)?;
        m.index_of(from.0, from.1)?;
        m.index_of(to.0, to.1)?;
        let view = MapCostView::new(m, &self.config.costs);
        Ok(path::find_path(&m.geometry(), m.grid(), &view, from, to))
    }

    // ── Rendering & debug ──────────────────────────────────────────

    /// Read-only copy of `map` for renderers.
    pub fn snapshot(&self, map: MapId) -> Result<MapSnapshot, QueryError> {
        Ok(MapSnapshot::of(self.map(map)?))
    }

    /// One line per entity placed on `map`, also sent to
    /// [`debug_log`](Self::debug_log). Entities their manager no longer
    /// owns are flagged as stale.
    pub fn dump_occupants(&self, map: MapId) -> Result<Vec<String>, QueryError> {
        let lines: Vec<String> = self
            .occupants(map)?
            .into_iter()
            .map(|(entity, at)| {
                let dir = self.directory(entity.kind);
                if !dir.owns(entity.handle) {
                    return format!("stale {entity} at ({}, {})", at.x, at.y);
                }
                match dir.label(entity.handle) {
                    Some(label) => format!("{entity} \"{label}\" at ({}, {})", at.x, at.y),
                    None => format!("{entity} at ({}, {})", at.x, at.y),
                }
            })
            .collect();
        for line in &lines {
            self.debug_log(line);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture;
    use rck_core::Position;

    #[test]
    fn walk_cost_sentinel_for_walls_and_bounds() {
        let mut f = fixture();
        let m = f.manager.build_map_from_text(&["..", ".#"], false).unwrap();
        assert_eq!(f.manager.walk_cost(m, (0, 0), (1, 1)), Ok(NON_TRAVERSABLE));
        assert_eq!(f.manager.walk_cost(m, (0, 0), (2, 0)), Ok(NON_TRAVERSABLE));
        assert_eq!(f.manager.walk_cost(m, (0, 0), (0, 1)), Ok(1.0));
        assert_eq!(
            f.manager.walk_cost(MapId(9), (0, 0), (0, 1)),
            Err(QueryError::UnknownMap { map: MapId(9) })
        );
    }

    #[test]
    fn region_walk_cost_by_terrain() {
        let mut f = fixture();
        f.manager.region = crate::RegionMap::from_text(&[".M~"]).unwrap();
        let o = RegionCoord::new(0, 0);
        assert_eq!(f.manager.region_walk_cost(o, RegionCoord::new(1, 0)), 3.0);
        assert_eq!(f.manager.region_walk_cost(o, RegionCoord::new(2, 0)), NON_TRAVERSABLE);
        assert_eq!(f.manager.region_walk_cost(o, RegionCoord::new(3, 0)), NON_TRAVERSABLE);
    }

    #[test]
    fn movement_time_scales_with_map_kind() {
        let mut f = fixture();
        let d = f.manager.build_empty_map(2, 2, MapKind::Dungeon).unwrap();
        let w = f.manager.build_empty_map(2, 2, MapKind::Wilderness).unwrap();
        assert_eq!(f.manager.movement_time(d, 30.0), Ok(5.0 / 30.0));
        assert_eq!(f.manager.movement_time(w, 30.0), Ok(0.5));
        assert_eq!(f.manager.region_movement_time(30.0), Ok(1056.0));
        assert_eq!(
            f.manager.movement_time(d, 0.0),
            Err(QueryError::InvalidSpeed { speed: 0.0 })
        );
        assert!(f.manager.region_movement_time(f64::INFINITY).is_err());
    }

    #[test]
    fn entity_movement_time_uses_directory_speed() {
        let mut f = fixture();
        let w = f.manager.build_empty_map(2, 2, MapKind::Wilderness).unwrap();
        let h = f.mobs.spawn(15.0);
        f.manager.set_mob(h, Position::new(w, 0, 0)).unwrap();
        assert_eq!(f.manager.entity_movement_time(EntityRef::mob(h)), Ok(1.0));
    }

    #[test]
    fn fov_range_walls_and_maps() {
        let mut f = fixture();
        let m = f.manager.build_map_from_text(&["..#..", "....."], false).unwrap();
        let other = f.manager.build_empty_map(5, 5, MapKind::Dungeon).unwrap();
        let me = EntityRef::character(f.characters.spawn(30.0));
        let near = EntityRef::mob(f.mobs.spawn(20.0));
        let hidden = EntityRef::mob(f.mobs.spawn(20.0));
        let elsewhere = EntityRef::mob(f.mobs.spawn(20.0));
        f.manager.place(me, Position::new(m, 0, 0)).unwrap();
        f.manager.place(near, Position::new(m, 1, 1)).unwrap();
        f.manager.place(hidden, Position::new(m, 4, 0)).unwrap();
        f.manager.place(elsewhere, Position::new(other, 0, 0)).unwrap();

        assert_eq!(f.manager.is_in_fov(me, near, 0), Ok(true));
        assert_eq!(f.manager.is_in_fov(me, hidden, 0), Ok(false));
        assert_eq!(f.manager.is_in_fov(me, elsewhere, 0), Ok(false));

        let far = EntityRef::mob(f.mobs.spawn(20.0));
        f.manager.place(far, Position::new(m, 4, 1)).unwrap();
        assert_eq!(f.manager.is_in_fov(me, far, 0), Ok(true));
        assert_eq!(f.manager.is_in_fov(me, far, 3), Ok(false));
    }

    #[test]
    fn filter_keeps_order_and_skips_stale() {
        let mut f = fixture();
        let m = f.manager.build_empty_map(5, 5, MapKind::Dungeon).unwrap();
        let me = EntityRef::character(f.characters.spawn(30.0));
        f.manager.place(me, Position::new(m, 2, 2)).unwrap();
        let a = f.mobs.spawn(1.0);
        let b = f.mobs.spawn(1.0);
        let c = f.mobs.spawn(1.0);
        f.manager.set_mob(a, Position::new(m, 0, 0)).unwrap();
        f.manager.set_mob(b, Position::new(m, 4, 4)).unwrap();
        f.manager.set_mob(c, Position::new(m, 3, 2)).unwrap();
        f.mobs.despawn(b);
        let targets = [EntityRef::mob(c), EntityRef::mob(b), EntityRef::mob(a)];
        assert_eq!(
            f.manager.filter_by_fov(me, &targets, 0),
            Ok(vec![EntityRef::mob(c), EntityRef::mob(a)])
        );
        let unplaced = EntityRef::character(f.characters.spawn(30.0));
        assert!(f.manager.filter_by_fov(unplaced, &targets, 0).is_err());
    }

    #[test]
    fn path_and_fov_delegate_to_map() {
        let mut f = fixture();
        let m = f.manager.build_map_from_text(&["...", "##.", "..."], false).unwrap();
        let p = f.manager.find_path(m, (0, 0), (0, 2)).unwrap().unwrap();
        assert_eq!(p.steps.last(), Some(&(0, 2)));
        assert!(p.steps.contains(&(2, 1)));
        assert!(f.manager.find_path(m, (0, 0), (5, 5)).is_err());

        let fov = f.manager.compute_fov(m, 0, 0, 0).unwrap();
        assert!(fov.is_visible(2, 0));
        assert!(!fov.is_visible(0, 2));
    }

    #[test]
    fn dump_lists_and_flags_stale() {
        let mut f = fixture();
        let m = f.manager.build_empty_map(3, 3, MapKind::Dungeon).unwrap();
        let h = f.characters.spawn(30.0);
        let orc = f.mobs.spawn(20.0);
        f.manager.set_character(h, Position::new(m, 0, 1)).unwrap();
        f.manager.set_mob(orc, Position::new(m, 2, 2)).unwrap();
        f.mobs.despawn(orc);
        let lines = f.manager.dump_occupants(m).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("character {h} at (0, 1)"));
        assert!(lines[1].starts_with("stale mob"));
    }

    #[test]
    fn snapshot_reflects_occupants() {
        let mut f = fixture();
        let m = f.manager.build_empty_map(2, 1, MapKind::Dungeon).unwrap();
        let h = f.characters.spawn(30.0);
        f.manager.set_character(h, Position::new(m, 1, 0)).unwrap();
        let snap = f.manager.snapshot(m).unwrap();
        assert_eq!(snap.render(), vec![".@".to_string()]);
    }
}
