//! The overworld hex grid.

use crate::config::TerrainCosts;
use crate::content::RegionTerrain;
use crate::text::parse_glyphs;
use indexmap::IndexMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rck_core::{BuildError, MapId, PartyId, QueryError, RegionCoord};
use rck_space::{Grid, HexDirection};

/// Relative frequency of each terrain in a generated region.
const TERRAIN_WEIGHTS: [(RegionTerrain, u32); 7] = [
    (RegionTerrain::Plains, 40),
    (RegionTerrain::Forest, 25),
    (RegionTerrain::Hills, 15),
    (RegionTerrain::Mountains, 8),
    (RegionTerrain::Swamp, 6),
    (RegionTerrain::Water, 5),
    (RegionTerrain::Ruins, 1),
];

/// One region hex: terrain plus the local map spawned for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionCell {
    terrain: RegionTerrain,
    local: Option<MapId>,
}

impl RegionCell {
    /// Terrain type.
    pub fn terrain(&self) -> RegionTerrain {
        self.terrain
    }

    /// The local map spawned for this cell, once it exists.
    pub fn local_map(&self) -> Option<MapId> {
        self.local
    }
}

/// The single coarse overworld grid.
///
/// Uses the same odd-row-shifted hex layout as wilderness maps. A cell's
/// local map reference is set once by the map manager and never changes
/// afterwards.
#[derive(Clone, Debug)]
pub struct RegionMap {
    grid: Grid,
    cells: Vec<RegionCell>,
    parties: IndexMap<PartyId, RegionCoord>,
}

impl RegionMap {
    /// A region of uniform terrain.
    pub fn new(width: u32, height: u32, terrain: RegionTerrain) -> Result<Self, BuildError> {
        let grid = Grid::new(width, height)?;
        Ok(Self::from_terrain(grid, vec![terrain; grid.cell_count()]))
    }

    /// Parse a region from text rows.
    pub fn from_text<S: AsRef<str>>(rows: &[S]) -> Result<Self, BuildError> {
        let (grid, terrain) = parse_glyphs(rows, RegionTerrain::from_glyph)?;
        Ok(Self::from_terrain(grid, terrain))
    }

    /// A region with terrain scattered from `seed`.
    ///
    /// The same seed and size always produce the same region.
    pub fn generate(width: u32, height: u32, seed: u64) -> Result<Self, BuildError> {
        let grid = Grid::new(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let total: u32 = TERRAIN_WEIGHTS.iter().map(|(_, w)| w).sum();
        let terrain = (0..grid.cell_count())
            .map(|_| {
                let mut roll = rng.random_range(0..total);
                let mut pick = RegionTerrain::Plains;
                for (t, w) in TERRAIN_WEIGHTS {
                    if roll < w {
                        pick = t;
                        break;
                    }
                    roll -= w;
                }
                pick
            })
            .collect();
        Ok(Self::from_terrain(grid, terrain))
    }

    fn from_terrain(grid: Grid, terrain: Vec<RegionTerrain>) -> Self {
        let cells = terrain
            .into_iter()
            .map(|terrain| RegionCell {
                terrain,
                local: None,
            })
            .collect();
        Self {
            grid,
            cells,
            parties: IndexMap::new(),
        }
    }

    /// Bounds.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Width in hexes.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Height in hexes.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Whether `coord` lies on the region.
    pub fn contains(&self, coord: RegionCoord) -> bool {
        self.grid.contains(coord.x, coord.y)
    }

    pub(crate) fn index_of(&self, coord: RegionCoord) -> Result<usize, QueryError> {
        self.grid
            .index(coord.x, coord.y)
            .ok_or(QueryError::RegionOutOfBounds {
                x: coord.x,
                y: coord.y,
            })
    }

    /// Cell at `coord`.
    pub fn cell(&self, coord: RegionCoord) -> Option<&RegionCell> {
        self.grid.index(coord.x, coord.y).map(|i| &self.cells[i])
    }

    /// Terrain at `coord`.
    pub fn terrain(&self, coord: RegionCoord) -> Option<RegionTerrain> {
        self.cell(coord).map(RegionCell::terrain)
    }

    /// Local map spawned for `coord`.
    pub fn local_map(&self, coord: RegionCoord) -> Option<MapId> {
        self.cell(coord).and_then(RegionCell::local_map)
    }

    /// Record the local map for `coord`. The first recorded id wins.
    pub(crate) fn set_local_map(&mut self, idx: usize, map: MapId) -> MapId {
        *self.cells[idx].local.get_or_insert(map)
    }

    /// Put a party on the region, or move it there if already present.
    pub fn place_party(
        &mut self,
        party: PartyId,
        coord: RegionCoord,
        costs: &TerrainCosts,
    ) -> Result<(), QueryError> {
        let idx = self.index_of(coord)?;
        if !costs.region_passable(self.cells[idx].terrain) {
            return Err(QueryError::ImpassableRegion { coord });
        }
        self.parties.insert(party, coord);
        Ok(())
    }

    /// Take a party off the region. Removing an absent party does nothing.
    pub fn remove_party(&mut self, party: PartyId) -> Option<RegionCoord> {
        self.parties.shift_remove(&party)
    }

    /// Where a party stands.
    pub fn party_position(&self, party: PartyId) -> Option<RegionCoord> {
        self.parties.get(&party).copied()
    }

    /// Every party and its position, in placement order.
    pub fn parties(&self) -> impl Iterator<Item = (PartyId, RegionCoord)> + '_ {
        self.parties.iter().map(|(&p, &c)| (p, c))
    }

    /// Parties standing on `coord`.
    pub fn parties_at(&self, coord: RegionCoord) -> impl Iterator<Item = PartyId> + '_ {
        self.parties
            .iter()
            .filter(move |(_, c)| **c == coord)
            .map(|(&p, _)| p)
    }

    /// Move a party one hex. Nothing changes if the move is rejected.
    pub fn move_party(
        &mut self,
        party: PartyId,
        direction: HexDirection,
        costs: &TerrainCosts,
    ) -> Result<RegionCoord, QueryError> {
        let to = self.party_destination(party, direction, costs)?;
        self.parties.insert(party, to);
        Ok(to)
    }

    /// Where [`move_party`](Self::move_party) would take `party`, without
    /// moving it.
    pub fn party_destination(
        &self,
        party: PartyId,
        direction: HexDirection,
        costs: &TerrainCosts,
    ) -> Result<RegionCoord, QueryError> {
        let from = self
            .party_position(party)
            .ok_or(QueryError::UnknownParty { party })?;
        let (dx, dy) = direction.offset(from.y);
        let to = RegionCoord::new(from.x + dx, from.y + dy);
        let idx = self.index_of(to)?;
        if !costs.region_passable(self.cells[idx].terrain) {
            return Err(QueryError::ImpassableRegion { coord: to });
        }
        Ok(to)
    }

    /// Render terrain back to region text.
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .chunks(self.width() as usize)
            .map(|row| row.iter().map(|c| c.terrain.glyph()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_round_trip() {
        let rows = ["..f", "~MR"];
        let r = RegionMap::from_text(&rows).unwrap();
        assert_eq!(r.terrain(RegionCoord::new(2, 1)), Some(RegionTerrain::Ruins));
        assert_eq!(r.to_text(), vec!["..f".to_string(), "~MR".to_string()]);
    }

    #[test]
    fn generation_is_seeded() {
        let a = RegionMap::generate(12, 9, 42).unwrap();
        let b = RegionMap::generate(12, 9, 42).unwrap();
        assert_eq!(a.to_text(), b.to_text());
        assert_eq!(a.grid().cell_count(), 108);
    }

    #[test]
    fn empty_region_rejected() {
        assert_eq!(
            RegionMap::new(0, 3, RegionTerrain::Plains).unwrap_err(),
            BuildError::EmptyMap
        );
    }

    #[test]
    fn local_map_reference_is_write_once() {
        let mut r = RegionMap::new(2, 2, RegionTerrain::Forest).unwrap();
        assert_eq!(r.set_local_map(3, MapId(5)), MapId(5));
        assert_eq!(r.set_local_map(3, MapId(6)), MapId(5));
        assert_eq!(r.local_map(RegionCoord::new(1, 1)), Some(MapId(5)));
    }

    #[test]
    fn party_moves_on_hex_offsets() {
        let costs = TerrainCosts::default();
        let mut r = RegionMap::new(5, 5, RegionTerrain::Plains).unwrap();
        let p = PartyId(1);
        r.place_party(p, RegionCoord::new(2, 1), &costs).unwrap();
        // Odd row: right-up shifts one column right.
        let to = r.move_party(p, HexDirection::RightUp, &costs).unwrap();
        assert_eq!(to, RegionCoord::new(3, 0));
        assert_eq!(
            r.move_party(p, HexDirection::RightUp, &costs),
            Err(QueryError::RegionOutOfBounds { x: 3, y: -1 })
        );
        assert_eq!(r.party_position(p), Some(RegionCoord::new(3, 0)));
    }

    #[test]
    fn water_blocks_parties() {
        let costs = TerrainCosts::default();
        let mut r = RegionMap::from_text(&[".~"]).unwrap();
        let p = PartyId(3);
        r.place_party(p, RegionCoord::new(0, 0), &costs).unwrap();
        assert_eq!(
            r.move_party(p, HexDirection::Right, &costs),
            Err(QueryError::ImpassableRegion {
                coord: RegionCoord::new(1, 0)
            })
        );
        assert_eq!(r.party_position(p), Some(RegionCoord::new(0, 0)));
    }

    #[test]
    fn unknown_party_and_idempotent_removal() {
        let costs = TerrainCosts::default();
        let mut r = RegionMap::new(3, 3, RegionTerrain::Plains).unwrap();
        assert_eq!(
            r.move_party(PartyId(9), HexDirection::Left, &costs),
            Err(QueryError::UnknownParty { party: PartyId(9) })
        );
        assert_eq!(r.remove_party(PartyId(9)), None);
        r.place_party(PartyId(1), RegionCoord::new(1, 1), &costs).unwrap();
        r.place_party(PartyId(2), RegionCoord::new(1, 1), &costs).unwrap();
        assert_eq!(r.parties_at(RegionCoord::new(1, 1)).count(), 2);
        assert_eq!(r.remove_party(PartyId(1)), Some(RegionCoord::new(1, 1)));
        assert_eq!(r.parties().collect::<Vec<_>>(), vec![(PartyId(2), RegionCoord::new(1, 1))]);
    }
}
