//! Map-layer configuration, validation, and error types.
//!
//! [`MapConfig`] is handed to [`MapManager::new`](crate::MapManager::new),
//! which calls [`validate()`](MapConfig::validate) before anything is
//! built. Scale constants and terrain costs are data, not code: the
//! defaults reproduce the classic 5 ft / 5 yd / 6 mi cell sizes, and
//! only their ordering is load-bearing.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use rck_core::BuildError;

use crate::content::{Content, MapKind, RegionTerrain};
use crate::cost::NON_TRAVERSABLE;
use crate::prefab::Prefab;

// ── ScaleConfig ────────────────────────────────────────────────────

/// Physical size of one cell per map kind, and the round length.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Feet per dungeon cell. Default: 5.
    pub dungeon_feet: f64,
    /// Feet per wilderness hex. Default: 15 (5 yards).
    pub wilderness_feet: f64,
    /// Feet per region hex. Default: 31 680 (6 miles).
    pub region_feet: f64,
    /// Combat rounds in one hour. Default: 360.
    pub rounds_per_hour: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            dungeon_feet: 5.0,
            wilderness_feet: 15.0,
            region_feet: 6.0 * 5280.0,
            rounds_per_hour: 360.0,
        }
    }
}

impl ScaleConfig {
    /// Feet covered by one step on a map of `kind`.
    pub fn cell_feet(&self, kind: MapKind) -> f64 {
        match kind {
            MapKind::Dungeon => self.dungeon_feet,
            MapKind::Wilderness => self.wilderness_feet,
            MapKind::Region => self.region_feet,
        }
    }

    /// Convert rounds to hours.
    pub fn rounds_to_hours(&self, rounds: f64) -> f64 {
        rounds / self.rounds_per_hour
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("dungeon_feet", self.dungeon_feet),
            ("wilderness_feet", self.wilderness_feet),
            ("region_feet", self.region_feet),
            ("rounds_per_hour", self.rounds_per_hour),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScale { name, value });
            }
        }
        if !(self.dungeon_feet < self.wilderness_feet && self.wilderness_feet < self.region_feet) {
            return Err(ConfigError::ScaleOrder {
                dungeon: self.dungeon_feet,
                wilderness: self.wilderness_feet,
                region: self.region_feet,
            });
        }
        Ok(())
    }
}

// ── TerrainCosts ───────────────────────────────────────────────────

/// Step costs by cell content (hex maps) and by region terrain.
///
/// Dungeon maps ignore the content costs: every non-wall cell costs
/// `open`. A cost of [`NON_TRAVERSABLE`] makes the terrain impassable.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainCosts {
    /// Open ground. Default: 1.
    pub open: f32,
    /// Trees on hex maps. Default: 2.
    pub tree: f32,
    /// Rocks on hex maps. Default: 3.
    pub rocks: f32,
    /// Stairs, doors, and zones. Default: 1.
    pub transition: f32,
    /// Region plains. Default: 1.
    pub plains: f32,
    /// Region forest. Default: 2.
    pub forest: f32,
    /// Region hills. Default: 2.
    pub hills: f32,
    /// Region mountains. Default: 3.
    pub mountains: f32,
    /// Region swamp. Default: 3.
    pub swamp: f32,
    /// Region water. Default: impassable.
    pub water: f32,
    /// Region ruins. Default: 1.
    pub ruins: f32,
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self {
            open: 1.0,
            tree: 2.0,
            rocks: 3.0,
            transition: 1.0,
            plains: 1.0,
            forest: 2.0,
            hills: 2.0,
            mountains: 3.0,
            swamp: 3.0,
            water: NON_TRAVERSABLE,
            ruins: 1.0,
        }
    }
}

impl TerrainCosts {
    /// Cost of stepping onto a cell with `content` on a map of `kind`.
    pub fn content_cost(&self, kind: MapKind, content: Content) -> f32 {
        if content.blocks_movement() {
            return NON_TRAVERSABLE;
        }
        if kind == MapKind::Dungeon {
            return self.open;
        }
        match content {
            Content::None => self.open,
            Content::Tree => self.tree,
            Content::Rocks => self.rocks,
            Content::Stairs | Content::Door | Content::Zone => self.transition,
            Content::Wall => NON_TRAVERSABLE,
        }
    }

    /// Cost of entering a region cell of `terrain`.
    pub fn region_cost(&self, terrain: RegionTerrain) -> f32 {
        match terrain {
            RegionTerrain::Plains => self.plains,
            RegionTerrain::Forest => self.forest,
            RegionTerrain::Hills => self.hills,
            RegionTerrain::Mountains => self.mountains,
            RegionTerrain::Swamp => self.swamp,
            RegionTerrain::Water => self.water,
            RegionTerrain::Ruins => self.ruins,
        }
    }

    /// Whether a party can enter `terrain` at all.
    pub fn region_passable(&self, terrain: RegionTerrain) -> bool {
        self.region_cost(terrain).is_finite()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("open", self.open),
            ("tree", self.tree),
            ("rocks", self.rocks),
            ("transition", self.transition),
            ("plains", self.plains),
            ("forest", self.forest),
            ("hills", self.hills),
            ("mountains", self.mountains),
            ("swamp", self.swamp),
            ("water", self.water),
            ("ruins", self.ruins),
        ] {
            // Infinity is the impassable marker; NaN and non-positive are not.
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::InvalidCost { name, value });
            }
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MapConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A scale value is NaN, infinite, zero, or negative.
    InvalidScale {
        /// Which field.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Cell sizes are not strictly increasing dungeon < wilderness < region.
    ScaleOrder {
        /// Configured dungeon cell size.
        dungeon: f64,
        /// Configured wilderness cell size.
        wilderness: f64,
        /// Configured region cell size.
        region: f64,
    },
    /// A terrain cost is NaN, zero, or negative.
    InvalidCost {
        /// Which field.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// A default map size has a zero dimension.
    EmptyMapSize {
        /// Which size setting.
        name: String,
    },
    /// A configured prefab does not parse.
    InvalidPrefab {
        /// The terrain the prefab is registered for.
        terrain: RegionTerrain,
        /// The parse failure.
        error: BuildError,
    },
    /// The entity directories handed to the manager report the wrong kind.
    DirectoryKindMismatch {
        /// Which slot was filled wrongly.
        slot: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { name, value } => {
                write!(f, "scale {name} must be finite and positive, got {value}")
            }
            Self::ScaleOrder {
                dungeon,
                wilderness,
                region,
            } => write!(
                f,
                "cell sizes must increase dungeon < wilderness < region, got {dungeon} / {wilderness} / {region}"
            ),
            Self::InvalidCost { name, value } => {
                write!(f, "terrain cost {name} must be positive, got {value}")
            }
            Self::EmptyMapSize { name } => write!(f, "map size {name} has a zero dimension"),
            Self::InvalidPrefab { terrain, error } => {
                write!(f, "prefab for {terrain} is invalid: {error}")
            }
            Self::DirectoryKindMismatch { slot } => {
                write!(f, "{slot} directory reports the wrong entity kind")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPrefab { error, .. } => Some(error),
            _ => None,
        }
    }
}

// ── MapConfig ──────────────────────────────────────────────────────

/// Everything the map manager needs besides its collaborators.
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// Cell sizes and round length.
    pub scale: ScaleConfig,
    /// Step costs.
    pub costs: TerrainCosts,
    /// `(width, height)` of maps from `create_map(false)`. Default: 46×20.
    pub indoor_size: (u32, u32),
    /// `(width, height)` of maps from `create_map(true)`. Default: 23×10.
    pub outdoor_size: (u32, u32),
    /// Local map size per region terrain. Terrains not listed use
    /// `outdoor_size`.
    pub local_map_size: IndexMap<RegionTerrain, (u32, u32)>,
    /// Prefab layouts used instead of generation for these terrains.
    pub prefabs: IndexMap<RegionTerrain, Prefab>,
    /// Terrains whose local map is spawned as soon as a party enters.
    pub auto_spawn: Vec<RegionTerrain>,
    /// Base seed for local map generation.
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        let mut prefabs = IndexMap::new();
        prefabs.insert(RegionTerrain::Ruins, Prefab::ruins());
        Self {
            scale: ScaleConfig::default(),
            costs: TerrainCosts::default(),
            indoor_size: (46, 20),
            outdoor_size: (23, 10),
            local_map_size: IndexMap::new(),
            prefabs,
            auto_spawn: vec![RegionTerrain::Ruins],
            seed: 0,
        }
    }
}

impl MapConfig {
    /// Local map dimensions for a region cell of `terrain`.
    pub fn local_size(&self, terrain: RegionTerrain) -> (u32, u32) {
        self.local_map_size
            .get(&terrain)
            .copied()
            .unwrap_or(self.outdoor_size)
    }

    /// Whether entering `terrain` spawns its local map.
    pub fn auto_spawns(&self, terrain: RegionTerrain) -> bool {
        self.auto_spawn.contains(&terrain)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale.validate()?;
        self.costs.validate()?;
        let sizes = [
            ("indoor_size".to_string(), self.indoor_size),
            ("outdoor_size".to_string(), self.outdoor_size),
        ]
        .into_iter()
        .chain(
            self.local_map_size
                .iter()
                .map(|(t, &size)| (format!("local_map_size[{t}]"), size)),
        );
        for (name, (w, h)) in sizes {
            if w == 0 || h == 0 {
                return Err(ConfigError::EmptyMapSize { name });
            }
        }
        for (&terrain, prefab) in &self.prefabs {
            prefab
                .parse()
                .map_err(|error| ConfigError::InvalidPrefab { terrain, error })?;
        }
        Ok(())
    }
}
