//! Cell content tags, map kinds, and region terrain.

use rck_space::Geometry;
use std::fmt;

/// What occupies a cell's terrain layer.
///
/// Changes only through explicit world edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Content {
    /// Open ground or floor.
    #[default]
    None,
    /// A tree: slows hex movement and blocks sight.
    Tree,
    /// Rocks or rubble: slows hex movement.
    Rocks,
    /// Solid wall: blocks movement and sight.
    Wall,
    /// Indoor-to-indoor transition.
    Stairs,
    /// Indoor-to-outdoor transition.
    Door,
    /// Outdoor-to-outdoor transition.
    Zone,
}

impl Content {
    /// All content tags.
    pub const ALL: [Content; 7] = [
        Self::None,
        Self::Tree,
        Self::Rocks,
        Self::Wall,
        Self::Stairs,
        Self::Door,
        Self::Zone,
    ];

    /// Map-text character for this tag.
    pub fn glyph(self) -> char {
        match self {
            Self::None => '.',
            Self::Tree => 'T',
            Self::Rocks => '^',
            Self::Wall => '#',
            Self::Stairs => '>',
            Self::Door => '+',
            Self::Zone => '=',
        }
    }

    /// Parse a map-text character. Both `.` and space read as open ground.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | ' ' => Some(Self::None),
            'T' => Some(Self::Tree),
            '^' => Some(Self::Rocks),
            '#' => Some(Self::Wall),
            '>' => Some(Self::Stairs),
            '+' => Some(Self::Door),
            '=' => Some(Self::Zone),
            _ => None,
        }
    }

    /// Whether this tag marks a transition cell.
    pub fn is_transition(self) -> bool {
        matches!(self, Self::Stairs | Self::Door | Self::Zone)
    }

    /// Whether nothing may walk into this cell.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether this cell stops line of sight.
    pub fn blocks_sight(self) -> bool {
        matches!(self, Self::Wall | Self::Tree | Self::Door)
    }

    /// The transition tag for a link between two kinds of map.
    pub fn transition_between(a: MapKind, b: MapKind) -> Self {
        match (a.is_outdoor(), b.is_outdoor()) {
            (false, false) => Self::Stairs,
            (true, true) => Self::Zone,
            _ => Self::Door,
        }
    }
}

/// Scale and geometry class of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// Square grid, 5 ft per cell.
    Dungeon,
    /// Hex grid, 5 yd per cell.
    Wilderness,
    /// Hex grid, 6 mi per cell.
    Region,
}

impl MapKind {
    /// The geometry maps of this kind use.
    pub fn geometry(self) -> Geometry {
        match self {
            Self::Dungeon => Geometry::Square,
            Self::Wilderness | Self::Region => Geometry::Hex,
        }
    }

    /// Everything but dungeons is outdoors.
    pub fn is_outdoor(self) -> bool {
        !matches!(self, Self::Dungeon)
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dungeon => write!(f, "dungeon"),
            Self::Wilderness => write!(f, "wilderness"),
            Self::Region => write!(f, "region"),
        }
    }
}

/// Terrain of a region-map cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionTerrain {
    /// Open grassland.
    #[default]
    Plains,
    /// Woodland.
    Forest,
    /// Rolling hills.
    Hills,
    /// Mountains.
    Mountains,
    /// Marsh.
    Swamp,
    /// Lakes and sea; impassable on foot.
    Water,
    /// A ruined site with a dungeon beneath.
    Ruins,
}

impl RegionTerrain {
    /// All terrain types.
    pub const ALL: [RegionTerrain; 7] = [
        Self::Plains,
        Self::Forest,
        Self::Hills,
        Self::Mountains,
        Self::Swamp,
        Self::Water,
        Self::Ruins,
    ];

    /// Region-text character for this terrain.
    pub fn glyph(self) -> char {
        match self {
            Self::Plains => '.',
            Self::Forest => 'f',
            Self::Hills => 'h',
            Self::Mountains => 'M',
            Self::Swamp => 's',
            Self::Water => '~',
            Self::Ruins => 'R',
        }
    }

    /// Parse a region-text character.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.glyph() == glyph)
    }

    /// Fraction of local-map cells seeded with trees and with rocks.
    pub(crate) fn scatter(self) -> (f64, f64) {
        match self {
            Self::Plains => (0.05, 0.02),
            Self::Forest => (0.35, 0.03),
            Self::Hills => (0.08, 0.15),
            Self::Mountains => (0.04, 0.35),
            Self::Swamp => (0.15, 0.0),
            Self::Water => (0.0, 0.0),
            Self::Ruins => (0.10, 0.10),
        }
    }
}

impl fmt::Display for RegionTerrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Hills => "hills",
            Self::Mountains => "mountains",
            Self::Swamp => "swamp",
            Self::Water => "water",
            Self::Ruins => "ruins",
        };
        f.write_str(name)
    }
}
