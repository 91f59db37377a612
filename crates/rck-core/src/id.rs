//! Strongly-typed identifiers, positions, and entity references.

use std::fmt;

/// Identifies a map within the map registry.
///
/// Ids are handed out sequentially by the registry and are never reused
/// within a session, so a `MapId` stored in an external position record
/// stays valid for as long as the session lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MapId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies an item owned by an external item manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies an adventuring party travelling on the region map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartyId(pub u32);

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PartyId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A cell on a specific map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// The map the cell belongs to.
    pub map: MapId,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a position on `map` at `(x, y)`.
    pub fn new(map: MapId, x: i32, y: i32) -> Self {
        Self { map, x, y }
    }

    /// The `(x, y)` pair without the map id.
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map {} ({}, {})", self.map, self.x, self.y)
    }
}

/// A cell on the region map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl RegionCoord {
    /// Create a region coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for RegionCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region ({}, {})", self.x, self.y)
    }
}

/// Where a transition cell leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    /// A cell on another (or the same) registered map.
    Map(Position),
    /// Back out onto the region map. Only the entry cell of a local map
    /// spawned from the region carries this target.
    Region(RegionCoord),
}

impl fmt::Display for TransitionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(pos) => write!(f, "{pos}"),
            Self::Region(coord) => write!(f, "{coord}"),
        }
    }
}

/// Which external manager owns an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Monsters and lightweight NPCs.
    Mob,
    /// Fully-fleshed characters, including the player's.
    Character,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mob => write!(f, "mob"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// Slot index plus generation counter for an entity owned by an
/// external manager.
///
/// A handle whose generation does not match the slot's current
/// generation is stale: the entity it named has been destroyed and the
/// slot may since have been reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle {
    index: u32,
    generation: u32,
}

impl EntityHandle {
    /// Create a handle from its parts.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the owning arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when the handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// An entity handle tagged with the kind of manager that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Owning manager.
    pub kind: EntityKind,
    /// Handle inside that manager.
    pub handle: EntityHandle,
}

impl EntityRef {
    /// Reference a mob.
    pub fn mob(handle: EntityHandle) -> Self {
        Self {
            kind: EntityKind::Mob,
            handle,
        }
    }

    /// Reference a character.
    pub fn character(handle: EntityHandle) -> Self {
        Self {
            kind: EntityKind::Character,
            handle,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.handle)
    }
}
