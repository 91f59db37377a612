//! Error types for the map layer.
//!
//! Split by when the failure can happen: [`BuildError`] for structural
//! problems found while constructing maps or linking the transition
//! graph, [`QueryError`] for invalid references passed to queries and
//! mutations during play. Expected-empty outcomes (no occupant, no item,
//! no transition) are `Option::None`, not errors.

use crate::id::{EntityRef, MapId, PartyId, Position, RegionCoord, TransitionTarget};
use std::error::Error;
use std::fmt;

/// An invalid reference or a rejected mutation at query time.
///
/// Returned to the immediate caller; never fatal to the turn loop.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    /// No map is registered under this id.
    UnknownMap {
        /// The offending id.
        map: MapId,
    },
    /// A coordinate lies outside the map.
    OutOfBounds {
        /// The offending position.
        at: Position,
        /// Map width.
        width: u32,
        /// Map height.
        height: u32,
    },
    /// The owning manager does not recognise the handle (never issued,
    /// or destroyed since).
    UnresolvedEntity {
        /// The entity that failed to resolve.
        entity: EntityRef,
    },
    /// The entity resolves but is not currently positioned on any map.
    NotPlaced {
        /// The unplaced entity.
        entity: EntityRef,
    },
    /// A direction index outside the geometry's direction table.
    InvalidDirection {
        /// The index supplied.
        index: usize,
        /// Number of directions the geometry supports.
        count: usize,
    },
    /// A movement speed that is zero, negative, or not finite.
    InvalidSpeed {
        /// The value supplied.
        speed: f64,
    },
    /// The destination already holds a different entity of the same kind.
    CellOccupied {
        /// The contested cell.
        at: Position,
        /// The entity already there.
        occupant: EntityRef,
    },
    /// The destination cannot be walked into.
    Blocked {
        /// The blocked cell.
        at: Position,
    },
    /// The entity is not standing on a transition cell.
    NotOnTransition {
        /// The entity that tried to take a transition.
        entity: EntityRef,
    },
    /// A coordinate outside the region map.
    RegionOutOfBounds {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// The region cell cannot be entered.
    ImpassableRegion {
        /// The blocked region cell.
        coord: RegionCoord,
    },
    /// The party is not on the region map.
    UnknownParty {
        /// The offending party.
        party: PartyId,
    },
    /// No unused item ids remain for named items.
    ItemIdsExhausted,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMap { map } => write!(f, "no map registered with id {map}"),
            Self::OutOfBounds { at, width, height } => {
                write!(f, "{at} out of bounds: [0, {width}) x [0, {height})")
            }
            Self::UnresolvedEntity { entity } => {
                write!(f, "{entity} is not known to its manager")
            }
            Self::NotPlaced { entity } => write!(f, "{entity} is not placed on any map"),
            Self::InvalidDirection { index, count } => {
                write!(f, "direction {index} out of range, geometry has {count}")
            }
            Self::InvalidSpeed { speed } => {
                write!(f, "speed must be finite and positive, got {speed}")
            }
            Self::CellOccupied { at, occupant } => write!(f, "{at} already holds {occupant}"),
            Self::Blocked { at } => write!(f, "{at} is not traversable"),
            Self::NotOnTransition { entity } => {
                write!(f, "{entity} is not standing on a transition")
            }
            Self::RegionOutOfBounds { x, y } => {
                write!(f, "region coordinate ({x}, {y}) out of bounds")
            }
            Self::ImpassableRegion { coord } => write!(f, "{coord} is impassable"),
            Self::UnknownParty { party } => write!(f, "party {party} is not on the region map"),
            Self::ItemIdsExhausted => write!(f, "no item ids left to mint"),
        }
    }
}

impl Error for QueryError {}

/// A structural error found while building maps or the transition graph.
///
/// Construction aborts on these: no partially-built map is registered.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// Map text with no rows, or rows of zero length.
    EmptyText,
    /// A text row whose length differs from the first row.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// A character with no content mapping.
    UnknownGlyph {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The character.
        glyph: char,
    },
    /// A requested map with zero width or height.
    EmptyMap,
    /// A dimension that does not fit the coordinate type.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// Requested value.
        value: u64,
        /// Largest accepted value.
        max: u32,
    },
    /// A transition linking a cell to itself.
    SelfLink {
        /// The cell.
        at: Position,
    },
    /// The cell already links somewhere else.
    TransitionConflict {
        /// The cell being relinked.
        at: Position,
        /// Its current target.
        existing: TransitionTarget,
    },
    /// A transition-tagged cell with no target.
    UnlinkedTransition {
        /// The cell.
        at: Position,
    },
    /// A transition whose target map or cell does not exist.
    DanglingTransition {
        /// The cell.
        at: Position,
        /// Where it claims to lead.
        target: TransitionTarget,
    },
    /// A transition whose target does not link back.
    AsymmetricTransition {
        /// The cell.
        at: Position,
        /// Where it leads.
        target: Position,
    },
    /// A prefab entry point outside the prefab or on a blocking cell.
    InvalidEntry {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// An invalid map id or coordinate passed to a construction operation.
    Reference(QueryError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "map text has no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "map text row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown map glyph {glyph:?} at row {row}, column {col}")
            }
            Self::EmptyMap => write!(f, "map must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::SelfLink { at } => write!(f, "transition at {at} links to itself"),
            Self::TransitionConflict { at, existing } => {
                write!(f, "{at} already transitions to {existing}")
            }
            Self::UnlinkedTransition { at } => write!(f, "transition at {at} has no target"),
            Self::DanglingTransition { at, target } => {
                write!(f, "transition at {at} leads to missing {target}")
            }
            Self::AsymmetricTransition { at, target } => {
                write!(f, "transition at {at} leads to {target}, which does not link back")
            }
            Self::InvalidEntry { x, y } => write!(f, "entry point ({x}, {y}) is not usable"),
            Self::Reference(e) => write!(f, "invalid reference: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Reference(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueryError> for BuildError {
    fn from(e: QueryError) -> Self {
        Self::Reference(e)
    }
}
