//! Error types for grid construction.

use rck_core::BuildError;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// Requested value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<GeometryError> for BuildError {
    fn from(e: GeometryError) -> Self {
        match e {
            GeometryError::EmptyGrid => BuildError::EmptyMap,
            GeometryError::DimensionTooLarge { name, value, max } => {
                BuildError::DimensionTooLarge {
                    name,
                    value: u64::from(value),
                    max,
                }
            }
        }
    }
}
