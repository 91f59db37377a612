//! Grid geometry for RCK maps.
//!
//! Maps come in two geometries. Dungeon maps are square grids with
//! 8-directional movement; wilderness and region maps are hex grids in
//! an odd-row-shifted offset layout, where the neighbour offsets depend
//! on the parity of the current row. Both implement [`Topology`], and a
//! map picks one [`Geometry`] once at construction.
//!
//! # Movement tables
//!
//! - [`SquareDirection`]: up, right, down, left, then the four diagonals
//! - [`HexDirection`]: right-up, right, right-down, left-down, left, left-up
//!
//! `step` turns a direction index into a candidate cell. The candidate
//! may be out of bounds; callers check it against the [`Grid`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hex;
pub mod square8;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use direction::{HexDirection, SquareDirection};
pub use error::GeometryError;
pub use geometry::Geometry;
pub use grid::Grid;
pub use hex::HexOffset;
pub use square8::Square8;
pub use topology::Topology;
