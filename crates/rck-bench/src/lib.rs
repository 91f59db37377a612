//! Benchmark profiles for the RCK map layer.
//!
//! - [`pillar_hall`]: a square room with a regular grid of wall pillars
//! - [`reference_profile`]: a 100x40 pillar hall registered on a manager
//! - [`stress_region`]: a 64x64 generated region for spawn benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rck_core::{BuildError, MapId};
use rck_map::{MapManager, RegionMap};

/// Map text for a `width` × `height` hall with a wall every `spacing`
/// cells in both axes. Row 0 and column 0 stay open.
pub fn pillar_hall(width: usize, height: usize, spacing: usize) -> Vec<String> {
    let spacing = spacing.max(2);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if x > 0 && y > 0 && x % spacing == 0 && y % spacing == 0 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

/// Register a 100x40 pillar hall (spacing 3) on `manager`.
pub fn reference_profile(manager: &mut MapManager) -> Result<MapId, BuildError> {
    manager.build_map_from_text(&pillar_hall(100, 40, 3), false)
}

/// A 64x64 region rolled from `seed`.
pub fn stress_region(seed: u64) -> Result<RegionMap, BuildError> {
    RegionMap::generate(64, 64, seed)
}
