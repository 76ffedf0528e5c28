//! Satellite towns clustered around a core town

use crate::config::MapConfiguration;
use crate::geometry::GridCoord;
use crate::rng::RandomSource;
use crate::settlement::{SettlementId, SettlementKind};

use super::LayoutBuilder;

/// Satellites need this much Manhattan clearance from any settlement.
pub const SATELLITE_CLEARANCE: i32 = 2;

// Closest ring around the core that may hold a satellite.
const FIRST_RING: i32 = 2;

const CARDINAL_DIRECTIONS: [GridCoord; 4] = [
    GridCoord::new(1, 0),
    GridCoord::new(-1, 0),
    GridCoord::new(0, 1),
    GridCoord::new(0, -1),
];

const DIAGONAL_DIRECTIONS: [GridCoord; 4] = [
    GridCoord::new(1, 1),
    GridCoord::new(-1, 1),
    GridCoord::new(1, -1),
    GridCoord::new(-1, -1),
];

const LATERAL_OFFSETS: [i32; 3] = [-1, 0, 1];

/// Scatter satellites around `core`, cardinal directions first, then one
/// attempt chain per diagonal. Returns the ids placed, never more than
/// `max_satellites_per_core`.
pub fn generate_satellites<R>(
    core: GridCoord,
    zone: usize,
    config: &MapConfiguration,
    layout: &mut LayoutBuilder,
    rng: &mut R,
) -> Vec<SettlementId>
where
    R: RandomSource + ?Sized,
{
    let radius = config.satellite_radius[zone];
    let density = config.satellite_density[zone];
    let cap = config.max_satellites_per_core as usize;
    let bounds = config.bounds();
    let mut placed = Vec::new();

    let is_open = |layout: &LayoutBuilder, position: GridCoord| {
        bounds.contains(position) && !layout.has_settlement_within(position, SATELLITE_CLEARANCE)
    };

    for direction in CARDINAL_DIRECTIONS {
        if placed.len() >= cap {
            break;
        }

        for distance in FIRST_RING..=radius {
            if !rng.chance(density) {
                continue;
            }

            let base = core + direction * distance;
            for offset in LATERAL_OFFSETS {
                let candidate = if direction.x != 0 {
                    base.offset(0, offset)
                } else {
                    base.offset(offset, 0)
                };
                if is_open(layout, candidate) {
                    placed.push(layout.place(candidate, SettlementKind::Satellite, zone));
                    break;
                }
            }

            if placed.len() >= cap {
                break;
            }
        }
    }

    if placed.len() < cap {
        for direction in DIAGONAL_DIRECTIONS {
            if placed.len() >= cap {
                break;
            }

            for distance in FIRST_RING..=radius {
                if !rng.chance(density) {
                    continue;
                }

                let candidate = core + direction * distance;
                if is_open(layout, candidate) {
                    placed.push(layout.place(candidate, SettlementKind::Satellite, zone));
                    break;
                }
            }
        }
    }

    placed
}
