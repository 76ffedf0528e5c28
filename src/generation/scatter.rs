//! Low-density "normal" towns filling the space left in a zone

use std::ops::Range;

use crate::config::MapConfiguration;
use crate::geometry::{keeps_distance, GridCoord};
use crate::rng::RandomSource;
use crate::settlement::{SettlementId, SettlementKind};

use super::LayoutBuilder;

/// Columns kept clear at both map edges by scattered towns.
pub const SCATTER_EDGE_MARGIN: i32 = 2;

const CANDIDATES_PER_GRID_POINT: usize = 3;
const SELECTION_SAMPLES: usize = 3;

/// Thin a jittered grid of candidates over `rows` into normal towns.
pub fn generate_scattered<R>(
    zone: usize,
    rows: Range<i32>,
    config: &MapConfiguration,
    layout: &mut LayoutBuilder,
    rng: &mut R,
) -> Vec<SettlementId>
where
    R: RandomSource + ?Sized,
{
    let spacing = config.min_distance_between_scattered_towns;
    let mut candidates = candidate_pool(rows, config, layout, rng);
    let mut placed = Vec::new();

    while !candidates.is_empty() {
        if rng.chance(config.scattered_town_density) {
            let chosen = candidates[most_isolated_sample(&candidates, layout, rng)];
            placed.push(layout.place(chosen, SettlementKind::Normal, zone));
            candidates.retain(|candidate| candidate.manhattan(chosen) >= spacing);
        } else {
            let index = rng.index(candidates.len());
            candidates.remove(index);
        }
    }

    placed
}

/// Jittered grid points over `rows` that respect spacing to everything
/// placed so far.
pub fn candidate_pool<R>(
    rows: Range<i32>,
    config: &MapConfiguration,
    layout: &LayoutBuilder,
    rng: &mut R,
) -> Vec<GridCoord>
where
    R: RandomSource + ?Sized,
{
    let step = config.min_distance_between_scattered_towns.max(1) as usize;
    let max_x = config.width - SCATTER_EDGE_MARGIN - 1;
    let mut candidates = Vec::new();

    for y in rows.clone().step_by(step) {
        for x in (SCATTER_EDGE_MARGIN..config.width - SCATTER_EDGE_MARGIN).step_by(step) {
            for _ in 0..CANDIDATES_PER_GRID_POINT {
                let dx = rng.range_i32(-1, 2);
                let dy = rng.range_i32(-1, 2);
                let candidate = GridCoord::new(
                    (x + dx).clamp(SCATTER_EDGE_MARGIN, max_x),
                    (y + dy).clamp(rows.start, rows.end - 1),
                );
                if is_valid_scattered_position(candidate, config, layout) {
                    candidates.push(candidate);
                }
            }
        }
    }

    candidates
}

pub fn is_valid_scattered_position(position: GridCoord, config: &MapConfiguration, layout: &LayoutBuilder) -> bool {
    keeps_distance(position, layout.core_positions(), config.min_distance_from_core)
        && keeps_distance(position, layout.positions(), config.min_distance_between_scattered_towns)
}

// Best of a few random picks, scored by distance to the nearest settlement.
// Ties keep the earlier pick.
fn most_isolated_sample<R>(candidates: &[GridCoord], layout: &LayoutBuilder, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let mut best_index = 0;
    let mut best_distance = 0;

    for _ in 0..SELECTION_SAMPLES {
        let index = rng.index(candidates.len());
        let distance = layout
            .nearest_distance(candidates[index])
            .unwrap_or(i32::MAX);
        if distance > best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    best_index
}
