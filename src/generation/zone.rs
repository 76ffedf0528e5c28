//! Core town placement for a single zone

use tracing::warn;

use crate::config::{MapConfiguration, CORE_EDGE_MARGIN};
use crate::geometry::{round_to_int, GridCoord};
use crate::rng::RandomSource;

pub const CORE_PLACEMENT_ATTEMPTS: u32 = 50;
pub const MIN_CORE_SEPARATION: i32 = 6;

// Zone 0 keeps its core towns between these rows when the band allows it.
const FIRST_ZONE_MIN_Y: i32 = 10;
const FIRST_ZONE_MAX_Y: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorePlacement {
    pub position: GridCoord,
    /// Set when every attempt was rejected and the fixed fallback was used.
    pub fell_back: bool,
}

/// Target row and the inclusive row window sampled for one core town.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreTarget {
    pub target_y: f32,
    pub min_y: i32,
    pub max_y: i32,
}

impl CoreTarget {
    pub fn new(zone: usize, index: usize, towns_in_zone: usize, config: &MapConfiguration) -> Self {
        let zone_start = config.zone_rows(zone).start;
        let section_height = config.zone_height() as f32 / towns_in_zone as f32;
        let target_y = zone_start as f32 + (index as f32 + 0.5) * section_height;

        let y_range = round_to_int(section_height * 0.25);
        let mut min_y = round_to_int(target_y - y_range as f32);
        let mut max_y = round_to_int(target_y + y_range as f32);

        // An inverted window samples `min_y` only. The clamp is dropped when
        // even that row would leave the zone.
        if zone == 0 {
            let clamped_min = min_y.max(FIRST_ZONE_MIN_Y);
            if clamped_min < config.zone_rows(zone).end {
                min_y = clamped_min;
                max_y = max_y.min(FIRST_ZONE_MAX_Y);
            }
        }

        Self {
            target_y,
            min_y,
            max_y,
        }
    }

    fn fallback(&self, config: &MapConfiguration) -> GridCoord {
        GridCoord::new(config.width / 2, round_to_int(self.target_y))
    }
}

/// Place every core town of `zone`, evenly spread over the zone's rows.
pub fn generate_core_towns<R>(zone: usize, config: &MapConfiguration, rng: &mut R) -> Vec<CorePlacement>
where
    R: RandomSource + ?Sized,
{
    let towns_in_zone = config.core_towns_per_zone[zone] as usize;
    let mut placements: Vec<CorePlacement> = Vec::with_capacity(towns_in_zone);
    let mut positions: Vec<GridCoord> = Vec::with_capacity(towns_in_zone);

    for index in 0..towns_in_zone {
        let target = CoreTarget::new(zone, index, towns_in_zone, config);
        let placement = match sample_core_position(&target, config, &positions, rng) {
            Some(position) => CorePlacement {
                position,
                fell_back: false,
            },
            None => {
                let position = target.fallback(config);
                warn!(
                    zone,
                    index,
                    x = position.x,
                    y = position.y,
                    attempts = CORE_PLACEMENT_ATTEMPTS,
                    "core town spacing unsatisfiable, using fallback position"
                );
                CorePlacement {
                    position,
                    fell_back: true,
                }
            }
        };
        positions.push(placement.position);
        placements.push(placement);
    }

    placements
}

fn sample_core_position<R>(
    target: &CoreTarget,
    config: &MapConfiguration,
    existing: &[GridCoord],
    rng: &mut R,
) -> Option<GridCoord>
where
    R: RandomSource + ?Sized,
{
    for _ in 0..CORE_PLACEMENT_ATTEMPTS {
        let x = rng.range_i32(CORE_EDGE_MARGIN, config.width - CORE_EDGE_MARGIN);
        let y = rng.range_i32(target.min_y, target.max_y + 1);
        let candidate = GridCoord::new(x, y);
        if is_valid_core_position(candidate, config, existing) {
            return Some(candidate);
        }
    }
    None
}

pub fn is_valid_core_position(position: GridCoord, config: &MapConfiguration, existing: &[GridCoord]) -> bool {
    if position.x < CORE_EDGE_MARGIN || position.x > config.width - CORE_EDGE_MARGIN {
        return false;
    }

    let min_dx = config.width / 3;
    existing.iter().all(|other| {
        (position.x - other.x).abs() >= min_dx && position.manhattan(*other) >= MIN_CORE_SEPARATION
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_first_zone_window_is_clamped() {
        let config = MapConfiguration::default();

        let first = CoreTarget::new(0, 0, 2, &config);
        assert_eq!((first.min_y, first.max_y), (10, 12));

        // Clamped window is inverted, so only its lower row can be drawn.
        let second = CoreTarget::new(0, 1, 2, &config);
        assert_eq!((second.min_y, second.max_y), (21, 20));
    }

    #[test]
    fn test_inverted_first_zone_window_pins_row() {
        let config = MapConfiguration::default();

        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let placements = generate_core_towns(0, &config, &mut rng);
            let expected = if placements[1].fell_back { 25 } else { 21 };
            assert_eq!(placements[1].position.y, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_short_first_zone_keeps_its_band() {
        let config = MapConfiguration {
            width: 20,
            height: 30,
            zone_count: 3,
            core_towns_per_zone: vec![1, 1, 1],
            satellite_radius: vec![4, 4, 4],
            satellite_density: vec![0.0, 0.0, 0.0],
            ..MapConfiguration::default()
        };

        // Rows 10..=20 lie above a ten-row zone 0.
        let target = CoreTarget::new(0, 0, 1, &config);
        assert_eq!((target.min_y, target.max_y), (3, 7));

        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let placements = generate_core_towns(0, &config, &mut rng);
            assert!((0..10).contains(&placements[0].position.y), "seed {seed}");
        }
    }

    #[test]
    fn test_upper_zone_window() {
        let config = MapConfiguration::default();

        let target = CoreTarget::new(2, 0, 1, &config);
        assert!((target.target_y - 82.5).abs() < 1e-4);
        assert_eq!((target.min_y, target.max_y), (74, 90));
    }

    #[test]
    fn test_core_validity() {
        let config = MapConfiguration::default();
        let existing = [GridCoord::new(5, 10)];

        assert!(!is_valid_core_position(GridCoord::new(3, 40), &config, &[]));
        assert!(!is_valid_core_position(GridCoord::new(17, 40), &config, &[]));
        assert!(is_valid_core_position(GridCoord::new(16, 40), &config, &[]));
        // Horizontal gap must reach width / 3.
        assert!(!is_valid_core_position(GridCoord::new(10, 30), &config, &existing));
        assert!(is_valid_core_position(GridCoord::new(11, 10), &config, &existing));
    }

    #[test]
    fn test_cores_land_in_window() {
        let config = MapConfiguration::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for zone in 0..config.zone_count {
            let placements = generate_core_towns(zone, &config, &mut rng);
            assert_eq!(placements.len(), config.core_towns_per_zone[zone] as usize);
            for (index, placement) in placements.iter().enumerate() {
                if placement.fell_back {
                    continue;
                }
                let target = CoreTarget::new(zone, index, placements.len(), &config);
                let max_y = target.max_y.max(target.min_y);
                assert!((target.min_y..=max_y).contains(&placement.position.y));
                assert!(placement.position.x >= CORE_EDGE_MARGIN);
                assert!(placement.position.x < config.width - CORE_EDGE_MARGIN);
            }
        }
    }

    #[test]
    fn test_impossible_spacing_falls_back() {
        // Two cores cannot be width / 3 apart inside [4, 6).
        let config = MapConfiguration {
            width: 10,
            height: 30,
            zone_count: 1,
            core_towns_per_zone: vec![2],
            satellite_radius: vec![0],
            satellite_density: vec![0.0],
            ..MapConfiguration::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let placements = generate_core_towns(0, &config, &mut rng);

        assert!(!placements[0].fell_back);
        assert!(placements[1].fell_back);
        let target = CoreTarget::new(0, 1, 2, &config);
        assert_eq!(placements[1].position, GridCoord::new(5, round_to_int(target.target_y)));
    }
}
