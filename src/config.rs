use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::MapBounds;

/// Core towns keep this many cells clear of the left and right map edges.
pub const CORE_EDGE_MARGIN: i32 = 4;

/// Parameters of one generated map. Per-zone arrays are indexed bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfiguration {
    pub width: i32,
    pub height: i32,
    pub zone_count: usize,
    pub core_towns_per_zone: Vec<u32>,
    pub satellite_radius: Vec<i32>,
    pub satellite_density: Vec<f32>,
    pub scattered_town_density: f32,
    pub max_satellites_per_core: u32,
    pub min_distance_between_scattered_towns: i32,
    pub min_distance_from_core: i32,
}

impl Default for MapConfiguration {
    fn default() -> Self {
        Self {
            width: 20,
            height: 100,
            zone_count: 3,
            core_towns_per_zone: vec![2, 2, 1],
            satellite_radius: vec![4, 5, 6],
            satellite_density: vec![0.4, 0.3, 0.2],
            scattered_town_density: 0.05,
            max_satellites_per_core: 8,
            min_distance_between_scattered_towns: 4,
            min_distance_from_core: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("map must have at least one zone")]
    NoZones,
    #[error("{field} has {actual} entries but there are {expected} zones")]
    ZoneArrayLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("height {height} leaves empty zones when split into {zone_count}")]
    EmptyZones { height: i32, zone_count: usize },
    #[error("width {width} is too narrow, core towns need at least {min}")]
    MapTooNarrow { width: i32, min: i32 },
    #[error("satellite radius {radius} for zone {zone} is negative")]
    NegativeRadius { zone: usize, radius: i32 },
    #[error("{field} must lie in [0, 1], got {value}")]
    DensityOutOfRange { field: String, value: f32 },
    #[error("{field} must be at least {min}, got {value}")]
    DistanceTooSmall {
        field: &'static str,
        min: i32,
        value: i32,
    },
}

impl MapConfiguration {
    /// Height actually used: truncated to a multiple of the zone count.
    pub fn effective_height(&self) -> i32 {
        if self.zone_count == 0 {
            return 0;
        }
        self.zone_height() * self.zone_count as i32
    }

    pub fn zone_height(&self) -> i32 {
        if self.zone_count == 0 {
            return 0;
        }
        self.height / self.zone_count as i32
    }

    /// Rows `[start, end)` covered by `zone`.
    pub fn zone_rows(&self, zone: usize) -> Range<i32> {
        let zone_height = self.zone_height();
        let start = zone as i32 * zone_height;
        start..start + zone_height
    }

    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.width, self.effective_height())
    }

    /// Resize the per-zone arrays to `zone_count`, filling new zones with the
    /// stock values, and truncate the height to a multiple of `zone_count`.
    pub fn normalize_zone_arrays(&mut self) {
        let zones = self.zone_count;
        self.core_towns_per_zone.resize(zones, 1);
        resize_with_index(&mut self.satellite_radius, zones, |zone| 4 + zone as i32);
        resize_with_index(&mut self.satellite_density, zones, |zone| {
            (0.2 - zone as f32 * 0.05).max(0.0)
        });
        self.height = self.effective_height();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_count == 0 {
            return Err(ConfigError::NoZones);
        }

        check_zone_array("core_towns_per_zone", self.core_towns_per_zone.len(), self.zone_count)?;
        check_zone_array("satellite_radius", self.satellite_radius.len(), self.zone_count)?;
        check_zone_array("satellite_density", self.satellite_density.len(), self.zone_count)?;

        if self.zone_height() <= 0 {
            return Err(ConfigError::EmptyZones {
                height: self.height,
                zone_count: self.zone_count,
            });
        }

        let min_width = 2 * CORE_EDGE_MARGIN + 1;
        if self.width < min_width {
            return Err(ConfigError::MapTooNarrow {
                width: self.width,
                min: min_width,
            });
        }

        for (zone, &radius) in self.satellite_radius.iter().enumerate() {
            if radius < 0 {
                return Err(ConfigError::NegativeRadius { zone, radius });
            }
        }

        for (zone, &density) in self.satellite_density.iter().enumerate() {
            check_density(format!("satellite_density[{zone}]"), density)?;
        }
        check_density("scattered_town_density".to_string(), self.scattered_town_density)?;

        if self.min_distance_between_scattered_towns < 1 {
            return Err(ConfigError::DistanceTooSmall {
                field: "min_distance_between_scattered_towns",
                min: 1,
                value: self.min_distance_between_scattered_towns,
            });
        }
        if self.min_distance_from_core < 0 {
            return Err(ConfigError::DistanceTooSmall {
                field: "min_distance_from_core",
                min: 0,
                value: self.min_distance_from_core,
            });
        }

        Ok(())
    }
}

fn resize_with_index<T>(values: &mut Vec<T>, len: usize, fill: impl Fn(usize) -> T) {
    values.truncate(len);
    while values.len() < len {
        let zone = values.len();
        values.push(fill(zone));
    }
}

fn check_zone_array(field: &'static str, actual: usize, expected: usize) -> Result<(), ConfigError> {
    if actual != expected {
        return Err(ConfigError::ZoneArrayLength {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_density(field: String, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::DensityOutOfRange { field, value });
    }
    Ok(())
}
