//! Grid coordinates and the distance predicates used by every generator

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Cell position on the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance, the only metric used during generation
    pub fn manhattan(self, other: GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for GridCoord {
    type Output = GridCoord;

    fn mul(self, rhs: i32) -> GridCoord {
        GridCoord::new(self.x * rhs, self.y * rhs)
    }
}

/// Rectangular map extent `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    width: i32,
    height: i32,
}

impl MapBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }
}

/// True when `coord` keeps at least `min_distance` from every position in `others`.
pub fn keeps_distance<I>(coord: GridCoord, others: I, min_distance: i32) -> bool
where
    I: IntoIterator<Item = GridCoord>,
{
    others
        .into_iter()
        .all(|other| coord.manhattan(other) >= min_distance)
}

/// Smallest distance from `coord` to any of `others`, `None` when empty.
pub fn nearest_distance<I>(coord: GridCoord, others: I) -> Option<i32>
where
    I: IntoIterator<Item = GridCoord>,
{
    others.into_iter().map(|other| coord.manhattan(other)).min()
}

/// Integer rounding with ties to even, matching how map targets were authored.
pub fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}
