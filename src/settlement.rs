use serde::{Deserialize, Serialize};

use crate::geometry::GridCoord;

/// Index of a settlement inside its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettlementId(usize);

impl SettlementId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementKind {
    Core,
    Satellite,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    pub position: GridCoord,
    pub kind: SettlementKind,
    pub zone_index: usize,
}

impl Settlement {
    pub fn is_core(&self) -> bool {
        self.kind == SettlementKind::Core
    }
}

/// Edge of the proximity graph. `a` always precedes `b` in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub a: SettlementId,
    pub b: SettlementId,
    pub start: GridCoord,
    pub end: GridCoord,
}

impl Connection {
    pub fn between(first: &Settlement, second: &Settlement) -> Self {
        Self {
            a: first.id,
            b: second.id,
            start: first.position,
            end: second.position,
        }
    }

    pub fn touches(&self, id: SettlementId) -> bool {
        self.a == id || self.b == id
    }

    pub fn length(&self) -> i32 {
        self.start.manhattan(self.end)
    }
}
