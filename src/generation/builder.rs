use crate::geometry::{keeps_distance, nearest_distance, GridCoord};
use crate::settlement::{Settlement, SettlementId, SettlementKind};

/// Settlements placed so far in the current run. Single writer; ids follow
/// placement order.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    settlements: Vec<Settlement>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, position: GridCoord, kind: SettlementKind, zone_index: usize) -> SettlementId {
        let id = SettlementId::from_index(self.settlements.len());
        self.settlements.push(Settlement {
            id,
            position,
            kind,
            zone_index,
        });
        id
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.settlements.iter().map(|settlement| settlement.position)
    }

    pub fn core_positions(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.settlements
            .iter()
            .filter(|settlement| settlement.is_core())
            .map(|settlement| settlement.position)
    }

    /// Any settlement strictly closer than `distance`.
    pub fn has_settlement_within(&self, position: GridCoord, distance: i32) -> bool {
        !keeps_distance(position, self.positions(), distance)
    }

    pub fn nearest_distance(&self, position: GridCoord) -> Option<i32> {
        nearest_distance(position, self.positions())
    }

    pub fn into_settlements(self) -> Vec<Settlement> {
        self.settlements
    }
}
