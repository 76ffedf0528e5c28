use serde::{Deserialize, Serialize};

use crate::geometry::GridCoord;
use crate::settlement::{Connection, Settlement, SettlementId, SettlementKind};

/// A core town whose spacing could not be satisfied within the attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreFallback {
    pub zone: usize,
    /// Position of the town among the zone's core towns.
    pub index: usize,
    pub position: GridCoord,
}

/// A core town and the satellites generated around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreCluster {
    pub core: SettlementId,
    pub satellites: Vec<SettlementId>,
}

/// Finished layout. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub(crate) zone_count: usize,
    pub(crate) settlements: Vec<Settlement>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) clusters: Vec<CoreCluster>,
    pub(crate) fallbacks: Vec<CoreFallback>,
}

impl GenerationResult {
    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn clusters(&self) -> &[CoreCluster] {
        &self.clusters
    }

    pub fn fallbacks(&self) -> &[CoreFallback] {
        &self.fallbacks
    }

    pub fn settlement(&self, id: SettlementId) -> Option<&Settlement> {
        self.settlements.get(id.index())
    }

    pub fn settlements_of_kind(&self, kind: SettlementKind) -> impl Iterator<Item = &Settlement> + '_ {
        self.settlements
            .iter()
            .filter(move |settlement| settlement.kind == kind)
    }

    pub fn settlements_in_zone(&self, zone: usize) -> impl Iterator<Item = &Settlement> + '_ {
        self.settlements
            .iter()
            .filter(move |settlement| settlement.zone_index == zone)
    }

    pub fn neighbors(&self, id: SettlementId) -> impl Iterator<Item = SettlementId> + '_ {
        self.connections
            .iter()
            .filter(move |connection| connection.touches(id))
            .map(move |connection| if connection.a == id { connection.b } else { connection.a })
    }

    pub fn summary(&self) -> LayoutSummary {
        let zones = (0..self.zone_count)
            .map(|zone| {
                let mut counts = KindCounts::default();
                for settlement in self.settlements_in_zone(zone) {
                    counts.add(settlement.kind);
                }
                ZoneSummary {
                    zone,
                    counts,
                    fallbacks: self.fallbacks.iter().filter(|f| f.zone == zone).count(),
                }
            })
            .collect::<Vec<_>>();

        let mut totals = KindCounts::default();
        for settlement in &self.settlements {
            totals.add(settlement.kind);
        }

        LayoutSummary {
            totals,
            connections: self.connections.len(),
            zones,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub core: usize,
    pub satellite: usize,
    pub normal: usize,
}

impl KindCounts {
    fn add(&mut self, kind: SettlementKind) {
        match kind {
            SettlementKind::Core => self.core += 1,
            SettlementKind::Satellite => self.satellite += 1,
            SettlementKind::Normal => self.normal += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.core + self.satellite + self.normal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub zone: usize,
    pub counts: KindCounts,
    pub fallbacks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub totals: KindCounts,
    pub connections: usize,
    pub zones: Vec<ZoneSummary>,
}
