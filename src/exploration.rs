//! Fog-of-war state kept beside a generated layout
//!
//! The layout itself never changes after generation; which cells and
//! settlements the player has uncovered lives here instead.

use std::collections::{BTreeSet, HashSet};

use crate::generation::GenerationResult;
use crate::geometry::{GridCoord, MapBounds};
use crate::settlement::{Connection, SettlementId};

#[derive(Debug, Clone, Default)]
pub struct ExplorationOverlay {
    bounds: MapBounds,
    explored_cells: HashSet<GridCoord>,
    explored: BTreeSet<SettlementId>,
}

impl ExplorationOverlay {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            bounds,
            explored_cells: HashSet::new(),
            explored: BTreeSet::new(),
        }
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Uncover the square of cells within `radius` of `center` (per axis) and
    /// every settlement standing on them. Returns the newly explored ids.
    pub fn explore_area(&mut self, layout: &GenerationResult, center: GridCoord, radius: i32) -> Vec<SettlementId> {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let cell = center.offset(dx, dy);
                if self.bounds.contains(cell) {
                    self.explored_cells.insert(cell);
                }
            }
        }

        let mut newly_explored = Vec::new();
        for settlement in layout.settlements() {
            if self.explored_cells.contains(&settlement.position) && self.explored.insert(settlement.id) {
                newly_explored.push(settlement.id);
            }
        }
        newly_explored
    }

    pub fn is_cell_explored(&self, cell: GridCoord) -> bool {
        self.explored_cells.contains(&cell)
    }

    pub fn explored_cell_count(&self) -> usize {
        self.explored_cells.len()
    }

    pub fn is_explored(&self, id: SettlementId) -> bool {
        self.explored.contains(&id)
    }

    pub fn explored_settlements(&self) -> impl Iterator<Item = SettlementId> + '_ {
        self.explored.iter().copied()
    }

    /// Roads are shown once both of their ends have been found.
    pub fn visible_connections<'a>(&'a self, layout: &'a GenerationResult) -> impl Iterator<Item = &'a Connection> + 'a {
        layout
            .connections()
            .iter()
            .filter(move |connection| self.is_explored(connection.a) && self.is_explored(connection.b))
    }

    pub fn reset(&mut self) {
        self.explored_cells.clear();
        self.explored.clear();
    }
}
