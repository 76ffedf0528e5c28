use crate::settlement::{Connection, Settlement};

/// Settlements at most this far apart get a road between them.
pub const CONNECTION_DISTANCE: i32 = 6;

/// Proximity graph over `settlements`, one edge per close unordered pair.
pub fn connect(settlements: &[Settlement]) -> Vec<Connection> {
    let mut connections = Vec::new();
    for (i, first) in settlements.iter().enumerate() {
        for second in &settlements[i + 1..] {
            if first.position.manhattan(second.position) <= CONNECTION_DISTANCE {
                connections.push(Connection::between(first, second));
            }
        }
    }
    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::LayoutBuilder;
    use crate::geometry::GridCoord;
    use crate::settlement::SettlementKind;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut layout = LayoutBuilder::new();
        let a = layout.place(GridCoord::new(0, 0), SettlementKind::Core, 0);
        let b = layout.place(GridCoord::new(3, 3), SettlementKind::Satellite, 0);
        layout.place(GridCoord::new(0, 7), SettlementKind::Normal, 0);

        let connections = connect(layout.settlements());

        assert_eq!(connections.len(), 1);
        assert_eq!((connections[0].a, connections[0].b), (a, b));
        assert_eq!(connections[0].start, GridCoord::new(0, 0));
        assert_eq!(connections[0].end, GridCoord::new(3, 3));
        assert_eq!(connections[0].length(), 6);
    }

    #[test]
    fn test_cluster_is_complete_graph() {
        let mut layout = LayoutBuilder::new();
        for x in 0..4 {
            layout.place(GridCoord::new(x, 0), SettlementKind::Normal, 0);
        }

        let connections = connect(layout.settlements());

        assert_eq!(connections.len(), 6);
        assert!(connections.iter().all(|c| c.a < c.b));
    }

    #[test]
    fn test_empty_layout() {
        assert!(connect(&[]).is_empty());
    }
}
