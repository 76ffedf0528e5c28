pub mod config;
pub mod exploration;
pub mod generation;
pub mod geometry;
pub mod logging;
pub mod rng;
pub mod scenario;
pub mod settlement;

pub use config::{ConfigError, MapConfiguration};
pub use exploration::ExplorationOverlay;
pub use generation::{generate, GenerationPhase, GenerationResult, TownGenerator};
pub use geometry::{GridCoord, MapBounds};
pub use settlement::{Connection, Settlement, SettlementId, SettlementKind};
