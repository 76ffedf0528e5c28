//! Settlement layout pipeline
//!
//! Zones are filled bottom to top: core towns, then satellites around each
//! core, then scattered normal towns. Once every zone is done the proximity
//! graph is built over the final settlement list.

mod builder;
mod connections;
mod result;
mod satellite;
mod scatter;
mod zone;

pub use builder::LayoutBuilder;
pub use connections::{connect, CONNECTION_DISTANCE};
pub use result::{CoreCluster, CoreFallback, GenerationResult, KindCounts, LayoutSummary, ZoneSummary};
pub use satellite::{generate_satellites, SATELLITE_CLEARANCE};
pub use scatter::{candidate_pool, generate_scattered, is_valid_scattered_position};
pub use zone::{
    generate_core_towns, is_valid_core_position, CorePlacement, CoreTarget, CORE_PLACEMENT_ATTEMPTS,
    MIN_CORE_SEPARATION,
};

use tracing::{debug, info};

use crate::config::{ConfigError, MapConfiguration};
use crate::rng::{RandomSource, RngManager, SETTLEMENT_STREAM};
use crate::settlement::SettlementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Idle,
    GeneratingZones,
    ConnectingTowns,
    Done,
}

/// Owns a validated configuration and runs the pipeline on demand. Every
/// run starts from an empty layout.
pub struct TownGenerator {
    config: MapConfiguration,
    phase: GenerationPhase,
}

impl TownGenerator {
    pub fn new(config: MapConfiguration) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: GenerationPhase::Idle,
        })
    }

    pub fn config(&self) -> &MapConfiguration {
        &self.config
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Generate with the settlement stream derived from `seed`.
    pub fn generate(&mut self, seed: u64) -> GenerationResult {
        let mut rngs = RngManager::new(seed);
        let mut rng = rngs.stream(SETTLEMENT_STREAM);
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R>(&mut self, rng: &mut R) -> GenerationResult
    where
        R: RandomSource + ?Sized,
    {
        self.phase = GenerationPhase::Idle;
        let mut layout = LayoutBuilder::new();
        let mut clusters = Vec::new();
        let mut fallbacks = Vec::new();

        self.phase = GenerationPhase::GeneratingZones;
        for zone in 0..self.config.zone_count {
            self.generate_zone(zone, &mut layout, &mut clusters, &mut fallbacks, rng);
        }

        self.phase = GenerationPhase::ConnectingTowns;
        let settlements = layout.into_settlements();
        let connections = connect(&settlements);

        self.phase = GenerationPhase::Done;
        let result = GenerationResult {
            zone_count: self.config.zone_count,
            settlements,
            connections,
            clusters,
            fallbacks,
        };
        let summary = result.summary();
        info!(
            core = summary.totals.core,
            satellite = summary.totals.satellite,
            normal = summary.totals.normal,
            connections = summary.connections,
            fallbacks = result.fallbacks.len(),
            "settlement layout generated"
        );
        result
    }

    fn generate_zone<R>(
        &self,
        zone: usize,
        layout: &mut LayoutBuilder,
        clusters: &mut Vec<CoreCluster>,
        fallbacks: &mut Vec<CoreFallback>,
        rng: &mut R,
    ) where
        R: RandomSource + ?Sized,
    {
        let config = &self.config;
        let first_new = layout.len();

        let placements = generate_core_towns(zone, config, rng);
        let mut cores = Vec::with_capacity(placements.len());
        for (index, placement) in placements.into_iter().enumerate() {
            let id = layout.place(placement.position, SettlementKind::Core, zone);
            if placement.fell_back {
                fallbacks.push(CoreFallback {
                    zone,
                    index,
                    position: placement.position,
                });
            }
            cores.push((id, placement.position));
        }

        for (core, position) in cores {
            let satellites = generate_satellites(position, zone, config, layout, rng);
            clusters.push(CoreCluster { core, satellites });
        }

        let rows = config.zone_rows(zone);
        let scattered = generate_scattered(zone, rows.clone(), config, layout, rng);

        debug!(
            zone,
            rows_start = rows.start,
            rows_end = rows.end,
            settlements = layout.len() - first_new,
            scattered = scattered.len(),
            "zone populated"
        );
    }
}

/// Validate `config` and generate a layout from `seed`.
pub fn generate(config: &MapConfiguration, seed: u64) -> Result<GenerationResult, ConfigError> {
    let mut generator = TownGenerator::new(config.clone())?;
    Ok(generator.generate(seed))
}
