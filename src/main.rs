use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use roadtrip_layout::{
    generation::{generate, GenerationResult},
    logging::init_tracing,
    scenario::ScenarioLoader,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Road-trip settlement layout generator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/default_road.yaml")]
    scenario: PathBuf,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// How to print the generated layout
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    init_tracing(&scenario.logging.level);

    let seed = cli.seed.unwrap_or(scenario.seed);
    let layout = generate(&scenario.map, seed)?;

    match cli.format {
        OutputFormat::Summary => print_summary(&scenario.name, seed, &layout),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
    }
    Ok(())
}

fn print_summary(name: &str, seed: u64, layout: &GenerationResult) {
    let summary = layout.summary();
    println!(
        "Scenario '{}' (seed {}): {} settlements, {} connections",
        name,
        seed,
        summary.totals.total(),
        summary.connections
    );
    for zone in &summary.zones {
        println!(
            "  zone {}: {} core, {} satellite, {} normal{}",
            zone.zone,
            zone.counts.core,
            zone.counts.satellite,
            zone.counts.normal,
            if zone.fallbacks > 0 {
                format!(" ({} core fallback)", zone.fallbacks)
            } else {
                String::new()
            }
        );
    }
}
