use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::MapConfiguration;

fn default_log_level() -> String {
    "info".to_string()
}

/// A named, seeded map definition as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutScenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub map: MapConfiguration,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Read, normalise and validate a scenario file.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<LayoutScenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let mut scenario: LayoutScenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario.map.normalize_zone_arrays();
        scenario
            .map
            .validate()
            .with_context(|| format!("Invalid map configuration in {}", path.display()))?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_scenario_uses_defaults() {
        let scenario: LayoutScenario = serde_yaml::from_str("name: tiny\nseed: 9\n").unwrap();

        assert_eq!(scenario.name, "tiny");
        assert_eq!(scenario.seed, 9);
        assert_eq!(scenario.map, MapConfiguration::default());
        assert_eq!(scenario.logging.level, "info");
        assert!(scenario.description.is_none());
    }
}
