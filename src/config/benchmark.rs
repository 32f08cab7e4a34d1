//! Benchmark harness configuration.

use super::{parse_env_bool, parse_env_list, parse_env_var, Config, ReaderConfig};
use crate::algorithms::SortAlgorithm;
use crate::containers::ContainerKind;
use crate::error::{Result, SortBenchError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to run: input, volumes, repetitions and container selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Delimited ratings file
    pub input_path: PathBuf,
    /// Element counts to test, each one a separate pass
    pub volumes: Vec<usize>,
    /// Passes per (kind, volume)
    pub repetitions: usize,
    /// Container kinds to benchmark
    pub kinds: Vec<ContainerKind>,
    /// Sort applied to the canonical sequence
    pub algorithm: SortAlgorithm,
    /// Extra slots given to linear containers beyond the volume
    pub capacity_headroom: usize,
    /// Check the rebuilt container is sorted
    pub verify: bool,
    /// Treat a verification failure as an error instead of a warning
    pub strict: bool,
    /// Record parsing
    pub reader: ReaderConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("ratings.csv"),
            volumes: vec![100, 1_000, 10_000, 100_000],
            repetitions: 1,
            kinds: ContainerKind::ALL.to_vec(),
            algorithm: SortAlgorithm::default(),
            capacity_headroom: 100,
            verify: true,
            strict: true,
            reader: ReaderConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Largest configured volume, 0 when none are set
    pub fn max_volume(&self) -> usize {
        self.volumes.iter().copied().max().unwrap_or(0)
    }

    /// Capacity given to linear containers for `volume` elements
    pub fn linear_capacity(&self, volume: usize) -> usize {
        volume.saturating_add(self.capacity_headroom)
    }
}

impl Config for BenchmarkConfig {
    fn validate(&self) -> Result<()> {
        if self.volumes.is_empty() {
            return Err(SortBenchError::configuration("at least one volume is required"));
        }
        if self.volumes.contains(&0) {
            return Err(SortBenchError::configuration("volumes must be greater than 0"));
        }
        if self.repetitions == 0 {
            return Err(SortBenchError::configuration("repetitions must be greater than 0"));
        }
        if self.kinds.is_empty() {
            return Err(SortBenchError::configuration("at least one container kind is required"));
        }
        self.reader.validate()
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(format!("{}INPUT", prefix)) {
            config.input_path = PathBuf::from(path);
        }
        if let Some(volumes) = parse_env_list(&format!("{}VOLUMES", prefix))? {
            config.volumes = volumes;
        }
        if let Some(kinds) = parse_env_list(&format!("{}KINDS", prefix))? {
            config.kinds = kinds;
        }
        config.repetitions = parse_env_var(&format!("{}REPETITIONS", prefix), config.repetitions)?;
        config.algorithm = parse_env_var(&format!("{}ALGORITHM", prefix), config.algorithm)?;
        config.capacity_headroom =
            parse_env_var(&format!("{}CAPACITY_HEADROOM", prefix), config.capacity_headroom)?;
        config.verify = parse_env_bool(&format!("{}VERIFY", prefix), config.verify);
        config.strict = parse_env_bool(&format!("{}STRICT", prefix), config.strict);
        config.reader = ReaderConfig::from_env_with_prefix(prefix)?;

        config.validate()?;
        Ok(config)
    }
}
