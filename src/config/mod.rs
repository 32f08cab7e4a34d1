//! Configuration for the reader and the benchmark harness
//!
//! Replaces fixed input paths and test volumes with explicit values that can
//! come from defaults, environment variables or a JSON file.
//!
//! ```rust
//! use sortbench::config::{BenchmarkConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize from environment variables with SORTBENCH_ prefix
//! let config = BenchmarkConfig::from_env()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SortBenchError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::Path;

pub mod benchmark;
pub mod reader;

pub use benchmark::BenchmarkConfig;
pub use reader::ReaderConfig;

/// Common configuration behaviour: validation, environment and file loading
pub trait Config: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from `SORTBENCH_*` environment variables.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("SORTBENCH_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| SortBenchError::configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, serialized)
            .map_err(|e| SortBenchError::configuration(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    /// Load configuration from a JSON file and validate it.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SortBenchError::configuration(format!("Failed to read config file: {}", e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SortBenchError::configuration(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// Parse an environment variable if it is set.
///
/// A set but unparsable value is a configuration error.
pub fn parse_env_opt<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(var_name) else {
        return Ok(None);
    };
    raw.parse::<T>().map(Some).map_err(|e| {
        SortBenchError::configuration(format!("{}: invalid value '{}': {}", var_name, raw, e))
    })
}

/// Parse an environment variable, falling back to `default` when unset.
pub fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    Ok(parse_env_opt(var_name)?.unwrap_or(default))
}

/// Parse a boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

/// Parse a comma-separated environment variable item by item.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn parse_env_list<T>(var_name: &str) -> Result<Option<Vec<T>>>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(var_name) else {
        return Ok(None);
    };
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>().map_err(|e| {
                SortBenchError::configuration(format!("{}: invalid item '{}': {}", var_name, item, e))
            })
        })
        .collect::<Result<Vec<T>>>()
        .map(Some)
}
