//! Ratings reader configuration.

use super::{parse_env_bool, parse_env_opt, parse_env_var, Config};
use crate::error::{Result, SortBenchError};
use crate::io::RatingField;
use serde::{Deserialize, Serialize};

/// How delimited rating records are turned into integers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Field separator
    pub delimiter: char,
    /// Skip the first line
    pub has_header: bool,
    /// Column to extract
    pub field: RatingField,
    /// Multiplier applied to fractional ratings before rounding
    pub rating_scale: f64,
    /// Stop after this many accepted records
    pub limit: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            field: RatingField::Rating,
            rating_scale: 2.0,
            limit: None,
        }
    }
}

impl Config for ReaderConfig {
    fn validate(&self) -> Result<()> {
        if !self.rating_scale.is_finite() || self.rating_scale <= 0.0 {
            return Err(SortBenchError::configuration(format!(
                "rating_scale must be a positive finite number, got {}",
                self.rating_scale
            )));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(SortBenchError::configuration("delimiter cannot be a line break"));
        }
        if self.limit == Some(0) {
            return Err(SortBenchError::configuration("limit must be greater than 0"));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.delimiter = parse_env_var(&format!("{}READER_DELIMITER", prefix), config.delimiter)?;
        config.has_header = parse_env_bool(&format!("{}READER_HAS_HEADER", prefix), config.has_header);
        config.field = parse_env_var(&format!("{}READER_FIELD", prefix), config.field)?;
        config.rating_scale =
            parse_env_var(&format!("{}READER_RATING_SCALE", prefix), config.rating_scale)?;
        if let Some(limit) = parse_env_opt(&format!("{}READER_LIMIT", prefix))? {
            config.limit = Some(limit);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ReaderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field, RatingField::Rating);
        assert_eq!(config.rating_scale, 2.0);
    }

    #[test]
    fn test_invalid_values() {
        let config = ReaderConfig { rating_scale: 0.0, ..ReaderConfig::default() };
        assert!(config.validate().is_err());

        let config = ReaderConfig { delimiter: '\n', ..ReaderConfig::default() };
        assert!(config.validate().is_err());

        let config = ReaderConfig { limit: Some(0), ..ReaderConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_with_prefix() {
        std::env::set_var("RDRTEST_READER_DELIMITER", ";");
        std::env::set_var("RDRTEST_READER_FIELD", "movie-id");
        std::env::set_var("RDRTEST_READER_LIMIT", "25");
        let config = ReaderConfig::from_env_with_prefix("RDRTEST_").unwrap();
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.field, RatingField::MovieId);
        assert_eq!(config.limit, Some(25));
        assert!(config.has_header);
    }

    #[test]
    fn test_bad_env_scalar_is_error() {
        std::env::set_var("RDRBADLIMIT_READER_LIMIT", "lots");
        assert!(matches!(
            ReaderConfig::from_env_with_prefix("RDRBADLIMIT_"),
            Err(SortBenchError::Configuration { .. })
        ));

        std::env::set_var("RDRBADFIELD_READER_FIELD", "genre");
        assert!(ReaderConfig::from_env_with_prefix("RDRBADFIELD_").is_err());

        std::env::set_var("RDRBADSCALE_READER_RATING_SCALE", "double");
        assert!(ReaderConfig::from_env_with_prefix("RDRBADSCALE_").is_err());

        std::env::set_var("RDRBADDELIM_READER_DELIMITER", ";;");
        assert!(ReaderConfig::from_env_with_prefix("RDRBADDELIM_").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.json");
        let config = ReaderConfig { field: RatingField::UserId, limit: Some(10), ..ReaderConfig::default() };
        config.save_to_file(&path).unwrap();
        assert_eq!(ReaderConfig::load_from_file(&path).unwrap(), config);
    }
}
