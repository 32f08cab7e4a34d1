//! Ratings file reader
//!
//! Expects records shaped like `userId,movieId,rating,timestamp`, optionally
//! preceded by a header line. Only the configured column is extracted.

use crate::config::{Config, ReaderConfig};
use crate::containers::{Container, Value};
use crate::error::{Result, SortBenchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Column of a rating record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingField {
    /// First column
    UserId,
    /// Second column
    MovieId,
    /// Third column, fractional, scaled by `rating_scale`
    Rating,
    /// Fourth column, seconds since the epoch
    Timestamp,
}

impl RatingField {
    /// Zero-based column index
    pub fn column(self) -> usize {
        match self {
            RatingField::UserId => 0,
            RatingField::MovieId => 1,
            RatingField::Rating => 2,
            RatingField::Timestamp => 3,
        }
    }

    /// Identifier accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            RatingField::UserId => "user-id",
            RatingField::MovieId => "movie-id",
            RatingField::Rating => "rating",
            RatingField::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for RatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingField {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "user-id" | "userid" => Ok(RatingField::UserId),
            "movie-id" | "movieid" => Ok(RatingField::MovieId),
            "rating" => Ok(RatingField::Rating),
            "timestamp" => Ok(RatingField::Timestamp),
            other => Err(SortBenchError::configuration(format!("unknown rating field '{}'", other))),
        }
    }
}

/// Counters for one read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadSummary {
    /// Data lines examined (header excluded)
    pub lines: usize,
    /// Values handed to the consumer
    pub accepted: usize,
    /// Malformed or incomplete records
    pub skipped: usize,
}

/// Line-oriented reader yielding one [`Value`] per accepted record
#[derive(Debug, Clone)]
pub struct RatingsReader {
    config: ReaderConfig,
}

impl RatingsReader {
    /// Creates a reader after validating `config`
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns a copy of this reader with a different record limit
    pub fn with_limit(&self, limit: Option<usize>) -> Self {
        let mut config = self.config.clone();
        config.limit = limit;
        Self { config }
    }

    /// Reads every accepted value from the file at `path`
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Value>> {
        let file = File::open(path.as_ref())?;
        let (values, summary) = self.read_from(BufReader::new(file))?;
        log::info!(
            "read {} values from {} ({} skipped)",
            summary.accepted,
            path.as_ref().display(),
            summary.skipped
        );
        Ok(values)
    }

    /// Reads every accepted value from `reader`
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<(Vec<Value>, ReadSummary)> {
        let mut values = Vec::with_capacity(self.config.limit.unwrap_or(0).min(1 << 20));
        let summary = self.for_each_value(reader, |value| {
            values.push(value);
            Ok(())
        })?;
        Ok((values, summary))
    }

    /// Feeds values one by one into `container` through its `insert`
    ///
    /// # Errors
    ///
    /// Propagates `SortBenchError::CapacityExceeded` from linear containers.
    pub fn populate<R: BufRead>(&self, reader: R, container: &mut dyn Container) -> Result<ReadSummary> {
        self.for_each_value(reader, |value| container.insert(value))
    }

    /// Opens `path` and feeds its values into `container`
    pub fn populate_path<P: AsRef<Path>>(
        &self,
        path: P,
        container: &mut dyn Container,
    ) -> Result<ReadSummary> {
        let file = File::open(path)?;
        self.populate(BufReader::new(file), container)
    }

    /// Runs `consume` for each accepted value, stopping at the limit
    pub fn for_each_value<R, F>(&self, reader: R, mut consume: F) -> Result<ReadSummary>
    where
        R: BufRead,
        F: FnMut(Value) -> Result<()>,
    {
        let mut summary = ReadSummary::default();
        let limit = self.config.limit.unwrap_or(usize::MAX);

        for (line_number, line) in reader.lines().enumerate() {
            if summary.accepted >= limit {
                break;
            }
            let line = line?;
            if line_number == 0 && self.config.has_header {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            summary.lines += 1;

            match self.parse_record(&line)? {
                Some(value) => {
                    consume(value)?;
                    summary.accepted += 1;
                }
                None => {
                    summary.skipped += 1;
                    log::debug!("skipping malformed record on line {}: {:?}", line_number + 1, line);
                }
            }
        }

        Ok(summary)
    }

    /// Extracts the configured field from one record
    ///
    /// Returns `Ok(None)` for records that should be skipped (fewer than two
    /// fields, missing or unparsable column).
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::UnsupportedDomain` for negative values or
    /// values that do not fit in a [`Value`].
    pub fn parse_record(&self, line: &str) -> Result<Option<Value>> {
        let mut count = 0;
        let mut target = None;
        for (index, field) in line.split(self.config.delimiter).enumerate() {
            count += 1;
            if index == self.config.field.column() {
                target = Some(field.trim());
            }
        }
        if count < 2 {
            return Ok(None);
        }
        let Some(raw) = target else {
            return Ok(None);
        };

        match self.config.field {
            RatingField::Rating => {
                let Ok(rating) = raw.parse::<f64>() else {
                    return Ok(None);
                };
                if !rating.is_finite() {
                    return Ok(None);
                }
                let scaled = (rating * self.config.rating_scale).round();
                if scaled < 0.0 || scaled > f64::from(Value::MAX) {
                    return Err(SortBenchError::unsupported_domain(scaled as i64));
                }
                Ok(Some(scaled as Value))
            }
            _ => {
                let Ok(number) = raw.parse::<i64>() else {
                    return Ok(None);
                };
                Value::try_from(number)
                    .map(Some)
                    .map_err(|_| SortBenchError::unsupported_domain(number))
            }
        }
    }
}
