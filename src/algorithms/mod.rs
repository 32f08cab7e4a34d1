//! Non-comparative integer sorting
//!
//! Both algorithms work on the bounded non-negative domain produced by the
//! containers and sort in place, ascending.

pub mod counting_sort;
pub mod radix_sort;

pub use counting_sort::{
    counting_sort, counting_sort_by_key, find_max, frequency_table, CountingSort,
    CountingSortConfig,
};
pub use radix_sort::{RadixSort, RadixSortConfig};

use crate::containers::Value;
use crate::error::{Result, SortBenchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Performance statistics for the last sort
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlgorithmStats {
    /// Total items processed
    pub items_processed: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
    /// Auxiliary memory used in bytes
    pub memory_used: usize,
    /// Largest value seen
    pub max_value: Value,
    /// Passes over the input (1 for counting sort)
    pub passes: usize,
}

impl AlgorithmStats {
    /// Calculate processing rate in items per second
    pub fn items_per_second(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.items_processed as f64) / (self.processing_time_us as f64 / 1_000_000.0)
    }
}

/// In-place ascending sort over non-negative integers
pub trait IntegerSort {
    /// Short algorithm name
    fn name(&self) -> &'static str;

    /// Sorts `data` ascending
    fn sort(&mut self, data: &mut [Value]) -> Result<()>;

    /// Statistics from the last `sort`
    fn stats(&self) -> &AlgorithmStats;

    /// Auxiliary bytes needed for `len` items whose maximum is `max_value`
    fn estimate_memory(&self, len: usize, max_value: Value) -> usize;
}

/// Selectable sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    /// Frequency-table counting sort, O(n + max)
    #[default]
    Counting,
    /// LSD radix sort built on stable counting passes
    Radix,
}

impl SortAlgorithm {
    /// Every algorithm
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Counting, SortAlgorithm::Radix];

    /// Identifier accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// Creates a sorter with default configuration
    pub fn create(self) -> Box<dyn IntegerSort> {
        match self {
            SortAlgorithm::Counting => Box::new(CountingSort::new()),
            SortAlgorithm::Radix => Box::new(RadixSort::new()),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "counting" | "counting-sort" => Ok(SortAlgorithm::Counting),
            "radix" | "radix-sort" => Ok(SortAlgorithm::Radix),
            other => Err(SortBenchError::configuration(format!("unknown sort algorithm '{}'", other))),
        }
    }
}

/// Returns true if `data` is non-decreasing
pub fn is_sorted(data: &[Value]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Checks that `data` is non-decreasing
///
/// # Errors
///
/// Returns `SortBenchError::Verification` naming the first inversion.
pub fn verify_sorted(data: &[Value]) -> Result<()> {
    match data.windows(2).position(|pair| pair[0] > pair[1]) {
        None => Ok(()),
        Some(index) => Err(SortBenchError::verification(format!(
            "inversion at index {}: {} > {}",
            index,
            data[index],
            data[index + 1]
        ))),
    }
}

/// Converts signed input into the sort domain
///
/// # Errors
///
/// Returns `SortBenchError::UnsupportedDomain` for the first value that is
/// negative or does not fit in a [`Value`]. Nothing is converted on error.
pub fn to_domain(values: &[i64]) -> Result<Vec<Value>> {
    values
        .iter()
        .map(|&value| Value::try_from(value).map_err(|_| SortBenchError::unsupported_domain(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[3]));
        assert!(is_sorted(&[1, 1, 2, 5]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_verify_sorted_reports_first_inversion() {
        assert!(verify_sorted(&[0, 1, 1, 4]).is_ok());
        let err = verify_sorted(&[0, 3, 2, 1]).unwrap_err();
        assert_eq!(err.category(), "verification");
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_to_domain() {
        assert_eq!(to_domain(&[0, 5, 10]).unwrap(), vec![0, 5, 10]);
        assert!(matches!(
            to_domain(&[1, -2, -3]),
            Err(SortBenchError::UnsupportedDomain { value: -2 })
        ));
        assert!(to_domain(&[i64::from(u32::MAX) + 1]).is_err());
    }

    #[test]
    fn test_algorithm_selection() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<SortAlgorithm>().unwrap(), algorithm);
            let mut sorter = algorithm.create();
            let mut data = vec![3, 1, 2];
            sorter.sort(&mut data).unwrap();
            assert_eq!(data, vec![1, 2, 3]);
            assert_eq!(sorter.stats().items_processed, 3);
        }
        assert!("bogo".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_stats_rate() {
        let stats = AlgorithmStats {
            items_processed: 1000,
            processing_time_us: 1000,
            ..AlgorithmStats::default()
        };
        assert_eq!(stats.items_per_second(), 1_000_000.0);
        assert_eq!(AlgorithmStats::default().items_per_second(), 0.0);
    }
}
