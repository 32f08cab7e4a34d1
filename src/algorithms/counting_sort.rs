//! Counting sort over bounded non-negative integers
//!
//! The frequency table is sized by the maximum value, not by the number of
//! distinct values, so the domain must stay small (ratings, ids). Time is
//! O(n + max) and auxiliary space O(max).

use super::{AlgorithmStats, IntegerSort};
use crate::containers::Value;
use crate::error::{Result, SortBenchError};
use std::time::Instant;

/// Largest value in `data`, `None` when empty
#[inline]
pub fn find_max(data: &[Value]) -> Option<Value> {
    data.iter().copied().max()
}

/// Occurrence count of each value in `0..=max`
///
/// Returns an empty table for empty input.
pub fn frequency_table(data: &[Value]) -> Vec<usize> {
    let Some(max) = find_max(data) else {
        return Vec::new();
    };
    let mut counts = vec![0usize; max as usize + 1];
    for &value in data {
        counts[value as usize] += 1;
    }
    counts
}

/// Overwrites `data` with each bucket index repeated by its count
fn write_from_counts(data: &mut [Value], counts: &[usize]) {
    let mut index = 0;
    for (value, &count) in counts.iter().enumerate() {
        if count > 0 {
            data[index..index + count].fill(value as Value);
            index += count;
        }
    }
}

/// Sorts `data` in place, ascending
///
/// # Examples
///
/// ```rust
/// use sortbench::algorithms::counting_sort;
///
/// let mut data = vec![2, 2, 0, 1, 1, 1];
/// counting_sort(&mut data);
/// assert_eq!(data, vec![0, 1, 1, 1, 2, 2]);
/// ```
pub fn counting_sort(data: &mut [Value]) {
    if data.len() <= 1 {
        return;
    }
    let counts = frequency_table(data);
    write_from_counts(data, &counts);
}

/// Stable counting sort of arbitrary items by a bounded integer key
///
/// Every key must be below `key_bound`. Items with equal keys keep their
/// relative order.
///
/// # Errors
///
/// Returns `SortBenchError::InvalidData` if any key is `>= key_bound`;
/// `data` is left untouched in that case.
pub fn counting_sort_by_key<T, F>(data: &mut [T], key_bound: usize, key: F) -> Result<()>
where
    T: Copy,
    F: Fn(&T) -> usize,
{
    if data.len() <= 1 {
        if let Some(item) = data.first() {
            if key(item) >= key_bound {
                return Err(SortBenchError::invalid_data(format!(
                    "key {} outside bound {}",
                    key(item),
                    key_bound
                )));
            }
        }
        return Ok(());
    }

    let mut positions = vec![0usize; key_bound];
    for item in data.iter() {
        let k = key(item);
        if k >= key_bound {
            return Err(SortBenchError::invalid_data(format!(
                "key {} outside bound {}",
                k, key_bound
            )));
        }
        positions[k] += 1;
    }

    // Convert counts to starting positions
    let mut pos = 0;
    for count in positions.iter_mut() {
        let old_count = *count;
        *count = pos;
        pos += old_count;
    }

    let mut output = data.to_vec();
    for item in data.iter() {
        let k = key(item);
        output[positions[k]] = *item;
        positions[k] += 1;
    }
    data.copy_from_slice(&output);
    Ok(())
}

/// Configuration for [`CountingSort`]
#[derive(Debug, Clone)]
pub struct CountingSortConfig {
    /// Largest value accepted; bounds the frequency table allocation
    pub max_value_limit: Value,
}

impl Default for CountingSortConfig {
    fn default() -> Self {
        Self {
            max_value_limit: 1 << 24,
        }
    }
}

/// Counting sort with a domain guard and statistics
pub struct CountingSort {
    config: CountingSortConfig,
    stats: AlgorithmStats,
}

impl CountingSort {
    /// Create a counting sort with the default domain limit
    pub fn new() -> Self {
        Self::with_config(CountingSortConfig::default())
    }

    /// Create a counting sort with a custom configuration
    pub fn with_config(config: CountingSortConfig) -> Self {
        Self {
            config,
            stats: AlgorithmStats::default(),
        }
    }

    /// Sorts signed input after checking every value is in the domain
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::UnsupportedDomain` on the first negative or
    /// oversized value; `data` is not modified in that case.
    pub fn sort_signed(&mut self, data: &mut [i64]) -> Result<()> {
        let mut values = super::to_domain(data)?;
        self.sort(&mut values)?;
        for (slot, value) in data.iter_mut().zip(values) {
            *slot = i64::from(value);
        }
        Ok(())
    }
}

impl Default for CountingSort {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerSort for CountingSort {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn sort(&mut self, data: &mut [Value]) -> Result<()> {
        let start_time = Instant::now();

        let max_value = find_max(data).unwrap_or(0);
        if max_value > self.config.max_value_limit {
            return Err(SortBenchError::domain_too_large(
                u64::from(max_value),
                u64::from(self.config.max_value_limit),
            ));
        }

        let memory_used = if data.len() <= 1 {
            0
        } else {
            counting_sort(data);
            self.estimate_memory(data.len(), max_value)
        };

        log::debug!(
            "counting sort: {} items, max {}, table {} bytes",
            data.len(),
            max_value,
            memory_used
        );

        self.stats = AlgorithmStats {
            items_processed: data.len(),
            processing_time_us: start_time.elapsed().as_micros() as u64,
            memory_used,
            max_value,
            passes: usize::from(data.len() > 1),
        };
        Ok(())
    }

    fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn estimate_memory(&self, _len: usize, max_value: Value) -> usize {
        (max_value as usize + 1) * std::mem::size_of::<usize>()
    }
}
