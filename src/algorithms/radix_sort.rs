//! LSD radix sort built from stable counting passes
//!
//! Each pass distributes the input by one `radix_bits`-wide digit, least
//! significant first. Passes stop as soon as the maximum has no remaining
//! non-zero digits, so small domains (ratings 1..=10) sort in a single pass.

use super::counting_sort::find_max;
use super::{AlgorithmStats, IntegerSort};
use crate::containers::Value;
use crate::error::{Result, SortBenchError};
use std::time::Instant;

/// Configuration for radix sort
#[derive(Debug, Clone)]
pub struct RadixSortConfig {
    /// Digit width in bits (1..=16)
    pub radix_bits: usize,
}

impl Default for RadixSortConfig {
    fn default() -> Self {
        Self { radix_bits: 8 }
    }
}

/// LSD radix sort over [`Value`]s
pub struct RadixSort {
    config: RadixSortConfig,
    stats: AlgorithmStats,
}

impl RadixSort {
    /// Create a radix sort with 8-bit digits
    pub fn new() -> Self {
        Self {
            config: RadixSortConfig::default(),
            stats: AlgorithmStats::default(),
        }
    }

    /// Create a radix sort with a custom digit width
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Configuration` unless `radix_bits` is in 1..=16.
    pub fn with_config(config: RadixSortConfig) -> Result<Self> {
        if !(1..=16).contains(&config.radix_bits) {
            return Err(SortBenchError::configuration(format!(
                "radix_bits must be in 1..=16, got {}",
                config.radix_bits
            )));
        }
        Ok(Self {
            config,
            stats: AlgorithmStats::default(),
        })
    }

    /// Number of passes needed for values up to `max_value`
    pub fn passes_for(&self, max_value: Value) -> usize {
        let significant_bits = (Value::BITS - max_value.leading_zeros()) as usize;
        significant_bits.div_ceil(self.config.radix_bits)
    }

    fn sort_passes(&self, data: &mut [Value], passes: usize) {
        let radix = 1usize << self.config.radix_bits;
        let mask = (radix - 1) as Value;
        let mut buffer = vec![0 as Value; data.len()];
        let mut counts = vec![0usize; radix];

        for pass in 0..passes {
            let shift = pass * self.config.radix_bits;

            counts.fill(0);
            for &value in data.iter() {
                let digit = ((value >> shift) & mask) as usize;
                counts[digit] += 1;
            }

            // Convert counts to positions
            let mut pos = 0;
            for count in counts.iter_mut() {
                let old_count = *count;
                *count = pos;
                pos += old_count;
            }

            // Distribute elements
            for &value in data.iter() {
                let digit = ((value >> shift) & mask) as usize;
                buffer[counts[digit]] = value;
                counts[digit] += 1;
            }

            data.copy_from_slice(&buffer);
        }
    }
}

impl Default for RadixSort {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerSort for RadixSort {
    fn name(&self) -> &'static str {
        "radix"
    }

    fn sort(&mut self, data: &mut [Value]) -> Result<()> {
        let start_time = Instant::now();

        let max_value = find_max(data).unwrap_or(0);
        let passes = if data.len() <= 1 { 0 } else { self.passes_for(max_value) };
        if passes > 0 {
            self.sort_passes(data, passes);
        }

        let memory_used = if passes > 0 {
            self.estimate_memory(data.len(), max_value)
        } else {
            0
        };

        log::debug!(
            "radix sort: {} items, max {}, {} passes of {} bits",
            data.len(),
            max_value,
            passes,
            self.config.radix_bits
        );

        self.stats = AlgorithmStats {
            items_processed: data.len(),
            processing_time_us: start_time.elapsed().as_micros() as u64,
            memory_used,
            max_value,
            passes,
        };
        Ok(())
    }

    fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn estimate_memory(&self, len: usize, _max_value: Value) -> usize {
        len * std::mem::size_of::<Value>()
            + (1usize << self.config.radix_bits) * std::mem::size_of::<usize>()
    }
}
