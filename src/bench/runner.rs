//! Benchmark pass execution

use super::report::{BenchmarkReport, KindSummary};
use super::timer::{PhaseTimer, PhaseTimings};
use crate::algorithms::{verify_sorted, IntegerSort};
use crate::config::{BenchmarkConfig, Config};
use crate::containers::{ContainerKind, Value};
use crate::error::{Result, SortBenchError};
use crate::io::RatingsReader;
use serde::Serialize;

/// Bytes attributed to one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryEstimate {
    /// Container footprint when fully populated
    pub container: usize,
    /// Canonical sequence buffer
    pub sequence: usize,
    /// Auxiliary space used by the sort
    pub sort_aux: usize,
}

impl MemoryEstimate {
    /// Sum of all parts
    pub fn total(&self) -> usize {
        self.container + self.sequence + self.sort_aux
    }
}

/// Outcome of a single pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassResult {
    /// Container kind used
    pub kind: ContainerKind,
    /// Number of values inserted
    pub volume: usize,
    /// Per-phase elapsed time
    pub timings: PhaseTimings,
    /// Estimated footprint
    pub memory: MemoryEstimate,
    /// `None` when verification is disabled
    pub sorted: Option<bool>,
}

/// Runs passes over every configured kind and volume
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    sorter: Box<dyn IntegerSort>,
}

impl BenchmarkRunner {
    /// Creates a runner after validating `config`
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        let sorter = config.algorithm.create();
        Ok(Self { config, sorter })
    }

    /// Replaces the sorter chosen by the configuration
    pub fn with_sorter(mut self, sorter: Box<dyn IntegerSort>) -> Self {
        self.sorter = sorter;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Reads the configured input once and benchmarks every volume
    ///
    /// Only as many records as the largest volume are read; smaller volumes
    /// use a prefix of the same data.
    pub fn run(&mut self) -> Result<BenchmarkReport> {
        let reader = RatingsReader::new(self.config.reader.clone())?
            .with_limit(Some(self.config.max_volume()));
        let values = reader.read_path(&self.config.input_path)?;
        let mut report = self.run_values(&values)?;
        report.set_input(self.config.input_path.display().to_string());
        Ok(report)
    }

    /// Benchmarks every configured kind and volume over `values`
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::InvalidData` if `values` is empty.
    pub fn run_values(&mut self, values: &[Value]) -> Result<BenchmarkReport> {
        if values.is_empty() {
            return Err(SortBenchError::invalid_data("no input values to benchmark"));
        }

        let mut report = BenchmarkReport::new(self.sorter.name());
        for volume in self.config.volumes.clone() {
            if volume > values.len() {
                log::warn!(
                    "volume {} exceeds the {} available values, using all of them",
                    volume,
                    values.len()
                );
            }
            let data = &values[..volume.min(values.len())];

            for kind in self.config.kinds.clone() {
                let mut passes = Vec::with_capacity(self.config.repetitions);
                for _ in 0..self.config.repetitions {
                    passes.push(self.run_pass(kind, data)?);
                }
                let summary = KindSummary::from_passes(kind, data.len(), passes);
                log::info!(
                    "{} x {}: avg {:.3} ms, {} bytes",
                    summary.kind,
                    summary.volume,
                    summary.total_ms.avg,
                    summary.memory_bytes.avg as usize
                );
                report.push(summary);
            }
        }
        Ok(report)
    }

    /// Runs one populate, extract, sort, rebuild and verify cycle
    ///
    /// # Errors
    ///
    /// Container and sort errors are propagated. A failed verification is an
    /// error only when `strict` is set; otherwise it is logged and recorded.
    pub fn run_pass(&mut self, kind: ContainerKind, data: &[Value]) -> Result<PassResult> {
        let mut container = kind.create(self.config.linear_capacity(data.len()))?;
        let mut timings = PhaseTimings::default();

        let timer = PhaseTimer::start("populate");
        for &value in data {
            container.insert(value)?;
        }
        timings.populate = timer.stop();
        let container_bytes = container.mem_size();

        let timer = PhaseTimer::start("to_sequence");
        let mut sequence = container.to_sequence();
        timings.to_sequence = timer.stop();

        let timer = PhaseTimer::start("sort");
        self.sorter.sort(&mut sequence)?;
        timings.sort = timer.stop();

        let timer = PhaseTimer::start("from_sequence");
        container.from_sequence(&sequence)?;
        timings.from_sequence = timer.stop();

        let sorted = if self.config.verify {
            let timer = PhaseTimer::start("verify");
            let rebuilt = container.to_sequence();
            let outcome = if rebuilt.len() != data.len() {
                Err(SortBenchError::verification(format!(
                    "{} holds {} elements after rebuild, expected {}",
                    kind,
                    rebuilt.len(),
                    data.len()
                )))
            } else {
                verify_sorted(&rebuilt)
            };
            timings.verify = timer.stop();

            match outcome {
                Ok(()) => Some(true),
                Err(e) if self.config.strict => return Err(e),
                Err(e) => {
                    log::warn!("{} x {}: {}", kind, data.len(), e);
                    Some(false)
                }
            }
        } else {
            None
        };

        let memory = MemoryEstimate {
            container: container_bytes,
            sequence: sequence.capacity() * std::mem::size_of::<Value>(),
            sort_aux: self.sorter.stats().memory_used,
        };

        log::debug!(
            "{} x {}: populate {:?}, sort cycle {:?}, {} bytes",
            kind,
            data.len(),
            timings.populate,
            timings.sort_cycle(),
            memory.total()
        );

        Ok(PassResult {
            kind,
            volume: data.len(),
            timings,
            memory,
            sorted,
        })
    }
}
