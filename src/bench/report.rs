//! Aggregated benchmark results

use super::runner::PassResult;
use crate::containers::ContainerKind;
use crate::error::{Result, SortBenchError};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Minimum, mean and maximum of a sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Spread {
    /// Smallest sample
    pub min: f64,
    /// Arithmetic mean
    pub avg: f64,
    /// Largest sample
    pub max: f64,
}

impl Spread {
    /// Folds `samples`; all zero for an empty sample
    pub fn from_samples<I: IntoIterator<Item = f64>>(samples: I) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for sample in samples {
            count += 1;
            sum += sample;
            min = min.min(sample);
            max = max.max(sample);
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            min,
            avg: sum / count as f64,
            max,
        }
    }
}

/// Repeated passes of one container kind at one volume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSummary {
    /// Container kind measured
    pub kind: ContainerKind,
    /// Number of values each pass handled
    pub volume: usize,
    /// Number of passes summarized
    pub repetitions: usize,
    /// Whole pass, milliseconds
    pub total_ms: Spread,
    /// Extract, sort and rebuild, milliseconds
    pub sort_cycle_ms: Spread,
    /// Estimated bytes per pass
    pub memory_bytes: Spread,
    /// `Some(true)` only if every pass verified
    pub verified: Option<bool>,
    /// Individual passes, in run order
    pub passes: Vec<PassResult>,
}

impl KindSummary {
    /// Summarizes `passes`, which must all share `kind` and `volume`
    pub fn from_passes(kind: ContainerKind, volume: usize, passes: Vec<PassResult>) -> Self {
        let millis = |d: std::time::Duration| d.as_micros() as f64 / 1_000.0;
        let total_ms = Spread::from_samples(passes.iter().map(|p| millis(p.timings.total())));
        let sort_cycle_ms =
            Spread::from_samples(passes.iter().map(|p| millis(p.timings.sort_cycle())));
        let memory_bytes = Spread::from_samples(passes.iter().map(|p| p.memory.total() as f64));

        let verified = passes
            .iter()
            .map(|p| p.sorted)
            .try_fold(true, |all, sorted| sorted.map(|s| all && s));

        Self {
            kind,
            volume,
            repetitions: passes.len(),
            total_ms,
            sort_cycle_ms,
            memory_bytes,
            verified,
            passes,
        }
    }
}

/// Every summary from one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    algorithm: String,
    input: Option<String>,
    summaries: Vec<KindSummary>,
}

impl BenchmarkReport {
    /// Empty report for `algorithm`
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            input: None,
            summaries: Vec::new(),
        }
    }

    /// Records where the values came from
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = Some(input.into());
    }

    /// Appends one summary
    pub fn push(&mut self, summary: KindSummary) {
        self.summaries.push(summary);
    }

    /// Name of the sort that produced the report
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Input description, if one was recorded
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// All summaries, in run order
    pub fn summaries(&self) -> &[KindSummary] {
        &self.summaries
    }

    /// Summaries measured at `volume`
    pub fn for_volume(&self, volume: usize) -> impl Iterator<Item = &KindSummary> {
        self.summaries.iter().filter(move |s| s.volume == volume)
    }

    /// Kind with the lowest average pass time at `volume`
    pub fn fastest(&self, volume: usize) -> Option<&KindSummary> {
        self.for_volume(volume)
            .min_by(|a, b| a.total_ms.avg.total_cmp(&b.total_ms.avg))
    }

    /// Kind with the lowest average memory at `volume`
    pub fn leanest(&self, volume: usize) -> Option<&KindSummary> {
        self.for_volume(volume)
            .min_by(|a, b| a.memory_bytes.avg.total_cmp(&b.memory_bytes.avg))
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SortBenchError::invalid_data(format!("Failed to serialize report: {}", e)))
    }

    /// Writes [`to_json`](Self::to_json) output to `path`
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container sort benchmark ({})", self.algorithm)?;
        if let Some(input) = &self.input {
            write!(f, " on {}", input)?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<100}", "")?;
        writeln!(
            f,
            "{:<14} {:>10} {:>5} {:>12} {:>12} {:>12} {:>14} {:>12} {:>4}",
            "Kind", "Volume", "Reps", "Min ms", "Avg ms", "Max ms", "Sort avg ms", "Avg KiB", "OK"
        )?;
        writeln!(f, "{:-<100}", "")?;
        for s in &self.summaries {
            let verified = match s.verified {
                Some(true) => "yes",
                Some(false) => "NO",
                None => "-",
            };
            writeln!(
                f,
                "{:<14} {:>10} {:>5} {:>12.3} {:>12.3} {:>12.3} {:>14.3} {:>12.1} {:>4}",
                s.kind.name(),
                s.volume,
                s.repetitions,
                s.total_ms.min,
                s.total_ms.avg,
                s.total_ms.max,
                s.sort_cycle_ms.avg,
                s.memory_bytes.avg / 1024.0,
                verified
            )?;
        }
        write!(f, "{:-<100}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{MemoryEstimate, PhaseTimings};
    use std::time::Duration;

    fn pass(kind: ContainerKind, millis: u64, memory: usize, sorted: Option<bool>) -> PassResult {
        PassResult {
            kind,
            volume: 100,
            timings: PhaseTimings {
                sort: Duration::from_millis(millis),
                ..PhaseTimings::default()
            },
            memory: MemoryEstimate {
                container: memory,
                sequence: 0,
                sort_aux: 0,
            },
            sorted,
        }
    }

    #[test]
    fn test_spread() {
        let spread = Spread::from_samples([4.0, 1.0, 7.0]);
        assert_eq!(spread, Spread { min: 1.0, avg: 4.0, max: 7.0 });
        assert_eq!(Spread::from_samples(std::iter::empty()), Spread::default());
    }

    #[test]
    fn test_summary_from_passes() {
        let kind = ContainerKind::LinearQueue;
        let summary = KindSummary::from_passes(
            kind,
            100,
            vec![pass(kind, 2, 400, Some(true)), pass(kind, 4, 600, Some(true))],
        );
        assert_eq!(summary.repetitions, 2);
        assert_eq!(summary.total_ms.min, 2.0);
        assert_eq!(summary.total_ms.max, 4.0);
        assert_eq!(summary.sort_cycle_ms.avg, 3.0);
        assert_eq!(summary.memory_bytes.avg, 500.0);
        assert_eq!(summary.verified, Some(true));
    }

    #[test]
    fn test_verified_flag() {
        let kind = ContainerKind::DynamicList;
        let failed = KindSummary::from_passes(
            kind,
            100,
            vec![pass(kind, 1, 0, Some(true)), pass(kind, 1, 0, Some(false))],
        );
        assert_eq!(failed.verified, Some(false));

        let unchecked = KindSummary::from_passes(kind, 100, vec![pass(kind, 1, 0, None)]);
        assert_eq!(unchecked.verified, None);
    }

    #[test]
    fn test_report_queries_and_output() {
        let mut report = BenchmarkReport::new("counting");
        report.set_input("ratings.csv");
        let a = ContainerKind::LinearStack;
        let b = ContainerKind::DynamicStack;
        report.push(KindSummary::from_passes(a, 100, vec![pass(a, 5, 100, Some(true))]));
        report.push(KindSummary::from_passes(b, 100, vec![pass(b, 3, 900, Some(true))]));

        assert_eq!(report.fastest(100).map(|s| s.kind), Some(b));
        assert_eq!(report.leanest(100).map(|s| s.kind), Some(a));
        assert!(report.fastest(5).is_none());

        let table = report.to_string();
        assert!(table.contains("LinearStack"));
        assert!(table.contains("DynamicStack"));
        assert!(table.contains("ratings.csv"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["algorithm"], "counting");
        assert_eq!(json["summaries"][0]["kind"], "linear-stack");
        assert_eq!(json["summaries"][1]["passes"][0]["timings"]["sort_us"], 3_000);
    }

    #[test]
    fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        BenchmarkReport::new("radix").save_json(&path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("radix"));
    }
}
