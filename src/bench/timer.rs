//! Phase timing

use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// Times one named phase of a pass
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    name: &'static str,
    start_time: Instant,
}

impl PhaseTimer {
    /// Starts timing `name`
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start_time: Instant::now(),
        }
    }

    /// Phase name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Time since start
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Stops the timer and returns the elapsed time
    pub fn stop(self) -> Duration {
        let elapsed = self.elapsed();
        log::trace!("{}: {}", self.name, format_duration(elapsed));
        elapsed
    }
}

/// Format duration with automatic unit selection for readability
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.3}us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.3}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}

fn serialize_micros<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_micros() as u64)
}

/// Elapsed time of each phase of one pass, serialized in microseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseTimings {
    /// Inserting every value
    #[serde(rename = "populate_us", serialize_with = "serialize_micros")]
    pub populate: Duration,
    /// Copying the container out to a sequence
    #[serde(rename = "to_sequence_us", serialize_with = "serialize_micros")]
    pub to_sequence: Duration,
    /// Sorting the sequence
    #[serde(rename = "sort_us", serialize_with = "serialize_micros")]
    pub sort: Duration,
    /// Rebuilding the container from the sorted sequence
    #[serde(rename = "from_sequence_us", serialize_with = "serialize_micros")]
    pub from_sequence: Duration,
    /// Checking the rebuilt order, zero when disabled
    #[serde(rename = "verify_us", serialize_with = "serialize_micros")]
    pub verify: Duration,
}

impl PhaseTimings {
    /// Sum of every phase
    pub fn total(&self) -> Duration {
        self.populate + self.to_sequence + self.sort + self.from_sequence + self.verify
    }

    /// Sort-related work only: extraction, sort and rebuild
    pub fn sort_cycle(&self) -> Duration {
        self.to_sequence + self.sort + self.from_sequence
    }
}
