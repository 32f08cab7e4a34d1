//! Benchmark harness
//!
//! A pass builds one container from the input, extracts its canonical
//! sequence, sorts it, rebuilds the container and checks the result:
//!
//! ```text
//! populate -> to_sequence -> sort -> from_sequence -> verify
//! ```
//!
//! Each phase is timed separately. Repeated passes for the same container
//! kind and volume are folded into a [`KindSummary`], and a
//! [`BenchmarkReport`] collects the summaries for printing or JSON export.

pub mod report;
pub mod runner;
pub mod timer;

pub use report::{BenchmarkReport, KindSummary, Spread};
pub use runner::{BenchmarkRunner, MemoryEstimate, PassResult};
pub use timer::{format_duration, PhaseTimer, PhaseTimings};
