//! # sortbench: list, stack and queue containers benchmarked with counting sort
//!
//! This crate provides six containers in two storage families, a converter
//! layer mapping each of them to a canonical flat sequence, and the
//! non-comparative sorts applied to that sequence.
//!
//! ## Key Features
//!
//! - **Linear Containers**: Fixed-capacity array list, stack and circular queue
//! - **Dynamic Containers**: Node-chain list, stack and queue with O(1) ends
//! - **Canonical Sequences**: Every container converts to and from insertion order
//! - **Counting Sort**: O(n + max) sort for bounded non-negative integers
//! - **Radix Sort**: LSD passes of stable counting for wider domains
//! - **Benchmark Harness**: Per-phase timing and memory estimates per container kind
//!
//! ## Quick Start
//!
//! ```rust
//! use sortbench::{CanonicalSequence, LinearStack, counting_sort};
//!
//! let mut stack = LinearStack::with_capacity(8)?;
//! for value in [5, 3, 1, 4, 2] {
//!     stack.push(value)?;
//! }
//!
//! let mut sequence = stack.to_sequence();
//! assert_eq!(sequence, vec![5, 3, 1, 4, 2]);
//!
//! counting_sort(&mut sequence);
//! stack.from_sequence(&sequence)?;
//! assert_eq!(stack.pop()?, 5);
//! # Ok::<(), sortbench::SortBenchError>(())
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod bench;
pub mod config;
pub mod containers;
pub mod convert;
pub mod error;
pub mod io;

pub use algorithms::{
    counting_sort, counting_sort_by_key, frequency_table, is_sorted, verify_sorted,
    AlgorithmStats, CountingSort, CountingSortConfig, IntegerSort, RadixSort, RadixSortConfig,
    SortAlgorithm,
};
pub use bench::{BenchmarkReport, BenchmarkRunner, KindSummary, PassResult};
pub use config::{BenchmarkConfig, Config, ReaderConfig};
pub use containers::{
    Container, ContainerKind, DynamicList, DynamicQueue, DynamicStack, LinearList, LinearQueue,
    LinearStack, Value,
};
pub use convert::CanonicalSequence;
pub use error::{Result, SortBenchError};
pub use io::{RatingField, RatingsReader, ReadSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing sortbench v{}", VERSION);
}
