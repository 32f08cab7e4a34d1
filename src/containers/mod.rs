//! List, stack and queue containers in linear and dynamic flavours
//!
//! ## Linear Containers
//!
//! - **`LinearList`** - Fixed-capacity array list with append and insert-at-front
//! - **`LinearStack`** - Fixed-capacity array stack
//! - **`LinearQueue`** - Fixed-capacity circular buffer queue
//!
//! ## Dynamic Containers
//!
//! - **`DynamicList`** - Singly-linked list inserting at the head
//! - **`DynamicStack`** - Singly-linked stack
//! - **`DynamicQueue`** - Singly-linked queue with a maintained tail
//!
//! All six share the [`Container`] capability trait. Callers select a variant
//! through [`ContainerKind`] and work with it as `Box<dyn Container>`.

pub mod dynamic;
pub mod linear;
mod node;

pub use dynamic::{DynamicList, DynamicQueue, DynamicStack};
pub use linear::{LinearList, LinearQueue, LinearStack};
pub use node::Node;

use crate::convert::CanonicalSequence;
use crate::error::{Result, SortBenchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type stored by every container
pub type Value = u32;

/// Uniform interface over the six container variants
///
/// `insert` and `remove` map onto each variant's native operation:
///
/// | kind  | insert              | remove                         |
/// |-------|---------------------|--------------------------------|
/// | list  | append (logical end)| logical last element           |
/// | stack | push                | pop (most recently pushed)     |
/// | queue | enqueue             | dequeue (earliest enqueued)    |
pub trait Container: CanonicalSequence {
    /// The variant tag of this container
    fn kind(&self) -> ContainerKind;

    /// Adds one element
    ///
    /// # Errors
    ///
    /// Linear variants return `SortBenchError::CapacityExceeded` when full.
    fn insert(&mut self, value: Value) -> Result<()>;

    /// Removes one element
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Underflow` when the container is empty.
    fn remove(&mut self) -> Result<Value>;

    /// Number of logically present elements
    fn len(&self) -> usize;

    /// Returns true if no elements are present
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element
    fn clear(&mut self);

    /// Fixed capacity for linear variants, `None` for dynamic ones
    fn capacity(&self) -> Option<usize>;

    /// Estimated memory footprint in bytes (inline struct plus owned heap)
    fn mem_size(&self) -> usize;
}

/// Closed set of container variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    /// Array-backed list
    LinearList,
    /// Node-linked list
    DynamicList,
    /// Array-backed stack
    LinearStack,
    /// Node-linked stack
    DynamicStack,
    /// Circular array queue
    LinearQueue,
    /// Node-linked queue
    DynamicQueue,
}

impl ContainerKind {
    /// Every kind, in benchmark order
    pub const ALL: [ContainerKind; 6] = [
        ContainerKind::LinearList,
        ContainerKind::DynamicList,
        ContainerKind::LinearStack,
        ContainerKind::DynamicStack,
        ContainerKind::LinearQueue,
        ContainerKind::DynamicQueue,
    ];

    /// Type name used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::LinearList => "LinearList",
            ContainerKind::DynamicList => "DynamicList",
            ContainerKind::LinearStack => "LinearStack",
            ContainerKind::DynamicStack => "DynamicStack",
            ContainerKind::LinearQueue => "LinearQueue",
            ContainerKind::DynamicQueue => "DynamicQueue",
        }
    }

    /// Short identifier accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::LinearList => "linear-list",
            ContainerKind::DynamicList => "dynamic-list",
            ContainerKind::LinearStack => "linear-stack",
            ContainerKind::DynamicStack => "dynamic-stack",
            ContainerKind::LinearQueue => "linear-queue",
            ContainerKind::DynamicQueue => "dynamic-queue",
        }
    }

    /// Whether this kind has a fixed capacity
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            ContainerKind::LinearList | ContainerKind::LinearStack | ContainerKind::LinearQueue
        )
    }

    /// Creates an empty container of this kind
    ///
    /// `capacity` is only used by linear kinds.
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Configuration` if a linear kind gets capacity 0.
    pub fn create(self, capacity: usize) -> Result<Box<dyn Container>> {
        let container: Box<dyn Container> = match self {
            ContainerKind::LinearList => Box::new(LinearList::with_capacity(capacity)?),
            ContainerKind::DynamicList => Box::new(DynamicList::new()),
            ContainerKind::LinearStack => Box::new(LinearStack::with_capacity(capacity)?),
            ContainerKind::DynamicStack => Box::new(DynamicStack::new()),
            ContainerKind::LinearQueue => Box::new(LinearQueue::with_capacity(capacity)?),
            ContainerKind::DynamicQueue => Box::new(DynamicQueue::new()),
        };
        Ok(container)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ContainerKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized || kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortBenchError::configuration(format!("unknown container kind '{}'", s)))
    }
}

/// Rejects a zero capacity for linear containers
pub(crate) fn validate_capacity(kind: ContainerKind, capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(SortBenchError::configuration(format!(
            "{} capacity must be greater than 0",
            kind.name()
        )));
    }
    Ok(())
}
