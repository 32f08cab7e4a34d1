//! Fixed-capacity, array-backed containers
//!
//! Each container allocates its backing buffer once at construction and never
//! grows it. Operations that would exceed the capacity fail with
//! `SortBenchError::CapacityExceeded` and leave the container untouched.

mod list;
mod queue;
mod stack;

pub use list::LinearList;
pub use queue::LinearQueue;
pub use stack::LinearStack;

use super::Value;

/// Allocates a zeroed buffer of `capacity` slots
#[inline]
pub(crate) fn allocate_buffer(capacity: usize) -> Box<[Value]> {
    vec![0; capacity].into_boxed_slice()
}

/// Footprint of a linear container: the struct plus its whole buffer
#[inline]
pub(crate) fn linear_mem_size<T>(capacity: usize) -> usize {
    std::mem::size_of::<T>() + capacity * std::mem::size_of::<Value>()
}
