//! Unbounded, node-linked containers
//!
//! Each container exclusively owns its node chain. Clearing or dropping a
//! container releases the whole chain iteratively.

mod list;
mod queue;
mod stack;

pub use list::DynamicList;
pub use queue::DynamicQueue;
pub use stack::DynamicStack;

use super::node::Node;

/// Footprint of a dynamic container: the struct plus one node per element
#[inline]
pub(crate) fn dynamic_mem_size<T>(len: usize) -> usize {
    std::mem::size_of::<T>() + len * std::mem::size_of::<Node>()
}
