//! Singly-linked node chain shared by the dynamic containers

use super::Value;
use std::fmt;

/// A cell owning one value and the rest of the chain
pub struct Node {
    /// Stored value
    pub value: Value,
    /// Next cell, owned exclusively by this one
    pub next: Option<Box<Node>>,
}

impl Node {
    /// Creates a detached node
    #[inline]
    pub fn new(value: Value) -> Self {
        Self { value, next: None }
    }

    /// Creates a boxed node in front of `next`
    #[inline]
    pub(crate) fn boxed(value: Value, next: Option<Box<Node>>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Releases a chain one node at a time.
///
/// The default recursive drop of `Option<Box<Node>>` would use one stack frame
/// per node; benchmark volumes reach hundreds of thousands of nodes.
pub(crate) fn release_chain(head: &mut Option<Box<Node>>) {
    let mut current = head.take();
    while let Some(mut node) = current {
        current = node.next.take();
    }
}

/// Iterates the values of a chain from `head` onwards
pub(crate) fn chain_values(head: Option<&Node>) -> ChainValues<'_> {
    ChainValues { current: head }
}

/// Iterator over chain values, head first
pub(crate) struct ChainValues<'a> {
    current: Option<&'a Node>,
}

impl Iterator for ChainValues<'_> {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node.value)
    }
}
