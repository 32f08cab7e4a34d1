//! Singly-linked stack

use super::dynamic_mem_size;
use crate::containers::node::{chain_values, release_chain, Node};
use crate::containers::{Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};
use std::fmt;

/// Unbounded LIFO stack; the chain runs from top to bottom
#[derive(Default)]
pub struct DynamicStack {
    pub(crate) top: Option<Box<Node>>,
    pub(crate) size: usize,
}

impl DynamicStack {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Pushes `value` on top in O(1)
    pub fn push(&mut self, value: Value) {
        let next = self.top.take();
        self.top = Some(Node::boxed(value, next));
        self.size += 1;
    }

    /// Removes and returns the top element in O(1)
    pub fn pop(&mut self) -> Result<Value> {
        let mut node = self
            .top
            .take()
            .ok_or_else(|| SortBenchError::underflow(ContainerKind::DynamicStack.name()))?;
        self.top = node.next.take();
        self.size -= 1;
        Ok(node.value)
    }

    /// Top value without removing it
    pub fn peek(&self) -> Option<Value> {
        self.top.as_ref().map(|node| node.value)
    }

    /// Values from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        chain_values(self.top.as_deref())
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Releases every node
    pub fn clear(&mut self) {
        release_chain(&mut self.top);
        self.size = 0;
    }
}

impl Drop for DynamicStack {
    fn drop(&mut self) {
        release_chain(&mut self.top);
    }
}

impl fmt::Debug for DynamicStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicStack")
            .field("len", &self.size)
            .field("top", &self.peek())
            .finish()
    }
}

impl Container for DynamicStack {
    fn kind(&self) -> ContainerKind {
        ContainerKind::DynamicStack
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        self.push(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<Value> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        DynamicStack::clear(self);
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn mem_size(&self) -> usize {
        dynamic_mem_size::<Self>(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = DynamicStack::new();
        for value in [5, 3, 1] {
            stack.push(value);
        }
        assert_eq!(stack.peek(), Some(1));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(stack.pop().unwrap(), 1);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 5);
        assert!(matches!(stack.pop(), Err(SortBenchError::Underflow { container: "DynamicStack" })));
    }

    #[test]
    fn test_size_tracking() {
        let mut stack = DynamicStack::new();
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_drop_long_chain() {
        let mut stack = DynamicStack::new();
        for value in 0..300_000 {
            stack.push(value);
        }
        drop(stack);
    }

    #[test]
    fn test_debug_shows_top_only() {
        let mut stack = DynamicStack::new();
        stack.push(3);
        stack.push(8);
        assert_eq!(format!("{:?}", stack), "DynamicStack { len: 2, top: Some(8) }");
    }
}
