//! Singly-linked list inserting at the head

use super::dynamic_mem_size;
use crate::containers::node::{chain_values, release_chain, Node};
use crate::containers::{Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};
use std::fmt;

/// Unbounded list whose head is the most recently inserted element
///
/// Physical order (head to tail) is the reverse of insertion order. The
/// canonical sequence reverses it back, so callers always see oldest first.
#[derive(Default)]
pub struct DynamicList {
    pub(crate) head: Option<Box<Node>>,
    pub(crate) size: usize,
}

impl DynamicList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { head: None, size: 0 }
    }

    /// Inserts `value` at the head of the chain
    pub fn insert(&mut self, value: Value) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.size += 1;
    }

    /// Removes and returns the head (the most recently inserted element)
    pub fn remove_head(&mut self) -> Result<Value> {
        let mut node = self
            .head
            .take()
            .ok_or_else(|| SortBenchError::underflow(ContainerKind::DynamicList.name()))?;
        self.head = node.next.take();
        self.size -= 1;
        Ok(node.value)
    }

    /// Head value without removing it
    pub fn head(&self) -> Option<Value> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Values in physical order, head to tail
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        chain_values(self.head.as_deref())
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Releases every node
    pub fn clear(&mut self) {
        release_chain(&mut self.head);
        self.size = 0;
    }
}

impl Drop for DynamicList {
    fn drop(&mut self) {
        release_chain(&mut self.head);
    }
}

impl fmt::Debug for DynamicList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicList")
            .field("len", &self.size)
            .field("head", &self.head())
            .finish()
    }
}

impl Container for DynamicList {
    fn kind(&self) -> ContainerKind {
        ContainerKind::DynamicList
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        DynamicList::insert(self, value);
        Ok(())
    }

    fn remove(&mut self) -> Result<Value> {
        self.remove_head()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        DynamicList::clear(self);
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn mem_size(&self) -> usize {
        dynamic_mem_size::<Self>(self.size)
    }
}
