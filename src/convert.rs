//! Conversion between containers and the canonical flat sequence
//!
//! The canonical sequence lists elements in insertion order, oldest first
//! (arrival order for queues). Each container maps its own physical layout
//! onto that order:
//!
//! - `LinearList`, `LinearStack`: the buffer prefix is already in order
//! - `LinearQueue`: walk `size` slots starting at `front`, modulo capacity
//! - `DynamicList`, `DynamicStack`: the chain runs newest-first, so reverse it
//! - `DynamicQueue`: the chain runs front-to-rear already
//!
//! `to_sequence` on an empty container returns an empty `Vec`.
//! `from_sequence` resets the container and repopulates it so that a later
//! `to_sequence` returns the same slice; linear variants check the capacity
//! before touching any state.

use crate::containers::{
    Container, DynamicList, DynamicQueue, DynamicStack, LinearList, LinearQueue, LinearStack,
    Value,
};
use crate::error::{check_capacity, Result};

/// Bidirectional mapping to and from the canonical sequence
pub trait CanonicalSequence {
    /// Copies the elements out in canonical order
    fn to_sequence(&self) -> Vec<Value>;

    /// Replaces the contents with `values`, given in canonical order
    ///
    /// # Errors
    ///
    /// Linear variants return `SortBenchError::CapacityExceeded` if
    /// `values.len()` exceeds the capacity; the container is left unchanged.
    fn from_sequence(&mut self, values: &[Value]) -> Result<()>;
}

impl CanonicalSequence for LinearList {
    fn to_sequence(&self) -> Vec<Value> {
        self.as_slice().to_vec()
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        check_capacity(values.len(), self.buffer.len())?;
        self.buffer[..values.len()].copy_from_slice(values);
        self.size = values.len();
        Ok(())
    }
}

impl CanonicalSequence for LinearStack {
    fn to_sequence(&self) -> Vec<Value> {
        // Bottom-to-top is insertion order.
        self.as_slice().to_vec()
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        check_capacity(values.len(), self.buffer.len())?;
        self.buffer[..values.len()].copy_from_slice(values);
        self.top = values.len();
        Ok(())
    }
}

impl CanonicalSequence for LinearQueue {
    fn to_sequence(&self) -> Vec<Value> {
        let capacity = self.buffer.len();
        let mut sequence = Vec::with_capacity(self.size);
        // At most two contiguous runs: front..end, then 0..wrap.
        let first_run = self.size.min(capacity - self.front);
        sequence.extend_from_slice(&self.buffer[self.front..self.front + first_run]);
        sequence.extend_from_slice(&self.buffer[..self.size - first_run]);
        sequence
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        let capacity = self.buffer.len();
        check_capacity(values.len(), capacity)?;
        self.buffer[..values.len()].copy_from_slice(values);
        self.front = 0;
        self.rear = values.len() % capacity;
        self.size = values.len();
        Ok(())
    }
}

impl CanonicalSequence for DynamicList {
    fn to_sequence(&self) -> Vec<Value> {
        let mut sequence = vec![0; self.len()];
        for (slot, value) in sequence.iter_mut().rev().zip(self.iter()) {
            *slot = value;
        }
        sequence
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        self.clear();
        // Oldest first ends up at the tail, newest at the head.
        for &value in values {
            self.insert(value);
        }
        Ok(())
    }
}

impl CanonicalSequence for DynamicStack {
    fn to_sequence(&self) -> Vec<Value> {
        let mut sequence = vec![0; self.len()];
        for (slot, value) in sequence.iter_mut().rev().zip(self.iter()) {
            *slot = value;
        }
        sequence
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        self.clear();
        for &value in values {
            self.push(value);
        }
        Ok(())
    }
}

impl CanonicalSequence for DynamicQueue {
    fn to_sequence(&self) -> Vec<Value> {
        let mut sequence = Vec::with_capacity(self.len());
        sequence.extend(self.iter());
        sequence
    }

    fn from_sequence(&mut self, values: &[Value]) -> Result<()> {
        self.clear();
        for &value in values {
            self.enqueue(value);
        }
        Ok(())
    }
}

/// Canonical sequence of any container behind the trait object
pub fn sequence_of(container: &dyn Container) -> Vec<Value> {
    container.to_sequence()
}

/// Rebuilds `container` from `values`, logging the resulting size
pub fn rebuild(container: &mut dyn Container, values: &[Value]) -> Result<()> {
    container.from_sequence(values)?;
    log::trace!("rebuilt {} with {} elements", container.kind(), container.len());
    Ok(())
}
