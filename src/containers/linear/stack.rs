//! Array-backed stack

use super::{allocate_buffer, linear_mem_size};
use crate::containers::{validate_capacity, Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};

/// Fixed-capacity LIFO stack
///
/// The buffer holds elements bottom-to-top; `top` is the number of elements,
/// so the most recent one lives at `buffer[top - 1]`.
#[derive(Debug, Clone)]
pub struct LinearStack {
    pub(crate) buffer: Box<[Value]>,
    pub(crate) top: usize,
}

impl LinearStack {
    /// Creates an empty stack holding at most `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Configuration` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        validate_capacity(ContainerKind::LinearStack, capacity)?;
        Ok(Self {
            buffer: allocate_buffer(capacity),
            top: 0,
        })
    }

    /// Pushes `value` on top
    pub fn push(&mut self, value: Value) -> Result<()> {
        if self.top == self.buffer.len() {
            return Err(SortBenchError::capacity_exceeded(self.buffer.len(), self.top + 1));
        }
        self.buffer[self.top] = value;
        self.top += 1;
        Ok(())
    }

    /// Removes and returns the most recently pushed element
    pub fn pop(&mut self) -> Result<Value> {
        if self.top == 0 {
            return Err(SortBenchError::underflow(ContainerKind::LinearStack.name()));
        }
        self.top -= 1;
        Ok(self.buffer[self.top])
    }

    /// Top element without removing it
    pub fn peek(&self) -> Option<Value> {
        self.top.checked_sub(1).map(|index| self.buffer[index])
    }

    /// Elements bottom-to-top
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.buffer[..self.top]
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Returns true if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Fixed capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Resets the stack without releasing the buffer
    #[inline]
    pub fn clear(&mut self) {
        self.top = 0;
    }
}

impl Container for LinearStack {
    fn kind(&self) -> ContainerKind {
        ContainerKind::LinearStack
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        self.push(value)
    }

    fn remove(&mut self) -> Result<Value> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.top
    }

    fn clear(&mut self) {
        LinearStack::clear(self);
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.buffer.len())
    }

    fn mem_size(&self) -> usize {
        linear_mem_size::<Self>(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = LinearStack::with_capacity(3).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.peek(), Some(3));
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_full_stack_rejects_push() {
        let mut stack = LinearStack::with_capacity(1).unwrap();
        stack.push(1).unwrap();
        assert!(matches!(stack.push(2), Err(SortBenchError::CapacityExceeded { .. })));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(1));
    }

    #[test]
    fn test_underflow() {
        let mut stack = LinearStack::with_capacity(2).unwrap();
        assert_eq!(stack.peek(), None);
        assert!(matches!(stack.pop(), Err(SortBenchError::Underflow { container: "LinearStack" })));
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut stack = LinearStack::with_capacity(2).unwrap();
        stack.push(5).unwrap();
        stack.push(6).unwrap();
        stack.clear();
        assert_eq!(stack.len(), 0);
        stack.push(7).unwrap();
        stack.push(8).unwrap();
        assert_eq!(stack.as_slice(), &[7, 8]);
    }
}
