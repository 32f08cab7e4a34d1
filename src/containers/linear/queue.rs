//! Circular array queue

use super::{allocate_buffer, linear_mem_size};
use crate::containers::{validate_capacity, Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};

/// Fixed-capacity FIFO queue over a ring buffer
///
/// `front` is the read position and `rear` the next write position, both
/// modulo the capacity. When `front == rear` the queue is either empty or
/// full; `size` tells the two apart.
///
/// # Examples
///
/// ```rust
/// use sortbench::LinearQueue;
///
/// let mut queue = LinearQueue::with_capacity(3)?;
/// queue.enqueue(1)?;
/// assert_eq!(queue.dequeue()?, 1);
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
/// queue.enqueue(4)?; // wraps around
/// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// # Ok::<(), sortbench::SortBenchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinearQueue {
    pub(crate) buffer: Box<[Value]>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
    pub(crate) size: usize,
}

impl LinearQueue {
    /// Creates an empty queue holding at most `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Configuration` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        validate_capacity(ContainerKind::LinearQueue, capacity)?;
        Ok(Self {
            buffer: allocate_buffer(capacity),
            front: 0,
            rear: 0,
            size: 0,
        })
    }

    /// Adds `value` at the rear
    pub fn enqueue(&mut self, value: Value) -> Result<()> {
        let capacity = self.buffer.len();
        if self.size == capacity {
            return Err(SortBenchError::capacity_exceeded(capacity, self.size + 1));
        }
        self.buffer[self.rear] = value;
        self.rear = (self.rear + 1) % capacity;
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the earliest enqueued element
    pub fn dequeue(&mut self) -> Result<Value> {
        if self.size == 0 {
            return Err(SortBenchError::underflow(ContainerKind::LinearQueue.name()));
        }
        let value = self.buffer[self.front];
        self.front = (self.front + 1) % self.buffer.len();
        self.size -= 1;
        Ok(value)
    }

    /// Front element without removing it
    pub fn peek(&self) -> Option<Value> {
        if self.size == 0 {
            None
        } else {
            Some(self.buffer[self.front])
        }
    }

    /// Elements front-to-rear
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        let capacity = self.buffer.len();
        (0..self.size).map(move |offset| self.buffer[(self.front + offset) % capacity])
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if every slot is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.buffer.len()
    }

    /// Fixed capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Resets the cursors without releasing the buffer
    pub fn clear(&mut self) {
        self.front = 0;
        self.rear = 0;
        self.size = 0;
    }
}

impl Container for LinearQueue {
    fn kind(&self) -> ContainerKind {
        ContainerKind::LinearQueue
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        self.enqueue(value)
    }

    fn remove(&mut self) -> Result<Value> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        LinearQueue::clear(self);
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
    fn test_fifo_order() {
        let mut queue = LinearQueue::with_capacity(4).unwrap();
        for value in 1..=4 {
            queue.enqueue(value).unwrap();
        }
        assert!(queue.is_full());
        for expected in 1..=4 {
            assert_eq!(queue.dequeue().unwrap(), expected);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_wraparound_indices() {
        let mut queue = LinearQueue::with_capacity(3).unwrap();
        queue.enqueue(1).unwrap();
        assert_eq!(queue.dequeue().unwrap(), 1);
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(queue.front, 1);
        assert_eq!(queue.rear, 1);
        assert!(queue.is_full());
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_full_and_empty_share_index() {
        let mut queue = LinearQueue::with_capacity(2).unwrap();
        assert_eq!(queue.front, queue.rear);
        assert!(queue.is_empty());
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.front, queue.rear);
        assert!(queue.is_full());
        assert!(matches!(queue.enqueue(3), Err(SortBenchError::CapacityExceeded { .. })));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_underflow() {
        let mut queue = LinearQueue::with_capacity(1).unwrap();
        assert_eq!(queue.peek(), None);
        assert!(matches!(queue.dequeue(), Err(SortBenchError::Underflow { .. })));
        queue.enqueue(3).unwrap();
        assert_eq!(queue.peek(), Some(3));
    }

    #[test]
    fn test_clear_resets_cursors() {
        let mut queue = LinearQueue::with_capacity(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.dequeue().unwrap();
        queue.clear();
        assert_eq!((queue.front, queue.rear, queue.size), (0, 0, 0));
        assert_eq!(queue.capacity(), 3);
    }
}
