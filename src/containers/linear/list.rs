//! Array-backed list

use super::{allocate_buffer, linear_mem_size};
use crate::containers::{validate_capacity, Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};

/// Fixed-capacity list stored contiguously in insertion order
///
/// `append` writes the next free slot; `insert_front` shifts every element one
/// slot to the right first. The logical order is the physical order of
/// `buffer[..size]`.
///
/// # Examples
///
/// ```rust
/// use sortbench::LinearList;
///
/// let mut list = LinearList::with_capacity(4)?;
/// list.append(2)?;
/// list.append(3)?;
/// list.insert_front(1)?;
/// assert_eq!(list.as_slice(), &[1, 2, 3]);
/// # Ok::<(), sortbench::SortBenchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinearList {
    pub(crate) buffer: Box<[Value]>,
    pub(crate) size: usize,
}

impl LinearList {
    /// Creates an empty list holding at most `capacity` elements
    ///
    /// # Errors
    ///
    /// Returns `SortBenchError::Configuration` if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        validate_capacity(ContainerKind::LinearList, capacity)?;
        Ok(Self {
            buffer: allocate_buffer(capacity),
            size: 0,
        })
    }

    /// Adds `value` after the last element
    pub fn append(&mut self, value: Value) -> Result<()> {
        if self.is_full() {
            return Err(SortBenchError::capacity_exceeded(self.capacity(), self.size + 1));
        }
        self.buffer[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Adds `value` before the first element, shifting the rest right
    pub fn insert_front(&mut self, value: Value) -> Result<()> {
        if self.is_full() {
            return Err(SortBenchError::capacity_exceeded(self.capacity(), self.size + 1));
        }
        self.buffer.copy_within(0..self.size, 1);
        self.buffer[0] = value;
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the last element
    pub fn pop_back(&mut self) -> Result<Value> {
        if self.size == 0 {
            return Err(SortBenchError::underflow(ContainerKind::LinearList.name()));
        }
        self.size -= 1;
        Ok(self.buffer[self.size])
    }

    /// Element at `index`, if present
    #[inline]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.as_slice().get(index).copied()
    }

    /// Logically present elements
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.buffer[..self.size]
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if no slot is free
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.buffer.len()
    }

    /// Fixed capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Resets the list without releasing the buffer
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }
}

impl Container for LinearList {
    fn kind(&self) -> ContainerKind {
        ContainerKind::LinearList
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        self.append(value)
    }

    fn remove(&mut self) -> Result<Value> {
        self.pop_back()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        LinearList::clear(self);
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.buffer.len())
    }

    fn mem_size(&self) -> usize {
        linear_mem_size::<Self>(self.buffer.len())
    }
}
