//! Singly-linked queue with a tail pointer

use super::dynamic_mem_size;
use crate::containers::{Container, ContainerKind, Value};
use crate::error::{Result, SortBenchError};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Queue cell; allocated with `Box::leak` and freed with `Box::from_raw`
struct Link {
    value: Value,
    next: Option<NonNull<Link>>,
}

/// Unbounded FIFO queue
///
/// The chain runs front-to-rear and is owned through raw pointers, so the
/// tail can be reached in O(1) without aliasing an owning `Box`. `front` and
/// `rear` are either both `None` or both point into the same chain.
pub struct DynamicQueue {
    front: Option<NonNull<Link>>,
    rear: Option<NonNull<Link>>,
    pub(crate) size: usize,
    marker: PhantomData<Box<Link>>,
}

impl DynamicQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            front: None,
            rear: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Adds `value` at the rear in O(1)
    pub fn enqueue(&mut self, value: Value) {
        let link = NonNull::from(Box::leak(Box::new(Link { value, next: None })));
        match self.rear {
            None => self.front = Some(link),
            // SAFETY: `rear` came from `Box::leak` and is freed only after it
            // has been unlinked, so it is live and owned by this queue.
            Some(rear) => unsafe { (*rear.as_ptr()).next = Some(link) },
        }
        self.rear = Some(link);
        self.size += 1;
    }

    /// Removes and returns the front element in O(1)
    pub fn dequeue(&mut self) -> Result<Value> {
        let front = self
            .front
            .ok_or_else(|| SortBenchError::underflow(ContainerKind::DynamicQueue.name()))?;
        // SAFETY: `front` is a live link leaked by `enqueue`; it is unlinked
        // here before ownership goes back to the `Box`.
        let link = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = link.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.size -= 1;
        Ok(link.value)
    }

    /// Front value without removing it
    pub fn peek(&self) -> Option<Value> {
        // SAFETY: links reachable from `front` are live while `self` is borrowed.
        self.front.map(|front| unsafe { (*front.as_ptr()).value })
    }

    /// Values front-to-rear
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        Iter {
            current: self.front,
            marker: PhantomData,
        }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Releases every node, front first
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
        debug_assert!(self.rear.is_none() && self.size == 0);
    }
}

impl Default for DynamicQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DynamicQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for DynamicQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicQueue")
            .field("len", &self.size)
            .field("front", &self.peek())
            .finish()
    }
}

// SAFETY: the queue exclusively owns its links, like `Box<Link>` would.
unsafe impl Send for DynamicQueue {}
// SAFETY: shared access only reads `Copy` values.
unsafe impl Sync for DynamicQueue {}

/// Front-to-rear iterator over a [`DynamicQueue`]
struct Iter<'a> {
    current: Option<NonNull<Link>>,
    marker: PhantomData<&'a Link>,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        let current = self.current?;
        // SAFETY: the borrowed queue keeps every link alive for `'a`.
        let link = unsafe { &*current.as_ptr() };
        self.current = link.next;
        Some(link.value)
    }
}

impl Container for DynamicQueue {
    fn kind(&self) -> ContainerKind {
        ContainerKind::DynamicQueue
    }

    fn insert(&mut self, value: Value) -> Result<()> {
        self.enqueue(value);
        Ok(())
    }

    fn remove(&mut self) -> Result<Value> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        DynamicQueue::clear(self);
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn mem_size(&self) -> usize {
        dynamic_mem_size::<Self>(self.size)
    }
}
