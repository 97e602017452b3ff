//! Bounded traversal work-lists.
//!
//! - `BoundedQueue`: FIFO, drives breadth-first traversal
//! - `BoundedStack`: LIFO, drives depth-first traversal
//!
//! Both refuse to grow past the bound fixed at construction and hand the
//! rejected item back to the caller instead.

use std::collections::VecDeque;

/// A FIFO queue holding at most `capacity` items.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue bounded to `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds `item` at the back.
    ///
    /// # Errors
    /// Returns `item` back if the queue is full.
    #[inline]
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.items.len() >= self.capacity {
            return Err(item);
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Removes the item at the front.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A LIFO stack holding at most `capacity` items.
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack bounded to `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes `item` on top.
    ///
    /// # Errors
    /// Returns `item` back if the stack is full.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.items.len() >= self.capacity {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the top item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of stacked items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_queue_fifo_and_bound() {
        let mut q = BoundedQueue::new(2);
        assert!(q.enqueue(1).is_ok());
        assert!(q.enqueue(2).is_ok());
        assert_eq!(q.enqueue(3), Err(3));
        assert_eq!(q.dequeue(), Some(1));
        assert!(q.enqueue(3).is_ok());
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert!(q.is_empty());
    }

    #[test]
    fn test_bounded_stack_lifo_and_bound() {
        let mut s = BoundedStack::new(2);
        s.push('a').unwrap();
        s.push('b').unwrap();
        assert_eq!(s.push('c'), Err('c'));
        assert_eq!(s.peek(), Some(&'b'));
        assert_eq!(s.pop(), Some('b'));
        assert_eq!(s.pop(), Some('a'));
        assert_eq!(s.pop(), None);
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut q: BoundedQueue<u8> = BoundedQueue::new(0);
        assert_eq!(q.enqueue(7), Err(7));
        assert_eq!(q.len(), 0);
    }
}
