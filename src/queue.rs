//! Priority Queue facade
//!
//! [`PriorityQueue`] exposes only the min-priority queue contract on top
//! of a [`PriorityList`]: insert with a priority, look at the minimum, and
//! remove the minimum. Positional access, reversal and move-to-front stay
//! internal to the list.
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(2, 6);
//! queue.insert(1, 5);
//! queue.insert(4, 8);
//! queue.insert(3, 7);
//!
//! assert_eq!(queue.min(), Ok(&5));
//! assert_eq!(queue.remove_min(), Ok(5));
//! assert_eq!(queue.min(), Ok(&6));
//! assert_eq!(queue.len(), 3);
//! ```

use crate::priority_list::{Iter, PriorityList};
use crate::traits::{Heap, ListError, Priority};
use std::fmt;

/// A min-priority queue backed by a [`PriorityList`]
///
/// Lower priorities are served first; equal priorities are served in
/// insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    list: PriorityList<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            list: PriorityList::new(),
        }
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Inserts `item` with the given priority
    pub fn insert(&mut self, priority: Priority, item: T) {
        self.list.insert_with_priority(priority, item);
    }

    /// Returns the item with the minimal priority
    ///
    /// # Errors
    /// Returns [`ListError::EmptyStructure`] if the queue is empty.
    pub fn min(&self) -> Result<&T, ListError> {
        self.list.peek_head()
    }

    /// Removes and returns the item with the minimal priority
    ///
    /// # Errors
    /// Returns [`ListError::EmptyStructure`] if the queue is empty.
    pub fn remove_min(&mut self) -> Result<T, ListError> {
        self.list.remove_head()
    }

    /// Returns an iterator over the items in service order
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Heap<T, Priority> for PriorityQueue<T> {
    fn new() -> Self {
        PriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn push(&mut self, priority: Priority, item: T) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&Priority, &T)> {
        self.list.peek()
    }

    fn pop(&mut self) -> Option<(Priority, T)> {
        self.list.pop()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Priority, T)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (Priority, T)>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(Priority, T)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (Priority, T)>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("list", &self.list)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityQueue {{ list: {} }}", self.list)
    }
}
