//! Common traits and error types
//!
//! This module provides:
//!
//! - [`Heap`]: the base priority queue trait shared by [`PriorityList`] and
//!   [`PriorityQueue`], so generic code and tests can drive either one
//! - [`ListError`]: the error returned by fallible list and queue operations
//!
//! [`PriorityList`]: crate::priority_list::PriorityList
//! [`PriorityQueue`]: crate::queue::PriorityQueue

use std::fmt;

/// Priority key. Lower values are served first.
pub type Priority = i32;

/// Error type for list and queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A positional operation received an index outside its valid range
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The length of the list at the time of the call
        len: usize,
    },
    /// A head operation was invoked on an empty structure
    EmptyStructure,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            ListError::EmptyStructure => {
                write!(f, "operation requires a non-empty structure")
            }
        }
    }
}

impl std::error::Error for ListError {}

/// Base trait for priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Elements are stored as (priority, item) pairs to separate the ordering
/// key from the data. Among equal priorities, the earliest pushed element
/// comes out first.
///
/// # Example
///
/// ```rust
/// use linked_priority_queue::Heap;
/// use linked_priority_queue::priority_list::PriorityList;
///
/// let mut list = PriorityList::new();
/// list.push(3, "three");
/// list.push(1, "one");
/// list.push(2, "two");
///
/// assert_eq!(list.peek(), Some((&1, &"one")));
/// assert_eq!(list.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(n) for the linked list implementations in this crate.
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(1)
    fn pop(&mut self) -> Option<(P, T)>;
}
