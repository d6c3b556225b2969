//! Linked-list priority queue for Rust
//!
//! This crate provides a min-priority queue backed by a singly linked list
//! whose nodes are kept in ascending priority order at insertion time.
//!
//! # Features
//!
//! - **PriorityList**: ordered singly linked list with stable priority insertion,
//!   O(1) head peek/removal, positional get/set/insert/remove, move-to-front and
//!   in-place reversal
//! - **PriorityQueue**: facade exposing only `insert`, `min` and `remove_min`
//!
//! Both types implement the [`Heap`] trait. Operations on an empty structure
//! and out-of-range positions return a [`ListError`] instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::queue::PriorityQueue;
//! use linked_priority_queue::ListError;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(2, "b");
//! queue.insert(1, "a");
//! assert_eq!(queue.remove_min(), Ok("a"));
//! assert_eq!(queue.remove_min(), Ok("b"));
//! assert_eq!(queue.remove_min(), Err(ListError::EmptyStructure));
//! ```

pub mod priority_list;
pub mod queue;
pub mod traits;

// Re-export the main trait and types for convenience
pub use priority_list::PriorityList;
pub use queue::PriorityQueue;
pub use traits::{Heap, ListError, Priority};
