//! Priority List implementation
//!
//! A singly linked list whose nodes carry an integer priority. Priority
//! insertion keeps the chain sorted by ascending priority, so the head is
//! always the element to serve next. Ties are stable: a new element is
//! placed after every existing element with the same priority.
//!
//! Besides the priority operations, the list supports positional access
//! (`get`, `set`, `insert_at`, `remove_at`), `move_to_front` and in-place
//! `reverse`. Positional operations work on raw positions and do not
//! re-sort, so a list mutated through them is no longer guaranteed to be
//! sorted.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity |
//! |------------------------|------------|
//! | `insert_with_priority` | O(n)       |
//! | `peek_head`            | O(1)       |
//! | `remove_head`          | O(1)       |
//! | `get` / `set`          | O(i)       |
//! | `insert_at`            | O(i)       |
//! | `remove_at`            | O(i)       |
//! | `move_to_front`        | O(i)       |
//! | `reverse`              | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use linked_priority_queue::priority_list::PriorityList;
//!
//! let mut list = PriorityList::new();
//! list.insert_with_priority(2, 6);
//! list.insert_with_priority(1, 5);
//! list.insert_with_priority(4, 8);
//! list.insert_with_priority(3, 7);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
//! assert_eq!(list.peek_head(), Ok(&5));
//! assert_eq!(list.remove_head(), Ok(5));
//! assert_eq!(list.len(), 3);
//! ```

use crate::traits::{Heap, ListError, Priority};
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace};

type Link<T> = Option<Box<Node<T>>>;

/// Internal node of the chain
///
/// Each node owns its successor.
struct Node<T> {
    item: T,
    priority: Priority,
    next: Link<T>,
}

/// A singly linked list kept in ascending priority order
///
/// # Type Parameters
///
/// - `T`: The item type stored in the list
///
/// Priorities are [`Priority`] (`i32`) keys; lower values are served first.
pub struct PriorityList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> PriorityList<T> {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the item at the head
    ///
    /// # Errors
    /// Returns [`ListError::EmptyStructure`] if the list is empty.
    pub fn peek_head(&self) -> Result<&T, ListError> {
        self.head
            .as_deref()
            .map(|node| &node.item)
            .ok_or(ListError::EmptyStructure)
    }

    /// Removes and returns the item at the head
    ///
    /// # Errors
    /// Returns [`ListError::EmptyStructure`] if the list is empty.
    pub fn remove_head(&mut self) -> Result<T, ListError> {
        self.pop_node().map(|node| node.item)
    }

    /// Returns a reference to the item at `index`
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        self.node(index)
            .map(|node| &node.item)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the item at `index`
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        let len = self.len;
        self.node_mut(index)
            .map(|node| &mut node.item)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Returns the priority of the element at `index`
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn priority(&self, index: usize) -> Result<Priority, ListError> {
        self.check_index(index)?;
        self.node(index)
            .map(|node| node.priority)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replaces the item at `index`, returning the previous item
    ///
    /// The priority of the slot is left unchanged.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    /// Inserts `item` at position `index` without regard to priority
    ///
    /// The new node carries priority `0`. Valid positions are `0..=len`;
    /// `index == len` appends at the tail.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] if `index > len`.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len {
            debug!(index, len = self.len, "insert position out of range");
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.splice(index, Priority::default(), item);
        Ok(())
    }

    /// Inserts `item` in priority order
    ///
    /// The new node is placed immediately before the first node whose
    /// priority is strictly greater than `priority`, or at the tail if no
    /// such node exists. Existing nodes with an equal priority stay ahead
    /// of the new one.
    pub fn insert_with_priority(&mut self, priority: Priority, item: T) {
        let position = self
            .iter_with_priority()
            .take_while(|&(existing, _)| existing <= priority)
            .count();
        self.splice(position, priority, item);
    }

    /// Removes and returns the item at `index`
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        Ok(self.unlink(index).item)
    }

    /// Moves the element at `index` to the head
    ///
    /// The relative order of every other element is preserved. Moving the
    /// head is a no-op.
    ///
    /// # Errors
    /// Returns [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn move_to_front(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(());
        }
        let node = self.unlink(index);
        self.push_node(node);
        trace!(index, "moved node to front");
        Ok(())
    }

    /// Reverses the chain in place
    ///
    /// Runs in a single forward pass. Reversing an empty list does nothing.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        trace!(len = self.len, "reversed list");
    }

    /// Removes every element
    pub fn clear(&mut self) {
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the items from head to tail
    ///
    /// Every call starts a fresh traversal. The iterator borrows the list,
    /// so the list cannot be mutated while it is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to the items
    ///
    /// Priorities cannot be changed through this iterator.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over `(priority, item)` pairs from head to tail
    pub fn iter_with_priority(&self) -> PriorityIter<'_, T> {
        PriorityIter { inner: self.iter() }
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            debug!(index, len = self.len, "index out of range");
            Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    /// Returns the link that owns position `index`
    ///
    /// Requires `index <= len`.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.len);
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("chain shorter than its recorded length"),
            }
        }
        link
    }

    /// Creates a node and links it in at `position`
    fn splice(&mut self, position: usize, priority: Priority, item: T) {
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node {
            item,
            priority,
            next,
        }));
        self.len += 1;
        trace!(position, priority, len = self.len, "inserted node");
    }

    /// Detaches the node at `index` and returns it
    ///
    /// Requires `index < len`.
    fn unlink(&mut self, index: usize) -> Box<Node<T>> {
        let link = self.link_at(index);
        let Some(mut node) = link.take() else {
            unreachable!("no node at an in-range index");
        };
        *link = node.next.take();
        self.len -= 1;
        trace!(index, len = self.len, "removed node");
        node
    }

    fn push_node(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    fn pop_node(&mut self) -> Result<Box<Node<T>>, ListError> {
        let Some(mut node) = self.head.take() else {
            debug!("head requested from an empty list");
            return Err(ListError::EmptyStructure);
        };
        self.head = node.next.take();
        self.len -= 1;
        trace!(priority = node.priority, len = self.len, "removed head");
        Ok(node)
    }
}

impl<T> Heap<T, Priority> for PriorityList<T> {
    fn new() -> Self {
        PriorityList::new()
    }

    fn is_empty(&self) -> bool {
        PriorityList::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityList::len(self)
    }

    fn push(&mut self, priority: Priority, item: T) {
        self.insert_with_priority(priority, item);
    }

    fn peek(&self) -> Option<(&Priority, &T)> {
        self.head
            .as_deref()
            .map(|node| (&node.priority, &node.item))
    }

    fn pop(&mut self) -> Option<(Priority, T)> {
        self.pop_node().ok().map(|node| (node.priority, node.item))
    }
}

impl<T> Default for PriorityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PriorityList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for PriorityList<T> {
    fn clone(&self) -> Self {
        let entries: Vec<(Priority, &T)> = self.iter_with_priority().collect();
        let mut list = PriorityList::new();
        for (priority, item) in entries.into_iter().rev() {
            list.push_node(Box::new(Node {
                item: item.clone(),
                priority,
                next: None,
            }));
        }
        list
    }
}

impl<T: PartialEq> PartialEq for PriorityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter_with_priority().eq(other.iter_with_priority())
    }
}

impl<T: Eq> Eq for PriorityList<T> {}

impl<T> FromIterator<(Priority, T)> for PriorityList<T> {
    fn from_iter<I: IntoIterator<Item = (Priority, T)>>(iter: I) -> Self {
        let mut list = PriorityList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<(Priority, T)> for PriorityList<T> {
    fn extend<I: IntoIterator<Item = (Priority, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.insert_with_priority(priority, item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_with_priority()).finish()
    }
}

/// Diagnostic dump, one entry per node from head to tail
///
/// ```text
/// PriorityList: {
///     node 0:
///     Node { next: 1, item: 5, priority: 1 }
///     node 1:
///     Node { next: null, item: 6, priority: 2 }
/// }
/// ```
///
/// Entries are indented with a tab.
impl<T: fmt::Display> fmt::Display for PriorityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PriorityList: {{")?;
        let mut node = self.head.as_deref();
        let mut index = 0usize;
        while let Some(current) = node {
            writeln!(f, "\tnode {index}:")?;
            write!(f, "\tNode {{ next: ")?;
            match current.next {
                Some(_) => write!(f, "{}", index + 1)?,
                None => write!(f, "null")?,
            }
            writeln!(f, ", item: {}, priority: {} }}", current.item, current.priority)?;
            node = current.next.as_deref();
            index += 1;
        }
        write!(f, "}}")
    }
}

/// Borrowing iterator over the items of a [`PriorityList`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator over the items of a [`PriorityList`]
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterator over `(priority, item)` pairs of a [`PriorityList`]
pub struct PriorityIter<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Iterator for PriorityIter<'a, T> {
    type Item = (Priority, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.inner.next?;
        self.inner.next = node.next.as_deref();
        self.inner.remaining -= 1;
        Some((node.priority, &node.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for PriorityIter<'_, T> {}

impl<T> FusedIterator for PriorityIter<'_, T> {}

/// Owning iterator that drains a [`PriorityList`] from the head
pub struct IntoIter<T> {
    list: PriorityList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for PriorityList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PriorityList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PriorityList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
