//! Binary heap with a configurable ordering mode
//!
//! A classic array-backed binary heap. The root holds the minimum or the
//! maximum element depending on the [`OrderingMode`] chosen at construction.
//!
//! # Time Complexity
//!
//! | Operation | Complexity                 |
//! |-----------|----------------------------|
//! | `insert`  | O(log n) amortized         |
//! | `remove`  | O(log n)                   |
//! | `peek`    | O(1)                       |
//! | `size`    | O(1)                       |
//!
//! # Thread safety
//!
//! `Heap` is not thread-safe. It does no internal locking; sharing one
//! instance between threads needs external synchronization.
//!
//! # Example
//!
//! ```rust
//! use batch_heap::{Heap, HeapError, OrderingMode};
//!
//! let mut heap = Heap::new(OrderingMode::Min);
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.remove(), Ok(1));
//! assert_eq!(heap.remove(), Ok(2));
//! assert_eq!(heap.remove(), Ok(3));
//! assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
//! ```

use crate::error::HeapError;
use crate::index::{left_child, parent, right_child};
use crate::mode::OrderingMode;

/// A binary heap ordered by an [`OrderingMode`]
///
/// Elements with equal keys come out in an unspecified relative order.
#[derive(Debug, Clone)]
pub struct Heap<T: Ord> {
    /// Heap-ordered backing storage
    data: Vec<T>,
    mode: OrderingMode,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap with the given ordering mode
    pub fn new(mode: OrderingMode) -> Self {
        Self {
            data: Vec::new(),
            mode,
        }
    }

    /// Creates an empty heap able to hold `capacity` elements without
    /// reallocating
    pub fn with_capacity(mode: OrderingMode, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            mode,
        }
    }

    /// Creates an empty minimum-first heap
    pub fn min() -> Self {
        Self::new(OrderingMode::Min)
    }

    /// Creates an empty maximum-first heap
    pub fn max() -> Self {
        Self::new(OrderingMode::Max)
    }

    /// Returns the ordering mode fixed at construction
    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the root element without removing it
    ///
    /// This is the minimum for a MIN heap and the maximum for a MAX heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts a value and moves it up until the heap property holds
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap has no elements.
    /// The heap is left untouched in that case.
    pub fn remove(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }

        let last_idx = self.data.len() - 1;
        self.swap(0, last_idx);
        let root = self.data.pop().ok_or(HeapError::EmptyContainer)?;
        self.sift_down(0);

        Ok(root)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The backing storage in heap order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator that removes elements root-first until the heap
    /// is empty
    ///
    /// Elements not consumed by the iterator stay in the heap.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T> {
        DrainOrdered { heap: self }
    }

    /// Consumes the heap, returning its elements in removal order
    ///
    /// Ascending for a MIN heap, descending for a MAX heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        sorted.extend(self.drain_ordered());
        sorted
    }

    /// Move element at index up while it belongs above its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.mode.follows(&self.data[up], &self.data[index]) {
                self.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while it belongs below one of its children
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.down_heap_target(index) {
            self.swap(index, child);
            index = child;
        }
    }

    /// Picks the child to swap `index` with, if any
    fn down_heap_target(&self, index: usize) -> Option<usize> {
        let len = self.data.len();
        let left = left_child(index);
        let right = right_child(index);

        if left >= len {
            return None;
        }

        let value = &self.data[index];
        let left_value = &self.data[left];

        if right >= len {
            return self.mode.follows(value, left_value).then_some(left);
        }

        let right_value = &self.data[right];
        if self.mode.precedes(left_value, right_value) && self.mode.follows(value, left_value) {
            return Some(left);
        }
        if self.mode.follows(value, right_value) {
            return Some(right);
        }
        None
    }

    fn swap(&mut self, one: usize, two: usize) {
        let len = self.data.len();
        assert!(
            one < len && two < len,
            "invalid indexes {} {} in size {}",
            one,
            two,
            len
        );
        self.data.swap(one, two);
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::max()
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

/// Iterator returned by [`Heap::drain_ordered`]
#[derive(Debug)]
pub struct DrainOrdered<'a, T: Ord> {
    heap: &'a mut Heap<T>,
}

impl<T: Ord> Iterator for DrainOrdered<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for DrainOrdered<'_, T> {}
