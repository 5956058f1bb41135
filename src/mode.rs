//! Ordering modes for [`Heap`](crate::binary::Heap)
//!
//! A heap is either minimum-first or maximum-first. The mode is fixed at
//! construction and decides how the natural order of `T` is interpreted
//! when restoring the heap property.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which extreme element sits at the root of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderingMode {
    /// The smallest element is at the root; draining yields ascending order
    Min,
    /// The largest element is at the root; draining yields descending order
    #[default]
    Max,
}

/// Outcome of comparing two elements under an [`OrderingMode`]
///
/// `Satisfied` means the first element belongs closer to the root than the
/// second one. `NotSatisfied` means the second one does. `Equal` never
/// triggers a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrdering {
    NotSatisfied,
    Equal,
    Satisfied,
}

impl OrderingMode {
    /// Compares `a` to `b` in natural order, inverting a non-equal result
    /// for [`OrderingMode::Min`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use batch_heap::{HeapOrdering, OrderingMode};
    ///
    /// assert_eq!(OrderingMode::Max.heap_compare(&5, &3), HeapOrdering::Satisfied);
    /// assert_eq!(OrderingMode::Min.heap_compare(&5, &3), HeapOrdering::NotSatisfied);
    /// assert_eq!(OrderingMode::Min.heap_compare(&4, &4), HeapOrdering::Equal);
    /// ```
    #[inline]
    pub fn heap_compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> HeapOrdering {
        let ord = match self {
            OrderingMode::Max => a.cmp(b),
            OrderingMode::Min => a.cmp(b).reverse(),
        };
        match ord {
            Ordering::Greater => HeapOrdering::Satisfied,
            Ordering::Equal => HeapOrdering::Equal,
            Ordering::Less => HeapOrdering::NotSatisfied,
        }
    }

    /// True when `a` strictly belongs above `b`
    #[inline]
    pub fn precedes<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        self.heap_compare(a, b) == HeapOrdering::Satisfied
    }

    /// True when `a` strictly belongs below `b`
    #[inline]
    pub fn follows<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        self.heap_compare(a, b) == HeapOrdering::NotSatisfied
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingMode::Min => write!(f, "min-heap"),
            OrderingMode::Max => write!(f, "max-heap"),
        }
    }
}

impl FromStr for OrderingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "min-heap" => Ok(OrderingMode::Min),
            "max" | "max-heap" => Ok(OrderingMode::Max),
            _ => Err(format!("Invalid ordering mode: {}", s)),
        }
    }
}
