//! Binary heap with minimum-first and maximum-first ordering modes
//!
//! This crate provides a single array-backed binary heap, [`Heap`], whose
//! root is either the smallest or the largest element depending on the
//! [`OrderingMode`] fixed at construction. Draining the heap is a heap sort:
//! ascending for [`OrderingMode::Min`], descending for [`OrderingMode::Max`].
//!
//! Around the heap sit two small utilities used by the `batch-heap` binary:
//!
//! - [`driver`]: splits a token stream into typed batches and sorts each one
//!   through a heap
//! - [`template`]: `${key}` substitution used to format output lines
//!
//! # Example
//!
//! ```rust
//! use batch_heap::{Heap, OrderingMode};
//!
//! let mut heap = Heap::new(OrderingMode::Max);
//! heap.extend([1, 2, 2, 4, 5]);
//!
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 4, 2, 2, 1]);
//! ```

pub mod binary;
pub mod driver;
pub mod error;
pub mod index;
pub mod mode;
pub mod template;

pub use binary::Heap;
pub use error::{HeapError, TemplateError};
pub use mode::{HeapOrdering, OrderingMode};
