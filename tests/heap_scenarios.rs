//! Scenario tests for both ordering modes
//!
//! These exercise the public API on the fixed sequences the heap is expected
//! to handle, including the size-1 and empty transitions the batch driver
//! relies on.

use batch_heap::index::parent;
use batch_heap::{Heap, HeapError, OrderingMode};
use ordered_float::OrderedFloat;

// Test helpers

fn assert_heap_property<T: Ord + std::fmt::Debug>(heap: &Heap<T>) {
    let data = heap.as_slice();
    for i in 1..data.len() {
        assert!(
            !heap.mode().follows(&data[parent(i)], &data[i]),
            "{} property violated at index {}: {:?}",
            heap.mode(),
            i,
            data
        );
    }
}

fn remove_all<T: Ord>(heap: &mut Heap<T>) -> Vec<T> {
    let mut out = Vec::new();
    while heap.size() > 0 {
        out.push(heap.remove().unwrap());
    }
    out
}

/// Test that an empty heap behaves correctly
fn test_empty_heap(mode: OrderingMode) {
    let mut heap: Heap<String> = Heap::new(mode);
    assert!(heap.is_empty());
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.size(), 0);
}

#[test]
fn test_empty_min() {
    test_empty_heap(OrderingMode::Min);
}

#[test]
fn test_empty_max() {
    test_empty_heap(OrderingMode::Max);
}

#[test]
fn test_max_heap_remove_sequence() {
    let mut heap = Heap::new(OrderingMode::Max);
    for v in [1, 2, 2, 4, 5] {
        heap.insert(v);
    }
    assert_eq!(remove_all(&mut heap), vec![5, 4, 2, 2, 1]);
}

#[test]
fn test_min_heap_remove_sequence() {
    let mut heap = Heap::new(OrderingMode::Min);
    for v in [2, 1, 2, 5, 4] {
        heap.insert(v);
    }
    assert_eq!(remove_all(&mut heap), vec![1, 2, 2, 4, 5]);
}

#[test]
fn test_empty_max_heap_default() {
    let mut heap: Heap<i32> = Heap::default();
    assert_eq!(heap.mode(), OrderingMode::Max);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
}

#[test]
fn test_two_element_transitions() {
    let mut heap = Heap::max();
    heap.insert(1);
    heap.insert(2);

    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.size(), 2);

    assert_eq!(heap.remove(), Ok(2));
    assert_eq!(heap.size(), 1);
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(heap.remove(), Ok(1));
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_single_element_min() {
    let mut heap = Heap::min();
    heap.insert(7);

    assert_eq!(heap.peek(), Some(&7));
    assert_eq!(heap.remove(), Ok(7));
    assert_eq!(heap.remove(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_reuse_after_empty_error() {
    let mut heap = Heap::min();
    assert!(heap.remove().is_err());

    heap.extend([3, 1, 2]);
    assert_heap_property(&heap);
    assert_eq!(remove_all(&mut heap), vec![1, 2, 3]);
}

#[test]
fn test_string_heaps() {
    let words = ["pear", "apple", "fig", "banana", "cherry", "apple"];

    let mut min = Heap::min();
    min.extend(words.iter().map(|w| w.to_string()));
    assert_eq!(
        min.into_sorted_vec(),
        vec!["apple", "apple", "banana", "cherry", "fig", "pear"]
    );

    let mut max = Heap::max();
    max.extend(words);
    assert_eq!(
        max.into_sorted_vec(),
        vec!["pear", "fig", "cherry", "banana", "apple", "apple"]
    );
}

#[test]
fn test_float_heaps() {
    let values = [2.5, -1.0, 0.0, 10.25, -7.5, 2.5].map(OrderedFloat);

    let mut heap = Heap::min();
    heap.extend(values);
    let sorted: Vec<f64> = heap.into_sorted_vec().into_iter().map(|v| v.0).collect();
    assert_eq!(sorted, vec![-7.5, -1.0, 0.0, 2.5, 2.5, 10.25]);
}

#[test]
fn test_all_equal_keys() {
    for mode in [OrderingMode::Min, OrderingMode::Max] {
        let mut heap = Heap::new(mode);
        for _ in 0..50 {
            heap.insert(4);
            assert_heap_property(&heap);
        }
        assert_eq!(remove_all(&mut heap), vec![4; 50]);
    }
}

#[test]
fn test_interleaved_insert_remove() {
    let mut heap = Heap::max();
    let mut expected_len = 0;

    for i in 0..200 {
        heap.insert(i * 7 % 31);
        heap.insert(i * 13 % 17);
        expected_len += 2;

        let top = *heap.peek().unwrap();
        assert_eq!(heap.remove(), Ok(top));
        expected_len -= 1;

        assert_heap_property(&heap);
        assert_eq!(heap.size(), expected_len);
    }

    let drained = remove_all(&mut heap);
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_tuple_keys() {
    let mut heap = Heap::min();
    heap.insert((2, "b"));
    heap.insert((1, "z"));
    heap.insert((2, "a"));
    heap.insert((0, "q"));

    assert_eq!(
        heap.into_sorted_vec(),
        vec![(0, "q"), (1, "z"), (2, "a"), (2, "b")]
    );
}

#[test]
fn test_massive_operations() {
    let mut heap = Heap::min();
    for i in (0..1000).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.size(), 1000);
    assert_heap_property(&heap);

    for i in 0..1000 {
        assert_eq!(heap.remove(), Ok(i));
    }
    assert!(heap.is_empty());
}
