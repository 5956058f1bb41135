//! Index arithmetic for a 0-based implicit binary tree
//!
//! None of these check bounds. Callers validate indices against the
//! backing storage before dereferencing.

/// Parent of a non-root position
///
/// Only meaningful for `i > 0`.
#[inline]
pub const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub const fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub const fn right_child(i: usize) -> usize {
    2 * i + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_of_root() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
    }

    #[test]
    fn test_parent_inverts_children() {
        for i in 0..1000 {
            assert_eq!(parent(left_child(i)), i);
            assert_eq!(parent(right_child(i)), i);
        }
    }

    #[test]
    fn test_small_tree() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(6), 2);
        assert_eq!(left_child(2), 5);
        assert_eq!(right_child(2), 6);
    }
}
