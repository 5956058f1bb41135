//! Error types for heap and template operations

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `remove` was called on a heap with no elements
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Error type for [`TemplateEngine`](crate::template::TemplateEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An open or close delimiter is empty or contains a backslash
    InvalidDelimiters,
    /// A key does not match `^\w+$`
    InvalidKey(String),
    /// The input references a key that was never added
    UnknownKey(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidDelimiters => {
                write!(f, "open or close string is not valid")
            }
            TemplateError::InvalidKey(key) => {
                write!(f, "key {:?} must match ^\\w+$", key)
            }
            TemplateError::UnknownKey(key) => {
                write!(f, "template engine does not contain key: {}", key)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
