// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Errors raised by validated containers.
//!
//! Every failure is reported at the point of violation and carries enough
//! context (the offending index or value and the valid bounds) to produce a
//! useful message without access to the container that raised it.

/// The valid index range of a container at the time of a failed access.
///
/// Displays as `[0, len - 1]`, or `[]` when the container is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    len: usize,
}

impl IndexRange {
    /// Creates the index range of a container holding `len` elements.
    #[inline]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the number of valid indices.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no index is valid.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the last valid index, if any.
    #[inline]
    pub const fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Returns `true` if `index` lies inside the range.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.len
    }
}

impl std::fmt::Display for IndexRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last() {
            Some(last) => write!(f, "[0, {}]", last),
            None => write!(f, "[]"),
        }
    }
}

/// The error type shared by all container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A container was requested with a non-positive size or capacity.
    #[error("size must be a positive number, got {requested}")]
    InvalidSize {
        /// The rejected size.
        requested: usize,
    },
    /// An index fell outside `[0, len - 1]`.
    #[error("index {index} is out of range {range}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The valid range at the time of the call.
        range: IndexRange,
    },
    /// A value fell outside the configured closed interval.
    #[error("value {value} must be in range [{min}, {max}]")]
    InvalidValue {
        /// The rejected value, rendered for display.
        value: String,
        /// The inclusive lower bound.
        min: String,
        /// The inclusive upper bound.
        max: String,
    },
    /// Two operands were required to have equal length.
    #[error("containers must have the same length: {left} != {right}")]
    SizeMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A numeric-only operation was invoked on a non-numeric element type.
    #[error("operation `{operation}` is not supported for element type `{element}`")]
    UnsupportedOperation {
        /// The name of the operation.
        operation: &'static str,
        /// The element type the operation was invoked on.
        element: &'static str,
    },
    /// Storage for the requested capacity could not be reserved, either
    /// because doubling overflowed `usize` or the allocation was refused.
    #[error("cannot reserve storage beyond a capacity of {capacity}")]
    CapacityOverflow {
        /// The capacity at which reservation failed.
        capacity: usize,
    },
}

impl ArrayError {
    /// Builds an `IndexOutOfRange` error for a container holding `len` elements.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            range: IndexRange::new(len),
        }
    }

    /// Builds an `InvalidValue` error from displayable value and bounds.
    #[inline]
    pub fn invalid_value<T>(value: &T, min: &T, max: &T) -> Self
    where
        T: std::fmt::Display + ?Sized,
    {
        Self::InvalidValue {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Builds an `UnsupportedOperation` error naming the element type `T`.
    #[inline]
    pub fn unsupported<T: ?Sized>(operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation,
            element: std::any::type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_range_display() {
        assert_eq!(IndexRange::new(5).to_string(), "[0, 4]");
        assert_eq!(IndexRange::new(1).to_string(), "[0, 0]");
        assert_eq!(IndexRange::new(0).to_string(), "[]");
    }

    #[test]
    fn test_index_range_contains() {
        let range = IndexRange::new(3);
        assert!(range.contains(0));
        assert!(range.contains(2));
        assert!(!range.contains(3));
        assert_eq!(range.last(), Some(2));
        assert!(IndexRange::new(0).is_empty());
        assert_eq!(IndexRange::new(0).last(), None);
    }

    #[test]
    fn test_messages_name_offending_values() {
        let err = ArrayError::index_out_of_range(10, 5);
        assert_eq!(err.to_string(), "index 10 is out of range [0, 4]");

        let err = ArrayError::invalid_value(&150, &-100, &100);
        assert_eq!(err.to_string(), "value 150 must be in range [-100, 100]");

        let err = ArrayError::SizeMismatch { left: 3, right: 4 };
        assert_eq!(
            err.to_string(),
            "containers must have the same length: 3 != 4"
        );

        let err = ArrayError::InvalidSize { requested: 0 };
        assert_eq!(err.to_string(), "size must be a positive number, got 0");
    }

    #[test]
    fn test_unsupported_names_type() {
        let err = ArrayError::unsupported::<String>("euclidean_distance");
        match &err {
            ArrayError::UnsupportedOperation { operation, element } => {
                assert_eq!(*operation, "euclidean_distance");
                assert!(element.contains("String"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("euclidean_distance"));
    }
}
