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

//! # Growable Buffer
//!
//! `GrowableBuffer<T>` is an append-only sequence that manages its capacity
//! explicitly. When an append finds the buffer full, storage for twice the
//! capacity is reserved, the existing elements are moved over in order and
//! the old storage is released. Capacity never shrinks.
//!
//! ## Invariants
//!
//! - `0 <= len <= capacity` and `capacity > 0`.
//! - Capacity is always `initial * 2^k` for some `k >= 0`, and only grows when
//!   `len == capacity` before an append.
//! - Duplicates own their storage; no mutable state is shared with the source.

use crate::bounds::check_index;
use bulwark_core::error::ArrayError;

/// Initial capacity used by `GrowableBuffer::with_default_capacity`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A sequence of elements that doubles its capacity on overflow.
///
/// # Examples
///
/// ```rust
/// # use bulwark_array::buffer::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::new(2).unwrap();
/// buf.push(1).unwrap();
/// buf.push(2).unwrap();
/// assert_eq!(buf.capacity(), 2);
/// buf.push(3).unwrap();
/// assert_eq!(buf.capacity(), 4);
/// assert_eq!(buf.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct GrowableBuffer<T> {
    data: Vec<T>,
    capacity: usize,
}

/// Reserves storage for exactly `capacity` elements.
#[inline]
fn allocate<T>(capacity: usize) -> Result<Vec<T>, ArrayError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| ArrayError::CapacityOverflow { capacity })?;
    Ok(data)
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer able to hold `capacity` elements before growing.
    ///
    /// Returns `InvalidSize` if `capacity` is zero and `CapacityOverflow` if
    /// the storage cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::buffer::GrowableBuffer;
    ///
    /// let buf = GrowableBuffer::<i32>::new(4).unwrap();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 4);
    /// assert!(GrowableBuffer::<i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidSize { requested: capacity });
        }
        Ok(Self {
            data: allocate(capacity)?,
            capacity,
        })
    }

    /// Creates an empty buffer with an initial capacity of `DEFAULT_CAPACITY`.
    #[inline]
    pub fn with_default_capacity() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the buffer holds before it must grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// On error the buffer is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        debug_assert!(self.data.len() < self.capacity);
        self.data.push(value);
        Ok(())
    }

    /// Appends every item of `iter` in order, stopping at the first failure.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().try_for_each(|value| self.push(value))
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity =
            self.capacity
                .checked_mul(2)
                .ok_or(ArrayError::CapacityOverflow {
                    capacity: self.capacity,
                })?;

        let mut data = allocate(new_capacity)?;
        data.append(&mut self.data);
        // The old allocation is dropped here.
        self.data = data;

        tracing::debug!(
            len = self.data.len(),
            from = self.capacity,
            to = new_capacity,
            "grew buffer"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::buffer::GrowableBuffer;
    ///
    /// let mut buf = GrowableBuffer::with_default_capacity();
    /// buf.push("a").unwrap();
    /// assert_eq!(buf.get(0), Ok(&"a"));
    /// assert!(buf.get(1).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        check_index(index, self.len())?;
        Ok(self.raw_get(index))
    }

    /// Replaces the element at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        check_index(index, self.len())?;
        self.raw_set(index, value);
        Ok(())
    }

    /// Unchecked positional read; callers must have validated `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub(crate) fn raw_get(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Unchecked positional write; callers must have validated `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub(crate) fn raw_set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the stored elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the stored elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> GrowableBuffer<T>
where
    T: Clone,
{
    /// Returns a deep copy whose capacity equals the source length.
    ///
    /// An empty source yields a copy with capacity 1, keeping the capacity
    /// positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::buffer::GrowableBuffer;
    ///
    /// let mut buf = GrowableBuffer::with_default_capacity();
    /// buf.try_extend([1, 2, 3]).unwrap();
    /// let copy = buf.duplicate();
    /// assert_eq!(copy.as_slice(), buf.as_slice());
    /// assert_eq!(copy.capacity(), 3);
    /// ```
    pub fn duplicate(&self) -> Self {
        let capacity = self.data.len().max(1);
        let mut data = Vec::with_capacity(capacity);
        data.extend_from_slice(&self.data);
        Self { data, capacity }
    }
}

impl<T> Clone for GrowableBuffer<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> PartialEq for GrowableBuffer<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> AsRef<[T]> for GrowableBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Writes `[a, b, c]` for the given items.
pub(crate) fn write_list<'a, T, I>(f: &mut std::fmt::Formatter<'_>, items: I) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl<T> std::fmt::Display for GrowableBuffer<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_list(f, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            GrowableBuffer::<u8>::new(0).unwrap_err(),
            ArrayError::InvalidSize { requested: 0 }
        );
    }

    #[test]
    fn test_new_is_empty() {
        let buf = GrowableBuffer::<u8>::new(3).unwrap();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn test_default_capacity() {
        let buf = GrowableBuffer::<u8>::default();
        assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unreservable_capacity_is_an_error() {
        let err = GrowableBuffer::<u64>::new(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityOverflow {
                capacity: usize::MAX
            }
        );
    }

    #[test]
    fn test_growth_doubles_only_when_full() {
        let mut buf = GrowableBuffer::new(1).unwrap();
        let mut seen = Vec::new();
        for i in 0..9 {
            buf.push(i).unwrap();
            seen.push(buf.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(buf.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_reference_program_growth() {
        // Ten appends into the default capacity never reallocate.
        let mut buf = GrowableBuffer::with_default_capacity();
        for i in 1..=10 {
            buf.push(i * 2).unwrap();
        }
        assert_eq!(buf.capacity(), 10);
        buf.push(22).unwrap();
        assert_eq!(buf.capacity(), 20);
        assert_eq!(buf.len(), 11);
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut buf = GrowableBuffer::new(4).unwrap();
        buf.try_extend([10, 20, 30]).unwrap();

        assert_eq!(buf.get(2), Ok(&30));
        assert_eq!(
            buf.get(3).unwrap_err().to_string(),
            "index 3 is out of range [0, 2]"
        );

        buf.set(1, 21).unwrap();
        assert_eq!(buf.as_slice(), &[10, 21, 30]);
        assert!(buf.set(3, 0).is_err());
        assert_eq!(buf.as_slice(), &[10, 21, 30]);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = GrowableBuffer::new(8).unwrap();
        original
            .try_extend(["a".to_string(), "b".to_string()])
            .unwrap();

        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 2);

        copy.set(0, "z".to_string()).unwrap();
        copy.push("c".to_string()).unwrap();
        assert_eq!(original.as_slice(), &["a".to_string(), "b".to_string()]);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.capacity(), 4);
    }

    #[test]
    fn test_duplicate_of_empty_keeps_positive_capacity() {
        let buf = GrowableBuffer::<i32>::new(5).unwrap();
        let copy = buf.duplicate();
        assert!(copy.is_empty());
        assert_eq!(copy.capacity(), 1);
    }

    #[test]
    fn test_display() {
        let mut buf = GrowableBuffer::with_default_capacity();
        assert_eq!(buf.to_string(), "[]");
        buf.try_extend([1, -2, 3]).unwrap();
        assert_eq!(buf.to_string(), "[1, -2, 3]");
    }

    #[test]
    fn test_iteration() {
        let mut buf = GrowableBuffer::with_default_capacity();
        buf.try_extend(0..4).unwrap();
        let doubled: Vec<_> = buf.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![0, 2, 4, 6]);
        let sum: i32 = (&buf).into_iter().sum();
        assert_eq!(sum, 6);
    }

    proptest! {
        #[test]
        fn prop_growth_invariant(
            initial in 1usize..16,
            values in prop::collection::vec(any::<i32>(), 0..200),
        ) {
            let mut buf = GrowableBuffer::new(initial).unwrap();
            for (n, &v) in values.iter().enumerate() {
                let before = buf.capacity();
                let was_full = buf.len() == before;
                buf.push(v).unwrap();

                prop_assert_eq!(buf.len(), n + 1);
                prop_assert!(buf.capacity() >= buf.len());
                if was_full {
                    prop_assert_eq!(buf.capacity(), before * 2);
                } else {
                    prop_assert_eq!(buf.capacity(), before);
                }

                let ratio = buf.capacity() / initial;
                prop_assert_eq!(buf.capacity() % initial, 0);
                prop_assert!(ratio.is_power_of_two());
            }
            prop_assert_eq!(buf.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_out_of_range_reads_and_writes_fail(len in 1usize..32, offset in 0usize..64) {
            let mut buf = GrowableBuffer::new(len).unwrap();
            buf.try_extend(std::iter::repeat_n(0u8, len)).unwrap();
            let index = len + offset;

            let expected = ArrayError::index_out_of_range(index, len);
            prop_assert_eq!(buf.get(index).unwrap_err(), expected.clone());
            prop_assert_eq!(buf.set(index, 1).unwrap_err(), expected);
        }
    }
}
