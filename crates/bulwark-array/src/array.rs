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

//! # Validated Fixed-Length Arrays
//!
//! `CheckedArray<T, P>` holds exactly `len` elements and funnels every write
//! through two checks: the shared index check and the value policy `P`.
//!
//! - `Array<T>` (`P = Unbounded`) is the generic container: only indices are
//!   validated.
//! - `RangedArray` (`i32` elements, `P = ClosedInterval<i32>`) additionally
//!   rejects values outside a closed interval, `[-100, 100]` by default.
//!
//! Duplicating into a constrained array via `assign_from` is all-or-nothing:
//! every source element must pass the destination policy before anything
//! is written.

use crate::{
    bounds::check_index,
    buffer::{GrowableBuffer, write_list},
    policy::{Unbounded, ValuePolicy},
    proxy::ElementProxy,
};
use bulwark_core::{error::ArrayError, math::interval::ClosedInterval, num::element::Element};

/// A fixed-length array whose writes are bounds- and value-checked.
#[derive(Debug, Clone)]
pub struct CheckedArray<T, P = Unbounded> {
    buffer: GrowableBuffer<T>,
    policy: P,
}

/// A generic array validating indices only.
pub type Array<T> = CheckedArray<T, Unbounded>;

/// An `i32` array whose values are confined to a closed interval.
pub type RangedArray = CheckedArray<i32, ClosedInterval<i32>>;

impl<T, P> CheckedArray<T, P>
where
    T: Element,
    P: ValuePolicy<T>,
{
    /// Creates an array of `len` default values governed by the default policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::array::{Array, RangedArray};
    ///
    /// let arr = Array::<f64>::new(3).unwrap();
    /// assert_eq!(arr.as_slice(), &[0.0, 0.0, 0.0]);
    ///
    /// let ranged = RangedArray::new(2).unwrap();
    /// assert_eq!(ranged.policy().max(), 100);
    /// ```
    #[inline]
    pub fn new(len: usize) -> Result<Self, ArrayError>
    where
        P: Default,
    {
        Self::with_policy(len, P::default())
    }

    /// Creates an array of `len` default values governed by `policy`.
    ///
    /// Fails with `InvalidSize` when `len` is zero and with `InvalidValue`
    /// when the policy rejects `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::array::RangedArray;
    /// # use bulwark_core::math::interval::ClosedInterval;
    ///
    /// assert!(RangedArray::with_policy(3, ClosedInterval::new(-5, 5)).is_ok());
    /// assert!(RangedArray::with_policy(3, ClosedInterval::new(1, 5)).is_err());
    /// assert!(RangedArray::with_policy(0, ClosedInterval::new(-5, 5)).is_err());
    /// ```
    pub fn with_policy(len: usize, policy: P) -> Result<Self, ArrayError> {
        let mut buffer = GrowableBuffer::new(len)?;
        let default = T::default();
        policy.check(&default)?;
        buffer.try_extend(std::iter::repeat_n(default, len))?;
        Ok(Self { buffer, policy })
    }

    /// Builds an array holding a copy of `values`.
    ///
    /// Every value is checked against `policy` before the array is built.
    pub fn try_from_slice(values: &[T], policy: P) -> Result<Self, ArrayError> {
        if values.is_empty() {
            return Err(ArrayError::InvalidSize { requested: 0 });
        }
        policy.check_all(values)?;
        let mut buffer = GrowableBuffer::new(values.len())?;
        buffer.try_extend(values.iter().cloned())?;
        Ok(Self { buffer, policy })
    }

    /// Replaces the element at `index` after checking the index and the value.
    ///
    /// On error the element is left unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        check_index(index, self.len())?;
        self.commit(index, value)
    }

    /// Returns a handle to the element at `index`.
    ///
    /// The index is checked here; the value is checked when the handle is
    /// assigned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::array::RangedArray;
    ///
    /// let mut arr = RangedArray::new(3).unwrap();
    /// arr.element(1).unwrap().set(42).unwrap();
    /// assert_eq!(*arr.element(1).unwrap().get(), 42);
    /// assert!(arr.element(1).unwrap().set(200).is_err());
    /// assert!(arr.element(3).is_err());
    /// ```
    #[inline]
    pub fn element(&mut self, index: usize) -> Result<ElementProxy<'_, T, P>, ArrayError> {
        check_index(index, self.len())?;
        Ok(ElementProxy::new(self, index))
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) -> Result<(), ArrayError> {
        self.policy.check(&value)?;
        self.buffer.as_mut_slice().fill(value);
        Ok(())
    }

    /// Replaces the contents with a deep copy of `source`.
    ///
    /// All source elements are validated against this array's policy first;
    /// if any fails, the error is returned and `self` is left untouched. The
    /// length of `self` becomes the length of `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_array::array::{Array, RangedArray};
    ///
    /// let mut bad = Array::<i32>::new(3).unwrap();
    /// bad.set(1, 101).unwrap();
    ///
    /// let mut dest = RangedArray::new(2).unwrap();
    /// dest.set(0, 7).unwrap();
    /// assert!(dest.assign_from(&bad).is_err());
    /// assert_eq!(dest.as_slice(), &[7, 0]);
    /// ```
    pub fn assign_from<Q>(&mut self, source: &CheckedArray<T, Q>) -> Result<(), ArrayError> {
        if let Err(e) = self.policy.check_all(source.as_slice()) {
            tracing::debug!(error = %e, len = source.len(), "rejected duplication");
            return Err(e);
        }
        self.buffer = source.buffer.duplicate();
        Ok(())
    }

    /// Validates `value` and writes it at an already checked `index`.
    ///
    /// Shared by the named setter and `ElementProxy::set`.
    #[inline]
    pub(crate) fn commit(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.policy.check(&value)?;
        self.buffer.raw_set(index, value);
        Ok(())
    }
}

impl<T, P> CheckedArray<T, P> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always `false`; arrays hold at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the value policy.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns a reference to the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.buffer.get(index)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    #[inline]
    pub(crate) fn raw_get(&self, index: usize) -> &T {
        self.buffer.raw_get(index)
    }
}

impl<T, P> AsRef<[T]> for CheckedArray<T, P> {
    fn as_ref(&self) -> &[T] {
        self.buffer.as_slice()
    }
}

impl<'a, T, P> IntoIterator for &'a CheckedArray<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

impl<T, P> std::fmt::Display for CheckedArray<T, P>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_list(f, self.buffer.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::error::IndexRange;

    #[test]
    fn test_new_fills_with_defaults() {
        let arr = Array::<String>::new(2).unwrap();
        assert_eq!(arr.len(), 2);
        assert!(!arr.is_empty());
        assert_eq!(arr.as_slice(), &[String::new(), String::new()]);
    }

    #[test]
    fn test_zero_length_is_invalid() {
        assert_eq!(
            RangedArray::new(0).unwrap_err(),
            ArrayError::InvalidSize { requested: 0 }
        );
        assert!(Array::<u8>::new(0).is_err());
        assert!(Array::<u8>::try_from_slice(&[], Unbounded).is_err());
    }

    #[test]
    fn test_default_must_satisfy_policy() {
        let err = RangedArray::with_policy(4, ClosedInterval::new(10, 20)).unwrap_err();
        assert_eq!(err.to_string(), "value 0 must be in range [10, 20]");
    }

    #[test]
    fn test_named_setter_boundaries() {
        let mut arr = RangedArray::new(5).unwrap();
        arr.set(0, 10).unwrap();
        arr.set(1, -50).unwrap();
        arr.set(2, 100).unwrap();
        arr.set(3, -100).unwrap();
        assert_eq!(arr.get(2), Ok(&100));

        assert_eq!(
            arr.set(0, 150).unwrap_err(),
            ArrayError::invalid_value(&150, &-100, &100)
        );
        assert_eq!(arr.get(0), Ok(&10));
    }

    #[test]
    fn test_out_of_range_index_reports_current_range() {
        let mut arr = RangedArray::new(5).unwrap();
        let expected = ArrayError::IndexOutOfRange {
            index: 10,
            range: IndexRange::new(5),
        };
        assert_eq!(arr.get(10).unwrap_err(), expected);
        assert_eq!(arr.set(10, 1).unwrap_err(), expected);
        assert_eq!(arr.element(10).unwrap_err(), expected);
        assert_eq!(expected.to_string(), "index 10 is out of range [0, 4]");
    }

    #[test]
    fn test_index_error_takes_precedence_over_value_error() {
        let mut arr = RangedArray::new(2).unwrap();
        assert!(matches!(
            arr.set(5, 1000),
            Err(ArrayError::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_fill() {
        let mut arr = RangedArray::new(3).unwrap();
        arr.fill(7).unwrap();
        assert_eq!(arr.as_slice(), &[7, 7, 7]);

        assert!(arr.fill(200).is_err());
        assert_eq!(arr.as_slice(), &[7, 7, 7]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut arr = RangedArray::new(3).unwrap();
        arr.set(0, 1).unwrap();
        let copy = arr.clone();
        arr.set(0, 2).unwrap();
        assert_eq!(copy.as_slice(), &[1, 0, 0]);
        assert_eq!(arr.as_slice(), &[2, 0, 0]);
    }

    #[test]
    fn test_assign_from_valid_source() {
        let source = Array::<i32>::try_from_slice(&[1, -2, 3, 4], Unbounded).unwrap();
        let mut dest = RangedArray::new(2).unwrap();
        dest.assign_from(&source).unwrap();
        assert_eq!(dest.as_slice(), &[1, -2, 3, 4]);
        assert_eq!(dest.len(), 4);
    }

    #[test]
    fn test_assign_from_is_all_or_nothing() {
        // The offending value sits in the middle; nothing before it is copied.
        let source = Array::<i32>::try_from_slice(&[50, 101, -50], Unbounded).unwrap();
        let mut dest = RangedArray::new(4).unwrap();
        dest.fill(9).unwrap();

        let err = dest.assign_from(&source).unwrap_err();
        assert_eq!(err, ArrayError::invalid_value(&101, &-100, &100));
        assert_eq!(dest.as_slice(), &[9, 9, 9, 9]);
    }

    #[test]
    fn test_assign_into_unbounded_always_succeeds() {
        let ranged = RangedArray::try_from_slice(&[1, 2], Default::default()).unwrap();
        let mut dest = Array::<i32>::new(1).unwrap();
        dest.assign_from(&ranged).unwrap();
        assert_eq!(dest.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_try_from_slice_validates() {
        let policy = ClosedInterval::reference();
        assert!(RangedArray::try_from_slice(&[0, 100, -100], policy).is_ok());
        assert!(RangedArray::try_from_slice(&[0, 101], policy).is_err());
    }

    #[test]
    fn test_display_and_iteration() {
        let arr = Array::try_from_slice(&["Hello", "World", "!"], Unbounded).unwrap();
        assert_eq!(arr.to_string(), "[Hello, World, !]");
        assert_eq!(arr.iter().count(), 3);
        assert_eq!((&arr).into_iter().next(), Some(&"Hello"));
    }
}
