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

use crate::{error::ArrayError, num::numeric::Numeric};

/// Lower bound of the reference value range.
pub const REFERENCE_MIN: i32 = -100;

/// Upper bound of the reference value range.
pub const REFERENCE_MAX: i32 = 100;

/// A closed interval `[min, max]` with both bounds inclusive.
///
/// # Invariants
///
/// `min <= max` always holds. For floating point types this also rules out
/// NaN bounds.
#[derive(Clone, Copy, PartialEq)]
pub struct ClosedInterval<T>
where
    T: Numeric,
{
    min: T,
    max: T,
}

impl<T> ClosedInterval<T>
where
    T: Numeric,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `min <= max` does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains(10));
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid interval: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `ClosedInterval` if the bounds are ordered.
    ///
    /// Returns `None` if `min <= max` does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(5, 5).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// assert!(ClosedInterval::try_new(f64::NAN, 1.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn max(&self) -> T {
        self.max
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-100, 100);
    /// assert!(iv.contains(-100));
    /// assert!(iv.contains(100));
    /// assert!(!iv.contains(101));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Checks `value` against the interval, producing an `InvalidValue`
    /// error that names the value and both bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bulwark_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(-100, 100);
    /// assert!(iv.check(0).is_ok());
    /// let err = iv.check(150).unwrap_err();
    /// assert_eq!(err.to_string(), "value 150 must be in range [-100, 100]");
    /// ```
    #[inline]
    pub fn check(&self, value: T) -> Result<(), ArrayError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ArrayError::invalid_value(&value, &self.min, &self.max))
        }
    }
}

impl ClosedInterval<i32> {
    /// The reference value range `[-100, 100]`.
    #[inline]
    pub const fn reference() -> Self {
        Self {
            min: REFERENCE_MIN,
            max: REFERENCE_MAX,
        }
    }
}

impl Default for ClosedInterval<i32> {
    #[inline]
    fn default() -> Self {
        Self::reference()
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: Numeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedInterval[{:?}, {:?}]", self.min, self.max)
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Numeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: Numeric,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.min)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.max)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: Numeric,
{
    /// # Panics
    ///
    /// Panics if the range is empty (`start > end`).
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self::new(min, max)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: Numeric,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.min..=iv.max
    }
}
