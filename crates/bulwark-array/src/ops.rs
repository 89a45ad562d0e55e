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

//! # Type-Conditional Operations
//!
//! Operations whose behavior depends on whether the element type is numeric.
//! The branch is chosen through `Element::Class` when the call is type
//! checked:
//!
//! | operation            | numeric elements                    | non-numeric elements        |
//! |----------------------|-------------------------------------|-----------------------------|
//! | `checked_set`        | index check, then the array policy  | index check                 |
//! | `range_checked_set`  | value must lie in `[min, max]`      | bounds ignored              |
//! | `euclidean_distance` | `sqrt(sum((a[i] - b[i])^2))`        | `UnsupportedOperation`      |
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_array::{array::Array, ops::{euclidean_distance, range_checked_set}};
//!
//! let mut ints = Array::<i32>::new(3).unwrap();
//! range_checked_set(&mut ints, 0, 50, 0, 100).unwrap();
//! assert!(range_checked_set(&mut ints, 1, 150, 0, 100).is_err());
//!
//! let mut words = Array::<String>::new(3).unwrap();
//! range_checked_set(&mut words, 0, "Hello".into(), String::new(), String::new()).unwrap();
//! assert!(euclidean_distance(&words, &words).is_err());
//! ```

use crate::{array::CheckedArray, policy::ValuePolicy};
use bulwark_core::{
    error::ArrayError,
    num::element::{Element, ElementClass},
};

/// Writes `value` at `index` after checking the index.
///
/// This is the integration point for value validation: the array's own
/// policy runs after the index check, so range-constrained numeric arrays
/// reject out-of-range values here while unconstrained and non-numeric
/// arrays only validate the index.
#[inline]
pub fn checked_set<T, P>(
    array: &mut CheckedArray<T, P>,
    index: usize,
    value: T,
) -> Result<(), ArrayError>
where
    T: Element,
    P: ValuePolicy<T>,
{
    array.set(index, value)
}

/// Writes `value` at `index` if it lies within `[min, max]`.
///
/// For numeric elements an out-of-range value fails with `InvalidValue`
/// before the index is looked at. For non-numeric elements the bounds are
/// ignored and the call behaves like `checked_set`.
#[inline]
pub fn range_checked_set<T, P>(
    array: &mut CheckedArray<T, P>,
    index: usize,
    value: T,
    min: T,
    max: T,
) -> Result<(), ArrayError>
where
    T: Element,
    P: ValuePolicy<T>,
{
    <T::Class as ElementClass<T>>::check_range(&value, &min, &max)?;
    checked_set(array, index, value)
}

/// Computes the Euclidean distance between two arrays of the same length.
///
/// Numeric elements are promoted to `f64` before subtracting. Arrays of
/// different lengths fail with `SizeMismatch`. Non-numeric element types
/// fail with `UnsupportedOperation` for any input.
///
/// # Examples
///
/// ```rust
/// # use bulwark_array::{array::Array, ops::euclidean_distance};
/// # use bulwark_array::policy::Unbounded;
///
/// let a = Array::try_from_slice(&[1, 2, 3], Unbounded).unwrap();
/// let b = Array::<i32>::new(3).unwrap();
/// let d = euclidean_distance(&a, &b).unwrap();
/// assert!((d - 14f64.sqrt()).abs() < 1e-12);
///
/// let c = Array::<i32>::new(4).unwrap();
/// assert!(euclidean_distance(&a, &c).is_err());
/// ```
#[inline]
pub fn euclidean_distance<T, P, Q>(
    a: &CheckedArray<T, P>,
    b: &CheckedArray<T, Q>,
) -> Result<f64, ArrayError>
where
    T: Element,
{
    <T::Class as ElementClass<T>>::euclidean_distance(a.as_slice(), b.as_slice())
}

impl<T, P> CheckedArray<T, P>
where
    T: Element,
    P: ValuePolicy<T>,
{
    /// Method form of `range_checked_set`.
    #[inline]
    pub fn range_checked_set(
        &mut self,
        index: usize,
        value: T,
        min: T,
        max: T,
    ) -> Result<(), ArrayError> {
        range_checked_set(self, index, value, min, max)
    }

    /// Method form of `euclidean_distance`.
    #[inline]
    pub fn euclidean_distance<Q>(&self, other: &CheckedArray<T, Q>) -> Result<f64, ArrayError> {
        euclidean_distance(self, other)
    }
}
