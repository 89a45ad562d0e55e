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

//! Borrow-scoped element handles.
//!
//! `ElementProxy` stands for one pending access to `(array, index)`. It is
//! obtained from `CheckedArray::element`, which has already validated the
//! index, and is consumed either by `set` (validated write) or `value`
//! (plain read). The handle mutably borrows the array, so it cannot outlive
//! it, cannot coexist with another access, and cannot observe a resize.

use crate::{array::CheckedArray, policy::ValuePolicy};
use bulwark_core::{error::ArrayError, num::element::Element};

/// A single-use handle to one element of a `CheckedArray`.
#[derive(Debug)]
pub struct ElementProxy<'a, T, P> {
    array: &'a mut CheckedArray<T, P>,
    index: usize,
}

impl<'a, T, P> ElementProxy<'a, T, P>
where
    T: Element,
    P: ValuePolicy<T>,
{
    #[inline]
    pub(crate) fn new(array: &'a mut CheckedArray<T, P>, index: usize) -> Self {
        debug_assert!(index < array.len());
        Self { array, index }
    }

    /// Returns the index this handle is bound to.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the current value without re-validating it.
    #[inline]
    pub fn get(&self) -> &T {
        self.array.raw_get(self.index)
    }

    /// Consumes the handle and returns a copy of the current value.
    #[inline]
    pub fn value(self) -> T {
        self.get().clone()
    }

    /// Consumes the handle and writes `value`, applying the same value check
    /// as `CheckedArray::set`. On error the element is unchanged.
    #[inline]
    pub fn set(self, value: T) -> Result<(), ArrayError> {
        self.array.commit(self.index, value)
    }
}
