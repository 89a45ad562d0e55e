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

//! Index validation shared by all access paths.
//!
//! Reads, writes, named accessors and proxies all call `check_index` before
//! touching storage, so there is exactly one definition of a valid index.

use bulwark_core::error::ArrayError;

/// Checks that `index` lies within `[0, len - 1]`.
///
/// # Examples
///
/// ```rust
/// # use bulwark_array::bounds::check_index;
/// assert!(check_index(2, 3).is_ok());
/// let err = check_index(3, 3).unwrap_err();
/// assert_eq!(err.to_string(), "index 3 is out of range [0, 2]");
/// ```
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), ArrayError> {
    if index < len {
        Ok(())
    } else {
        Err(ArrayError::index_out_of_range(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::error::IndexRange;

    #[test]
    fn test_accepts_every_index_below_len() {
        for i in 0..5 {
            assert!(check_index(i, 5).is_ok());
        }
    }

    #[test]
    fn test_rejects_len_and_beyond() {
        assert_eq!(
            check_index(5, 5),
            Err(ArrayError::IndexOutOfRange {
                index: 5,
                range: IndexRange::new(5)
            })
        );
        assert!(check_index(usize::MAX, 5).is_err());
    }

    #[test]
    fn test_empty_rejects_everything() {
        let err = check_index(0, 0).unwrap_err();
        assert_eq!(err.to_string(), "index 0 is out of range []");
    }
}
