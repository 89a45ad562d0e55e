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

//! # Bulwark Arrays
//!
//! Growable and fixed-size arrays whose every access path is validated.
//!
//! ## Modules
//!
//! - `buffer`: `GrowableBuffer<T>`, an append-only sequence with an explicit
//!   capacity that doubles on overflow and deep-copies on duplication.
//! - `bounds`: The index check shared by every read and write.
//! - `policy`: `ValuePolicy<T>` with `Unbounded` and `ClosedInterval<T>`
//!   implementations, deciding which values a container accepts.
//! - `array`: `CheckedArray<T, P>`, a fixed-length array that funnels writes
//!   through the bounds check and its value policy, plus the `Array<T>` and
//!   `RangedArray` aliases.
//! - `proxy`: `ElementProxy`, a borrow-scoped handle for one element that
//!   validates on assignment exactly like the named setter.
//! - `ops`: Type-conditional operations (`checked_set`, `range_checked_set`,
//!   `euclidean_distance`) dispatched on `Element::Class`.
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_array::array::RangedArray;
//!
//! let mut arr = RangedArray::new(5).unwrap();
//! arr.set(0, 10).unwrap();
//! arr.element(3).unwrap().set(-100).unwrap();
//! assert!(arr.set(1, 150).is_err());
//! assert!(arr.element(1).unwrap().set(-101).is_err());
//! assert_eq!(arr.to_string(), "[10, 0, 0, -100, 0]");
//! ```

pub mod array;
pub mod bounds;
pub mod buffer;
pub mod ops;
pub mod policy;
pub mod proxy;
