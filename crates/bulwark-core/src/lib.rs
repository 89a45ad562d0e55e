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

//! # Bulwark Core
//!
//! Foundational traits and value types for the Bulwark validated-array
//! crates. Everything that decides *what* an element may be, and *which*
//! operations an element type supports, lives here so that container crates
//! only have to deal with storage and access paths.
//!
//! ## Modules
//!
//! - `error`: `ArrayError`, the single error type shared by every access path
//!   (size, bounds, value range, operand length and capability failures).
//! - `math`: `ClosedInterval<T>`, a validated closed interval `[min, max]`
//!   used as the value range of constrained containers.
//! - `num`: the `Numeric` capability (comparison plus promotion to `f64`) and
//!   the `Element` / `ElementClass` traits that select numeric or non-numeric
//!   behavior at compile time.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod math;
pub mod num;
