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

//! # Bulwark Export
//!
//! Writes integer sequences to timestamped files in one of two layouts:
//!
//! - `PlainText` (`.txt`): one value per line.
//! - `Csv` (`.csv`): a single line of comma-separated values without a
//!   trailing separator.
//!
//! Files are named after the local wall-clock time down to the second,
//! e.g. `2025-01-31_17-04-09.csv`.
//!
//! ## Modules
//!
//! - `error`: `ExportError`, wrapping I/O failures with the affected path.
//! - `format`: The `SequenceFormat` trait and its two layouts.
//! - `sink`: `SequenceSink` (object-safe), the directory-backed
//!   `DirectorySink<F>`, `ExportConfig`, and `Exportable` for buffers.

pub mod error;
pub mod format;
pub mod sink;
