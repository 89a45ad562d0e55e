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

//! Textual layouts for integer sequences.

use std::{fmt::Display, io::Write};

/// A file layout for a sequence of values.
pub trait SequenceFormat {
    /// File extension, without the leading dot.
    const EXTENSION: &'static str;

    /// Human-readable name used in log output.
    const NAME: &'static str;

    /// Writes `values` to `out`.
    fn write<W, T>(out: &mut W, values: &[T]) -> std::io::Result<()>
    where
        W: Write,
        T: Display;
}

/// One value per line, every line terminated by `\n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainText;

/// All values on one line, separated by `,`, with no trailing separator
/// and no line terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Csv;

impl SequenceFormat for PlainText {
    const EXTENSION: &'static str = "txt";
    const NAME: &'static str = "TXT";

    fn write<W, T>(out: &mut W, values: &[T]) -> std::io::Result<()>
    where
        W: Write,
        T: Display,
    {
        for value in values {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}

impl SequenceFormat for Csv {
    const EXTENSION: &'static str = "csv";
    const NAME: &'static str = "CSV";

    fn write<W, T>(out: &mut W, values: &[T]) -> std::io::Result<()>
    where
        W: Write,
        T: Display,
    {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                write!(out, ",")?;
            }
            write!(out, "{}", value)?;
        }
        Ok(())
    }
}

/// Renders `values` in layout `F` into a `String`.
///
/// # Examples
///
/// ```rust
/// # use bulwark_export::format::{render, Csv, PlainText};
/// assert_eq!(render::<Csv, _>(&[3, 6, 9]), "3,6,9");
/// assert_eq!(render::<PlainText, _>(&[2, 4]), "2\n4\n");
/// ```
pub fn render<F, T>(values: &[T]) -> String
where
    F: SequenceFormat,
    T: Display,
{
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = F::write(&mut out, values);
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_one_per_line() {
        assert_eq!(render::<PlainText, _>(&[2, 4, 6]), "2\n4\n6\n");
        assert_eq!(render::<PlainText, _>(&[-1]), "-1\n");
    }

    #[test]
    fn test_csv_has_no_trailing_separator() {
        assert_eq!(render::<Csv, _>(&[3, 6, 9, 12]), "3,6,9,12");
        assert_eq!(render::<Csv, _>(&[42]), "42");
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [i64; 0] = [];
        assert_eq!(render::<PlainText, _>(&empty), "");
        assert_eq!(render::<Csv, _>(&empty), "");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(PlainText::EXTENSION, "txt");
        assert_eq!(Csv::EXTENSION, "csv");
    }
}
