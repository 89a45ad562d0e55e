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

//! Sinks that persist integer sequences.

use crate::{error::ExportError, format::SequenceFormat};
use bulwark_array::buffer::GrowableBuffer;
use chrono::{DateTime, Local, TimeZone};
use std::{
    fs::File,
    io::{BufWriter, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};

/// Layout of the timestamp part of exported file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Builds `<timestamp>.<extension>` for the instant `at`.
///
/// # Examples
///
/// ```rust
/// # use bulwark_export::sink::timestamp_file_name;
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 5)
///     .and_then(|d| d.and_hms_opt(7, 8, 9))
///     .unwrap()
///     .and_utc();
/// assert_eq!(timestamp_file_name(&at, "csv"), "2024-03-05_07-08-09.csv");
/// ```
pub fn timestamp_file_name<Tz>(at: &DateTime<Tz>, extension: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}.{}", at.format(TIMESTAMP_FORMAT), extension)
}

/// Where exported files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Target directory; must exist.
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Creates a configuration writing into `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// A destination for integer sequences.
///
/// Object safe, so differently formatted sinks can be driven through
/// `dyn SequenceSink`.
pub trait SequenceSink {
    /// Persists `values` and returns the path of the written artifact.
    fn write_sequence(&mut self, values: &[i64]) -> Result<PathBuf, ExportError>;
}

/// Writes each sequence to a new timestamped file inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink<F> {
    directory: PathBuf,
    _format: PhantomData<F>,
}

impl<F> DirectorySink<F>
where
    F: SequenceFormat,
{
    /// Creates a sink writing into the configured directory.
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            _format: PhantomData,
        }
    }

    /// Returns the target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes `values` to the file named for `at`.
    pub fn write_at<Tz>(
        &mut self,
        values: &[i64],
        at: &DateTime<Tz>,
    ) -> Result<PathBuf, ExportError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let path = self.directory.join(timestamp_file_name(at, F::EXTENSION));

        let io = |source| ExportError::Io {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(io)?;
        let mut out = BufWriter::new(file);
        F::write(&mut out, values).map_err(io)?;
        out.flush().map_err(io)?;

        tracing::info!(
            format = F::NAME,
            path = %path.display(),
            count = values.len(),
            "saved file"
        );
        Ok(path)
    }
}

impl<F> SequenceSink for DirectorySink<F>
where
    F: SequenceFormat,
{
    fn write_sequence(&mut self, values: &[i64]) -> Result<PathBuf, ExportError> {
        self.write_at(values, &Local::now())
    }
}

/// Types whose contents can be handed to a `SequenceSink`.
pub trait Exportable {
    /// Writes the contents to `sink`.
    fn export_to(&self, sink: &mut dyn SequenceSink) -> Result<PathBuf, ExportError>;
}

impl<T> Exportable for GrowableBuffer<T>
where
    T: Copy + Into<i64>,
{
    fn export_to(&self, sink: &mut dyn SequenceSink) -> Result<PathBuf, ExportError> {
        let values: Vec<i64> = self.iter().map(|&v| v.into()).collect();
        sink.write_sequence(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Csv, PlainText};
    use chrono::{NaiveDate, Utc};

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid date")
            .and_utc()
    }

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(
            timestamp_file_name(&instant(7, 4, 9), "txt"),
            "2025-01-31_07-04-09.txt"
        );
    }

    #[test]
    fn test_default_config_is_current_dir() {
        assert_eq!(ExportConfig::default().directory, PathBuf::from("."));
    }

    #[test]
    fn test_text_sink_writes_one_value_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::<PlainText>::new(&ExportConfig::new(dir.path()));

        let path = sink.write_at(&[2, 4, 6], &instant(17, 0, 1)).unwrap();
        assert_eq!(path, dir.path().join("2025-01-31_17-00-01.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2\n4\n6\n");
    }

    #[test]
    fn test_csv_sink_writes_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::<Csv>::new(&ExportConfig::new(dir.path()));

        let path = sink.write_at(&[3, 6, 9], &instant(17, 0, 1)).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3,6,9");
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let mut sink = DirectorySink::<Csv>::new(&ExportConfig::new(&missing));

        let err = sink.write_at(&[1], &instant(0, 0, 0)).unwrap_err();
        assert!(err.path().starts_with(&missing));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_buffers_export_through_dyn_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::new(dir.path());

        let mut evens = GrowableBuffer::with_default_capacity();
        let mut triples = GrowableBuffer::with_default_capacity();
        for i in 1..=10_i32 {
            evens.push(i * 2).unwrap();
            triples.push(i * 3).unwrap();
        }

        let text: Box<dyn SequenceSink> = Box::new(DirectorySink::<PlainText>::new(&config));
        let csv: Box<dyn SequenceSink> = Box::new(DirectorySink::<Csv>::new(&config));
        let mut sinks = vec![(text, &evens), (csv, &triples)];

        let mut written = Vec::new();
        for (sink, buffer) in sinks.iter_mut() {
            written.push(buffer.export_to(&mut **sink).unwrap());
        }

        let text = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert_eq!(text.lines().last(), Some("20"));

        let csv = std::fs::read_to_string(&written[1]).unwrap();
        assert_eq!(csv, "3,6,9,12,15,18,21,24,27,30");
    }
}
