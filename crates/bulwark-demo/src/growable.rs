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

use bulwark_array::buffer::GrowableBuffer;
use bulwark_export::{
    format::{Csv, PlainText},
    sink::{DirectorySink, ExportConfig, Exportable, SequenceSink},
};
use std::error::Error;

pub fn run(config: &ExportConfig) -> Result<(), Box<dyn Error>> {
    tracing::info!("growable buffers");

    let mut evens = GrowableBuffer::<i32>::with_default_capacity();
    let mut triples = GrowableBuffer::<i32>::with_default_capacity();
    for i in 1..=10 {
        evens.push(i * 2)?;
        triples.push(i * 3)?;
    }

    let text: Box<dyn SequenceSink> = Box::new(DirectorySink::<PlainText>::new(config));
    let csv: Box<dyn SequenceSink> = Box::new(DirectorySink::<Csv>::new(config));
    let mut exports = [(&evens, text), (&triples, csv)];

    for (buffer, sink) in exports.iter_mut() {
        let path = buffer.export_to(&mut **sink)?;
        tracing::info!(values = %buffer, path = %path.display(), "exported");
    }

    Ok(())
}
