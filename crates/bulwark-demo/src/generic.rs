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

use bulwark_array::{
    array::Array,
    ops::{checked_set, euclidean_distance, range_checked_set},
    policy::Unbounded,
};
use bulwark_core::error::ArrayError;

fn integers() -> Result<(), ArrayError> {
    let mut a = Array::<i32>::new(5)?;
    for i in 0..a.len() {
        checked_set(&mut a, i, (i * 10) as i32)?;
    }
    tracing::info!(array = %a, "i32");

    range_checked_set(&mut a, 0, 50, 0, 100)?;
    tracing::info!(array = %a, "after range_checked_set(0, 50, 0, 100)");
    if let Err(e) = range_checked_set(&mut a, 1, 150, 0, 100) {
        tracing::info!(error = %e, "range_checked_set(1, 150, 0, 100)");
    }

    let mut b = Array::<i32>::new(5)?;
    for i in 0..b.len() {
        checked_set(&mut b, i, (i * 5) as i32)?;
    }
    tracing::info!(array = %b, "second i32");
    tracing::info!(distance = euclidean_distance(&a, &b)?, "i32 distance");
    Ok(())
}

fn floats() -> Result<(), ArrayError> {
    let a = Array::try_from_slice(&[1.5, 2.5, 3.5], Unbounded)?;
    let b = Array::try_from_slice(&[0.5, 1.5, 2.5], Unbounded)?;
    let distance = euclidean_distance(&a, &b)?;
    tracing::info!(left = %a, right = %b, distance, "f64 distance");
    Ok(())
}

fn strings() -> Result<(), ArrayError> {
    let mut a = Array::<String>::new(3)?;
    let mut b = Array::<String>::new(3)?;
    for (i, (x, y)) in [("Hello", "Hi"), ("World", "There"), ("!", "!")]
        .into_iter()
        .enumerate()
    {
        checked_set(&mut a, i, x.to_string())?;
        checked_set(&mut b, i, y.to_string())?;
    }
    tracing::info!(array = %a, "String");

    match euclidean_distance(&a, &b) {
        Ok(d) => tracing::warn!(distance = d, "unexpected distance for strings"),
        Err(e) => tracing::info!(error = %e, "String distance"),
    }
    Ok(())
}

fn mixed() -> Result<(), ArrayError> {
    let mut letters = Array::try_from_slice(&['A', 'B', 'C'], Unbounded)?;
    tracing::info!(array = %letters, "char");
    letters.range_checked_set(0, 'X', 'A', 'Z')?;
    tracing::info!(array = %letters, "after setting 'X'");

    let a = Array::try_from_slice(&[3.5_f32, 2.25], Unbounded)?;
    let b = Array::try_from_slice(&[1.0_f32, 1.0], Unbounded)?;
    let distance = a.euclidean_distance(&b)?;
    tracing::info!(left = %a, right = %b, distance, "f32 distance");

    let short = Array::<i32>::new(3)?;
    let long = Array::<i32>::new(4)?;
    if let Err(e) = euclidean_distance(&short, &long) {
        tracing::info!(error = %e, "length mismatch");
    }
    Ok(())
}

pub fn run() -> Result<(), ArrayError> {
    tracing::info!("generic arrays");
    integers()?;
    floats()?;
    strings()?;
    mixed()?;
    Ok(())
}
