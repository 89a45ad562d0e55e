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

use bulwark_array::array::{Array, RangedArray};
use bulwark_core::error::ArrayError;
use std::error::Error;

/// Logs an expected failure, or returns an error if the step succeeded.
fn expect_failure<T>(step: &str, result: Result<T, ArrayError>) -> Result<(), Box<dyn Error>> {
    match result {
        Err(e) => {
            tracing::info!(step, error = %e, "rejected");
            Ok(())
        }
        Ok(_) => Err(format!("`{step}` was expected to fail").into()),
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    tracing::info!("range-constrained array");

    let mut arr = RangedArray::new(5)?;
    tracing::info!(array = %arr, "initial");

    arr.set(0, 10)?;
    arr.set(1, -50)?;
    arr.set(2, 100)?;
    arr.element(3)?.set(-100)?;
    arr.element(4)?.set(0)?;
    tracing::info!(array = %arr, "filled");
    tracing::info!(value = arr.get(2)?, "get(2)");
    tracing::info!(value = arr.element(3)?.value(), "element(3)");

    expect_failure("read index 10", arr.get(10))?;
    expect_failure("set(0, 150)", arr.set(0, 150))?;
    expect_failure("element(1) = -101", arr.element(1).and_then(|e| e.set(-101)))?;
    expect_failure("element(1) = 200", arr.element(1).and_then(|e| e.set(200)))?;
    expect_failure("new(0)", RangedArray::new(0))?;
    expect_failure("fill(200)", arr.fill(200))?;

    let copy = arr.clone();
    tracing::info!(array = %copy, "copied");

    let mut unchecked = Array::<i32>::new(3)?;
    unchecked.set(0, 50)?;
    unchecked.set(1, 101)?;
    unchecked.set(2, -50)?;
    let mut dest = RangedArray::new(3)?;
    expect_failure("duplicate out-of-range source", dest.assign_from(&unchecked))?;
    tracing::info!(array = %dest, "destination unchanged");

    tracing::info!(array = %arr, "final");
    Ok(())
}
