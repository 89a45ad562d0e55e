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

use num_traits::AsPrimitive;

/// A trait for element types with numeric semantics.
///
/// Numeric types can be ordered against a closed interval and promoted to
/// `f64` so that distances are computed in floating point regardless of the
/// storage type.
///
/// # Examples
///
/// ```rust
/// # use bulwark_core::num::numeric::Numeric;
/// assert_eq!(3_u8.to_f64(), 3.0);
/// assert_eq!((-2_i64).to_f64(), -2.0);
/// assert_eq!('A'.to_f64(), 65.0);
/// ```
pub trait Numeric: Copy + PartialOrd + std::fmt::Display + std::fmt::Debug {
    /// Promotes the value to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn to_f64(self) -> f64 {
                    AsPrimitive::<f64>::as_(self)
                }
            }
        )*
    };
}

impl_numeric_for!(u8, u16, u32, u64, u128, usize);
impl_numeric_for!(i8, i16, i32, i64, i128, isize);
impl_numeric_for!(f32, f64);

impl Numeric for char {
    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(u32::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_promotion() {
        assert_eq!(0_u8.to_f64(), 0.0);
        assert_eq!(u8::MAX.to_f64(), 255.0);
        assert_eq!(i32::MIN.to_f64(), -2_147_483_648.0);
        assert_eq!(42_usize.to_f64(), 42.0);
        assert_eq!((-7_i128).to_f64(), -7.0);
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(1.5_f32.to_f64(), 1.5);
        assert_eq!((-0.25_f64).to_f64(), -0.25);
    }

    #[test]
    fn test_char_promotes_code_point() {
        assert_eq!('A'.to_f64(), 65.0);
        assert_eq!('Z'.to_f64() - 'A'.to_f64(), 25.0);
    }
}
