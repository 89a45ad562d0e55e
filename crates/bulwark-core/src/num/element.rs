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

//! # Compile-Time Element Classes
//!
//! Every container element implements `Element`, whose associated `Class`
//! is one of two uninhabited markers:
//!
//! - `Arithmetic`: numeric types. Range checks compare against the bounds and
//!   `euclidean_distance` computes `sqrt(sum((a[i] - b[i])^2))` in `f64`.
//! - `Opaque`: everything else. Range bounds are accepted and ignored, and
//!   `euclidean_distance` always fails with `UnsupportedOperation`.
//!
//! The class is resolved by the type checker, so the chosen branch is fixed
//! per element type and never inspected at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use bulwark_core::num::element::{Element, ElementClass, Opaque};
//!
//! #[derive(Clone, Default, Debug)]
//! struct Label(String);
//!
//! impl Element for Label {
//!     type Class = Opaque;
//! }
//!
//! let a = [Label("x".into())];
//! let b = [Label("y".into())];
//! assert!(<<Label as Element>::Class as ElementClass<Label>>::euclidean_distance(&a, &b).is_err());
//! ```

use crate::{error::ArrayError, num::numeric::Numeric};

/// Operation name reported when a distance is requested for opaque elements.
pub const EUCLIDEAN_DISTANCE: &str = "euclidean_distance";

/// The numeric code path.
#[derive(Debug)]
pub enum Arithmetic {}

/// The non-numeric code path.
#[derive(Debug)]
pub enum Opaque {}

/// Type-conditional operations selected through `Element::Class`.
pub trait ElementClass<T> {
    /// A human-readable name of the class.
    const NAME: &'static str;

    /// Checks that `value` lies within `[min, max]`.
    ///
    /// Opaque elements have no range semantics and always pass.
    fn check_range(value: &T, min: &T, max: &T) -> Result<(), ArrayError>;

    /// Computes the Euclidean norm of the elementwise difference of `a` and `b`.
    fn euclidean_distance(a: &[T], b: &[T]) -> Result<f64, ArrayError>;
}

impl<T> ElementClass<T> for Arithmetic
where
    T: Numeric,
{
    const NAME: &'static str = "numeric";

    #[inline]
    fn check_range(value: &T, min: &T, max: &T) -> Result<(), ArrayError> {
        // Written as a negated containment test so that NaN is rejected.
        if !(min <= value && value <= max) {
            return Err(ArrayError::invalid_value(value, min, max));
        }
        Ok(())
    }

    fn euclidean_distance(a: &[T], b: &[T]) -> Result<f64, ArrayError> {
        if a.len() != b.len() {
            return Err(ArrayError::SizeMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let sum: f64 = a
            .iter()
            .zip(b)
            .map(|(&x, &y)| {
                let diff = x.to_f64() - y.to_f64();
                diff * diff
            })
            .sum();

        Ok(sum.sqrt())
    }
}

impl<T> ElementClass<T> for Opaque {
    const NAME: &'static str = "non-numeric";

    #[inline]
    fn check_range(_value: &T, _min: &T, _max: &T) -> Result<(), ArrayError> {
        Ok(())
    }

    #[inline]
    fn euclidean_distance(_a: &[T], _b: &[T]) -> Result<f64, ArrayError> {
        Err(ArrayError::unsupported::<T>(EUCLIDEAN_DISTANCE))
    }
}

/// A type that can be stored in a validated container.
///
/// `Default` supplies the initial value of freshly sized containers.
pub trait Element: Clone + Default {
    /// Selects the numeric or non-numeric behavior of the type.
    type Class: ElementClass<Self>;
}

macro_rules! impl_element_for {
    ($class:ty; $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Class = $class;
            }
        )*
    };
}

impl_element_for!(Arithmetic; u8, u16, u32, u64, u128, usize);
impl_element_for!(Arithmetic; i8, i16, i32, i64, i128, isize);
impl_element_for!(Arithmetic; f32, f64, char);
impl_element_for!(Opaque; String, bool, &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    fn distance<T: Element>(a: &[T], b: &[T]) -> Result<f64, ArrayError> {
        <T::Class as ElementClass<T>>::euclidean_distance(a, b)
    }

    fn check<T: Element>(value: T, min: T, max: T) -> Result<(), ArrayError> {
        <T::Class as ElementClass<T>>::check_range(&value, &min, &max)
    }

    #[test]
    fn test_integer_distance() {
        let d = distance(&[1, 2, 3], &[0, 0, 0]).unwrap();
        assert!((d - 14_f64.sqrt()).abs() < 1e-12);
        assert!((d - 3.7417).abs() < 1e-4);
    }

    #[test]
    fn test_distance_of_identical_is_zero() {
        assert_eq!(distance(&[5_u8, 9], &[5, 9]).unwrap(), 0.0);
    }

    #[test]
    fn test_unsigned_distance_does_not_underflow() {
        // 0 - 3 would underflow in u8; promotion happens before subtraction.
        let d = distance(&[0_u8], &[3_u8]).unwrap();
        assert_eq!(d, 3.0);
    }

    #[test]
    fn test_float_distance() {
        let d = distance(&[1.5_f64, 2.5, 3.5], &[0.5, 1.5, 2.5]).unwrap();
        assert!((d - 3_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distance_size_mismatch() {
        let err = distance(&[0, 0, 0], &[0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, ArrayError::SizeMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_opaque_distance_is_unsupported() {
        let a = vec!["Hello".to_string(), "World".to_string()];
        let b = vec!["Hi".to_string(), "There".to_string()];
        let err = distance(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            ArrayError::UnsupportedOperation {
                operation: EUCLIDEAN_DISTANCE,
                ..
            }
        ));

        // Unsupported wins over the length check.
        let err = distance(&a, &b[..1]).unwrap_err();
        assert!(matches!(err, ArrayError::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_numeric_range_is_inclusive() {
        assert!(check(100, -100, 100).is_ok());
        assert!(check(-100, -100, 100).is_ok());
        assert!(check(101, -100, 100).is_err());
        assert!(check(-101, -100, 100).is_err());
    }

    #[test]
    fn test_nan_is_out_of_range() {
        assert!(check(f64::NAN, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_char_range() {
        assert!(check('X', 'A', 'Z').is_ok());
        assert!(check('a', 'A', 'Z').is_err());
    }

    #[test]
    fn test_opaque_range_ignores_bounds() {
        assert!(check("zzz".to_string(), "a".to_string(), "b".to_string()).is_ok());
        assert!(check(true, false, false).is_ok());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(<Arithmetic as ElementClass<i32>>::NAME, "numeric");
        assert_eq!(<Opaque as ElementClass<String>>::NAME, "non-numeric");
    }
}
