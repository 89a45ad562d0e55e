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

//! Value policies decide which values a container accepts.
//!
//! A policy is consulted on every write path: construction defaults, the
//! named setter, `fill`, proxy assignment and duplication.

use bulwark_core::{error::ArrayError, math::interval::ClosedInterval, num::numeric::Numeric};

/// Validates values before they are written into a container.
pub trait ValuePolicy<T> {
    /// Returns an error if `value` may not be stored.
    fn check(&self, value: &T) -> Result<(), ArrayError>;

    /// Checks every value, stopping at the first rejection.
    #[inline]
    fn check_all(&self, values: &[T]) -> Result<(), ArrayError> {
        values.iter().try_for_each(|value| self.check(value))
    }
}

/// Accepts every value. The policy of unconstrained containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unbounded;

impl<T> ValuePolicy<T> for Unbounded {
    #[inline(always)]
    fn check(&self, _value: &T) -> Result<(), ArrayError> {
        Ok(())
    }
}

impl<T> ValuePolicy<T> for ClosedInterval<T>
where
    T: Numeric,
{
    #[inline]
    fn check(&self, value: &T) -> Result<(), ArrayError> {
        ClosedInterval::check(self, *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_accepts_anything() {
        assert!(Unbounded.check(&i64::MIN).is_ok());
        assert!(Unbounded.check(&"text").is_ok());
        assert!(Unbounded.check_all(&[f64::NAN, f64::INFINITY][..]).is_ok());
    }

    #[test]
    fn test_interval_policy() {
        let policy = ClosedInterval::reference();
        assert!(ValuePolicy::check(&policy, &100).is_ok());
        assert!(ValuePolicy::check(&policy, &-100).is_ok());
        assert_eq!(
            ValuePolicy::check(&policy, &150).unwrap_err().to_string(),
            "value 150 must be in range [-100, 100]"
        );
    }

    #[test]
    fn test_check_all_reports_first_rejection() {
        let policy = ClosedInterval::new(0_u8, 10);
        let err = policy.check_all(&[1, 11, 12]).unwrap_err();
        assert_eq!(err, ArrayError::invalid_value(&11_u8, &0, &10));
    }
}
