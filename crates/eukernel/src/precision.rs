//! Approximate comparisons with a configurable tolerance.

use std::cmp::Ordering;

use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Default precision, using [`EPSILON`].
pub const APPROX: Precision = Precision::new(EPSILON);

/// Tolerance used to decide whether two values are equivalent.
///
/// Values separated by at most `epsilon` compare equal. This is not a
/// transitive relation, so it must never be used as a sort key; use exact
/// comparisons (or [`total_float_cmp()`](crate::vector::total_float_cmp)) for that.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Precision {
    epsilon: Float,
}

impl Default for Precision {
    fn default() -> Self {
        APPROX
    }
}

impl Precision {
    /// Constructs a precision from an absolute tolerance. Negative values are
    /// treated as their absolute value.
    pub const fn new(epsilon: Float) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Returns the absolute tolerance.
    pub fn epsilon(self) -> Float {
        self.epsilon
    }

    /// Compares two values, but considers them equal if they are separated by
    /// no more than `epsilon`.
    ///
    /// Handles infinity specially.
    pub fn eq<T: AbsDiffEq<Epsilon = Float> + ?Sized>(self, a: &T, b: &T) -> bool {
        // use native float equality to handle infinities
        a == b || a.abs_diff_eq(b, self.epsilon)
    }
    /// Returns whether two values differ by more than `epsilon`.
    pub fn ne<T: AbsDiffEq<Epsilon = Float> + ?Sized>(self, a: &T, b: &T) -> bool {
        !self.eq(a, b)
    }

    /// Compares two numbers, but considers them equal if they are separated by
    /// no more than `epsilon`.
    pub fn cmp(self, a: Float, b: Float) -> Ordering {
        if self.eq(&a, &b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
    /// Returns whether one number is less than another by more than `epsilon`.
    pub fn lt(self, a: Float, b: Float) -> bool {
        a < b && !self.eq(&a, &b)
    }
    /// Returns whether one number is greater than another by more than
    /// `epsilon`.
    pub fn gt(self, a: Float, b: Float) -> bool {
        a > b && !self.eq(&a, &b)
    }
    /// Returns whether one number is less than another or within `epsilon` of
    /// it.
    pub fn lt_eq(self, a: Float, b: Float) -> bool {
        a < b || self.eq(&a, &b)
    }
    /// Returns whether one number is greater than another or within `epsilon`
    /// of it.
    pub fn gt_eq(self, a: Float, b: Float) -> bool {
        a > b || self.eq(&a, &b)
    }

    /// Returns whether `x` has an absolute value no greater than `epsilon`.
    pub fn eq_zero(self, x: Float) -> bool {
        self.eq(&x, &0.0)
    }
    /// Returns whether `x` has an absolute value greater than `epsilon`.
    pub fn ne_zero(self, x: Float) -> bool {
        !self.eq_zero(x)
    }
    /// Returns whether `x` is less than `-epsilon`.
    pub fn is_negative(self, x: Float) -> bool {
        self.lt(x, 0.0)
    }
    /// Returns whether `x` is greater than `epsilon`.
    pub fn is_positive(self, x: Float) -> bool {
        self.gt(x, 0.0)
    }
}
