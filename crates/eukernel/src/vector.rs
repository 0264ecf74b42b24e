//! Fixed-dimension Euclidean vectors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};

use float_ord::FloatOrd;

use crate::Float;

/// Operations shared by [`Vector2`] and [`Vector3`].
pub trait EuclideanVector:
    'static
    + Sized
    + Copy
    + fmt::Debug
    + approx::AbsDiffEq<Epsilon = Float>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Float, Output = Self>
    + Div<Float, Output = Self>
{
    /// Zero vector.
    const ZERO: Self;

    /// Returns the dot product of this vector with another.
    fn dot(self, rhs: Self) -> Float;

    /// Compares two vectors one coordinate at a time, starting with X. The
    /// first coordinate that differs decides the result.
    ///
    /// Coordinates are compared with [`total_float_cmp()`], so `-0.0` and
    /// `0.0` are equal and NaN sorts after every other value.
    fn coordinate_ascending_cmp(&self, other: &Self) -> Ordering;

    /// Returns the largest absolute value of any component.
    fn max_abs_component(self) -> Float;

    /// Returns the magnitude of the vector.
    fn mag(self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    fn mag2(self) -> Float {
        self.dot(self)
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// zero, has a non-finite component, or is too small to rescale.
    #[must_use]
    fn normalize(self) -> Option<Unit<Self>> {
        // Rescale first so that squaring the components can neither
        // underflow nor overflow.
        let scaled = self / self.max_abs_component();
        let mag = scaled.mag();
        let mult = mag.recip();
        (mag.is_finite() && mult.is_finite()).then(|| Unit(scaled * mult))
    }

    /// Returns the component of the vector that is parallel to `other`.
    ///
    /// Returns `None` if `other` is zero.
    fn projected_to(self, other: Self) -> Option<Self> {
        let scale_factor = self.dot(other) / other.mag2();
        scale_factor.is_finite().then(|| other * scale_factor)
    }
    /// Returns the component of the vector that is perpendicular to `other`.
    ///
    /// Returns `None` if `other` is zero.
    fn rejected_from(self, other: Self) -> Option<Self> {
        Some(self - self.projected_to(other)?)
    }
}

/// Compares two floats in a total order where `-0.0` and `0.0` are equal and
/// every NaN, regardless of sign, sorts after every other value.
pub fn total_float_cmp(a: Float, b: Float) -> Ordering {
    fn key(x: Float) -> FloatOrd<Float> {
        // `+ 0.0` turns `-0.0` into `0.0`
        FloatOrd(if x.is_nan() { Float::NAN } else { x + 0.0 })
    }
    key(a).cmp(&key(b))
}

/// Vector that is known to have a magnitude of `1`.
///
/// The only ways to get one are [`EuclideanVector::normalize()`] and the
/// axis constants, so the wrapped vector is always normalized.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Unit<V>(V);

impl<V> Deref for Unit<V> {
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V: EuclideanVector> Unit<V> {
    /// Wraps a vector without normalizing it. `v` **must** already have a
    /// magnitude of `1`.
    pub(crate) fn new_unchecked(v: V) -> Self {
        Unit(v)
    }
}

impl<V: EuclideanVector> Neg for Unit<V> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

impl<V: EuclideanVector> approx::AbsDiffEq for Unit<V> {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<V: fmt::Display> fmt::Display for Unit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 2D vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
}

impl_vector_ops!(impl for Vector2 { x, y });
impl_vector_approx_eq!(impl for Vector2 { x, y });

impl EuclideanVector for Vector2 {
    const ZERO: Self = Vector2::new(0.0, 0.0);

    fn dot(self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y
    }

    fn coordinate_ascending_cmp(&self, other: &Self) -> Ordering {
        total_float_cmp(self.x, other.x).then_with(|| total_float_cmp(self.y, other.y))
    }

    fn max_abs_component(self) -> Float {
        self.x.abs().max(self.y.abs())
    }
}

impl Vector2 {
    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns the signed area of the parallelogram spanned by `self` and
    /// `other`, which is positive when `other` is counterclockwise from
    /// `self`.
    pub fn signed_area(self, other: Vector2) -> Float {
        self.x * other.y - self.y * other.x
    }
}

impl From<[Float; 2]> for Vector2 {
    fn from([x, y]: [Float; 2]) -> Self {
        Self { x, y }
    }
}
impl From<Vector2> for [Float; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Unit<Vector2> {
    /// Unit vector along +X.
    pub const PLUS_X: Self = Unit(Vector2::new(1.0, 0.0));
    /// Unit vector along -X.
    pub const MINUS_X: Self = Unit(Vector2::new(-1.0, 0.0));
    /// Unit vector along +Y.
    pub const PLUS_Y: Self = Unit(Vector2::new(0.0, 1.0));
    /// Unit vector along -Y.
    pub const MINUS_Y: Self = Unit(Vector2::new(0.0, -1.0));

    /// Returns the unit vector at `angle` radians counterclockwise from +X.
    pub fn from_angle(angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();
        Unit(Vector2::new(cos, sin))
    }
}

/// 3D vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
    /// Z component.
    pub z: Float,
}

impl_vector_ops!(impl for Vector3 { x, y, z });
impl_vector_approx_eq!(impl for Vector3 { x, y, z });

impl EuclideanVector for Vector3 {
    const ZERO: Self = Vector3::new(0.0, 0.0, 0.0);

    fn dot(self, rhs: Self) -> Float {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    fn coordinate_ascending_cmp(&self, other: &Self) -> Ordering {
        total_float_cmp(self.x, other.x)
            .then_with(|| total_float_cmp(self.y, other.y))
            .then_with(|| total_float_cmp(self.z, other.z))
    }

    fn max_abs_component(self) -> Float {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

impl Vector3 {
    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the component along an axis, or `None` if `axis >= 3`.
    pub fn get(self, axis: u8) -> Option<Float> {
        match axis {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Returns the cross product of two vectors.
    pub fn cross(self, rhs: Vector3) -> Vector3 {
        Vector3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Returns an arbitrary unit vector perpendicular to this one, or `None`
    /// if this vector is zero or not finite.
    ///
    /// The result is a deterministic function of the input: the component
    /// dropped is the first one that is small relative to the magnitude.
    pub fn orthogonal(self) -> Option<Unit<Vector3>> {
        let threshold = 0.6 * self.mag();
        let v = if self.x.abs() <= threshold {
            Vector3::new(0.0, self.z, -self.y)
        } else if self.y.abs() <= threshold {
            Vector3::new(-self.z, 0.0, self.x)
        } else {
            Vector3::new(self.y, -self.x, 0.0)
        };
        v.normalize()
    }
}

impl From<[Float; 3]> for Vector3 {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self { x, y, z }
    }
}
impl From<Vector3> for [Float; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Unit<Vector3> {
    /// Unit vector along +X.
    pub const PLUS_X: Self = Unit(Vector3::new(1.0, 0.0, 0.0));
    /// Unit vector along -X.
    pub const MINUS_X: Self = Unit(Vector3::new(-1.0, 0.0, 0.0));
    /// Unit vector along +Y.
    pub const PLUS_Y: Self = Unit(Vector3::new(0.0, 1.0, 0.0));
    /// Unit vector along -Y.
    pub const MINUS_Y: Self = Unit(Vector3::new(0.0, -1.0, 0.0));
    /// Unit vector along +Z.
    pub const PLUS_Z: Self = Unit(Vector3::new(0.0, 0.0, 1.0));
    /// Unit vector along -Z.
    pub const MINUS_Z: Self = Unit(Vector3::new(0.0, 0.0, -1.0));
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;

    #[test]
    fn test_vector_ops() {
        let v1 = Vector3::new(1.0, 2.0, -10.0);
        let v2 = Vector3::new(-5.0, 0.0, 1.0);
        assert_eq!(v1 + v2, Vector3::new(-4.0, 2.0, -9.0));
        assert_eq!(v1 - v2, Vector3::new(6.0, 2.0, -11.0));
        assert_eq!(-v1, Vector3::new(-1.0, -2.0, 10.0));
        assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, -20.0));
        assert_eq!(2.0 * v1, v1 * 2.0);
        assert_eq!(v1 / 2.0, Vector3::new(0.5, 1.0, -5.0));
        assert_eq!([v1, v2].into_iter().sum::<Vector3>(), v1 + v2);
    }

    #[test]
    fn test_dot_and_cross_product() {
        let v1 = Vector3::new(1.0, 2.0, -10.0);
        let v2 = Vector3::new(-5.0, 16.0, 0.0);
        assert_eq!(v1.dot(v2), 27.0);

        let x = *Unit::<Vector3>::PLUS_X;
        let y = *Unit::<Vector3>::PLUS_Y;
        assert_eq!(x.cross(y), *Unit::<Vector3>::PLUS_Z);
        assert_eq!(y.cross(x), *Unit::<Vector3>::MINUS_Z);
        assert_eq!(v1.cross(v2).dot(v1), 0.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Vector2::new(2.0, 0.0).normalize(), Some(Unit::<Vector2>::PLUS_X));
        assert_approx_eq!(
            *Vector3::new(3.0, 0.0, 4.0).normalize().unwrap(),
            Vector3::new(0.6, 0.0, 0.8),
        );
        assert_eq!(Vector2::ZERO.normalize(), None);
        assert_eq!(Vector2::new(Float::NAN, 1.0).normalize(), None);
        assert_eq!(Vector3::new(Float::INFINITY, 0.0, 0.0).normalize(), None);
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        let tiny = Vector2::new(1e-160, 1e-160).normalize().unwrap();
        approx::assert_abs_diff_eq!(tiny.mag(), 1.0, epsilon = 1e-15);
        assert_approx_eq!(*tiny, Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2));

        let huge = Vector2::new(1e200, 0.0).normalize().unwrap();
        assert_approx_eq!(huge, Unit::<Vector2>::PLUS_X);
        let huge = Vector3::new(-1e300, 1e300, 0.0).normalize().unwrap();
        approx::assert_abs_diff_eq!(huge.mag(), 1.0, epsilon = 1e-15);
        assert_approx_eq!(huge.x, -huge.y);

        assert_eq!(Vector3::new(Float::MAX, Float::NAN, 0.0).normalize(), None);
        assert_eq!(Vector3::new(Float::MIN, Float::INFINITY, 0.0).normalize(), None);
    }

    #[test]
    fn test_projection() {
        let v = Vector2::new(3.0, 4.0);
        let x = Vector2::new(2.0, 0.0);
        assert_eq!(v.projected_to(x), Some(Vector2::new(3.0, 0.0)));
        assert_eq!(v.rejected_from(x), Some(Vector2::new(0.0, 4.0)));
        assert_eq!(v.projected_to(Vector2::ZERO), None);
    }

    #[test]
    fn test_coordinate_ascending_order() {
        let a = Vector2::new(0.0, 1.0);
        let b = Vector2::new(1.0, 0.0);
        assert_eq!(a.coordinate_ascending_cmp(&b), Ordering::Less);
        assert_eq!(b.coordinate_ascending_cmp(&a), Ordering::Greater);
        assert_eq!(a.coordinate_ascending_cmp(&a), Ordering::Equal);

        let c = Vector2::new(0.0, -1.0);
        assert_eq!(c.coordinate_ascending_cmp(&a), Ordering::Less);

        // The sign of zero is ignored.
        let d = Vector2::new(-1.0, -0.0);
        let e = Vector2::new(-1.0, 0.0);
        assert_eq!(d.coordinate_ascending_cmp(&e), Ordering::Equal);
        assert_eq!(e.coordinate_ascending_cmp(&d), Ordering::Equal);

        let mut vs = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(-1.0, 5.0, 5.0),
        ];
        vs.sort_by(Vector3::coordinate_ascending_cmp);
        assert_eq!(
            vs,
            vec![
                Vector3::new(-1.0, 5.0, 5.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(0.0, 0.0, 2.0),
                Vector3::new(1.0, 0.0, 0.0),
            ],
        );
    }

    #[test]
    fn test_total_float_cmp() {
        assert_eq!(total_float_cmp(-0.0, 0.0), Ordering::Equal);
        assert_eq!(total_float_cmp(0.0, -0.0), Ordering::Equal);
        assert_eq!(total_float_cmp(-1.0, 0.0), Ordering::Less);

        // Every NaN sorts last, whatever its sign bit.
        let neg_nan = -Float::NAN;
        assert!(neg_nan.is_sign_negative());
        for nan in [Float::NAN, neg_nan] {
            assert_eq!(total_float_cmp(nan, 1.0), Ordering::Greater);
            assert_eq!(total_float_cmp(nan, Float::INFINITY), Ordering::Greater);
            assert_eq!(total_float_cmp(Float::NEG_INFINITY, nan), Ordering::Less);
        }
        assert_eq!(total_float_cmp(neg_nan, Float::NAN), Ordering::Equal);

        let mut xs = [1.0, neg_nan, -0.0, Float::NEG_INFINITY, 0.0, -2.0];
        xs.sort_by(|a, b| total_float_cmp(*a, *b));
        assert_eq!(xs[..5], [Float::NEG_INFINITY, -2.0, -0.0, 0.0, 1.0]);
        assert!(xs[5].is_nan());
    }

    #[test]
    fn test_orthogonal() {
        for v in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, -3.0),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, 1.0, 0.5),
        ] {
            let o = v.orthogonal().unwrap();
            assert_approx_eq!(o.mag(), 1.0);
            assert_approx_eq!(o.dot(v), 0.0);
        }
        assert_eq!(Vector3::ZERO.orthogonal(), None);
    }

    #[test]
    fn test_unit_from_angle() {
        assert_approx_eq!(
            Unit::<Vector2>::from_angle(std::f64::consts::FRAC_PI_2),
            Unit::<Vector2>::PLUS_Y,
        );
        assert_approx_eq!(-Unit::<Vector2>::PLUS_Y, Unit::<Vector2>::MINUS_Y);
    }
}
