use std::fmt;

use approx::AbsDiffEq;

use super::{Rotation3, canonical_axis};
use crate::{APPROX, EuclideanVector, Float, Transform, Unit, Vector3};

/// Dot product between two normalized vectors below which they are treated
/// as nearly antiparallel when constructing a rotation between them.
const ANTIPARALLEL_DOT_THRESHOLD: Float = -0.999;

/// Dot product between two quaternions above which [`QuaternionRotation::slerp()`]
/// falls back to normalized linear interpolation.
const NLERP_THRESHOLD: Float = 0.9995;

/// Rotation represented by a unit quaternion.
///
/// The quaternion is always stored in positive polar form: `w >= 0`, and if
/// `w == 0` then the first nonzero component of `(x, y, z)` is positive. Since
/// `q` and `-q` describe the same rotation, this makes the representation
/// unique.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuaternionRotation {
    w: Float,
    x: Float,
    y: Float,
    z: Float,
}

impl Default for QuaternionRotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for QuaternionRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { w, x, y, z } = self;
        write!(f, "{w} + {x}i + {y}j + {z}k")
    }
}

impl AbsDiffEq for QuaternionRotation {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        // `q` and `-q` represent the same rotation
        let [a, b] = [self.components(), other.components()];
        let same = std::iter::zip(a, b).all(|(a, b)| a.abs_diff_eq(&b, epsilon));
        let opposite = std::iter::zip(a, b).all(|(a, b)| a.abs_diff_eq(&-b, epsilon));
        same || opposite
    }
}

impl QuaternionRotation {
    /// Identity rotation.
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Returns the identity rotation.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Constructs a rotation from the components of a quaternion, normalizing
    /// it first. Returns `None` if the quaternion is zero or not finite.
    pub fn from_quaternion(w: Float, x: Float, y: Float, z: Float) -> Option<Self> {
        // Rescale by the largest component so the squares stay representable.
        let scale = [w, x, y, z].into_iter().map(Float::abs).fold(0.0, Float::max);
        let [w, x, y, z] = [w, x, y, z].map(|c| c / scale);
        let mag = (w * w + x * x + y * y + z * z).sqrt();
        let mult = mag.recip();
        (mag.is_finite() && mult.is_finite())
            .then(|| Self::from_normalized(w * mult, x * mult, y * mult, z * mult))
    }

    /// Puts an already-normalized quaternion into positive polar form.
    fn from_normalized(w: Float, x: Float, y: Float, z: Float) -> Self {
        let negate = w < 0.0
            || (w == 0.0 && super::has_negative_leading_component(Vector3::new(x, y, z)));
        let s = if negate { -1.0 } else { 1.0 };
        Self {
            // `abs()` also turns `-0.0` into `0.0`
            w: (w * s).abs(),
            x: x * s,
            y: y * s,
            z: z * s,
        }
    }

    /// Constructs a rotation by `angle` radians counterclockwise about `axis`
    /// (right-hand rule). Any finite angle is accepted.
    ///
    /// Returns `None` if `axis` is zero or `angle` is not finite.
    pub fn from_axis_angle(axis: Vector3, angle: Float) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }
        Some(Self::from_unit_axis_angle(axis.normalize()?, angle))
    }

    /// Constructs a rotation by a finite `angle` about a unit `axis`.
    pub(super) fn from_unit_axis_angle(axis: Unit<Vector3>, angle: Float) -> Self {
        let (sin, cos) = (angle / 2.0).sin_cos();
        Self::from_normalized(cos, axis.x * sin, axis.y * sin, axis.z * sin)
    }

    /// Constructs the smallest rotation that takes the direction of `from` to
    /// the direction of `to`.
    ///
    /// When the vectors are antiparallel, the rotation is by `π` about an
    /// arbitrary axis perpendicular to `from`.
    ///
    /// Returns `None` if either vector is zero or not finite.
    pub fn from_vector_to_vector(from: Vector3, to: Vector3) -> Option<Self> {
        let u = from.normalize()?;
        let v = to.normalize()?;
        let dot = u.dot(*v);
        let cross = u.cross(*v);

        if dot < ANTIPARALLEL_DOT_THRESHOLD {
            // nearly antiparallel; the half-vector is ill-conditioned
            let sin = cross.mag();
            let axis = if APPROX.eq_zero(sin) {
                u.orthogonal()?
            } else {
                cross.normalize()?
            };
            return Some(Self::from_unit_axis_angle(axis, sin.atan2(dot)));
        }

        Self::from_quaternion(1.0 + dot, cross.x, cross.y, cross.z)
    }

    /// Returns the quaternion components `[w, x, y, z]`.
    pub fn components(&self) -> [Float; 4] {
        [self.w, self.x, self.y, self.z]
    }
    /// Returns the vector part `(x, y, z)` of the quaternion.
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
    /// Returns the scalar part `w` of the quaternion.
    pub fn scalar_part(&self) -> Float {
        self.w
    }

    /// Returns the rotation that applies `self` and then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.hamilton_product(self)
    }

    fn hamilton_product(&self, rhs: &Self) -> Self {
        let [aw, ax, ay, az] = self.components();
        let [bw, bx, by, bz] = rhs.components();
        let product = Self::from_quaternion(
            aw * bw - ax * bx - ay * by - az * bz,
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
        );
        product.unwrap_or_else(|| {
            debug_panic!("product of unit quaternions {self} and {rhs} is degenerate");
            Self::IDENTITY
        })
    }

    /// Returns the 4D dot product of two quaternions.
    pub fn dot(&self, other: &Self) -> Float {
        std::iter::zip(self.components(), other.components())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Spherically interpolates between two rotations along the shortest path.
    /// `t = 0` gives `self` and `t = 1` gives `other`.
    #[must_use]
    pub fn slerp(&self, other: &Self, t: Float) -> Self {
        let dot = self.dot(other);
        // Taking the absolute value here ensures we take the shortest path.
        let sign = dot.signum();
        let dot = dot.abs();

        if dot > NLERP_THRESHOLD {
            return self.nlerp(other, t);
        }

        let angle = dot.clamp(-1.0, 1.0).acos();
        // Normalization divides out `sin(angle)`.
        let scale1 = (angle * (1.0 - t)).sin();
        let scale2 = (angle * t).sin() * sign;
        self.weighted_sum(scale1, other, scale2)
            .unwrap_or(if t < 0.5 { *self } else { *other })
    }

    /// Normalized linear interpolation between two rotations.
    fn nlerp(&self, other: &Self, t: Float) -> Self {
        let sign = self.dot(other).signum();
        self.weighted_sum(1.0 - t, other, t * sign)
            .unwrap_or(if t < 0.5 { *self } else { *other })
    }

    fn weighted_sum(&self, a: Float, other: &Self, b: Float) -> Option<Self> {
        let [w, x, y, z] = std::array::from_fn(|i| {
            self.components()[i] * a + other.components()[i] * b
        });
        Self::from_quaternion(w, x, y, z)
    }

    /// Returns the rotation as a row-major 3x3 matrix that acts on column
    /// vectors.
    pub fn to_matrix(&self) -> [[Float; 3]; 3] {
        let Self { w, x, y, z } = *self;
        [
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ]
    }
}

impl Transform for QuaternionRotation {
    type Point = Vector3;

    fn apply(&self, point: Vector3) -> Vector3 {
        let q = self.vector_part();
        let t = q.cross(point) * 2.0;
        point + t * self.w + q.cross(t)
    }
}

impl Rotation3 for QuaternionRotation {
    fn axis(&self) -> Unit<Vector3> {
        // The vector part already has canonical sign, except at the identity
        // where it vanishes.
        match self.vector_part().normalize() {
            Some(axis) => canonical_axis(axis, self.angle()),
            None => Unit::<Vector3>::PLUS_X,
        }
    }

    fn angle(&self) -> Float {
        2.0 * self.vector_part().mag().atan2(self.w)
    }

    fn inverse(&self) -> Self {
        Self::from_normalized(self.w, -self.x, -self.y, -self.z)
    }
}
