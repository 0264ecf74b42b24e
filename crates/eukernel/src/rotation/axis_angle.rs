use std::f64::consts::{PI, TAU};
use std::fmt;

use approx::AbsDiffEq;

use super::{QuaternionRotation, Rotation3, canonical_axis, rotate_about_axis};
use crate::{EuclideanVector, Float, Transform, Unit, Vector3};

/// Rotation stored directly as its canonical axis and angle.
///
/// Applying it uses Rodrigues' rotation formula, so no quaternion is ever
/// constructed. Convert to [`QuaternionRotation`] to compose rotations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngleRotation {
    axis: Unit<Vector3>,
    angle: Float,
}

impl Default for AxisAngleRotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AxisAngleRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad about {}", self.angle, self.axis)
    }
}

impl AbsDiffEq for AxisAngleRotation {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        // The axis is arbitrary near the identity and its sign is arbitrary
        // near a half turn, so compare the rotations themselves.
        QuaternionRotation::from(*self).abs_diff_eq(&QuaternionRotation::from(*other), epsilon)
    }
}

impl AxisAngleRotation {
    /// Returns the identity rotation.
    pub fn identity() -> Self {
        Self {
            axis: Unit::<Vector3>::PLUS_X,
            angle: 0.0,
        }
    }

    /// Constructs a rotation by `angle` radians counterclockwise about `axis`
    /// (right-hand rule). The angle is reduced into `[0, π]`, reversing the
    /// axis if necessary.
    ///
    /// Returns `None` if `axis` is zero or `angle` is not finite.
    pub fn new(axis: Vector3, angle: Float) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }
        Some(Self::from_unit_axis_angle(axis.normalize()?, angle))
    }

    fn from_unit_axis_angle(axis: Unit<Vector3>, angle: Float) -> Self {
        let mut angle = angle.rem_euclid(TAU);
        let mut axis = axis;
        if angle > PI {
            angle = TAU - angle;
            axis = -axis;
        }
        if angle == 0.0 {
            return Self::identity();
        }
        Self {
            axis: canonical_axis(axis, angle),
            angle,
        }
    }
}

impl Transform for AxisAngleRotation {
    type Point = Vector3;

    fn apply(&self, point: Vector3) -> Vector3 {
        rotate_about_axis(point, self.axis, self.angle)
    }
}

impl Rotation3 for AxisAngleRotation {
    fn axis(&self) -> Unit<Vector3> {
        self.axis
    }

    fn angle(&self) -> Float {
        self.angle
    }

    fn inverse(&self) -> Self {
        Self::from_unit_axis_angle(self.axis, -self.angle)
    }
}

impl From<QuaternionRotation> for AxisAngleRotation {
    fn from(q: QuaternionRotation) -> Self {
        Self::from_unit_axis_angle(q.axis(), q.angle())
    }
}

impl From<AxisAngleRotation> for QuaternionRotation {
    fn from(r: AxisAngleRotation) -> Self {
        QuaternionRotation::from_unit_axis_angle(r.axis, r.angle)
    }
}
