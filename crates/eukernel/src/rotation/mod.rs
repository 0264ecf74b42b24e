//! Rigid rotations in 3D space.
//!
//! Every rotation, and every sequence of rotations, reduces to a single
//! rotation by some angle about some axis. [`Rotation3`] exposes that pair in
//! a canonical form, so two rotations with the same effect report the same
//! axis and angle no matter how they were constructed:
//!
//! - The angle is in the range `[0, π]`. A rotation by more than `π` is
//!   reported as the shorter rotation about the opposite axis.
//! - The axis is a unit vector. When the angle is exactly `π`, the first
//!   nonzero component of the axis is positive.
//! - The identity rotation has no meaningful axis, so it reports +X.

use std::fmt;

use crate::{
    EuclideanVector, Float, HyperplaneTransform, Plane, Precision, SubPlane, Transform,
    TransformError, Unit, Vector3,
};

mod axis_angle;
mod quaternion;

pub use axis_angle::AxisAngleRotation;
pub use quaternion::QuaternionRotation;

/// Rotation in 3D Euclidean space, exposed as a single canonical axis/angle
/// pair.
///
/// Rotations act on points through [`Transform`]. They also implement
/// [`HyperplaneTransform`], but always refuse to transform hyperplanes or
/// sub-hyperplanes with a [`TransformError`].
pub trait Rotation3: fmt::Debug + Transform<Point = Vector3> {
    /// Returns the axis of rotation as a unit vector.
    ///
    /// For the identity rotation this is +X.
    fn axis(&self) -> Unit<Vector3>;

    /// Returns the angle of rotation in radians, in the range `[0, π]`.
    ///
    /// Rotating by this angle counterclockwise about [`Rotation3::axis()`]
    /// (right-hand rule) reproduces the rotation.
    fn angle(&self) -> Float;

    /// Returns the inverse rotation. Composing a rotation with its inverse in
    /// either order gives the identity.
    #[must_use]
    fn inverse(&self) -> Self
    where
        Self: Sized;

    /// Returns the canonical axis and angle together.
    fn axis_angle(&self) -> (Unit<Vector3>, Float) {
        (self.axis(), self.angle())
    }
}

impl<R: Rotation3> HyperplaneTransform for R {
    type Hyperplane = Plane;
    type SubHyperplane = SubPlane;

    fn apply_hyperplane(&self, _hyperplane: &Plane) -> Result<Plane, TransformError> {
        log::debug!("refusing to transform a hyperplane by {self:?}");
        Err(TransformError::UnsupportedHyperplane)
    }

    fn apply_sub_hyperplane(
        &self,
        _sub: &SubPlane,
        _original: &Plane,
        _transformed: &Plane,
    ) -> Result<SubPlane, TransformError> {
        log::debug!("refusing to transform a sub-hyperplane by {self:?}");
        Err(TransformError::UnsupportedSubHyperplane)
    }
}

/// Returns whether a rotation is approximately the identity.
pub fn is_identity(rotation: &impl Rotation3, prec: Precision) -> bool {
    prec.eq_zero(rotation.angle())
}

/// Returns the canonical axis to report for a rotation by `angle` about
/// `axis`. `angle` must already be in the range `[0, π]`.
fn canonical_axis(axis: Unit<Vector3>, angle: Float) -> Unit<Vector3> {
    if angle == 0.0 {
        Unit::<Vector3>::PLUS_X
    } else if angle == std::f64::consts::PI && has_negative_leading_component(*axis) {
        -axis
    } else {
        axis
    }
}

/// Returns whether the first nonzero component of `v` is negative.
fn has_negative_leading_component(v: Vector3) -> bool {
    [v.x, v.y, v.z]
        .into_iter()
        .find(|&c| c != 0.0)
        .is_some_and(|c| c < 0.0)
}

/// Rotates `v` by `angle` about `axis` using Rodrigues' rotation formula.
fn rotate_about_axis(v: Vector3, axis: Unit<Vector3>, angle: Float) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    let k = *axis;
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}
