//! Transform capabilities.
//!
//! Every transform acts on points. Acting on hyperplanes is a separate,
//! narrower capability: a transform may implement [`HyperplaneTransform`] and
//! still refuse with a [`TransformError`], which is what every
//! [`crate::Rotation3`] does.

use crate::{Plane, SubPlane, TransformError, Vector3};

/// Geometric transform over points.
pub trait Transform {
    /// Type of point that the transform acts on.
    type Point;

    /// Applies the transform to a point.
    fn apply(&self, point: Self::Point) -> Self::Point;
}

/// Transform that can be asked to act on hyperplanes and on bounded pieces of
/// hyperplanes.
pub trait HyperplaneTransform: Transform {
    /// Hyperplane type in the transform's space.
    type Hyperplane;
    /// Bounded piece of a hyperplane, stored in the hyperplane's own
    /// coordinates.
    type SubHyperplane;

    /// Applies the transform to a hyperplane.
    fn apply_hyperplane(
        &self,
        hyperplane: &Self::Hyperplane,
    ) -> Result<Self::Hyperplane, TransformError>;

    /// Applies the transform to a piece of `original`, returning the piece of
    /// `transformed` that it maps to. `transformed` must be the image of
    /// `original` under this transform.
    fn apply_sub_hyperplane(
        &self,
        sub: &Self::SubHyperplane,
        original: &Self::Hyperplane,
        transformed: &Self::Hyperplane,
    ) -> Result<Self::SubHyperplane, TransformError>;
}

/// Translation in 3D space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Translation3 {
    delta: Vector3,
}

impl Translation3 {
    /// Constructs a translation by `delta`.
    pub fn new(delta: Vector3) -> Self {
        Self { delta }
    }
    /// Returns the displacement of every point.
    pub fn delta(&self) -> Vector3 {
        self.delta
    }
    /// Returns the translation in the opposite direction.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(-self.delta)
    }
}

impl Transform for Translation3 {
    type Point = Vector3;

    fn apply(&self, point: Vector3) -> Vector3 {
        point + self.delta
    }
}

impl HyperplaneTransform for Translation3 {
    type Hyperplane = Plane;
    type SubHyperplane = SubPlane;

    fn apply_hyperplane(&self, hyperplane: &Plane) -> Result<Plane, TransformError> {
        Ok(hyperplane.translate(self.delta))
    }

    fn apply_sub_hyperplane(
        &self,
        sub: &SubPlane,
        original: &Plane,
        transformed: &Plane,
    ) -> Result<SubPlane, TransformError> {
        let vertices = sub
            .vertices()
            .iter()
            .map(|&q| transformed.to_subspace(self.apply(original.to_space(q))))
            .collect();
        Ok(SubPlane::new(*transformed, vertices))
    }
}
