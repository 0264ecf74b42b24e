//! Enums for which side of an oriented line or plane contains a point.

use std::ops::Neg;

/// Position of a point relative to an oriented manifold that divides space.
///
/// The "inside" is the side opposite the manifold's normal (negative offset),
/// and the "outside" is the side the normal points toward (positive offset).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointWhichSide {
    /// The point is on the manifold between inside and outside.
    On,
    /// The point is on the "inside" space relative to the manifold.
    Inside,
    /// The point is on the "outside" space relative to the manifold.
    Outside,
}

impl Neg for PointWhichSide {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            PointWhichSide::Inside => PointWhichSide::Outside,
            PointWhichSide::Outside => PointWhichSide::Inside,
            other => other,
        }
    }
}

impl PointWhichSide {
    /// Returns the location of a point based on its signed offset from a
    /// manifold.
    pub fn from_signed_offset(offset: crate::Float, prec: crate::Precision) -> Self {
        match prec.cmp(offset, 0.0) {
            std::cmp::Ordering::Less => PointWhichSide::Inside,
            std::cmp::Ordering::Equal => PointWhichSide::On,
            std::cmp::Ordering::Greater => PointWhichSide::Outside,
        }
    }
}
