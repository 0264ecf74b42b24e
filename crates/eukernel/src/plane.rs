//! Planes and bounded pieces of planes in 3D Euclidean space.

use std::fmt;

use approx::AbsDiffEq;

use crate::{
    AXIS_NAMES, EuclideanVector, Float, PointWhichSide, Precision, Unit, Vector2, Vector3,
};

/// Oriented plane in 3D Euclidean space, which is also used to represent a
/// half-space.
///
/// Each plane carries an orthonormal frame `(u, v)` spanning it, which embeds
/// 2D plane coordinates into space. The frame is a deterministic function of
/// the normal vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    /// Normalized normal vector.
    normal: Unit<Vector3>,
    /// Distance from the plane to the origin, perpendicular to the normal
    /// vector.
    distance: Float,
    /// First in-plane basis vector.
    u: Unit<Vector3>,
    /// Second in-plane basis vector, equal to `normal × u`.
    v: Unit<Vector3>,
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = (0..3)
            .filter_map(|i| Some((i, self.normal.get(i)?)))
            .filter(|&(_, x)| x != 0.0)
            .map(|(i, x)| {
                let i = i as usize;
                (&AXIS_NAMES[i..i + 1], x)
            });
        if let Some((axis, coef)) = terms.next() {
            write!(f, "{coef}{axis}")?;
        }
        for (axis, coef) in terms {
            write!(f, " + {coef}{axis}")?;
        }
        write!(f, " = {}", self.distance)
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.distance.abs_diff_eq(&other.distance, epsilon)
    }
}

impl Plane {
    /// Constructs a new plane from a normal vector and a distance. Returns
    /// `None` if `normal` is zero.
    ///
    /// The normal vector need not be normalized.
    pub fn new(normal: Vector3, distance: Float) -> Option<Self> {
        Self::from_unit_normal(normal.normalize()?, distance)
    }
    /// Constructs a new plane from a normal vector and a point that it passes
    /// through. Returns `None` if `normal` is zero.
    pub fn through_point(normal: Vector3, point: Vector3) -> Option<Self> {
        let normal = normal.normalize()?;
        Self::from_unit_normal(normal, normal.dot(point))
    }
    /// Constructs the plane through three points, oriented so that they wind
    /// counterclockwise when viewed from the side the normal points toward.
    /// Returns `None` if the points are collinear.
    pub fn from_points(p1: Vector3, p2: Vector3, p3: Vector3, prec: Precision) -> Option<Self> {
        let normal = (p2 - p1).cross(p3 - p1);
        if prec.eq_zero(normal.mag()) {
            return None;
        }
        Self::through_point(normal, p1)
    }
    fn from_unit_normal(normal: Unit<Vector3>, distance: Float) -> Option<Self> {
        let u = normal.orthogonal()?;
        let v = Unit::new_unchecked(normal.cross(*u));
        Some(Self {
            normal,
            distance,
            u,
            v,
        })
    }

    /// Returns the (normalized) normal vector of the plane.
    pub fn normal(&self) -> Unit<Vector3> {
        self.normal
    }
    /// Returns the distance from the plane to the origin, perpendicular to the
    /// normal vector.
    pub fn distance(&self) -> Float {
        self.distance
    }
    /// Returns the pole of the plane, which is the point on the plane closest
    /// to the origin.
    pub fn pole(&self) -> Vector3 {
        *self.normal * self.distance
    }
    /// Returns the orthonormal in-plane frame `(u, v)`.
    pub fn frame(&self) -> [Unit<Vector3>; 2] {
        [self.u, self.v]
    }

    /// Returns the signed perpendicular distance of a point from the plane.
    pub fn signed_distance_to_point(&self, p: Vector3) -> Float {
        self.normal.dot(p) - self.distance
    }
    /// Returns the location of a point relative to the plane. For positive
    /// distance, the inside of the plane contains the origin.
    pub fn location_of_point(&self, p: Vector3, prec: Precision) -> PointWhichSide {
        PointWhichSide::from_signed_offset(self.signed_distance_to_point(p), prec)
    }
    /// Returns whether the plane contains a point.
    pub fn contains(&self, p: Vector3, prec: Precision) -> bool {
        prec.eq_zero(self.signed_distance_to_point(p))
    }
    /// Returns the closest point on the plane to `p`.
    pub fn project(&self, p: Vector3) -> Vector3 {
        p - *self.normal * self.signed_distance_to_point(p)
    }

    /// Returns the coordinates of the projection of `p` in the plane's frame.
    pub fn to_subspace(&self, p: Vector3) -> Vector2 {
        Vector2::new(self.u.dot(p), self.v.dot(p))
    }
    /// Returns the point in space with coordinates `q` in the plane's frame.
    pub fn to_space(&self, q: Vector2) -> Vector3 {
        *self.u * q.x + *self.v * q.y + self.pole()
    }

    /// Returns a plane in the same location but with the opposite orientation.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
            u: self.v,
            v: self.u,
        }
    }
    /// Returns the same plane moved by `delta`. The in-plane frame keeps its
    /// orientation.
    #[must_use]
    pub fn translate(&self, delta: Vector3) -> Self {
        Self {
            distance: self.distance + self.normal.dot(delta),
            ..*self
        }
    }

    /// Returns whether two planes have equivalent normals and positions.
    pub fn is_equivalent(&self, other: &Plane, prec: Precision) -> bool {
        prec.eq(self, other)
    }
}

/// Convex polygon lying in a [`Plane`], stored in the plane's 2D frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SubPlane {
    plane: Plane,
    vertices: Vec<Vector2>,
}

impl SubPlane {
    /// Constructs a polygon from vertices given in the plane's frame.
    pub fn new(plane: Plane, vertices: Vec<Vector2>) -> Self {
        Self { plane, vertices }
    }
    /// Constructs a polygon from vertices in space, projecting each onto the
    /// plane.
    pub fn from_space_vertices(plane: Plane, vertices: impl IntoIterator<Item = Vector3>) -> Self {
        let vertices = vertices.into_iter().map(|p| plane.to_subspace(p)).collect();
        Self { plane, vertices }
    }

    /// Returns the plane containing the polygon.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }
    /// Returns the vertices of the polygon in the plane's frame.
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }
    /// Returns the vertices of the polygon in space.
    pub fn space_vertices(&self) -> impl '_ + ExactSizeIterator<Item = Vector3> {
        self.vertices.iter().map(|&q| self.plane.to_space(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::APPROX;

    #[test]
    fn test_plane_queries() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 2.0), 3.0).unwrap();
        assert_eq!(plane.normal(), Unit::<Vector3>::PLUS_Z);
        assert_eq!(plane.pole(), Vector3::new(0.0, 0.0, 3.0));
        assert_approx_eq!(plane.signed_distance_to_point(Vector3::new(5.0, 5.0, 1.0)), -2.0);
        assert_eq!(
            plane.location_of_point(Vector3::ZERO, APPROX),
            PointWhichSide::Inside,
        );
        assert_eq!(
            plane.location_of_point(Vector3::new(0.0, 0.0, 4.0), APPROX),
            PointWhichSide::Outside,
        );
        assert!(plane.contains(Vector3::new(-7.0, 2.0, 3.0), APPROX));
        assert_approx_eq!(
            plane.project(Vector3::new(1.0, 2.0, -8.0)),
            Vector3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(plane.to_string(), "1Z = 3");
    }

    #[test]
    fn test_plane_degenerate() {
        assert_eq!(Plane::new(Vector3::ZERO, 1.0), None);
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Plane::from_points(p, p * 2.0, p * 3.0, APPROX),
            None,
            "collinear points",
        );
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            Vector3::new(1.0, 0.0, 2.0),
            Vector3::new(0.0, 1.0, 2.0),
            Vector3::new(0.0, 0.0, 2.0),
            APPROX,
        )
        .unwrap();
        assert_approx_eq!(plane.normal(), Unit::<Vector3>::PLUS_Z);
        assert_approx_eq!(plane.distance(), 2.0);
    }

    #[test]
    fn test_plane_embedding() {
        let plane = Plane::through_point(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 0.0))
            .unwrap();
        let [u, v] = plane.frame();
        assert_approx_eq!(u.dot(*plane.normal()), 0.0);
        assert_approx_eq!(v.dot(*plane.normal()), 0.0);
        assert_approx_eq!(u.dot(*v), 0.0);
        assert_approx_eq!(v.mag(), 1.0);

        let q = Vector2::new(3.0, -2.0);
        let p = plane.to_space(q);
        assert!(plane.contains(p, APPROX));
        assert_approx_eq!(plane.to_subspace(p), q);

        let off_plane = p + *plane.normal() * 5.0;
        assert_approx_eq!(plane.to_subspace(off_plane), q);
    }

    #[test]
    fn test_plane_flip_and_translate() {
        let plane = Plane::new(Vector3::new(1.0, 0.0, 0.0), 2.0).unwrap();
        let flipped = plane.flip();
        let p = Vector3::new(5.0, 1.0, 1.0);
        assert_approx_eq!(
            flipped.signed_distance_to_point(p),
            -plane.signed_distance_to_point(p),
        );
        assert!(plane.is_equivalent(&flipped.flip(), APPROX));
        let q = Vector2::new(1.0, 2.0);
        assert_approx_eq!(
            flipped.to_space(flipped.to_subspace(plane.to_space(q))),
            plane.to_space(q),
        );

        let moved = plane.translate(Vector3::new(3.0, 10.0, 0.0));
        assert_approx_eq!(moved.distance(), 5.0);
        assert_eq!(moved.frame(), plane.frame());
    }

    #[test]
    fn test_sub_plane() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 1.0).unwrap();
        let corners = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 1.0),
        ];
        let triangle = SubPlane::from_space_vertices(plane, corners);
        assert_eq!(triangle.vertices().len(), 3);
        for (expected, actual) in corners.into_iter().zip(triangle.space_vertices()) {
            assert_approx_eq!(expected, actual);
        }
    }
}
