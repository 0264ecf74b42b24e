//! Oriented lines and line segments in 2D.

use approx::AbsDiffEq;
use itertools::Itertools;

use crate::{EuclideanVector, Float, PointWhichSide, Precision, Unit, Vector2};

/// Oriented line in 2D Euclidean space.
///
/// The line is stored as a unit direction vector and the signed offset of the
/// origin from the line. Positions along the line are measured by their
/// _abscissa_: the dot product of a point with the direction vector. Positions
/// off the line are measured by their _offset_, which is positive on the
/// right-hand side of the line (the side [`Line::offset_direction()`] points
/// toward).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    direction: Unit<Vector2>,
    origin_offset: Float,
}

impl AbsDiffEq for Line {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.direction.abs_diff_eq(&other.direction, epsilon)
            && self.origin_offset.abs_diff_eq(&other.origin_offset, epsilon)
    }
}

impl Line {
    /// Constructs a line through `point` pointing along `direction`. Returns
    /// `None` if `direction` is zero.
    ///
    /// The direction vector need not be normalized.
    pub fn from_point_and_direction(point: Vector2, direction: Vector2) -> Option<Self> {
        Some(Self::from_point_and_unit_direction(
            point,
            direction.normalize()?,
        ))
    }
    /// Constructs a line through `point` pointing along `direction`.
    pub fn from_point_and_unit_direction(point: Vector2, direction: Unit<Vector2>) -> Self {
        Self {
            direction,
            origin_offset: direction.signed_area(point),
        }
    }
    /// Constructs a line through `point` at `angle` radians counterclockwise
    /// from +X.
    pub fn from_point_and_angle(point: Vector2, angle: Float) -> Self {
        Self::from_point_and_unit_direction(point, Unit::<Vector2>::from_angle(angle))
    }
    /// Constructs a line through two points, directed from `p1` to `p2`.
    /// Returns `None` if the points are equivalent.
    pub fn from_points(p1: Vector2, p2: Vector2, prec: Precision) -> Option<Self> {
        let delta = p2 - p1;
        if prec.eq_zero(delta.mag()) {
            return None;
        }
        Self::from_point_and_direction(p1, delta)
    }

    /// Returns the direction of the line.
    pub fn direction(&self) -> Unit<Vector2> {
        self.direction
    }
    /// Returns the unit normal pointing toward positive offsets, which is the
    /// direction rotated clockwise by 90 degrees.
    pub fn offset_direction(&self) -> Unit<Vector2> {
        Unit::new_unchecked(Vector2::new(self.direction.y, -self.direction.x))
    }
    /// Returns the offset of the origin from the line.
    pub fn origin_offset(&self) -> Float {
        self.origin_offset
    }
    /// Returns the angle of the direction in radians, in the range `[0, 2π)`.
    pub fn angle(&self) -> Float {
        self.direction
            .y
            .atan2(self.direction.x)
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Returns the position of the projection of `point` along the line.
    pub fn abscissa(&self, point: Vector2) -> Float {
        self.direction.dot(point)
    }
    /// Returns the point at `abscissa` along the line and `offset` from it.
    pub fn point_at(&self, abscissa: Float, offset: Float) -> Vector2 {
        *self.direction * abscissa + *self.offset_direction() * (offset - self.origin_offset)
    }
    /// Returns the signed perpendicular distance of `point` from the line.
    pub fn offset(&self, point: Vector2) -> Float {
        self.origin_offset - self.direction.signed_area(point)
    }
    /// Returns the location of a point relative to the line. The inside is on
    /// the left.
    pub fn location_of_point(&self, point: Vector2, prec: Precision) -> PointWhichSide {
        PointWhichSide::from_signed_offset(self.offset(point), prec)
    }
    /// Returns whether the line contains `point`.
    pub fn contains(&self, point: Vector2, prec: Precision) -> bool {
        prec.eq_zero(self.offset(point))
    }
    /// Returns the closest point on the line to `point`.
    pub fn project(&self, point: Vector2) -> Vector2 {
        self.point_at(self.abscissa(point), 0.0)
    }

    /// Returns the point where two lines cross, or `None` if they are
    /// parallel.
    pub fn intersection(&self, other: &Line) -> Option<Vector2> {
        let area = self.direction.signed_area(*other.direction);
        if area == 0.0 {
            return None;
        }
        let x = (self.origin_offset * other.direction.x - other.origin_offset * self.direction.x)
            / area;
        let y = (self.origin_offset * other.direction.y - other.origin_offset * self.direction.y)
            / area;
        (x.is_finite() && y.is_finite()).then_some(Vector2::new(x, y))
    }
    /// Returns whether two lines are parallel or antiparallel.
    pub fn is_parallel(&self, other: &Line, prec: Precision) -> bool {
        prec.eq_zero(self.direction.signed_area(*other.direction))
    }

    /// Returns the same line with the opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Line {
        Line {
            direction: -self.direction,
            origin_offset: -self.origin_offset,
        }
    }

    /// Returns whether two lines have equivalent directions and positions.
    pub fn is_equivalent(&self, other: &Line, prec: Precision) -> bool {
        prec.eq(self, other)
    }
}

/// Convex subset of a [`Line`] between two abscissas, either of which may be
/// infinite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    line: Line,
    start: Float,
    end: Float,
}

impl Segment {
    /// Constructs a segment of `line` covering the abscissas from `start` to
    /// `end`. Returns `None` if `start > end` or either is NaN.
    pub fn new(line: Line, start: Float, end: Float) -> Option<Self> {
        (start <= end).then_some(Self { line, start, end })
    }
    /// Constructs a segment from `p1` to `p2`. Returns `None` if the points are
    /// equivalent.
    pub fn from_points(p1: Vector2, p2: Vector2, prec: Precision) -> Option<Self> {
        let line = Line::from_points(p1, p2, prec)?;
        Some(Self {
            line,
            start: line.abscissa(p1),
            end: line.abscissa(p2),
        })
    }
    /// Constructs a segment covering the whole line.
    pub fn full(line: Line) -> Self {
        Self {
            line,
            start: Float::NEG_INFINITY,
            end: Float::INFINITY,
        }
    }
    /// Constructs a ray starting at `point` and pointing along `direction`.
    /// Returns `None` if `direction` is zero.
    pub fn ray(point: Vector2, direction: Vector2) -> Option<Self> {
        let line = Line::from_point_and_direction(point, direction)?;
        Some(Self {
            line,
            start: line.abscissa(point),
            end: Float::INFINITY,
        })
    }

    /// Constructs the closed boundary through `vertices` in order, including
    /// the segment from the last vertex back to the first. Counterclockwise
    /// vertices give a boundary whose offset directions point outward.
    ///
    /// Returns `None` if any two consecutive vertices are equivalent.
    pub fn polygon(vertices: &[Vector2], prec: Precision) -> Option<Vec<Segment>> {
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| Segment::from_points(a, b, prec))
            .collect()
    }

    /// Returns the line containing the segment.
    pub fn line(&self) -> &Line {
        &self.line
    }
    /// Returns the abscissa of the start of the segment.
    pub fn start(&self) -> Float {
        self.start
    }
    /// Returns the abscissa of the end of the segment.
    pub fn end(&self) -> Float {
        self.end
    }
    /// Returns the start point, or `None` if the segment is unbounded at the
    /// start.
    pub fn start_point(&self) -> Option<Vector2> {
        self.start
            .is_finite()
            .then(|| self.line.point_at(self.start, 0.0))
    }
    /// Returns the end point, or `None` if the segment is unbounded at the
    /// end.
    pub fn end_point(&self) -> Option<Vector2> {
        self.end.is_finite().then(|| self.line.point_at(self.end, 0.0))
    }
    /// Returns whether either end of the segment is unbounded.
    pub fn is_infinite(&self) -> bool {
        self.start.is_infinite() || self.end.is_infinite()
    }

    /// Returns whether `abscissa` along the line lies within the segment.
    pub fn contains_abscissa(&self, abscissa: Float, prec: Precision) -> bool {
        prec.gt_eq(abscissa, self.start) && prec.lt_eq(abscissa, self.end)
    }
    /// Returns whether the segment contains `point`.
    pub fn contains(&self, point: Vector2, prec: Precision) -> bool {
        self.line.contains(point, prec) && self.contains_abscissa(self.line.abscissa(point), prec)
    }
    /// Returns the point where `line` crosses the segment, or `None` if it
    /// does not cross it or is parallel to it.
    pub fn intersection(&self, line: &Line, prec: Precision) -> Option<Vector2> {
        let point = self.line.intersection(line)?;
        self.contains_abscissa(self.line.abscissa(point), prec)
            .then_some(point)
    }

    /// Returns the same segment with the opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Segment {
        Segment {
            line: self.line.reverse(),
            start: -self.end,
            end: -self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::APPROX;

    #[test]
    fn test_line_queries() {
        let line = Line::from_points(Vector2::new(0.0, 1.0), Vector2::new(2.0, 1.0), APPROX)
            .unwrap();
        assert_eq!(line.direction(), Unit::<Vector2>::PLUS_X);
        assert_eq!(line.offset_direction(), Unit::<Vector2>::MINUS_Y);
        assert_approx_eq!(line.origin_offset(), 1.0);
        assert_approx_eq!(line.angle(), 0.0);

        assert_approx_eq!(line.abscissa(Vector2::new(3.0, 7.0)), 3.0);
        assert_approx_eq!(line.offset(Vector2::new(3.0, 7.0)), -6.0);
        assert_approx_eq!(line.offset(Vector2::new(3.0, 0.0)), 1.0);
        assert_approx_eq!(line.point_at(4.0, 0.0), Vector2::new(4.0, 1.0));
        assert_approx_eq!(line.point_at(4.0, 2.0), Vector2::new(4.0, -1.0));
        assert_approx_eq!(line.project(Vector2::new(-2.0, 5.0)), Vector2::new(-2.0, 1.0));

        assert!(line.contains(Vector2::new(100.0, 1.0), APPROX));
        assert!(!line.contains(Vector2::new(100.0, 1.1), APPROX));
        assert_eq!(
            line.location_of_point(Vector2::new(0.0, 5.0), APPROX),
            PointWhichSide::Inside,
        );
        assert_eq!(
            line.location_of_point(Vector2::new(0.0, -5.0), APPROX),
            PointWhichSide::Outside,
        );
        assert_eq!(
            line.location_of_point(Vector2::new(9.0, 1.0), APPROX),
            PointWhichSide::On,
        );
    }

    #[test]
    fn test_line_degenerate() {
        let p = Vector2::new(1.0, 1.0);
        assert_eq!(Line::from_points(p, p, APPROX), None);
        assert_eq!(Line::from_point_and_direction(p, Vector2::ZERO), None);
    }

    #[test]
    fn test_line_angle() {
        let line = Line::from_point_and_angle(Vector2::ZERO, -FRAC_PI_2);
        assert_approx_eq!(line.angle(), 3.0 * FRAC_PI_2);
        assert_approx_eq!(line.reverse().angle(), FRAC_PI_2);
        assert_approx_eq!(
            Line::from_point_and_angle(Vector2::ZERO, PI).direction(),
            Unit::<Vector2>::MINUS_X,
        );
    }

    #[test]
    fn test_line_reverse() {
        let line =
            Line::from_point_and_direction(Vector2::new(1.0, 2.0), Vector2::new(1.0, 1.0)).unwrap();
        let rev = line.reverse();
        let p = Vector2::new(-3.0, 4.0);
        assert_approx_eq!(rev.abscissa(p), -line.abscissa(p));
        assert_approx_eq!(rev.offset(p), -line.offset(p));
        assert!(!line.is_equivalent(&rev, APPROX));
        assert!(line.is_equivalent(&rev.reverse(), APPROX));
        assert!(line.is_parallel(&rev, APPROX));
    }

    #[test]
    fn test_line_intersection() {
        let horizontal = Line::from_point_and_angle(Vector2::new(0.0, 3.0), 0.0);
        let vertical = Line::from_point_and_angle(Vector2::new(2.0, 0.0), FRAC_PI_2);
        assert_approx_eq!(horizontal.intersection(&vertical).unwrap(), Vector2::new(2.0, 3.0));
        assert_approx_eq!(vertical.intersection(&horizontal).unwrap(), Vector2::new(2.0, 3.0));

        let diagonal =
            Line::from_point_and_direction(Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
        assert_approx_eq!(horizontal.intersection(&diagonal).unwrap(), Vector2::new(4.0, 3.0));

        assert_eq!(horizontal.intersection(&horizontal), None);
        assert_eq!(horizontal.intersection(&horizontal.reverse()), None);
    }

    #[test]
    fn test_segment() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(3.0, 1.0);
        let seg = Segment::from_points(a, b, APPROX).unwrap();
        assert_approx_eq!(seg.start(), 1.0);
        assert_approx_eq!(seg.end(), 3.0);
        assert_approx_eq!(seg.start_point().unwrap(), a);
        assert_approx_eq!(seg.end_point().unwrap(), b);
        assert!(!seg.is_infinite());
        assert!(seg.contains(Vector2::new(2.0, 1.0), APPROX));
        assert!(seg.contains(b, APPROX));
        assert!(!seg.contains(Vector2::new(4.0, 1.0), APPROX));

        let cut = Line::from_point_and_angle(Vector2::new(2.0, 0.0), FRAC_PI_2);
        assert_approx_eq!(seg.intersection(&cut, APPROX).unwrap(), Vector2::new(2.0, 1.0));
        let miss = Line::from_point_and_angle(Vector2::new(5.0, 0.0), FRAC_PI_2);
        assert_eq!(seg.intersection(&miss, APPROX), None);

        let rev = seg.reverse();
        assert_approx_eq!(rev.start_point().unwrap(), b);
        assert_approx_eq!(rev.end_point().unwrap(), a);

        assert_eq!(Segment::new(*seg.line(), 2.0, 1.0), None);
        assert_eq!(Segment::new(*seg.line(), Float::NAN, 1.0), None);
    }

    #[test]
    fn test_unbounded_segments() {
        let ray = Segment::ray(Vector2::new(1.0, 0.0), Vector2::new(0.0, 2.0)).unwrap();
        assert!(ray.is_infinite());
        assert_approx_eq!(ray.start_point().unwrap(), Vector2::new(1.0, 0.0));
        assert_eq!(ray.end_point(), None);
        assert!(ray.contains(Vector2::new(1.0, 1e9), APPROX));
        assert!(!ray.contains(Vector2::new(1.0, -1.0), APPROX));

        let full = Segment::full(*ray.line());
        assert_eq!(full.start_point(), None);
        assert!(full.contains(Vector2::new(1.0, -1e9), APPROX));
    }

    #[test]
    fn test_polygon() {
        let square = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        let sides = Segment::polygon(&square, APPROX).unwrap();
        assert_eq!(sides.len(), 4);
        let center = Vector2::new(0.5, 0.5);
        for side in &sides {
            assert_eq!(
                side.line().location_of_point(center, APPROX),
                PointWhichSide::Inside,
            );
        }
        assert_approx_eq!(sides[3].end_point().unwrap(), square[0]);

        let degenerate = [square[0], square[0], square[1]];
        assert_eq!(Segment::polygon(&degenerate, APPROX), None);
    }
}
