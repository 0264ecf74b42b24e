//! Intersections of a line with a boundary, and their canonical ordering.
//!
//! A linecast walks along a line and reports every place where it crosses a
//! boundary as a [`LinecastPoint`]. Points are ordered by their position along
//! the line, then by their boundary normal, so that coincident crossings (such
//! as a line passing exactly through a polygon vertex) always come out in the
//! same order.

use std::cmp::Ordering;
use std::fmt;

use approx::AbsDiffEq;
use crate::vector::total_float_cmp;
use crate::{EuclideanVector, Float, Line, Precision, Segment, Unit, Vector2};


/// Line-like object that assigns a position to every point in its space.
pub trait Embedding: fmt::Debug + Copy {
    /// Point type in the space containing the line.
    type Point: EuclideanVector;

    /// Returns the position of the projection of `point` along the line.
    fn abscissa(&self, point: Self::Point) -> Float;
}

impl Embedding for Line {
    type Point = Vector2;

    fn abscissa(&self, point: Vector2) -> Float {
        Line::abscissa(self, point)
    }
}

/// Point where a line crosses a boundary, along with the boundary's unit
/// normal at that point.
///
/// Equality is structural. Use [`abscissa_order()`] to sort points along the
/// line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinecastPoint<L: Embedding> {
    point: L::Point,
    normal: Unit<L::Point>,
    line: L,
    abscissa: Float,
}

/// Linecast point in 2D.
pub type LinecastPoint2 = LinecastPoint<Line>;

impl<L: Embedding> LinecastPoint<L> {
    /// Constructs a linecast point, normalizing `normal`. Returns `None` if
    /// `normal` is zero or not finite.
    pub fn new(point: L::Point, normal: L::Point, line: L) -> Option<Self> {
        Some(Self::from_unit_normal(point, normal.normalize()?, line))
    }
    /// Constructs a linecast point from a normal that is already normalized.
    pub fn from_unit_normal(point: L::Point, normal: Unit<L::Point>, line: L) -> Self {
        Self {
            point,
            normal,
            line,
            abscissa: line.abscissa(point) + 0.0,
        }
    }

    /// Returns the intersection point.
    pub fn point(&self) -> L::Point {
        self.point
    }
    /// Returns the unit normal of the boundary at the intersection point.
    pub fn normal(&self) -> Unit<L::Point> {
        self.normal
    }
    /// Returns the line that was cast.
    pub fn line(&self) -> &L {
        &self.line
    }
    /// Returns the position of the intersection point along the line.
    pub fn abscissa(&self) -> Float {
        self.abscissa
    }
}

impl<L: Embedding + AbsDiffEq<Epsilon = Float>> LinecastPoint<L> {
    /// Returns whether two linecast points have equivalent points, normals,
    /// and lines.
    pub fn is_equivalent(&self, other: &Self, prec: Precision) -> bool {
        prec.eq(&self.point, &other.point)
            && prec.eq(&self.normal, &other.normal)
            && prec.eq(&self.line, &other.line)
    }
}

/// Compares two linecast points on the same line by abscissa, then by normal
/// in coordinate-ascending order.
///
/// Abscissas are compared exactly, not within a tolerance, so this is a total
/// order suitable for sorting. `-0.0` and `0.0` compare equal, and a NaN
/// abscissa sorts after every other point whatever its sign bit. Normals use
/// [`EuclideanVector::coordinate_ascending_cmp()`], which treats signed zeros
/// and NaN the same way.
///
/// ```
/// use std::cmp::Ordering;
///
/// use eukernel::linecast::{LinecastPoint, abscissa_order};
/// use eukernel::{Line, Unit, Vector2};
///
/// let p = Vector2::new(1.0, 0.0);
/// let line = Line::from_point_and_unit_direction(p, Unit::<Vector2>::PLUS_X);
/// let up = LinecastPoint::new(p, Vector2::new(0.0, 1.0), line).unwrap();
/// let right = LinecastPoint::new(p, Vector2::new(1.0, 0.0), line).unwrap();
/// assert_eq!(abscissa_order(&up, &right), Ordering::Less);
/// ```
pub fn abscissa_order<L: Embedding>(a: &LinecastPoint<L>, b: &LinecastPoint<L>) -> Ordering {
    total_float_cmp(a.abscissa, b.abscissa)
        .then_with(|| a.normal.coordinate_ascending_cmp(&b.normal))
}

/// Sorts linecast points using [`abscissa_order()`].
pub fn sort_by_abscissa<L: Embedding>(points: &mut [LinecastPoint<L>]) {
    points.sort_by(abscissa_order);
}

/// Sorts linecast points using [`abscissa_order()`] and removes each point
/// that is equivalent to the one before it.
pub fn sort_and_filter<L>(points: &mut Vec<LinecastPoint<L>>, prec: Precision)
where
    L: Embedding + AbsDiffEq<Epsilon = Float>,
{
    sort_by_abscissa(points);
    let len = points.len();
    points.dedup_by(|b, a| b.is_equivalent(a, prec));
    if points.len() < len {
        log::trace!("dropped {} duplicate linecast points", len - points.len());
    }
}

/// Boundary in 2D that can be intersected with a line segment.
pub trait Linecastable2 {
    /// Returns every point where `segment` crosses the boundary, sorted with
    /// [`abscissa_order()`] along the segment's line.
    fn linecast(&self, segment: &Segment, prec: Precision) -> Vec<LinecastPoint2>;

    /// Returns the first point where `segment` crosses the boundary, or
    /// `None` if it does not cross it.
    fn linecast_first(&self, segment: &Segment, prec: Precision) -> Option<LinecastPoint2> {
        self.linecast(segment, prec).into_iter().next()
    }
}

/// A single segment is a boundary face whose normal is the offset direction
/// of its line.
impl Linecastable2 for Segment {
    fn linecast(&self, segment: &Segment, prec: Precision) -> Vec<LinecastPoint2> {
        let line = *segment.line();
        let hit = line.intersection(self.line()).filter(|&p| {
            self.contains_abscissa(self.line().abscissa(p), prec)
                && segment.contains_abscissa(line.abscissa(p), prec)
        });
        hit.map(|p| LinecastPoint::from_unit_normal(p, self.line().offset_direction(), line))
            .into_iter()
            .collect()
    }
}

impl Linecastable2 for [Segment] {
    fn linecast(&self, segment: &Segment, prec: Precision) -> Vec<LinecastPoint2> {
        let mut points: Vec<LinecastPoint2> = self
            .iter()
            .flat_map(|face| face.linecast(segment, prec))
            .collect();
        sort_and_filter(&mut points, prec);
        points
    }

    fn linecast_first(&self, segment: &Segment, prec: Precision) -> Option<LinecastPoint2> {
        self.iter()
            .filter_map(|face| face.linecast_first(segment, prec))
            .min_by(abscissa_order)
    }
}

impl Linecastable2 for Vec<Segment> {
    fn linecast(&self, segment: &Segment, prec: Precision) -> Vec<LinecastPoint2> {
        self.as_slice().linecast(segment, prec)
    }

    fn linecast_first(&self, segment: &Segment, prec: Precision) -> Option<LinecastPoint2> {
        self.as_slice().linecast_first(segment, prec)
    }
}
