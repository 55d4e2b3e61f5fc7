//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// An opaque line segment defined by two endpoints.
///
/// Orientation carries no meaning for occlusion; `start` and `end` may be
/// given in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns both endpoints.
    #[inline]
    pub fn endpoints(self) -> [Point2<F>; 2] {
        [self.start, self.end]
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.start.lerp(self.end, t_clamped), t_clamped)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Returns `true` if the segment is degenerate (start equals end within epsilon).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.start.distance_squared(self.end) <= eps * eps
    }

    /// Returns `true` if both endpoints are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Returns `true` if this segment and `other` cross at a single interior point.
    ///
    /// Touching at an endpoint or overlapping collinearly does not count.
    pub fn crosses(self, other: Self) -> bool {
        let d = self.direction();
        let e = other.direction();

        let d1 = e.cross(self.start - other.start);
        let d2 = e.cross(self.end - other.start);
        let d3 = d.cross(other.start - self.start);
        let d4 = d.cross(other.end - self.start);

        d1 * d2 < F::zero() && d3 * d4 < F::zero()
    }

    /// Intersects the segment with the circle of `radius` around `center`.
    ///
    /// Returns `(point, t)` pairs with `t` in [0, 1], ordered by `t`. A
    /// tangent segment yields a single point.
    pub fn intersect_circle(self, center: Point2<F>, radius: F) -> Vec<(Point2<F>, F)> {
        let d = self.direction();
        let oc = self.start - center;

        let a = d.magnitude_squared();
        if a <= F::epsilon() {
            return Vec::new();
        }
        let b = F::from(2.0).unwrap() * oc.dot(d);
        let c = oc.magnitude_squared() - radius * radius;

        let discriminant = b * b - F::from(4.0).unwrap() * a * c;
        if discriminant < F::zero() {
            return Vec::new();
        }

        let sqrt_disc = discriminant.sqrt();
        let two_a = F::from(2.0).unwrap() * a;
        let t1 = (-b - sqrt_disc) / two_a;
        let t2 = (-b + sqrt_disc) / two_a;

        let on_segment = |t: F| t >= F::zero() && t <= F::one();
        let mut results = Vec::with_capacity(2);
        if on_segment(t1) {
            results.push((self.start.lerp(self.end, t1), t1));
        }
        if on_segment(t2) && discriminant > F::epsilon() {
            results.push((self.start.lerp(self.end, t2), t2));
        }
        results
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
