//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use sightfield::primitives::{Ray2, Point2, Vec2, Segment2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let segment = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// let hit = ray.intersect_segment(&segment);
/// assert!(hit.is_some());
/// assert_eq!(hit.unwrap().0.x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a unit-speed ray leaving `origin` at `angle` radians.
    ///
    /// With a unit direction the ray parameter equals the distance travelled.
    #[inline]
    pub fn from_angle(origin: Point2<F>, angle: F) -> Self {
        Self {
            origin,
            direction: Vec2::from_angle(angle),
        }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Intersects this ray with a line segment.
    ///
    /// Returns `Some((point, t_ray, t_segment))` if they intersect, where:
    /// - `point` is the intersection point
    /// - `t_ray` is the parameter along the ray (>= 0)
    /// - `t_segment` is the parameter along the segment (in [0, 1])
    ///
    /// Returns `None` if no intersection or ray is parallel to segment.
    ///
    /// A ray aimed exactly at an endpoint counts as a hit even when rounding
    /// puts `t_segment` a few ulps outside [0, 1]; the returned parameter is
    /// clamped.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F, F)> {
        let seg_dir = segment.direction();

        let cross = self.direction.cross(seg_dir);

        // Parallel, or a zero-length segment
        if cross.abs() < F::epsilon() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        let slack = F::epsilon() * F::from(16.0).unwrap();
        if t_ray >= F::zero() && t_seg >= -slack && t_seg <= F::one() + slack {
            let t_seg = t_seg.max(F::zero()).min(F::one());
            Some((self.point_at(t_ray), t_ray, t_seg))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at() {
        let ray: Ray2<f64> = Ray2::new(Point2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        assert_eq!(ray.point_at(0.0), Point2::new(1.0, 1.0));
        assert_eq!(ray.point_at(1.5), Point2::new(4.0, 1.0));
    }

    #[test]
    fn test_from_angle_is_unit_speed() {
        let ray: Ray2<f64> = Ray2::from_angle(Point2::origin(), std::f64::consts::FRAC_PI_4);
        let p = ray.point_at(2.0);
        assert_relative_eq!(p.distance(Point2::origin()), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_segment_hit() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
        let seg = Segment2::from_coords(5.0, -1.0, 5.0, 3.0);

        let (p, t, u) = ray.intersect_segment(&seg).unwrap();
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(t, 5.0);
        assert_relative_eq!(u, 0.25);
    }

    #[test]
    fn test_intersect_segment_endpoint() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 1.0));
        let seg = Segment2::from_coords(5.0, -5.0, 5.0, 5.0);

        let (p, _, u) = ray.intersect_segment(&seg).unwrap();
        assert_relative_eq!(p.y, 5.0);
        assert_relative_eq!(u, 1.0);
    }

    #[test]
    fn test_intersect_segment_miss() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));

        // Behind the ray
        let behind = Segment2::from_coords(-5.0, -1.0, -5.0, 1.0);
        assert!(ray.intersect_segment(&behind).is_none());

        // Off to the side
        let side = Segment2::from_coords(5.0, 1.0, 5.0, 2.0);
        assert!(ray.intersect_segment(&side).is_none());
    }

    #[test]
    fn test_intersect_segment_parallel() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));

        let parallel = Segment2::from_coords(0.0, 1.0, 10.0, 1.0);
        assert!(ray.intersect_segment(&parallel).is_none());

        let collinear = Segment2::from_coords(2.0, 0.0, 10.0, 0.0);
        assert!(ray.intersect_segment(&collinear).is_none());

        let point = Segment2::from_coords(3.0, 0.0, 3.0, 0.0);
        assert!(ray.intersect_segment(&point).is_none());
    }
}
