//! Point-to-point line of sight.

use super::sweep::{occluders, validate_inputs};
use crate::error::VisibilityError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Checks whether `target` can be seen from `origin`.
///
/// The target is visible when it lies within `radius` and the straight sight
/// line does not properly cross any segment. Grazing a segment endpoint or
/// running along a segment does not block the view. This is exact and avoids
/// building the whole polygon when only a few points matter.
///
/// # Errors
///
/// Same input checks as [`visibility_polygon`](super::visibility_polygon):
/// [`VisibilityError::InvalidRadius`] and [`VisibilityError::NonFiniteInput`]
/// (the target included).
///
/// # Example
///
/// ```
/// use sightfield::visibility::is_visible;
/// use sightfield::{Point2, Segment2};
///
/// let wall = [Segment2::from_coords(5.0, -5.0, 5.0, 5.0)];
/// let eye = Point2::origin();
///
/// assert!(is_visible(eye, 20.0, &wall, Point2::new(4.0, 0.0)).unwrap());
/// assert!(!is_visible(eye, 20.0, &wall, Point2::new(8.0, 0.0)).unwrap());
/// ```
pub fn is_visible<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
    target: Point2<F>,
) -> Result<bool, VisibilityError> {
    validate_inputs(origin, radius, segments)?;
    if !target.is_finite() {
        return Err(VisibilityError::NonFiniteInput);
    }

    if origin.distance_squared(target) > radius * radius {
        return Ok(false);
    }

    let sight = Segment2::new(origin, target);
    Ok(!occluders(segments).into_iter().any(|s| sight.crosses(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Aabb2;
    use crate::visibility::visibility_polygon;

    fn wall() -> [Segment2<f64>; 1] {
        [Segment2::from_coords(5.0, -5.0, 5.0, 5.0)]
    }

    #[test]
    fn test_blocked_by_wall() {
        let eye = Point2::origin();
        assert!(is_visible(eye, 20.0, &wall(), Point2::new(4.0, 0.0)).unwrap());
        assert!(!is_visible(eye, 20.0, &wall(), Point2::new(8.0, 0.0)).unwrap());
        assert!(!is_visible(eye, 20.0, &wall(), Point2::new(9.0, 8.0)).unwrap());
        assert!(is_visible(eye, 20.0, &wall(), Point2::new(8.0, 9.0)).unwrap());
        assert!(is_visible(eye, 20.0, &wall(), Point2::new(-8.0, 0.0)).unwrap());
    }

    #[test]
    fn test_grazing_endpoint_is_visible() {
        let eye = Point2::origin();
        assert!(is_visible(eye, 20.0, &wall(), Point2::new(8.0, 8.0)).unwrap());
    }

    #[test]
    fn test_beyond_radius() {
        let eye = Point2::origin();
        assert!(!is_visible(eye, 5.0, &[], Point2::new(6.0, 0.0)).unwrap());
        assert!(is_visible(eye, 5.0, &[], Point2::new(3.0, 4.0)).unwrap());
    }

    #[test]
    fn test_input_errors() {
        let eye: Point2<f64> = Point2::origin();
        assert_eq!(
            is_visible(eye, 0.0, &wall(), Point2::new(1.0, 0.0)),
            Err(VisibilityError::InvalidRadius)
        );
        assert_eq!(
            is_visible(eye, 10.0, &wall(), Point2::new(f64::NAN, 0.0)),
            Err(VisibilityError::NonFiniteInput)
        );
    }

    #[test]
    fn test_agrees_with_polygon() {
        let mut segments = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0))
            .edges()
            .to_vec();
        segments.extend(Aabb2::new(Point2::new(40.0, 40.0), Point2::new(60.0, 60.0)).edges());
        segments.push(Segment2::from_coords(20.0, 70.0, 35.0, 85.0));

        let eye = Point2::new(10.0, 50.0);
        let poly = visibility_polygon(eye, 500.0, &segments).unwrap();

        for target in [
            Point2::new(30.0, 50.0),
            Point2::new(90.0, 10.0),
            Point2::new(80.0, 50.0),
            Point2::new(70.0, 90.0),
            Point2::new(35.0, 95.0),
            Point2::new(15.0, 90.0),
            Point2::new(95.0, 95.0),
        ] {
            assert_eq!(
                poly.contains(target),
                is_visible(eye, 500.0, &segments, target).unwrap(),
                "disagreement at {:?}",
                target
            );
        }
    }

    #[test]
    fn test_agrees_with_polygon_on_grid() {
        // Two walls running out of range: one straight ahead, one across the upper left
        let segments = [
            Segment2::from_coords(5.0, -20.0, 5.0, 20.0),
            Segment2::from_coords(-12.0, 0.0, 0.0, 12.0),
        ];
        let eye = Point2::origin();
        let radius = 10.0;
        let poly = visibility_polygon(eye, radius, &segments).unwrap();

        let mut checked = 0;
        for i in 0..16 {
            for j in 0..16 {
                let target = Point2::new(-11.75 + 1.5 * i as f64, -11.75 + 1.5 * j as f64);

                // Chords of the arc and the wall lines are where the polygon is approximate
                if (target.distance(eye) - radius).abs() < 0.1
                    || segments.iter().any(|s| s.distance_to_point(target) < 0.05)
                {
                    continue;
                }

                assert_eq!(
                    poly.contains(target),
                    is_visible(eye, radius, &segments, target).unwrap(),
                    "disagreement at {:?}",
                    target
                );
                checked += 1;
            }
        }
        assert!(checked > 200);
    }
}
