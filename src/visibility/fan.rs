//! Triangle fans over visibility polygons.

use crate::error::VisibilityError;
use crate::primitives::Point2;
use num_traits::Float;

/// One wedge of a visibility polygon: the observer plus two angularly adjacent vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityTriangle<F> {
    /// The observer position (fan anchor).
    pub a: Point2<F>,
    /// First polygon vertex.
    pub b: Point2<F>,
    /// Next polygon vertex in angular order.
    pub c: Point2<F>,
}

impl<F: Float> VisibilityTriangle<F> {
    /// Creates a new triangle from three points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area; positive when `a, b, c` run counter-clockwise.
    #[inline]
    fn doubled_signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Computes the area of the triangle.
    pub fn area(&self) -> F {
        self.doubled_signed_area().abs() / F::from(2.0).unwrap()
    }

    /// Tests whether `p` lies inside or on the boundary of the triangle.
    ///
    /// Works for either winding.
    pub fn contains(&self, p: Point2<F>) -> bool {
        let d1 = (self.b - self.a).cross(p - self.a);
        let d2 = (self.c - self.b).cross(p - self.b);
        let d3 = (self.a - self.c).cross(p - self.c);

        let zero = F::zero();
        let has_neg = d1 < zero || d2 < zero || d3 < zero;
        let has_pos = d1 > zero || d2 > zero || d3 > zero;
        if has_neg && has_pos {
            return false;
        }

        // A zero-area wedge passes the sign test for its whole supporting line.
        let min_x = self.a.x.min(self.b.x).min(self.c.x);
        let max_x = self.a.x.max(self.b.x).max(self.c.x);
        let min_y = self.a.y.min(self.b.y).min(self.c.y);
        let max_y = self.a.y.max(self.b.y).max(self.c.y);
        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
    }
}

/// Splits a star-shaped polygon into a fan of triangles anchored at `origin`.
///
/// Emits `(origin, v[i], v[i + 1])` for each consecutive pair in polygon
/// order, followed by the closing triangle `(origin, v[n - 1], v[0])`, so an
/// `n`-vertex polygon yields exactly `n` triangles.
///
/// # Errors
///
/// Returns [`VisibilityError::TooFewVertices`] for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use sightfield::visibility::triangulate_fan;
/// use sightfield::Point2;
///
/// let square = [
///     Point2::new(-1.0, -1.0),
///     Point2::new(1.0, -1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(-1.0, 1.0),
/// ];
///
/// let fan = triangulate_fan(Point2::origin(), &square).unwrap();
/// assert_eq!(fan.len(), 4);
/// let area: f64 = fan.iter().map(|t| t.area()).sum();
/// assert!((area - 4.0).abs() < 1e-12);
/// ```
pub fn triangulate_fan<F: Float>(
    origin: Point2<F>,
    vertices: &[Point2<F>],
) -> Result<Vec<VisibilityTriangle<F>>, VisibilityError> {
    if vertices.len() < 3 {
        return Err(VisibilityError::TooFewVertices {
            found: vertices.len(),
        });
    }
    Ok(fan(origin, vertices))
}

pub(crate) fn fan<F: Float>(origin: Point2<F>, vertices: &[Point2<F>]) -> Vec<VisibilityTriangle<F>> {
    let n = vertices.len();
    (0..n)
        .map(|i| VisibilityTriangle::new(origin, vertices[i], vertices[(i + 1) % n]))
        .collect()
}
