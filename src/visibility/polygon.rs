//! The star-shaped region returned by the sweep.

use super::fan::{fan, VisibilityTriangle};
use crate::primitives::Point2;
use num_traits::Float;

/// The region visible from an observer, as a star-shaped polygon.
///
/// Vertices run counter-clockwise around [`origin`](Self::origin) in strictly
/// increasing angle within `[-π, π)`. Each vertex lies on an occluding
/// segment or at [`radius`](Self::radius) from the origin. A polygon produced
/// by the sweep always has at least 3 vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityPolygon<F> {
    origin: Point2<F>,
    radius: F,
    vertices: Vec<Point2<F>>,
    angles: Vec<F>,
}

impl<F: Float> VisibilityPolygon<F> {
    pub(crate) fn from_parts(
        origin: Point2<F>,
        radius: F,
        vertices: Vec<Point2<F>>,
        angles: Vec<F>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), angles.len());
        Self {
            origin,
            radius,
            vertices,
            angles,
        }
    }

    /// The observer position the polygon was computed from.
    #[inline]
    pub fn origin(&self) -> Point2<F> {
        self.origin
    }

    /// The sight radius the polygon was computed with.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// The polygon vertices in angular order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// The ray angle that produced each vertex, parallel to [`vertices`](Self::vertices).
    #[inline]
    pub fn angles(&self) -> &[F] {
        &self.angles
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }

    /// Returns the visible area using the shoelace formula.
    pub fn area(&self) -> F {
        let n = self.vertices.len();
        if n < 3 {
            return F::zero();
        }

        let mut sum = F::zero();
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            sum = sum + (p.x * q.y - q.x * p.y);
        }
        (sum / F::from(2.0).unwrap()).abs()
    }

    /// Splits the polygon into a triangle fan anchored at the origin.
    pub fn triangles(&self) -> Vec<VisibilityTriangle<F>> {
        fan(self.origin, &self.vertices)
    }

    /// Tests whether `p` lies inside the visible region (boundary included).
    pub fn contains(&self, p: Point2<F>) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| {
            VisibilityTriangle::new(self.origin, self.vertices[i], self.vertices[(i + 1) % n])
                .contains(p)
        })
    }
}
