//! SVG export for scenes and visibility polygons.
//!
//! Produces path data (the `d` attribute) for polylines, occluders and
//! visibility polygons, and whole standalone documents for debugging a scene.
//! Coordinates are written unchanged, so +Y points down when viewed.
//!
//! # Example
//!
//! ```
//! use sightfield::io::{polygon_to_svg_path, SvgScene};
//! use sightfield::visibility::visibility_polygon;
//! use sightfield::{Point2, Segment2};
//!
//! let walls = [Segment2::from_coords(5.0, -5.0, 5.0, 5.0)];
//! let poly = visibility_polygon(Point2::origin(), 10.0, &walls).unwrap();
//!
//! let d = polygon_to_svg_path(&poly);
//! assert!(d.starts_with("M") && d.ends_with("Z"));
//!
//! let doc = SvgScene::new(&walls).with_polygon(&poly).to_svg();
//! assert!(doc.starts_with("<svg"));
//! ```

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use crate::visibility::VisibilityPolygon;
use num_traits::Float;
use std::fmt;

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - Whether to close the path with 'Z'
///
/// # Returns
///
/// An SVG path string using M and L commands.
///
/// # Example
///
/// ```
/// use sightfield::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert_eq!(svg, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut result = String::new();

    result.push_str(&format!("M {} {}", points[0].x, points[0].y));

    for p in &points[1..] {
        result.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a visibility polygon to a closed SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &VisibilityPolygon<F>) -> String {
    polyline_to_svg_path(polygon.vertices(), true)
}

/// Converts occluding segments to one SVG path of disjoint `M … L …` strokes.
pub fn segments_to_svg_path<F: Float + fmt::Display>(segments: &[Segment2<F>]) -> String {
    segments
        .iter()
        .map(|s| polyline_to_svg_path(&s.endpoints(), false))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A scene to render as a standalone SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgScene<'a, F> {
    /// Occluders, drawn as black strokes.
    pub segments: &'a [Segment2<F>],
    /// Visible region, drawn filled underneath the occluders.
    pub polygon: Option<&'a VisibilityPolygon<F>>,
    /// Space left around the content, in scene units.
    pub margin: F,
}

impl<'a, F: Float + fmt::Display> SvgScene<'a, F> {
    /// Creates a scene showing only the given occluders.
    pub fn new(segments: &'a [Segment2<F>]) -> Self {
        Self {
            segments,
            polygon: None,
            margin: F::one(),
        }
    }

    /// Adds a visibility polygon and marks its observer.
    pub fn with_polygon(mut self, polygon: &'a VisibilityPolygon<F>) -> Self {
        self.polygon = Some(polygon);
        self
    }

    /// Sets the margin around the content.
    pub fn with_margin(mut self, margin: F) -> Self {
        self.margin = margin;
        self
    }

    /// Returns the bounds of everything drawn, before the margin.
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        let segment_points = self.segments.iter().flat_map(|s| s.endpoints());
        let polygon_points = self
            .polygon
            .into_iter()
            .flat_map(|p| p.vertices().iter().copied().chain(Some(p.origin())));
        Aabb2::from_points(segment_points.chain(polygon_points))
    }

    /// Renders the scene to an SVG document.
    pub fn to_svg(&self) -> String {
        let bounds = self
            .bounds()
            .map(|b| b.expand(self.margin))
            .unwrap_or_else(|| Aabb2::new(Point2::origin(), Point2::new(F::one(), F::one())));

        let extent = bounds.width().max(bounds.height());
        let stroke = extent / F::from(400.0).unwrap();

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height()
        ));

        if let Some(polygon) = self.polygon {
            out.push_str(&format!(
                "  <path d=\"{}\" fill=\"#ffe9a8\" stroke=\"#e0b030\" stroke-width=\"{}\"/>\n",
                polygon_to_svg_path(polygon),
                stroke
            ));
        }

        if !self.segments.is_empty() {
            out.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"#202020\" stroke-width=\"{}\"/>\n",
                segments_to_svg_path(self.segments),
                stroke * F::from(2.0).unwrap()
            ));
        }

        if let Some(polygon) = self.polygon {
            let origin = polygon.origin();
            out.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"#d03020\"/>\n",
                origin.x,
                origin.y,
                stroke * F::from(4.0).unwrap()
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}
