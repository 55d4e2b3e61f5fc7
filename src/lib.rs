//! sightfield - 2D visibility polygons
//!
//! Computes what an observer can see past opaque line segments: the
//! star-shaped visibility polygon around a point, its triangle fan for
//! rendering and fog-of-war lookups, and direct line-of-sight tests.
//!
//! ```
//! use sightfield::{visibility_polygon, Point2, Segment2};
//!
//! let walls = [
//!     Segment2::from_coords(-5.0, -5.0, 5.0, -5.0),
//!     Segment2::from_coords(5.0, -5.0, 5.0, 5.0),
//!     Segment2::from_coords(5.0, 5.0, -5.0, 5.0),
//!     Segment2::from_coords(-5.0, 5.0, -5.0, -5.0),
//! ];
//!
//! let visible = visibility_polygon(Point2::origin(), 100.0, &walls).unwrap();
//! assert_eq!(visible.len(), 4);
//! assert!(visible.contains(Point2::new(4.0, -4.0)));
//! ```

pub mod bounds;
pub mod error;
pub mod io;
pub mod primitives;
pub mod visibility;

pub use error::VisibilityError;
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use visibility::{
    is_visible, triangulate_fan, visibility_polygon, visibility_polygon_with_config,
    visibility_triangles, visibility_triangles_with_config, VisibilityConfig, VisibilityPolygon,
    VisibilityTriangle,
};
