//! Visibility polygons: what an observer can see past a set of opaque segments.
//!
//! Rays are cast from the observer toward every segment endpoint and every
//! point where a segment leaves the sight radius, nudged a little to either
//! side so that corners are passed cleanly, plus a ring of evenly spaced rays
//! for open space. Each ray stops at the nearest segment
//! or at the sight radius, and the hit points sorted by angle trace a
//! star-shaped polygon around the observer.
//!
//! # Example
//!
//! ```
//! use sightfield::bounds::Aabb2;
//! use sightfield::visibility::visibility_polygon;
//! use sightfield::Point2;
//!
//! // A closed room
//! let room = Aabb2::new(Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0));
//!
//! let visible = visibility_polygon(Point2::new(5.0, 5.0), 100.0, &room.edges()).unwrap();
//!
//! // In an empty room, the entire room is visible
//! assert_eq!(visible.len(), 4);
//! assert!((visible.area() - 100.0).abs() < 0.1);
//!
//! // The fan is what a renderer or a fog-of-war lookup consumes
//! let triangles = visible.triangles();
//! assert_eq!(triangles.len(), 4);
//! ```

mod config;
mod fan;
mod polygon;
mod query;
mod sweep;

pub use config::VisibilityConfig;
pub use fan::{triangulate_fan, VisibilityTriangle};
pub use polygon::VisibilityPolygon;
pub use query::is_visible;
pub use sweep::{
    visibility_polygon, visibility_polygon_with_config, visibility_triangles,
    visibility_triangles_with_config,
};
