//! Output utilities for inspecting scenes.
//!
//! Provides SVG serialization of occluders and visibility polygons.

mod svg;

pub use svg::{polygon_to_svg_path, polyline_to_svg_path, segments_to_svg_path, SvgScene};
