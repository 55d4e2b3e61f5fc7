//! Bounding boxes for building scene boundaries.

mod aabb;

pub use aabb::Aabb2;
