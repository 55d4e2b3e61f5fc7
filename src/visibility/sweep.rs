//! Radial sweep: cast rays toward every occluder endpoint and keep the nearest hits.

use super::config::VisibilityConfig;
use super::fan::{fan, VisibilityTriangle};
use super::polygon::VisibilityPolygon;
use crate::error::VisibilityError;
use crate::primitives::{Point2, Ray2, Segment2};
use log::{debug, trace};
use num_traits::Float;
use std::cmp::Ordering;

/// Where a candidate ray came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayKind {
    /// Aimed at (or jittered around) an occluder endpoint or the point where
    /// an occluder crosses the radius circle.
    Endpoint,
    /// One of the evenly spaced rays tracing the radius boundary.
    Arc,
}

#[derive(Debug, Clone, Copy)]
struct CandidateRay<F> {
    angle: F,
    kind: RayKind,
}

/// Outcome of casting one ray against the occluders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RayCast<F> {
    /// The ray stopped on an occluder before reaching the radius.
    Hit {
        point: Point2<F>,
        distance: F,
        /// Index of the blocking occluder.
        segment: usize,
    },
    /// Nothing within the radius blocks the ray.
    Miss,
}

/// Computes the visibility polygon using [`VisibilityConfig::default`].
///
/// See [`visibility_polygon_with_config`] for the full contract.
///
/// # Example
///
/// ```
/// use sightfield::visibility::visibility_polygon;
/// use sightfield::{Point2, Segment2};
///
/// let wall = Segment2::from_coords(5.0, -5.0, 5.0, 5.0);
/// let poly = visibility_polygon(Point2::origin(), 10.0, &[wall]).unwrap();
///
/// // Both wall corners are visible
/// assert!(poly.vertices().iter().any(|v| v.distance(Point2::new(5.0, -5.0)) < 0.01));
/// assert!(poly.vertices().iter().any(|v| v.distance(Point2::new(5.0, 5.0)) < 0.01));
/// // Straight ahead is blocked, straight behind is open
/// assert!(!poly.contains(Point2::new(6.0, 0.0)));
/// assert!(poly.contains(Point2::new(-9.0, 0.0)));
/// ```
pub fn visibility_polygon<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
) -> Result<VisibilityPolygon<F>, VisibilityError> {
    visibility_polygon_with_config(origin, radius, segments, &VisibilityConfig::default())
}

/// Computes the region visible from `origin` within `radius`, occluded by `segments`.
///
/// Three rays are cast toward every segment endpoint and every point where a
/// segment crosses the radius circle (on the point and `angle_jitter` to
/// either side), plus `arc_samples` evenly spaced rays. Each ray stops at the
/// nearest segment or at `radius`. Arc rays contribute where they reach the
/// radius, or where they stop on a segment that extends past the radius;
/// hits on segments lying wholly inside the radius are dropped so walls are
/// not dotted with extra points. The hits are kept in angle order and
/// consecutive points closer than `weld_distance` on both axes are merged.
///
/// Segments may overlap, repeat or come in any orientation. Zero-length
/// segments are ignored. The sweep does not clip to any boundary; pass the
/// edges of the screen or room as segments for a closed scene.
///
/// With no segments and the default config the result is a regular polygon
/// of `arc_samples` vertices on the radius circle.
///
/// # Errors
///
/// - [`VisibilityError::InvalidRadius`] if `radius` is not positive and finite.
/// - [`VisibilityError::NonFiniteInput`] for NaN or infinite coordinates.
/// - [`VisibilityError::InvalidConfig`] if `config` fails validation.
/// - [`VisibilityError::Degenerate`] if fewer than 3 distinct vertices
///   remain, e.g. no segments with `arc_samples == 0`, or a radius not much
///   larger than `weld_distance`.
///
/// # Complexity
///
/// `O(R · S)` for `R = 3(E + C) + arc_samples` rays and `S` segments with
/// `E` endpoints and `C` radius crossings. Comfortable for a few hundred
/// segments per call.
pub fn visibility_polygon_with_config<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
    config: &VisibilityConfig<F>,
) -> Result<VisibilityPolygon<F>, VisibilityError> {
    config.validate()?;
    validate_inputs(origin, radius, segments)?;

    let occluders = occluders(segments);
    let rays = candidate_rays(origin, radius, &occluders, config);

    let reach = radius * radius;
    let reaches_past: Vec<bool> = occluders
        .iter()
        .map(|s| s.endpoints().iter().any(|p| p.distance_squared(origin) > reach))
        .collect();

    let mut samples: Vec<(F, Point2<F>)> = Vec::with_capacity(rays.len());
    for candidate in &rays {
        let ray = Ray2::from_angle(origin, candidate.angle);
        let point = match cast_ray(&ray, radius, &occluders) {
            RayCast::Hit { point, .. } if candidate.kind == RayKind::Endpoint => point,
            RayCast::Hit { point, segment, .. } if reaches_past[segment] => point,
            RayCast::Hit { .. } => continue,
            RayCast::Miss => ray.point_at(radius),
        };
        samples.push((candidate.angle, point));
    }

    let (vertices, angles) = coalesce(samples, config.weld_distance);
    debug!(
        "visibility sweep: {} occluders, {} rays, {} vertices",
        occluders.len(),
        rays.len(),
        vertices.len()
    );

    if vertices.len() < 3 {
        trace!("visibility polygon collapsed to {} vertices", vertices.len());
        return Err(VisibilityError::Degenerate {
            vertices: vertices.len(),
        });
    }

    Ok(VisibilityPolygon::from_parts(origin, radius, vertices, angles))
}

/// Computes the visibility polygon and returns it as a triangle fan.
///
/// Uses [`VisibilityConfig::default`].
pub fn visibility_triangles<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
) -> Result<Vec<VisibilityTriangle<F>>, VisibilityError> {
    visibility_triangles_with_config(origin, radius, segments, &VisibilityConfig::default())
}

/// Computes the visibility polygon with `config` and returns it as a triangle fan.
pub fn visibility_triangles_with_config<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
    config: &VisibilityConfig<F>,
) -> Result<Vec<VisibilityTriangle<F>>, VisibilityError> {
    let polygon = visibility_polygon_with_config(origin, radius, segments, config)?;
    Ok(fan(origin, polygon.vertices()))
}

/// Rejects non-positive radii and non-finite coordinates.
pub(crate) fn validate_inputs<F: Float>(
    origin: Point2<F>,
    radius: F,
    segments: &[Segment2<F>],
) -> Result<(), VisibilityError> {
    if !radius.is_finite() || radius <= F::zero() {
        return Err(VisibilityError::InvalidRadius);
    }
    if !origin.is_finite() || segments.iter().any(|s| !s.is_finite()) {
        return Err(VisibilityError::NonFiniteInput);
    }
    Ok(())
}

/// Returns the segments that can block a ray.
pub(crate) fn occluders<F: Float>(segments: &[Segment2<F>]) -> Vec<Segment2<F>> {
    let kept: Vec<Segment2<F>> = segments
        .iter()
        .copied()
        .filter(|s| !s.is_degenerate(F::epsilon()))
        .collect();

    if kept.len() < segments.len() {
        debug!(
            "ignoring {} zero-length segments",
            segments.len() - kept.len()
        );
    }
    kept
}

/// Builds the sorted, de-duplicated list of ray angles to cast.
fn candidate_rays<F: Float>(
    origin: Point2<F>,
    radius: F,
    occluders: &[Segment2<F>],
    config: &VisibilityConfig<F>,
) -> Vec<CandidateRay<F>> {
    let jitter = config.angle_jitter;
    let tau = F::from(std::f64::consts::TAU).unwrap();
    let coincident = F::epsilon() * F::epsilon();

    let mut rays = Vec::with_capacity(occluders.len() * 12 + config.arc_samples);

    for segment in occluders {
        let crossings = segment.intersect_circle(origin, radius);
        let targets = segment
            .endpoints()
            .into_iter()
            .chain(crossings.into_iter().map(|(point, _)| point));

        for target in targets {
            // No direction to aim at
            if target.distance_squared(origin) <= coincident {
                continue;
            }

            let theta = target.angle_from(origin);
            for angle in [theta - jitter, theta, theta + jitter] {
                rays.push(CandidateRay {
                    angle: wrap_angle(angle),
                    kind: RayKind::Endpoint,
                });
            }
        }
    }

    if config.arc_samples > 0 {
        let start = -F::from(std::f64::consts::PI).unwrap();
        let step = tau / F::from(config.arc_samples).unwrap();
        for k in 0..config.arc_samples {
            rays.push(CandidateRay {
                angle: start + step * F::from(k).unwrap(),
                kind: RayKind::Arc,
            });
        }
    }

    rays.sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(Ordering::Equal));

    // Rays this close land on the same point; an endpoint ray outranks an arc ray.
    let merge = jitter * F::from(0.1).unwrap();
    rays.dedup_by(|later, kept| {
        if later.angle - kept.angle >= merge {
            return false;
        }
        if later.kind == RayKind::Endpoint {
            kept.kind = RayKind::Endpoint;
        }
        true
    });

    if rays.len() >= 2 {
        let last = rays[rays.len() - 1];
        if rays[0].angle + tau - last.angle < merge {
            if last.kind == RayKind::Endpoint {
                rays[0].kind = RayKind::Endpoint;
            }
            rays.pop();
        }
    }

    rays
}

/// Casts a ray of length `radius` and reports the nearest occluder it meets.
///
/// `ray` must have a unit direction so that its parameter is a distance.
pub(crate) fn cast_ray<F: Float>(
    ray: &Ray2<F>,
    radius: F,
    occluders: &[Segment2<F>],
) -> RayCast<F> {
    let mut nearest = RayCast::Miss;

    for (index, segment) in occluders.iter().enumerate() {
        let Some((point, t, _)) = ray.intersect_segment(segment) else {
            continue;
        };
        if t <= F::epsilon() || t > radius {
            continue;
        }
        match nearest {
            RayCast::Hit { distance, .. } if distance <= t => {}
            _ => {
                nearest = RayCast::Hit {
                    point,
                    distance: t,
                    segment: index,
                }
            }
        }
    }

    nearest
}

/// Drops points closer than `weld` (on both axes) to the previously kept point, wrap included.
fn coalesce<F: Float>(samples: Vec<(F, Point2<F>)>, weld: F) -> (Vec<Point2<F>>, Vec<F>) {
    let mut vertices: Vec<Point2<F>> = Vec::with_capacity(samples.len());
    let mut angles = Vec::with_capacity(samples.len());

    for (angle, point) in samples {
        if let Some(&last) = vertices.last() {
            if within_weld(last, point, weld) {
                continue;
            }
        }
        vertices.push(point);
        angles.push(angle);
    }

    while vertices.len() >= 2 && within_weld(vertices[0], vertices[vertices.len() - 1], weld) {
        vertices.pop();
        angles.pop();
    }

    (vertices, angles)
}

#[inline]
fn within_weld<F: Float>(a: Point2<F>, b: Point2<F>, weld: F) -> bool {
    (a.x - b.x).abs() < weld && (a.y - b.y).abs() < weld
}

/// Maps an angle from `[-2π, 2π)` into `[-π, π)`.
#[inline]
fn wrap_angle<F: Float>(angle: F) -> F {
    let pi = F::from(std::f64::consts::PI).unwrap();
    let tau = pi + pi;
    if angle >= pi {
        angle - tau
    } else if angle < -pi {
        angle + tau
    } else {
        angle
    }
}
