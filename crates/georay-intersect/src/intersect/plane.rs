//! Ray-plane and segment-plane intersection (closed-form).

use georay_geom::{Plane, Ray};
use georay_math::epsilon::{EPSILON15, EPSILON6};
use georay_math::Vector;

/// Intersect a ray with a plane.
///
/// Returns the hit point, or `None` if the ray is parallel to the plane
/// (`|dot(normal, direction)| < 1e-15`) or the plane lies behind the origin.
pub fn ray_plane<V: Vector>(ray: &Ray<V>, plane: &Plane<V>) -> Option<V> {
    let denom = plane.normal.dot(&ray.direction);

    // Ray is parallel to plane
    if denom.abs() < EPSILON15 {
        return None;
    }

    let t = (-plane.distance - plane.normal.dot(&ray.origin)) / denom;

    // Intersection is behind ray origin
    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}

/// Intersect the segment `p0 → p1` with a plane.
///
/// `None` when the segment is parallel to the plane within `1e-6`, or when
/// the crossing lies outside the segment.
pub fn line_segment_plane<V: Vector>(p0: &V, p1: &V, plane: &Plane<V>) -> Option<V> {
    let difference = *p1 - *p0;
    let n_dot_diff = plane.normal.dot(&difference);

    if n_dot_diff.abs() < EPSILON6 {
        return None;
    }

    let t = -(plane.distance + plane.normal.dot(p0)) / n_dot_diff;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some(*p0 + difference * t)
}
