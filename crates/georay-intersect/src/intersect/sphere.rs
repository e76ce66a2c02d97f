//! Ray-sphere intersection (quadratic equation).

use georay_geom::{Interval, Ray, Sphere};
use georay_math::Vector;
use georay_poly::quadratic;

/// Both crossings of the ray's line with the sphere, `start <= stop`.
fn line_sphere<V: Vector>(ray: &Ray<V>, sphere: &Sphere<V>) -> Option<Interval> {
    let oc = ray.origin - sphere.center;
    let d = ray.direction;

    // Quadratic: |oc + t*d|^2 = r^2
    let a = d.dot(&d);
    let b = 2.0 * d.dot(&oc);
    let c = oc.magnitude_squared() - sphere.radius * sphere.radius;

    match quadratic::real_roots(a, b, c).as_slice() {
        &[near, far] => Some(Interval::new(near, far)),
        _ => None,
    }
}

/// Intersect a ray with a sphere.
///
/// Returns the forward interval `[entry, exit]`; an origin inside the sphere
/// gives `start = 0`. `None` if the ray misses or the sphere is behind it.
pub fn ray_sphere<V: Vector>(ray: &Ray<V>, sphere: &Sphere<V>) -> Option<Interval> {
    let interval = line_sphere(ray, sphere)?;
    if interval.stop < 0.0 {
        return None;
    }
    Some(Interval::new(interval.start.max(0.0), interval.stop))
}

/// Intersect the segment `p0 → p1` with a sphere.
///
/// The interval is measured in distance from `p0` and clamped to the
/// segment, `[0, |p1 - p0|]`.
pub fn line_segment_sphere<V: Vector>(p0: &V, p1: &V, sphere: &Sphere<V>) -> Option<Interval> {
    let ray = Ray::new(*p0, *p1 - *p0);
    let max_t = p0.distance(p1);

    let interval = line_sphere(&ray, sphere)?;
    if interval.stop < 0.0 || interval.start > max_t {
        return None;
    }

    Some(Interval::new(interval.start.max(0.0), interval.stop.min(max_t)))
}
