//! Ray-ellipsoid intersection in the ellipsoid's unit-sphere space.

use georay_geom::{Ellipsoid, Interval, Ray};
use georay_math::epsilon::EPSILON6;
use georay_math::{stable_sum, Vector};

/// Intersect a ray with an ellipsoid.
///
/// Origin and direction are scaled by the reciprocal radii so the ellipsoid
/// becomes the unit sphere, where the ray is `q + t*w`:
///
/// - origin outside, pointing away: `None`
/// - origin outside: `None` on a miss, a degenerate interval when the
///   discriminant is within `1e-6` (relative) of zero, else `[entry, exit]`
/// - origin inside: `[0, exit]`
/// - origin on the surface: `[0, exit]` when looking inward, else `None`
///
/// Parameters are along the world-space ray.
pub fn ray_ellipsoid<V: Vector>(ray: &Ray<V>, ellipsoid: &Ellipsoid<V>) -> Option<Interval> {
    let inverse_radii = ellipsoid.one_over_radii();
    let q = inverse_radii.component_mul(&ray.origin);
    let w = inverse_radii.component_mul(&ray.direction);

    let q2 = q.magnitude_squared();
    let qw = q.dot(&w);
    let w2 = w.magnitude_squared();

    if q2 > 1.0 {
        // Outside ellipsoid
        if qw >= 0.0 {
            return None;
        }

        let difference = q2 - 1.0;
        let product = w2 * difference;
        let discriminant = stable_sum(qw * qw, -product, EPSILON6);

        if discriminant < 0.0 {
            return None;
        }

        if discriminant == 0.0 {
            // Tangent
            return Some(Interval::point((difference / w2).sqrt()));
        }

        // -qw > 0 here, so adding the root never cancels
        let temp = -qw + discriminant.sqrt();
        let root0 = temp / w2;
        let root1 = difference / temp;
        return Some(if root0 < root1 {
            Interval::new(root0, root1)
        } else {
            Interval::new(root1, root0)
        });
    }

    if q2 < 1.0 {
        // Inside ellipsoid
        let difference = q2 - 1.0;
        let discriminant = qw * qw - w2 * difference;
        let temp = -qw + discriminant.sqrt();
        return Some(Interval::new(0.0, temp / w2));
    }

    // On the surface, |q + t*w|^2 = 1 reduces to t * (2*qw + t*w2) = 0
    if qw < 0.0 {
        return Some(Interval::new(0.0, -2.0 * qw / w2));
    }

    None
}
