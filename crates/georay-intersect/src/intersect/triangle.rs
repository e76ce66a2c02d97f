//! Ray-triangle intersection (Möller–Trumbore).

use georay_geom::Ray;
use georay_math::epsilon::EPSILON6;
use georay_math::Vector;

/// Ray parameter `t` where the ray's line crosses triangle `v0 v1 v2`.
///
/// With `cull_back_faces` set, triangles whose counter-clockwise front face
/// points away from the ray (signed determinant below `1e-6`) are rejected and
/// the barycentric bounds are checked against the unscaled determinant.
/// Otherwise a determinant within `1e-6` of zero rejects.
///
/// The returned `t` can be negative; callers that need a forward hit check
/// `t >= 0` themselves.
pub fn ray_triangle_parametric<V: Vector>(
    ray: &Ray<V>,
    v0: &V,
    v1: &V,
    v2: &V,
    cull_back_faces: bool,
) -> Option<f64> {
    let origin = ray.origin;
    let direction = ray.direction;

    let edge0 = *v1 - *v0;
    let edge1 = *v2 - *v0;

    let p = direction.cross(&edge1);
    let det = edge0.dot(&p);

    if cull_back_faces {
        if det < EPSILON6 {
            return None;
        }

        let tvec = origin - *v0;
        let u = tvec.dot(&p);
        if u < 0.0 || u > det {
            return None;
        }

        let q = tvec.cross(&edge0);
        let v = direction.dot(&q);
        if v < 0.0 || u + v > det {
            return None;
        }

        Some(edge1.dot(&q) / det)
    } else {
        if det.abs() < EPSILON6 {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = origin - *v0;
        let u = tvec.dot(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = tvec.cross(&edge0);
        let v = direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some(edge1.dot(&q) * inv_det)
    }
}

/// Point where the ray hits triangle `v0 v1 v2`, or `None` for a miss or a
/// hit behind the origin.
pub fn ray_triangle<V: Vector>(
    ray: &Ray<V>,
    v0: &V,
    v1: &V,
    v2: &V,
    cull_back_faces: bool,
) -> Option<V> {
    let t = ray_triangle_parametric(ray, v0, v1, v2, cull_back_faces)?;
    if t < 0.0 {
        return None;
    }
    Some(ray.at(t))
}

/// Point where the segment `p0 → p1` crosses triangle `v0 v1 v2`.
pub fn line_segment_triangle<V: Vector>(
    p0: &V,
    p1: &V,
    v0: &V,
    v1: &V,
    v2: &V,
    cull_back_faces: bool,
) -> Option<V> {
    let ray = Ray::new(*p0, *p1 - *p0);
    let t = ray_triangle_parametric(&ray, v0, v1, v2, cull_back_faces)?;
    if t < 0.0 || t > p0.distance(p1) {
        return None;
    }
    Some(ray.at(t))
}
