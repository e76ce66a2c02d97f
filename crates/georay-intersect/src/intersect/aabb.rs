//! Ray-box intersection (slab method).

use georay_geom::{Aabb, Interval, Ray};
use georay_math::Vector;

/// Intersect a ray with an axis-aligned box.
///
/// Returns the forward interval `[entry, exit]` with the entry clamped to 0,
/// or `None` if the ray misses or the box is behind it. Axis-aligned rays
/// work through IEEE infinities in the reciprocal direction.
pub fn ray_aabb<V: Vector>(ray: &Ray<V>, aabb: &Aabb<V>) -> Option<Interval> {
    let o = ray.origin;
    let d = ray.direction;

    let slab = |origin: f64, direction: f64, min: f64, max: f64| {
        let inv = 1.0 / direction;
        let (near, far) = if inv < 0.0 { (max, min) } else { (min, max) };
        ((near - origin) * inv, (far - origin) * inv)
    };

    let (tx1, tx2) = slab(o.x(), d.x(), aabb.min.x(), aabb.max.x());
    let (ty1, ty2) = slab(o.y(), d.y(), aabb.min.y(), aabb.max.y());
    let (tz1, tz2) = slab(o.z(), d.z(), aabb.min.z(), aabb.max.z());

    let t_min = tx1.max(ty1).max(tz1);
    let t_max = tx2.min(ty2).min(tz2);

    if t_max >= t_min && t_max >= 0.0 {
        Some(Interval::new(t_min.max(0.0), t_max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use georay_math::Vec3;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_ray_aabb_hit() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let i = ray_aabb(&ray, &unit_box()).unwrap();
        assert!((i.start - 5.0).abs() < 1e-10);
        assert!((i.stop - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let ray = Ray::new(Vec3::new(-5.0, 5.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(ray_aabb(&ray, &unit_box()).is_none());
    }

    #[test]
    fn test_ray_inside_aabb() {
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let i = ray_aabb(&ray, &unit_box()).unwrap();
        assert_eq!(i.start, 0.0);
        assert!((i.stop - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_ray_aabb_diagonal() {
        let ray = Ray::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let i = ray_aabb(&ray, &unit_box()).unwrap();
        assert!((i.start - 3.0_f64.sqrt()).abs() < 1e-10);
        assert!((i.stop - 2.0 * 3.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_ray_aabb_behind() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        assert!(ray_aabb(&ray, &unit_box()).is_none());
    }
}
