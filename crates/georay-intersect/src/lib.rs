#![warn(missing_docs)]

//! Ray and segment intersection for georay.
//!
//! Intersects [`Ray`]s and line segments with planes, triangles, spheres,
//! ellipsoids and axis-aligned boxes, splits triangles along planes, and
//! finds where a ray grazes an ellipsoid. Everything is generic over the
//! [`Vector`] backend and defaults to nalgebra.
//!
//! Degenerate configurations are rejected with fixed tolerances from
//! [`georay_math::epsilon`]: `1e-15` for ray/plane parallelism, `1e-6` for
//! triangle determinants, segment/plane parallelism and tangent rays.
//!
//! # Example
//!
//! ```
//! use georay_geom::{Ray, Sphere, Vec3};
//! use georay_intersect::ray_sphere;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
//! let sphere = Sphere::new(Vec3::zeros(), 1.0);
//! let hit = ray_sphere(&ray, &sphere).unwrap();
//! assert_eq!((hit.start, hit.stop), (4.0, 6.0));
//! ```

pub mod intersect;

pub use intersect::{
    grazing_altitude_location, line_segment_plane, line_segment_sphere, line_segment_triangle,
    ray_aabb, ray_ellipsoid, ray_plane, ray_sphere, ray_triangle, ray_triangle_parametric,
    triangle_plane_intersection, TrianglePlaneSplit,
};

pub use georay_geom::{Aabb, Ellipsoid, Interval, Plane, Ray, Sphere};
pub use georay_math::Vector;
