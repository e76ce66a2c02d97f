#![warn(missing_docs)]

//! georay: ray casting and intersection geometry for globes and meshes.
//!
//! Cancellation-safe polynomial root finders, ray/segment intersection with
//! planes, triangles, spheres, ellipsoids and boxes, triangle clipping, and
//! geodetic conversions on reference ellipsoids. All routines are pure
//! functions over small `Copy` values, generic over a [`Vector`] backend
//! (nalgebra by default, glam behind the `glam` feature).
//!
//! # Example
//!
//! ```
//! use georay::{ray_ellipsoid, Ellipsoid, Ray, Vec3};
//!
//! let earth = Ellipsoid::<Vec3>::wgs84();
//! let ray = Ray::new(Vec3::new(20_000_000.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
//!
//! let hit = ray_ellipsoid(&ray, &earth).unwrap();
//! let ground = earth.cartesian_to_cartographic(&ray.at(hit.start)).unwrap();
//! assert!(ground.height.abs() < 1e-6);
//! assert!(ground.latitude.abs() < 1e-12);
//! ```

pub use georay_geom;
pub use georay_intersect;
pub use georay_math;
pub use georay_poly;

pub use georay_math::{epsilon, sign, stable_sum, Mat3, Matrix, Vec3, Vector};

pub use georay_poly::{cubic, quadratic, quartic, QuarticBranch, Roots, SignPattern};

pub use georay_geom::{
    Aabb, Cartographic, Ellipsoid, GeomError, Interval, Plane, Ray, Result, Sphere,
};

pub use georay_intersect::{
    grazing_altitude_location, line_segment_plane, line_segment_sphere, line_segment_triangle,
    ray_aabb, ray_ellipsoid, ray_plane, ray_sphere, ray_triangle, ray_triangle_parametric,
    triangle_plane_intersection, TrianglePlaneSplit,
};
