//! Intersection routines, one module per shape.
//!
//! Each routine is a pure function over value types. A miss is `None`.

mod aabb;
mod clip;
mod ellipsoid;
mod grazing;
mod plane;
mod sphere;
mod triangle;

pub use aabb::ray_aabb;
pub use clip::{triangle_plane_intersection, TrianglePlaneSplit};
pub use ellipsoid::ray_ellipsoid;
pub use grazing::grazing_altitude_location;
pub use plane::{line_segment_plane, ray_plane};
pub use sphere::{line_segment_sphere, ray_sphere};
pub use triangle::{line_segment_triangle, ray_triangle, ray_triangle_parametric};
