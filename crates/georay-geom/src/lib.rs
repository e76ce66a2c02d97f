#![warn(missing_docs)]

//! Geometric value types for georay.
//!
//! Every type is a small `Copy` value, generic over the vector backend `V`
//! (nalgebra's [`Vec3`] unless stated otherwise):
//!
//! - [`Ray`] and [`Interval`] - a half-line and a parameter range along it
//! - [`Plane`], [`Sphere`], [`Aabb`] - the simple bounding shapes
//! - [`Ellipsoid`] and [`Cartographic`] - reference ellipsoids with their
//!   geodetic conversions
//!
//! Plain constructors trust their input. The `try_*` constructors validate it
//! and return [`GeomError`].

pub mod bbox;
pub mod ellipsoid;
pub mod error;
pub mod plane;
pub mod ray;
pub mod sphere;

pub use bbox::Aabb;
pub use ellipsoid::{Cartographic, Ellipsoid};
pub use error::{GeomError, Result};
pub use plane::Plane;
pub use ray::{Interval, Ray};
pub use sphere::Sphere;

pub use georay_math::{Mat3, Matrix, Vec3, Vector};
