#![warn(missing_docs)]

//! Math types for georay.
//!
//! Defines the minimal vector and matrix contract the intersection engine is
//! generic over, implements it for nalgebra (the default backend) and, with the
//! `glam` feature, for glam's double precision types. Also hosts the tolerance
//! constants and the cancellation-guarded sum shared by the solvers.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "glam")]
mod glam_impl;

pub mod epsilon;

/// A vector in 3D space (nalgebra backend).
pub type Vec3 = Vector3<f64>;

/// A 3x3 matrix (nalgebra backend).
pub type Mat3 = Matrix3<f64>;

/// Operations the engine needs from a 3D vector type.
///
/// Implementors are plain `Copy` values. All methods are pure.
pub trait Vector:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
{
    /// The matching 3x3 matrix type.
    type Matrix: crate::Matrix<Self>;

    /// Build a vector from its components.
    fn new(x: f64, y: f64, z: f64) -> Self;

    /// X component.
    fn x(&self) -> f64;

    /// Y component.
    fn y(&self) -> f64;

    /// Z component.
    fn z(&self) -> f64;

    /// Dot product.
    fn dot(&self, other: &Self) -> f64;

    /// Cross product `self × other`.
    fn cross(&self, other: &Self) -> Self;

    /// Componentwise product.
    fn component_mul(&self, other: &Self) -> Self;

    /// The zero vector.
    fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit X axis.
    fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit Y axis.
    fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit Z axis.
    fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Squared Euclidean length.
    fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction; normalizing it yields NaN components.
    fn normalize(&self) -> Self {
        *self * (1.0 / self.magnitude())
    }

    /// True if every component is exactly zero.
    fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0 && self.z() == 0.0
    }

    /// True if no component is NaN or infinite.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.z().is_finite()
    }

    /// Distance between two points.
    fn distance(&self, other: &Self) -> f64 {
        (*other - *self).magnitude()
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`.
    fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }

    /// The coordinate axis most orthogonal to this vector.
    ///
    /// Picks the axis of the smallest absolute component of the normalized
    /// vector, preferring X, then Y, on ties.
    fn most_orthogonal_axis(&self) -> Self {
        let f = self.normalize();
        let (x, y, z) = (f.x().abs(), f.y().abs(), f.z().abs());
        if x <= y {
            if x <= z {
                Self::unit_x()
            } else {
                Self::unit_z()
            }
        } else if y <= z {
            Self::unit_y()
        } else {
            Self::unit_z()
        }
    }
}

/// Operations the engine needs from a 3x3 matrix type over vector `V`.
pub trait Matrix<V>: Copy + Debug + Mul<Output = Self> {
    /// Build a matrix from its three columns.
    fn from_columns(c0: V, c1: V, c2: V) -> Self;

    /// Diagonal scale matrix.
    fn from_scale(scale: V) -> Self;

    /// Transposed copy.
    fn transpose(&self) -> Self;

    /// Matrix-vector product `self * v`.
    fn mul_vector(&self, v: &V) -> V;

    /// Column `index` (0, 1 or 2).
    fn column(&self, index: usize) -> V;

    /// Element at `(row, column)`.
    fn get(&self, row: usize, column: usize) -> f64;
}

impl Vector for Vec3 {
    type Matrix = Mat3;

    #[inline]
    fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3::new(x, y, z)
    }

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn dot(&self, other: &Self) -> f64 {
        Vec3::dot(self, other)
    }

    #[inline]
    fn cross(&self, other: &Self) -> Self {
        Vec3::cross(self, other)
    }

    #[inline]
    fn component_mul(&self, other: &Self) -> Self {
        Vec3::component_mul(self, other)
    }

    #[inline]
    fn magnitude_squared(&self) -> f64 {
        self.norm_squared()
    }
}

impl Matrix<Vec3> for Mat3 {
    fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Mat3::from_columns(&[c0, c1, c2])
    }

    fn from_scale(scale: Vec3) -> Self {
        Mat3::from_diagonal(&scale)
    }

    fn transpose(&self) -> Self {
        Mat3::transpose(self)
    }

    fn mul_vector(&self, v: &Vec3) -> Vec3 {
        self * v
    }

    fn column(&self, index: usize) -> Vec3 {
        Mat3::column(self, index).into_owned()
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        self[(row, column)]
    }
}

/// Sign of `x`: `1.0`, `-1.0`, or `0.0` for either zero.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Add two values, snapping the result to exactly zero when they nearly cancel.
///
/// If `x` and `y` have different signs and `|x + y| / max(|x|, |y|) < tolerance`,
/// the remaining residue is rounding noise and `0.0` is returned.
#[inline]
pub fn stable_sum(x: f64, y: f64, tolerance: f64) -> f64 {
    let sum = x + y;
    if sign(x) != sign(y) && (sum / x.abs().max(y.abs())).abs() < tolerance {
        return 0.0;
    }
    sum
}
