//! Planes in Hessian normal form.

use georay_math::{Vec3, Vector};

use crate::error::{GeomError, Result};

/// A plane `dot(normal, p) + distance = 0`.
///
/// `distance` is the signed distance from the plane to the origin, measured
/// along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<V = Vec3> {
    /// Unit normal.
    pub normal: V,
    /// Signed distance term.
    pub distance: f64,
}

impl<V: Vector> Plane<V> {
    /// Create a plane from a unit normal and distance.
    #[inline]
    pub fn new(normal: V, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` with the given unit `normal`.
    pub fn from_point_normal(point: V, normal: V) -> Self {
        Self {
            normal,
            distance: -normal.dot(&point),
        }
    }

    /// Like [`Plane::from_point_normal`] but normalizes `normal` and rejects
    /// zero or non-finite input.
    pub fn try_from_point_normal(point: V, normal: V) -> Result<Self> {
        if !point.is_finite() {
            return Err(GeomError::NonFinite("plane point"));
        }
        if !normal.is_finite() || normal.is_zero() {
            return Err(GeomError::DegenerateNormal);
        }
        Ok(Self::from_point_normal(point, normal.normalize()))
    }

    /// Signed distance from the plane to `point`; negative behind the normal.
    #[inline]
    pub fn signed_distance(&self, point: &V) -> f64 {
        self.normal.dot(point) + self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &V) -> V {
        *point - self.normal * self.signed_distance(point)
    }
}
