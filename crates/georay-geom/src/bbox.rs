//! Axis-aligned bounding boxes.

use georay_math::{Vec3, Vector};

use crate::error::{GeomError, Result};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<V = Vec3> {
    /// Minimum corner.
    pub min: V,
    /// Maximum corner.
    pub max: V,
}

impl<V: Vector> Aabb<V> {
    /// Create an AABB from min and max corners.
    pub fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// Create an AABB, rejecting non-finite corners and `min > max` on any axis.
    pub fn try_new(min: V, max: V) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeomError::NonFinite("box corner"));
        }
        if min.x() > max.x() {
            return Err(GeomError::InvertedBounds('x'));
        }
        if min.y() > max.y() {
            return Err(GeomError::InvertedBounds('y'));
        }
        if min.z() > max.z() {
            return Err(GeomError::InvertedBounds('z'));
        }
        Ok(Self { min, max })
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut aabb = Self::new(first, first);
        for p in points {
            aabb.include_point(&p);
        }
        Some(aabb)
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &V) {
        self.min = V::new(
            self.min.x().min(p.x()),
            self.min.y().min(p.y()),
            self.min.z().min(p.z()),
        );
        self.max = V::new(
            self.max.x().max(p.x()),
            self.max.y().max(p.y()),
            self.max.z().max(p.z()),
        );
    }

    /// Center point.
    pub fn center(&self) -> V {
        self.min.lerp(&self.max, 0.5)
    }
}
