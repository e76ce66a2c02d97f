//! [`Vector`]/[`Matrix`] for glam's double precision types.

use glam::{DMat3, DVec3};

use crate::{Matrix, Vector};

impl Vector for DVec3 {
    type Matrix = DMat3;

    #[inline]
    fn new(x: f64, y: f64, z: f64) -> Self {
        DVec3::new(x, y, z)
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
        DVec3::dot(*self, *other)
    }

    #[inline]
    fn cross(&self, other: &Self) -> Self {
        DVec3::cross(*self, *other)
    }

    #[inline]
    fn component_mul(&self, other: &Self) -> Self {
        *self * *other
    }
}

impl Matrix<DVec3> for DMat3 {
    fn from_columns(c0: DVec3, c1: DVec3, c2: DVec3) -> Self {
        DMat3::from_cols(c0, c1, c2)
    }

    fn from_scale(scale: DVec3) -> Self {
        DMat3::from_diagonal(scale)
    }

    fn transpose(&self) -> Self {
        DMat3::transpose(self)
    }

    fn mul_vector(&self, v: &DVec3) -> DVec3 {
        self.mul_vec3(*v)
    }

    fn column(&self, index: usize) -> DVec3 {
        self.col(index)
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        self.col(column)[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_glam_matches_nalgebra() {
        let a = DVec3::new(0.3, -1.2, 2.0);
        let b = DVec3::new(-4.0, 0.5, 1.5);
        let na = Vec3::new(0.3, -1.2, 2.0);
        let nb = Vec3::new(-4.0, 0.5, 1.5);

        assert_eq!(Vector::dot(&a, &b), Vector::dot(&na, &nb));
        let c = Vector::cross(&a, &b);
        let nc = Vector::cross(&na, &nb);
        assert_eq!((c.x, c.y, c.z), (nc.x, nc.y, nc.z));
        assert_eq!(a.most_orthogonal_axis(), DVec3::X);
    }

    #[test]
    fn test_glam_matrix_layout() {
        let m = <DMat3 as Matrix<DVec3>>::from_columns(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(Matrix::get(&m, 1, 0), 2.0);
        assert_eq!(Matrix::get(&m, 0, 2), 7.0);
        assert_eq!(Matrix::column(&m, 1), DVec3::new(4.0, 5.0, 6.0));
    }
}
