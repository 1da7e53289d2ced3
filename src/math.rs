//! 3-D point and vector primitives for the stem local frame.
//!
//! All coordinates are millimeters. The catalogs only need a handful of
//! operations (difference, translation, scaling, normalization), so these
//! types stay deliberately small.

use serde::{Deserialize, Serialize};

/// A displacement in the stem local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from two points (from -> to).
    #[inline]
    pub fn from_points(from: &Pnt, to: &Pnt) -> Self {
        Self::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }

    #[inline]
    pub fn added(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn subtracted(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector with the same direction.
    ///
    /// A zero-length input yields the zero vector rather than an error;
    /// the legacy geometry code relies on this degenerate-input policy.
    #[inline]
    pub fn normalized(&self) -> Vec3 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vec3::ZERO;
        }
        self.multiplied(1.0 / magnitude)
    }
}

/// A position in the stem local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Pnt {
    pub const ORIGIN: Pnt = Pnt::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns all coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Vector from `other` to this point.
    #[inline]
    pub fn subtracted(&self, other: &Pnt) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn translated(&self, v: &Vec3) -> Pnt {
        Pnt::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

/// A resection plane in the stem local frame.
///
/// `normal` is unit length by construction in every catalog.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CutPlane {
    pub origin: Pnt,
    pub normal: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(a.added(&b), Vec3::new(1.5, 1.0, 5.0));
        assert_eq!(a.subtracted(&b), Vec3::new(0.5, 3.0, 1.0));
        assert_eq!(a.multiplied(2.0), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec3::new(2.0, -3.0, 6.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero_vector_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_point_translation_roundtrip() {
        let p = Pnt::new(1.0, 2.0, 3.0);
        let q = Pnt::new(-4.0, 0.5, 9.0);
        let v = q.subtracted(&p);
        assert_eq!(p.translated(&v), q);
    }
}
