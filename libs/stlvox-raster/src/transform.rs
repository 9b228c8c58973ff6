//! # Coordinate Transform
//!
//! Affine map from STL file space into block grid space.
//!
//! A vertex `(x, y, z)` lands on `round(x·Ux + y·Uy + z·Uz + O)` with ties
//! rounded to even. The sum is evaluated left to right in f64.

use config::conversion::ConversionConfig;
use glam::{DVec3, Vec3};
use stlvox_mesh::vector::{round_half_even, widen};
use stlvox_mesh::RawTriangle;

/// Origin and basis vectors of the grid-space transform.
///
/// # Example
///
/// ```rust
/// use stlvox_raster::CoordinateTransform;
/// use glam::{DVec3, Vec3};
///
/// // Default maps mesh Z-up to grid Y-up.
/// let t = CoordinateTransform::default();
/// assert_eq!(t.apply(Vec3::new(1.0, 2.0, 3.0)), DVec3::new(1.0, 3.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    origin: DVec3,
    x_unit: DVec3,
    y_unit: DVec3,
    z_unit: DVec3,
}

impl CoordinateTransform {
    /// Creates a transform from an origin and the images of the three axes.
    pub fn new(origin: DVec3, x_unit: DVec3, y_unit: DVec3, z_unit: DVec3) -> Self {
        Self {
            origin,
            x_unit,
            y_unit,
            z_unit,
        }
    }

    /// Zero origin, unchanged axes.
    pub fn identity() -> Self {
        Self::new(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z)
    }

    /// Maps one file-space point to a rounded grid point.
    #[inline]
    pub fn apply(&self, point: Vec3) -> DVec3 {
        let p = widen(point);
        round_half_even(self.x_unit * p.x + self.y_unit * p.y + self.z_unit * p.z + self.origin)
    }

    /// Maps the three corners of a raw facet.
    #[inline]
    pub fn triangle(&self, raw: &RawTriangle) -> Triangle {
        let [a, b, c] = raw.vertices;
        Triangle::new(self.apply(a), self.apply(b), self.apply(c))
    }

    /// Grid position of the file origin.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::from(&ConversionConfig::default())
    }
}

impl From<&ConversionConfig> for CoordinateTransform {
    fn from(config: &ConversionConfig) -> Self {
        Self::new(
            DVec3::from_array(config.origin),
            DVec3::from_array(config.x_unit),
            DVec3::from_array(config.y_unit),
            DVec3::from_array(config.z_unit),
        )
    }
}

/// A facet in grid space with integer-valued corners.
///
/// Corners are rounded on construction and cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    v1: DVec3,
    v2: DVec3,
    v3: DVec3,
}

impl Triangle {
    /// Creates a triangle, rounding each corner half-to-even.
    pub fn new(v1: DVec3, v2: DVec3, v3: DVec3) -> Self {
        Self {
            v1: round_half_even(v1),
            v2: round_half_even(v2),
            v3: round_half_even(v3),
        }
    }

    /// Corners in construction order.
    #[inline]
    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v1, self.v2, self.v3]
    }
}
