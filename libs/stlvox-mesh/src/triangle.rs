//! # Raw Triangles
//!
//! Facets exactly as decoded from an STL file, before any transform.

use glam::Vec3;

/// One STL facet in file coordinates.
///
/// The normal is kept for diagnostics only; nothing downstream relies on it.
///
/// # Example
///
/// ```rust
/// use stlvox_mesh::{RawTriangle, Vec3};
///
/// let tri = RawTriangle::new(Vec3::Z, [Vec3::ZERO, Vec3::X, Vec3::Y]);
/// assert_eq!(tri.vertices[1], Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTriangle {
    /// Facet normal as written in the file.
    pub normal: Vec3,
    /// Corner positions in file order.
    pub vertices: [Vec3; 3],
}

impl RawTriangle {
    /// Creates a raw triangle.
    pub fn new(normal: Vec3, vertices: [Vec3; 3]) -> Self {
        Self { normal, vertices }
    }
}
