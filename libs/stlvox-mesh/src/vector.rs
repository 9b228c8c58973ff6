//! Thin wrapper around the `glam` vector types shared across the pipeline.
//!
//! `Vec3` (f32) holds points exactly as stored in an STL file, `DVec3` (f64)
//! is used for transform and rasterization arithmetic and `IVec3` is the
//! voxel key. Add, subtract, scale, `abs`, `min`, `max` and `max_element`
//! come straight from `glam`; rounding lives here because the pipeline needs
//! a specific tie rule.

pub use glam::{DVec3, IVec3, Vec3};

/// Rounds every component to the nearest integer, ties to even.
///
/// `glam`'s own `round` breaks ties away from zero. Voxel identity depends
/// on the tie rule, so every rounding in the pipeline goes through here.
///
/// # Examples
/// ```
/// use stlvox_mesh::vector::{round_half_even, DVec3};
/// let v = round_half_even(DVec3::new(0.5, 1.5, -2.5));
/// assert_eq!(v, DVec3::new(0.0, 2.0, -2.0));
/// ```
#[inline]
pub fn round_half_even(v: DVec3) -> DVec3 {
    DVec3::new(
        v.x.round_ties_even(),
        v.y.round_ties_even(),
        v.z.round_ties_even(),
    )
}

/// Rounds a point and converts it to an integer voxel coordinate.
///
/// Components outside the `i32` range saturate, so distinct far points can
/// share a boundary block. NaN components map to 0.
///
/// # Examples
/// ```
/// use stlvox_mesh::vector::{to_voxel, DVec3, IVec3};
/// assert_eq!(to_voxel(DVec3::new(1.4, -0.6, 2.5)), IVec3::new(1, -1, 2));
/// ```
#[inline]
pub fn to_voxel(v: DVec3) -> IVec3 {
    round_half_even(v).as_ivec3()
}

/// Widens a raw f32 point to f64.
#[inline]
pub fn widen(v: Vec3) -> DVec3 {
    v.as_dvec3()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_even_breaks_ties_to_even() {
        assert_eq!(
            round_half_even(DVec3::new(2.5, 3.5, -0.5)),
            DVec3::new(2.0, 4.0, 0.0)
        );
    }

    #[test]
    fn round_half_even_leaves_integers_alone() {
        let v = DVec3::new(-7.0, 0.0, 12.0);
        assert_eq!(round_half_even(v), v);
    }

    #[test]
    fn to_voxel_rounds_before_truncating() {
        assert_eq!(to_voxel(DVec3::new(0.6, -0.4, -1.6)), IVec3::new(1, 0, -2));
    }

    #[test]
    fn to_voxel_saturates_out_of_range_components() {
        assert_eq!(
            to_voxel(DVec3::new(1.0e12, -1.0e12, f64::NAN)),
            IVec3::new(i32::MAX, i32::MIN, 0)
        );
        assert_eq!(to_voxel(DVec3::splat(3.0e9)), to_voxel(DVec3::splat(9.0e18)));
    }

    #[test]
    fn widen_is_exact() {
        let v = widen(Vec3::new(0.25, -3.0, 1024.5));
        assert_eq!(v, DVec3::new(0.25, -3.0, 1024.5));
    }
}
