//! # Triangle Voxelizer
//!
//! Approximates a triangle's surface with unit blocks using DDA stepping.
//!
//! ## Algorithm
//!
//! 1. **Segment**: step from `a` toward `b` along the dominant axis, one
//!    unit per step, emitting the rounded point. `b` itself is not emitted.
//! 2. **Fan**: for every point of segment `(v1, v2)`, emit segment
//!    `(p, v3)`.
//! 3. **Triangle**: union of the fans for `(v1,v2,v3)`, `(v2,v3,v1)` and
//!    `(v3,v1,v2)`. A single fan leaves gaps on the side away from its base
//!    edge; the rotations cover them.
//!
//! Emission goes through a callback so callers choose the collection.
//!
//! ## Example
//!
//! ```rust
//! use glam::{DVec3, IVec3};
//! use stlvox_raster::{voxelize, Triangle};
//!
//! let tri = Triangle::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
//! let blocks = voxelize(&tri);
//! assert!(blocks.contains(&IVec3::new(1, 1, 0)));
//! assert_eq!(blocks.len(), 6);
//! ```

use std::collections::HashSet;

use glam::{DVec3, IVec3};
use stlvox_mesh::vector::to_voxel;

use crate::transform::Triangle;

/// Emits the blocks on the segment from `a` toward `b`, excluding `b`.
///
/// Coincident endpoints emit exactly one block. Endpoints are expected on
/// grid points; for off-grid input the step count is rounded up so at least
/// one block is always emitted.
///
/// The decoders reject non-finite vertices, but a transform can still
/// overflow to infinity. A segment without a finite length emits only the
/// block at `a`.
pub fn rasterize_segment(a: DVec3, b: DVec3, emit: &mut impl FnMut(IVec3)) {
    let delta = b - a;
    let steps = delta.abs().max_element();
    if a == b || !steps.is_finite() {
        emit(to_voxel(a));
        return;
    }

    let step = delta / steps;
    let count = steps.ceil() as u64;
    for i in 0..count {
        emit(to_voxel(a + step * i as f64));
    }
}

/// Emits the fan of segments from every block of edge `(v1, v2)` to `v3`.
pub fn rasterize_fan(v1: DVec3, v2: DVec3, v3: DVec3, emit: &mut impl FnMut(IVec3)) {
    rasterize_segment(v1, v2, &mut |p: IVec3| {
        rasterize_segment(p.as_dvec3(), v3, emit);
    });
}

/// Emits every block of a triangle: the three rotated fans.
///
/// Blocks are emitted more than once; deduplication is the caller's job.
pub fn voxelize_triangle(triangle: &Triangle, emit: &mut impl FnMut(IVec3)) {
    let [v1, v2, v3] = triangle.vertices();
    rasterize_fan(v1, v2, v3, emit);
    rasterize_fan(v2, v3, v1, emit);
    rasterize_fan(v3, v1, v2, emit);
}

/// Collects the deduplicated blocks of one triangle.
pub fn voxelize(triangle: &Triangle) -> HashSet<IVec3> {
    let mut blocks = HashSet::new();
    voxelize_triangle(triangle, &mut |block| {
        blocks.insert(block);
    });
    blocks
}
