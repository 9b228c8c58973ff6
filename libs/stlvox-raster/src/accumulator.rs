//! # Block Accumulator
//!
//! Owns the deduplicated block set of one conversion run together with the
//! bounding box of every vertex seen. The set only ever grows.

use std::collections::hash_set;
use std::collections::HashSet;

use glam::{DVec3, IVec3};

use crate::bounds::BoundingBox;
use crate::transform::Triangle;
use crate::voxelizer::voxelize_triangle;

/// Deduplicating block collector with running bounds.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use stlvox_raster::BlockAccumulator;
///
/// let mut acc = BlockAccumulator::new();
/// acc.add(IVec3::new(1, 2, 3));
/// acc.add(IVec3::new(1, 2, 3));
/// assert_eq!(acc.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockAccumulator {
    blocks: HashSet<IVec3>,
    bounds: BoundingBox,
}

impl BlockAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a block. Returns false if it was already present.
    #[inline]
    pub fn add(&mut self, block: IVec3) -> bool {
        self.blocks.insert(block)
    }

    /// Extends the bounding box to include `vertex`.
    #[inline]
    pub fn merge_bounds(&mut self, vertex: DVec3) {
        self.bounds.merge(vertex);
    }

    /// Merges the corners of `triangle` into the bounds and adds its blocks.
    pub fn add_triangle(&mut self, triangle: &Triangle) {
        for vertex in triangle.vertices() {
            self.bounds.merge(vertex);
        }
        let blocks = &mut self.blocks;
        voxelize_triangle(triangle, &mut |block| {
            blocks.insert(block);
        });
    }

    /// Absorbs another accumulator's blocks and bounds.
    pub fn merge(&mut self, other: BlockAccumulator) {
        if self.blocks.len() < other.blocks.len() {
            let mut other = other;
            std::mem::swap(self, &mut other);
            self.merge(other);
            return;
        }
        self.blocks.extend(other.blocks);
        self.bounds.merge_box(&other.bounds);
    }

    /// Returns true if `block` has been added.
    #[inline]
    pub fn contains(&self, block: &IVec3) -> bool {
        self.blocks.contains(block)
    }

    /// Number of distinct blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates the blocks in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, IVec3> {
        self.blocks.iter()
    }

    /// The deduplicated block set.
    pub fn blocks(&self) -> &HashSet<IVec3> {
        &self.blocks
    }

    /// Bounds of every merged vertex.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Consumes the accumulator, returning the block set.
    pub fn into_blocks(self) -> HashSet<IVec3> {
        self.blocks
    }
}

impl Extend<IVec3> for BlockAccumulator {
    fn extend<I: IntoIterator<Item = IVec3>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BlockAccumulator {
    type Item = &'a IVec3;
    type IntoIter = hash_set::Iter<'a, IVec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
