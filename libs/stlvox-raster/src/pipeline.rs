//! # Conversion Pipeline
//!
//! Drives a decoded mesh through the transform and the voxelizer into one
//! [`BlockAccumulator`].
//!
//! ```text
//! RawTriangle ─► CoordinateTransform::triangle ─► bounds + voxelize ─► BlockAccumulator
//! ```
//!
//! Sequential mode walks triangles in file order. Parallel mode voxelizes
//! triangles on the rayon pool into per-worker accumulators and merges them
//! once every triangle is done, so no set is ever shared between threads.
//! Both modes yield the same blocks and bounds.

use std::sync::atomic::{AtomicUsize, Ordering};

use config::conversion::ConversionConfig;
use glam::IVec3;
use rayon::prelude::*;
use serde::Serialize;
use stlvox_mesh::{ParsedMesh, RawTriangle};
use tracing::debug;

use crate::accumulator::BlockAccumulator;
use crate::bounds::BoundingBox;
use crate::progress::ProgressReporter;
use crate::transform::CoordinateTransform;

/// Outcome of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    triangles: usize,
    accumulator: BlockAccumulator,
}

impl Conversion {
    /// Number of triangles processed.
    pub fn triangle_count(&self) -> usize {
        self.triangles
    }

    /// The deduplicated blocks.
    pub fn blocks(&self) -> &std::collections::HashSet<IVec3> {
        self.accumulator.blocks()
    }

    /// Bounds of every transformed vertex.
    pub fn bounds(&self) -> &BoundingBox {
        self.accumulator.bounds()
    }

    /// The accumulator holding blocks and bounds.
    pub fn accumulator(&self) -> &BlockAccumulator {
        &self.accumulator
    }

    /// Final counters for reporting.
    pub fn summary(&self) -> ConversionSummary {
        let bounds = self.bounds();
        ConversionSummary {
            triangles: self.triangles,
            unique_blocks: self.accumulator.len(),
            min: bounds.min().map(|v| v.to_array()),
            max: bounds.max().map(|v| v.to_array()),
        }
    }

    /// Consumes the conversion, returning the accumulator.
    pub fn into_accumulator(self) -> BlockAccumulator {
        self.accumulator
    }
}

/// Per-run diagnostics: triangle count, unique blocks and bounding box.
///
/// `min` and `max` are `None` when the mesh had no triangles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    /// Triangles processed.
    pub triangles: usize,
    /// Distinct blocks produced.
    pub unique_blocks: usize,
    /// Minimum corner in grid space.
    pub min: Option<[f64; 3]>,
    /// Maximum corner in grid space.
    pub max: Option<[f64; 3]>,
}

/// Converts every triangle of `mesh` into blocks.
///
/// Calls [`ProgressReporter::finished`] once with the run summary before
/// returning.
pub fn convert(
    mesh: &ParsedMesh,
    config: &ConversionConfig,
    reporter: &dyn ProgressReporter,
) -> Conversion {
    let transform = CoordinateTransform::from(config);
    debug!(
        triangles = mesh.triangle_count(),
        parallel = config.parallel,
        origin = ?transform.origin(),
        "starting conversion"
    );

    let accumulator = if config.parallel {
        convert_parallel(&mesh.triangles, &transform, reporter)
    } else {
        convert_sequential(&mesh.triangles, &transform, reporter)
    };

    let conversion = Conversion {
        triangles: mesh.triangle_count(),
        accumulator,
    };
    reporter.finished(&conversion.summary());
    conversion
}

fn convert_sequential(
    triangles: &[RawTriangle],
    transform: &CoordinateTransform,
    reporter: &dyn ProgressReporter,
) -> BlockAccumulator {
    let mut accumulator = BlockAccumulator::new();
    for (index, raw) in triangles.iter().enumerate() {
        accumulator.add_triangle(&transform.triangle(raw));
        reporter.triangles_processed(index + 1);
    }
    accumulator
}

fn convert_parallel(
    triangles: &[RawTriangle],
    transform: &CoordinateTransform,
    reporter: &dyn ProgressReporter,
) -> BlockAccumulator {
    let processed = AtomicUsize::new(0);
    triangles
        .par_iter()
        .fold(BlockAccumulator::new, |mut accumulator, raw| {
            accumulator.add_triangle(&transform.triangle(raw));
            let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.triangles_processed(count);
            accumulator
        })
        .reduce(BlockAccumulator::new, |mut left, right| {
            left.merge(right);
            left
        })
}
