//! # stlvox Raster
//!
//! Turns decoded STL triangles into a deduplicated set of integer block
//! coordinates.
//!
//! ## Architecture
//!
//! ```text
//! ParsedMesh → CoordinateTransform → Triangle → voxelizer → BlockAccumulator → BlockSink
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::conversion::ConversionConfig;
//! use stlvox_raster::{convert, NullReporter};
//!
//! let stl = b"solid t
//! facet normal 0 0 1
//! outer loop
//! vertex 0 0 0
//! vertex 3 0 0
//! vertex 0 3 0
//! endloop
//! endfacet
//! endsolid t
//! ";
//! let mesh = stlvox_mesh::parse_bytes(stl).unwrap();
//! let conversion = convert(&mesh, &ConversionConfig::default(), &NullReporter);
//! assert_eq!(conversion.triangle_count(), 1);
//! assert!(conversion.blocks().len() >= 3);
//! ```

pub mod accumulator;
pub mod bounds;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod sink;
pub mod transform;
pub mod voxelizer;

pub use accumulator::BlockAccumulator;
pub use bounds::{AxisRange, BoundingBox};
pub use error::SinkError;
pub use pipeline::{convert, Conversion, ConversionSummary};
pub use progress::{NullReporter, ProgressReporter, TracingReporter};
pub use sink::{deliver, BlockSink};
pub use transform::{CoordinateTransform, Triangle};
pub use voxelizer::{rasterize_fan, rasterize_segment, voxelize, voxelize_triangle};
