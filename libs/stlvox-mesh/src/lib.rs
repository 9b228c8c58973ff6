//! # stlvox Mesh
//!
//! STL decoding for the stlvox pipeline. Turns the bytes of an ASCII or
//! binary STL file into a list of raw triangles.
//!
//! ## Architecture
//!
//! ```text
//! bytes → StlEncoding::detect → ascii / binary decoder → ParsedMesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stlvox_mesh::{parse_bytes, StlEncoding};
//!
//! let source = b"solid t
//! facet normal 0 0 1
//!  outer loop
//!   vertex 0 0 0
//!   vertex 1 0 0
//!   vertex 0 1 0
//!  endloop
//! endfacet
//! endsolid t
//! ";
//! let mesh = parse_bytes(source).unwrap();
//! assert_eq!(mesh.encoding, StlEncoding::Ascii);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

pub mod error;
pub mod parser;
pub mod triangle;
pub mod vector;

pub use error::{StlError, StlResult};
pub use parser::{parse_bytes, parse_file, parse_reader, ParsedMesh, StlEncoding};
pub use triangle::RawTriangle;
pub use vector::{DVec3, IVec3, Vec3};
