//! # Config Crate
//!
//! Centralized configuration for the stlvox pipeline. Wire-format sizes,
//! default transform vectors and delivery defaults live in [`constants`];
//! the validated per-run settings live in [`conversion`].
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{STL_HEADER_SIZE, STL_RECORD_SIZE};
//! use config::conversion::ConversionConfig;
//!
//! // Smallest binary STL holding a single facet
//! let minimal_len = STL_HEADER_SIZE + 4 + STL_RECORD_SIZE;
//! assert_eq!(minimal_len, 134);
//!
//! let cfg = ConversionConfig::default();
//! assert_eq!(cfg.y_unit, [0.0, 0.0, 1.0]);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain Rust, usable from every crate in the workspace
//! - **Compatible Defaults**: Mesh Z-up maps to grid Y-up out of the box

pub mod constants;
pub mod conversion;
