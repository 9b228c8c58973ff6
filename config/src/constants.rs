//! # Configuration Constants
//!
//! Centralized constants for the stlvox pipeline. STL wire-format sizes,
//! transform defaults and console delivery defaults are defined here.
//!
//! ## Categories
//!
//! - **Wire Format**: Binary STL header and record layout
//! - **Transform**: Default origin and basis vectors
//! - **Reporting**: Progress cadence
//! - **Delivery**: Defaults for the server console sink

// =============================================================================
// WIRE FORMAT CONSTANTS
// =============================================================================

/// Size of the opaque binary STL header in bytes.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_HEADER_SIZE;
///
/// let bytes = [0u8; 84];
/// let header = &bytes[..STL_HEADER_SIZE];
/// assert_eq!(header.len(), 80);
/// ```
pub const STL_HEADER_SIZE: usize = 80;

/// Size of the little-endian `u32` triangle count following the header.
pub const STL_COUNT_SIZE: usize = 4;

/// Size of one binary triangle record.
///
/// Normal (3 × f32) + three vertices (9 × f32) + attribute (u16).
///
/// # Example
///
/// ```rust
/// use config::constants::STL_RECORD_SIZE;
///
/// assert_eq!(STL_RECORD_SIZE, 12 * 4 + 2);
/// ```
pub const STL_RECORD_SIZE: usize = 50;

/// Leading bytes that mark a (probable) ASCII STL file.
///
/// Binary files may legally start with the same bytes in their header, so a
/// match only selects which decoder is tried first.
///
/// # Example
///
/// ```rust
/// use config::constants::ASCII_SIGNATURE;
///
/// let file = b"solid cube\nendsolid cube\n";
/// assert!(file.starts_with(ASCII_SIGNATURE));
/// ```
pub const ASCII_SIGNATURE: &[u8] = b"solid";

// =============================================================================
// TRANSFORM CONSTANTS
// =============================================================================

/// Default grid origin.
pub const DEFAULT_ORIGIN: [f64; 3] = [0.0, 0.0, 0.0];

/// Default image of the mesh X axis.
pub const DEFAULT_X_UNIT: [f64; 3] = [1.0, 0.0, 0.0];

/// Default image of the mesh Y axis.
///
/// Mesh Y becomes grid Z, so a Z-up model stands upright in a Y-up world.
pub const DEFAULT_Y_UNIT: [f64; 3] = [0.0, 0.0, 1.0];

/// Default image of the mesh Z axis.
pub const DEFAULT_Z_UNIT: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// REPORTING CONSTANTS
// =============================================================================

/// Number of triangles (or delivered blocks) between progress reports.
///
/// # Example
///
/// ```rust
/// use config::constants::PROGRESS_INTERVAL;
///
/// let processed = 3000;
/// assert_eq!(processed % PROGRESS_INTERVAL, 0);
/// ```
pub const PROGRESS_INTERVAL: usize = 1000;

// =============================================================================
// DELIVERY CONSTANTS
// =============================================================================

/// Default GNU screen session name hosting the server console.
pub const DEFAULT_SCREEN_NAME: &str = "minecraft";

/// Default GNU screen window (page) of the server console.
pub const DEFAULT_SCREEN_PAGE: &str = "0";

/// Console command used to place one block.
pub const SETBLOCK_COMMAND: &str = "setblock";
