//! # STL Parser
//!
//! Encoding detection and the two decoders.
//!
//! ## Detection
//!
//! The first five bytes are inspected without consuming anything. `solid`
//! selects the ASCII decoder; anything else goes straight to binary. A binary
//! header may legally begin with `solid`, so the whole input is decoded again
//! as binary when the ASCII decoder finds bytes that are not UTF-8, or when it
//! fails on input whose length is exactly `84 + 50 * count` for the count
//! stored at bytes 80..84.
//!
//! ## Example
//!
//! ```rust
//! use stlvox_mesh::StlEncoding;
//!
//! assert_eq!(StlEncoding::detect(b"solid cube"), StlEncoding::Ascii);
//! assert_eq!(StlEncoding::detect(&[0u8; 84]), StlEncoding::Binary);
//! ```

mod ascii;
mod binary;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use config::constants::{ASCII_SIGNATURE, STL_COUNT_SIZE, STL_HEADER_SIZE, STL_RECORD_SIZE};

use crate::error::{StlError, StlResult};
use crate::triangle::RawTriangle;

// =============================================================================
// ENCODING
// =============================================================================

/// The two STL wire encodings.
///
/// Resolved once per input; records are never re-checked individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlEncoding {
    /// Line-oriented text (`solid` / `facet` / `vertex` ...).
    Ascii,
    /// 80-byte header, u32 count, 50-byte little-endian records.
    Binary,
}

impl StlEncoding {
    /// Picks the decoder to try first from the leading bytes.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(ASCII_SIGNATURE) {
            Self::Ascii
        } else {
            Self::Binary
        }
    }

    /// Decodes `bytes` with this encoding only, without any fallback.
    pub fn parse(self, bytes: &[u8]) -> StlResult<ParsedMesh> {
        match self {
            Self::Ascii => ascii::parse(bytes),
            Self::Binary => binary::parse(bytes),
        }
    }
}

// =============================================================================
// PARSED MESH
// =============================================================================

/// Result of decoding one STL input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMesh {
    /// Encoding that successfully decoded the input.
    pub encoding: StlEncoding,
    /// Solid name (ASCII) or printable header text (binary).
    pub name: String,
    /// Facets in file order.
    pub triangles: Vec<RawTriangle>,
}

impl ParsedMesh {
    /// Returns the number of facets.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the file declared no facets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Decodes an in-memory STL file, detecting the encoding.
///
/// ## Errors
///
/// `MalformedMesh` when the selected grammar is violated. An ASCII-looking
/// input that is not UTF-8, or that fails ASCII decoding while having the
/// exact binary length, is retried as binary; if that fails too, the binary
/// error is returned.
pub fn parse_bytes(bytes: &[u8]) -> StlResult<ParsedMesh> {
    match StlEncoding::detect(bytes) {
        StlEncoding::Binary => binary::parse(bytes),
        StlEncoding::Ascii => match ascii::parse(bytes) {
            Err(StlError::AmbiguousEncoding { offset }) => {
                tracing::warn!(
                    offset,
                    "input starts with `solid` but is not text, decoding as binary STL"
                );
                binary::parse(bytes)
            }
            Err(err) if has_binary_length(bytes) => {
                tracing::warn!(
                    error = %err,
                    "ASCII decoding failed but the size matches the binary layout, decoding as binary STL"
                );
                binary::parse(bytes)
            }
            result => result,
        },
    }
}

/// True when `bytes` is exactly a binary header, count and the declared
/// number of records.
fn has_binary_length(bytes: &[u8]) -> bool {
    let Some(count) = bytes
        .get(STL_HEADER_SIZE..STL_HEADER_SIZE + STL_COUNT_SIZE)
        .and_then(|raw| <[u8; 4]>::try_from(raw).ok())
        .map(u32::from_le_bytes)
    else {
        return false;
    };
    (count as u64)
        .checked_mul(STL_RECORD_SIZE as u64)
        .and_then(|records| records.checked_add((STL_HEADER_SIZE + STL_COUNT_SIZE) as u64))
        == Some(bytes.len() as u64)
}

/// Reads a whole stream and decodes it.
pub fn parse_reader(mut reader: impl Read) -> StlResult<ParsedMesh> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| StlError::unreadable(None, e))?;
    parse_bytes(&bytes)
}

/// Opens, reads and decodes an STL file.
///
/// The file handle is closed before decoding starts.
pub fn parse_file(path: impl AsRef<Path>) -> StlResult<ParsedMesh> {
    let path = path.as_ref();
    let bytes = read_file(path).map_err(|e| StlError::unreadable(Some(path.to_path_buf()), e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read STL file");
    parse_bytes(&bytes)
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
