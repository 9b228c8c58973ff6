//! # Binary STL Decoder
//!
//! ```text
//! UINT8[80]    header (opaque)
//! UINT32       triangle count (little-endian)
//! foreach triangle
//!     REAL32[3]  normal
//!     REAL32[3]  vertex 1
//!     REAL32[3]  vertex 2
//!     REAL32[3]  vertex 3
//!     UINT16     attribute byte count (ignored)
//! end
//! ```
//!
//! Exactly the declared number of records is decoded. Bytes after the last
//! record are ignored. Normals are kept as stored; vertices must be finite.

use config::constants::{STL_HEADER_SIZE, STL_RECORD_SIZE};
use glam::Vec3;

use super::{ParsedMesh, StlEncoding};
use crate::error::{StlError, StlResult};
use crate::triangle::RawTriangle;

pub(super) fn parse(bytes: &[u8]) -> StlResult<ParsedMesh> {
    let mut reader = ByteReader::new(bytes);

    let header = reader.take(STL_HEADER_SIZE, "80-byte header")?;
    let name = header_text(header);
    let declared = reader.read_u32("triangle count")? as usize;
    tracing::debug!(header = %name, declared, "decoding binary STL");

    // A corrupt count must not turn into a huge allocation.
    let capacity = declared.min(reader.remaining() / STL_RECORD_SIZE);
    let mut triangles = Vec::with_capacity(capacity);
    for index in 0..declared {
        let record = reader.record(index, declared)?;
        triangles.push(record);
    }

    if reader.remaining() > 0 {
        tracing::debug!(
            trailing = reader.remaining(),
            "ignoring bytes after the last declared triangle"
        );
    }

    Ok(ParsedMesh {
        encoding: StlEncoding::Binary,
        name,
        triangles,
    })
}

/// Printable part of the header, up to the first NUL.
fn header_text(header: &[u8]) -> String {
    let end = header.iter().position(|&b| b == 0).unwrap_or(header.len());
    String::from_utf8_lossy(&header[..end]).trim().to_string()
}

// =============================================================================
// BYTE READER
// =============================================================================

/// Little-endian reader over a byte slice that reports short reads with the
/// offset where the missing data should have started.
struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, len: usize, what: &str) -> StlResult<&'a [u8]> {
        let start = self.offset;
        let slice = self.bytes.get(start..start + len).ok_or_else(|| {
            StlError::malformed(
                start,
                format!(
                    "unexpected end of input reading {what}: need {len} bytes, {} left",
                    self.remaining()
                ),
            )
        })?;
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self, what: &str) -> StlResult<[u8; N]> {
        let start = self.offset;
        let slice = self.take(N, what)?;
        slice
            .try_into()
            .map_err(|_| StlError::malformed(start, format!("short read in {what}")))
    }

    fn read_u32(&mut self, what: &str) -> StlResult<u32> {
        self.array::<4>(what).map(u32::from_le_bytes)
    }

    fn read_vec3(&mut self, what: &str) -> StlResult<Vec3> {
        let raw = self.array::<12>(what)?;
        let mut components = [0.0f32; 3];
        for (component, chunk) in components.iter_mut().zip(raw.chunks_exact(4)) {
            *component = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Vec3::from_array(components))
    }

    /// Reads a vertex, rejecting NaN and infinite coordinates.
    fn read_vertex(&mut self, index: usize, corner: usize) -> StlResult<Vec3> {
        let start = self.offset;
        let vertex = self.read_vec3("vertex")?;
        if !vertex.is_finite() {
            return Err(StlError::malformed(
                start,
                format!("non-finite vertex {corner} of triangle {}: {vertex}", index + 1),
            ));
        }
        Ok(vertex)
    }

    /// Reads one 50-byte facet record.
    fn record(&mut self, index: usize, declared: usize) -> StlResult<RawTriangle> {
        let start = self.offset;
        if self.remaining() < STL_RECORD_SIZE {
            return Err(StlError::malformed(
                start,
                format!(
                    "truncated triangle {} of {declared}: need {STL_RECORD_SIZE} bytes, {} left",
                    index + 1,
                    self.remaining()
                ),
            ));
        }
        let normal = self.read_vec3("normal")?;
        let vertices = [
            self.read_vertex(index, 1)?,
            self.read_vertex(index, 2)?,
            self.read_vertex(index, 3)?,
        ];
        // attribute byte count
        self.take(2, "attribute")?;
        Ok(RawTriangle::new(normal, vertices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_text_stops_at_nul() {
        let mut header = [0u8; STL_HEADER_SIZE];
        header[..9].copy_from_slice(b"exporter ");
        assert_eq!(header_text(&header), "exporter");
    }

    #[test]
    fn header_text_of_zero_header_is_empty() {
        assert_eq!(header_text(&[0u8; STL_HEADER_SIZE]), "");
    }

    #[test]
    fn reader_reports_offset_of_short_read() {
        let bytes = [1u8, 0, 0];
        let mut reader = ByteReader::new(&bytes);
        let err = reader.read_u32("count").unwrap_err();
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn reader_decodes_little_endian() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&7u32.to_le_bytes());
        for v in [1.5f32, -2.0, 0.25] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u32("count").unwrap(), 7);
        assert_eq!(reader.read_vec3("v").unwrap(), Vec3::new(1.5, -2.0, 0.25));
        assert_eq!(reader.remaining(), 0);
    }
}
