//! # ASCII STL Decoder
//!
//! ```text
//! solid <name>
//!   facet normal i j k
//!     outer loop
//!       vertex x y z      (× 3)
//!     endloop
//!   endfacet
//!   ...
//! endsolid <name>
//! ```
//!
//! Leading whitespace and blank lines are ignored. Everything else is
//! checked: a missing keyword, a bad number, a non-finite vertex or a missing
//! `endsolid` is a `MalformedMesh` error pointing at the offending line.

use std::str::SplitWhitespace;

use glam::Vec3;

use super::{ParsedMesh, StlEncoding};
use crate::error::{StlError, StlResult};
use crate::triangle::RawTriangle;

pub(super) fn parse(bytes: &[u8]) -> StlResult<ParsedMesh> {
    let source = std::str::from_utf8(bytes).map_err(|e| StlError::AmbiguousEncoding {
        offset: e.valid_up_to(),
    })?;
    let mut lines = LineCursor::new(source);

    let header = lines.expect_line("`solid` header")?;
    if !header.text.starts_with("solid") {
        return Err(header.error("expected `solid` header"));
    }
    let name = header.text["solid".len()..].trim().to_string();
    tracing::debug!(name = %name, "decoding ASCII STL");

    let mut triangles = Vec::new();
    loop {
        let line = lines.expect_line("`facet` or `endsolid`")?;
        if line.text.starts_with("endsolid") {
            break;
        }

        let mut tokens = line.keyword("facet")?;
        if tokens.next() != Some("normal") {
            return Err(line.error("expected `facet normal`"));
        }
        let normal = line.triplet(tokens, "normal")?;

        let outer = lines.expect_line("`outer loop`")?;
        if outer.keyword("outer")?.next() != Some("loop") {
            return Err(outer.error("expected `outer loop`"));
        }

        let mut vertices = [Vec3::ZERO; 3];
        for vertex in &mut vertices {
            let line = lines.expect_line("`vertex`")?;
            *vertex = line.vertex()?;
        }

        lines.expect_keyword("endloop")?;
        lines.expect_keyword("endfacet")?;

        triangles.push(RawTriangle::new(normal, vertices));
    }

    tracing::debug!(triangles = triangles.len(), "decoded ASCII STL");
    Ok(ParsedMesh {
        encoding: StlEncoding::Ascii,
        name,
        triangles,
    })
}

// =============================================================================
// LINE CURSOR
// =============================================================================

/// Non-blank line with its position in the source.
struct Line<'a> {
    /// Line content without leading or trailing whitespace.
    text: &'a str,
    /// Byte offset of the first non-blank character.
    offset: usize,
    /// 1-based line number.
    number: usize,
}

impl<'a> Line<'a> {
    fn error(&self, reason: impl Into<String>) -> StlError {
        StlError::malformed_at_line(self.offset, self.number, reason)
    }

    /// Checks the first token and returns the rest.
    fn keyword(&self, expected: &str) -> StlResult<SplitWhitespace<'a>> {
        let mut tokens = self.text.split_whitespace();
        match tokens.next() {
            Some(token) if token == expected => Ok(tokens),
            Some(token) => Err(self.error(format!("expected `{expected}`, found `{token}`"))),
            None => Err(self.error(format!("expected `{expected}`"))),
        }
    }

    /// Parses the next three tokens as f32. Extra tokens are ignored.
    fn triplet(&self, mut tokens: SplitWhitespace<'a>, what: &str) -> StlResult<Vec3> {
        let mut components = [0.0f32; 3];
        for component in &mut components {
            let token = tokens
                .next()
                .ok_or_else(|| self.error(format!("{what} needs three coordinates")))?;
            *component = token
                .parse()
                .map_err(|_| self.error(format!("invalid number `{token}` in {what}")))?;
        }
        Ok(Vec3::from_array(components))
    }

    /// Parses a `vertex x y z` line. Coordinates must be finite.
    fn vertex(&self) -> StlResult<Vec3> {
        let vertex = self.triplet(self.keyword("vertex")?, "vertex")?;
        if !vertex.is_finite() {
            return Err(self.error(format!("non-finite vertex {vertex}")));
        }
        Ok(vertex)
    }
}

/// Line iterator tracking byte offsets and line numbers.
struct LineCursor<'a> {
    source: &'a str,
    /// Byte offset of the next unread line.
    byte: usize,
    /// Number of lines consumed so far.
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
        }
    }

    /// Returns the next non-blank line.
    fn next_line(&mut self) -> Option<Line<'a>> {
        while self.byte < self.source.len() {
            let rest = &self.source[self.byte..];
            let raw = match rest.find('\n') {
                Some(end) => &rest[..end],
                None => rest,
            };
            let start = self.byte;
            self.byte += raw.len() + 1;
            self.line += 1;

            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            let indent = raw.len() - raw.trim_start().len();
            return Some(Line {
                text,
                offset: start + indent,
                number: self.line,
            });
        }
        None
    }

    fn expect_line(&mut self, expected: &str) -> StlResult<Line<'a>> {
        self.next_line().ok_or_else(|| {
            StlError::malformed_at_line(
                self.source.len(),
                self.line + 1,
                format!("unexpected end of input, expected {expected}"),
            )
        })
    }

    /// Consumes a line consisting of a single marker keyword.
    fn expect_keyword(&mut self, keyword: &str) -> StlResult<()> {
        self.expect_line(&format!("`{keyword}`"))?
            .keyword(keyword)
            .map(|_| ())
    }
}
