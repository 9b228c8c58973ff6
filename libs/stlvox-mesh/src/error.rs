//! # STL Errors
//!
//! Error types for STL decoding. Every parse failure aborts the run; no
//! facet is ever skipped silently.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading an STL file.
#[derive(Debug, Error)]
pub enum StlError {
    /// The input could not be opened or read.
    #[error("cannot read STL input {}: {source}", describe_path(.path))]
    UnreadableInput {
        /// File path, if the input came from a file.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The input violates the ASCII or binary STL grammar.
    #[error("malformed STL at byte {offset}{}: {reason}", describe_line(.line))]
    MalformedMesh {
        /// Byte offset where decoding failed.
        offset: usize,
        /// 1-based line number, ASCII input only.
        line: Option<usize>,
        /// What was expected or found.
        reason: String,
    },

    /// The input starts with `solid` but is not valid text.
    ///
    /// Top-level parsing treats this as a signal to retry as binary.
    #[error("input starts with `solid` but is not text (invalid UTF-8 at byte {offset})")]
    AmbiguousEncoding {
        /// First byte that failed to decode.
        offset: usize,
    },
}

impl StlError {
    /// Creates a malformed mesh error at a byte offset.
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMesh {
            offset,
            line: None,
            reason: reason.into(),
        }
    }

    /// Creates a malformed mesh error at a byte offset on a given line.
    pub fn malformed_at_line(offset: usize, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMesh {
            offset,
            line: Some(line),
            reason: reason.into(),
        }
    }

    /// Creates an unreadable input error.
    pub fn unreadable(path: Option<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableInput { path, source }
    }

    /// Byte offset of the failure, if the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MalformedMesh { offset, .. } | Self::AmbiguousEncoding { offset } => {
                Some(*offset)
            }
            Self::UnreadableInput { .. } => None,
        }
    }
}

/// Result type alias for STL decoding.
pub type StlResult<T> = Result<T, StlError>;

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("'{}'", path.display()),
        None => "<stream>".to_string(),
    }
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {line})"),
        None => String::new(),
    }
}
