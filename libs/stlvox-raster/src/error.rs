//! # Delivery Errors
//!
//! Transform and voxelization are total over decoded input; the only
//! fallible step in this crate is handing blocks to a sink.

use std::io;

use glam::IVec3;
use thiserror::Error;

/// Errors raised while delivering blocks to a [`BlockSink`](crate::BlockSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not accept a block.
    #[error("failed to deliver block {block}: {message}")]
    Rejected {
        /// Block that was being delivered.
        block: IVec3,
        /// Sink-specific description.
        message: String,
    },

    /// I/O failure inside the sink (spawning a process, writing output).
    #[error("sink I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SinkError {
    /// Creates a rejected-block error.
    pub fn rejected(block: IVec3, message: impl Into<String>) -> Self {
        Self::Rejected {
            block,
            message: message.into(),
        }
    }
}
