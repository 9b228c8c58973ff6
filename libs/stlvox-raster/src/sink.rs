//! # Block Sinks
//!
//! The boundary between the pipeline and whatever materializes blocks. A
//! sink receives each block exactly once, in unspecified order.

use glam::IVec3;

use crate::accumulator::BlockAccumulator;
use crate::error::SinkError;
use crate::progress::ProgressReporter;

/// Consumer of finished block coordinates.
pub trait BlockSink {
    /// Accepts one block.
    fn accept(&mut self, block: IVec3) -> Result<(), SinkError>;
}

impl BlockSink for Vec<IVec3> {
    fn accept(&mut self, block: IVec3) -> Result<(), SinkError> {
        self.push(block);
        Ok(())
    }
}

impl<S: BlockSink + ?Sized> BlockSink for &mut S {
    fn accept(&mut self, block: IVec3) -> Result<(), SinkError> {
        (**self).accept(block)
    }
}

/// Pushes every accumulated block into `sink`.
///
/// Stops at the first sink error. Returns the number of blocks delivered.
pub fn deliver(
    blocks: &BlockAccumulator,
    sink: &mut impl BlockSink,
    reporter: &dyn ProgressReporter,
) -> Result<usize, SinkError> {
    let mut delivered = 0;
    for &block in blocks {
        sink.accept(block)?;
        delivered += 1;
        reporter.blocks_delivered(delivered);
    }
    Ok(delivered)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::pipeline::ConversionSummary;

    #[derive(Default)]
    struct CountingReporter {
        delivered: AtomicUsize,
    }

    impl ProgressReporter for CountingReporter {
        fn triangles_processed(&self, _count: usize) {}

        fn blocks_delivered(&self, count: usize) {
            self.delivered.store(count, Ordering::Relaxed);
        }

        fn finished(&self, _summary: &ConversionSummary) {}
    }

    /// Accepts a fixed number of blocks, then fails.
    struct FailingSink {
        remaining: usize,
    }

    impl BlockSink for FailingSink {
        fn accept(&mut self, block: IVec3) -> Result<(), SinkError> {
            if self.remaining == 0 {
                return Err(SinkError::rejected(block, "full"));
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    fn three_blocks() -> BlockAccumulator {
        let mut acc = BlockAccumulator::new();
        acc.extend([IVec3::X, IVec3::Y, IVec3::Z]);
        acc
    }

    #[test]
    fn deliver_hands_over_each_block_once() {
        let reporter = CountingReporter::default();
        let mut out: Vec<IVec3> = Vec::new();
        let delivered = deliver(&three_blocks(), &mut out, &reporter).unwrap();

        assert_eq!(delivered, 3);
        assert_eq!(reporter.delivered.load(Ordering::Relaxed), 3);
        let unique: HashSet<IVec3> = out.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn deliver_stops_at_first_error() {
        let reporter = CountingReporter::default();
        let mut sink = FailingSink { remaining: 2 };
        let err = deliver(&three_blocks(), &mut sink, &reporter).unwrap_err();

        assert!(matches!(err, SinkError::Rejected { .. }));
        assert_eq!(reporter.delivered.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn empty_accumulator_delivers_nothing() {
        let mut out: Vec<IVec3> = Vec::new();
        let delivered = deliver(&BlockAccumulator::new(), &mut out, &crate::NullReporter).unwrap();
        assert_eq!(delivered, 0);
        assert!(out.is_empty());
    }
}
