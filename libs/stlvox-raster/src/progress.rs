//! # Progress Reporting
//!
//! Counters emitted by the pipeline and by block delivery. Components get a
//! reporter injected instead of printing, so voxelization never depends on
//! where diagnostics end up.

use config::constants::PROGRESS_INTERVAL;

use crate::pipeline::ConversionSummary;

/// Receives progress counters.
///
/// Counts are running totals. With parallel conversion they may arrive out
/// of order, so implementations must be `Sync` and must not assume
/// monotonic calls.
pub trait ProgressReporter: Sync {
    /// Called after each triangle with the number processed so far.
    fn triangles_processed(&self, count: usize);

    /// Called after each block handed to a sink with the number delivered so far.
    fn blocks_delivered(&self, count: usize);

    /// Called once per run with the final counters.
    fn finished(&self, summary: &ConversionSummary);
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn triangles_processed(&self, _count: usize) {}

    fn blocks_delivered(&self, _count: usize) {}

    fn finished(&self, _summary: &ConversionSummary) {}
}

/// Logs progress through `tracing` every `interval` items.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter {
    interval: usize,
}

impl TracingReporter {
    /// Creates a reporter logging every `interval` items (at least 1).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new(PROGRESS_INTERVAL)
    }
}

impl ProgressReporter for TracingReporter {
    fn triangles_processed(&self, count: usize) {
        if count % self.interval == 0 {
            tracing::info!(triangles = count, "processed triangles");
        }
    }

    fn blocks_delivered(&self, count: usize) {
        if count % self.interval == 0 {
            tracing::info!(blocks = count, "submitted blocks");
        }
    }

    fn finished(&self, summary: &ConversionSummary) {
        tracing::info!(
            triangles = summary.triangles,
            unique_blocks = summary.unique_blocks,
            min = ?summary.min,
            max = ?summary.max,
            "conversion finished"
        );
    }
}
