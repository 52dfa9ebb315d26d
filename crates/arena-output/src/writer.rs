//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for per-tick summaries and periodic agent snapshots.
///
/// The observer never sees these errors directly; they are stored and
/// retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
