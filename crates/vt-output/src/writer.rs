//! The backend trait output observers write through.

use crate::{CarTraceRow, OutputResult, PersonTraceRow, TickSummaryRow};

/// An output backend: receives rows, owns its files/connections, flushes on
/// `finish`.
pub trait TraceWriter {
    fn write_cars(&mut self, rows: &[CarTraceRow]) -> OutputResult<()>;

    fn write_people(&mut self, rows: &[PersonTraceRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
