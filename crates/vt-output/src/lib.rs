//! `vt-output` — trace output for simulation runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | Plain data row types written by output backends        |
//! | [`writer`]   | The `TraceWriter` backend trait                        |
//! | [`csv`]      | CSV backend (`car_trace` / `person_trace` / summaries) |
//! | [`observer`] | `TraceObserver` — adapts a writer to `SimObserver`     |
//!
//! Wire-up:
//!
//! ```rust,ignore
//! let writer = CsvWriter::new(Path::new("out"))?;
//! let mut observer = TraceObserver::new(writer);
//! sim.run_days(7, &mut observer);
//! observer.finish()?;
//! ```
//!
//! IO failures do not interrupt the simulation: the observer records the
//! first error and `finish()` surfaces it.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CarTraceRow, PersonTraceRow, TickSummaryRow};
pub use writer::TraceWriter;
