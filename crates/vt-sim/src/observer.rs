//! Simulation observer trait for progress reporting and data collection.

use vt_agent::{Population, PopulationStats};
use vt_core::Tick;
use vt_transit::Dispatcher;

/// Per-tick summary handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug)]
pub struct TickReport {
    pub tick:        Tick,
    pub day:         u32,
    pub tick_of_day: u32,
    /// Live agents after this tick's sweep.
    pub population:  usize,
    /// Cumulative population counters (spawns, despawns, stuck trips,
    /// abandoned waits).
    pub stats:       PopulationStats,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — stuck-trip alarm
///
/// ```rust,ignore
/// struct StuckAlarm;
///
/// impl SimObserver for StuckAlarm {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.stats.stuck_no_car > 0 {
///             eprintln!("{}: {} unservable trips so far", report.tick, report.stats.stuck_no_car);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, after the clock advanced but before
    /// any car or agent moved.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called when a simulated day completes, with the finished day number.
    fn on_day_end(&mut self, _day: u32) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    ///
    /// Provides read-only access to the full transit and population state so
    /// output writers can record positions without the sim knowing about any
    /// specific format.
    fn on_snapshot(&mut self, _tick: Tick, _transit: &Dispatcher, _population: &Population) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive the loop
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
