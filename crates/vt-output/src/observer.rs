//! Adapts a [`TraceWriter`] to the simulation's observer seam.

use vt_agent::Population;
use vt_core::Tick;
use vt_sim::{SimObserver, TickReport};
use vt_transit::Dispatcher;

use crate::{CarTraceRow, OutputError, OutputResult, PersonTraceRow, TickSummaryRow, TraceWriter};

/// Collects car/agent views at snapshot instants and tick summaries every
/// tick, forwarding them to the wrapped backend.
///
/// Observer callbacks cannot fail, so the first backend error is stored and
/// surfaced by [`finish`][TraceObserver::finish]; once an error occurs, all
/// further writes are skipped.
pub struct TraceObserver<W: TraceWriter> {
    writer: W,
    failed: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, failed: None }
    }

    /// Flush the backend and surface the first error, if any.
    pub fn finish(mut self) -> OutputResult<()> {
        if let Some(e) = self.failed {
            return Err(e);
        }
        self.writer.finish()
    }

    fn record(&mut self, write: impl FnOnce(&mut W) -> OutputResult<()>) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = write(&mut self.writer) {
            self.failed = Some(e);
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let row = TickSummaryRow {
            tick:            report.tick.0,
            day:             report.day,
            tick_of_day:     report.tick_of_day,
            population:      report.population,
            stuck_no_car:    report.stats.stuck_no_car,
            abandoned_waits: report.stats.abandoned_waits,
        };
        self.record(|w| w.write_tick_summary(&row));
    }

    fn on_snapshot(&mut self, tick: Tick, transit: &Dispatcher, population: &Population) {
        let cars: Vec<CarTraceRow> = transit
            .views()
            .map(|v| CarTraceRow {
                tick:      tick.0,
                car:       v.id.0,
                x:         v.x,
                floor:     v.position,
                state:     v.state.to_string(),
                min_floor: v.min_floor,
                max_floor: v.max_floor,
            })
            .collect();
        self.record(|w| w.write_cars(&cars));

        let people: Vec<PersonTraceRow> = population
            .views()
            .map(|v| PersonTraceRow {
                tick:    tick.0,
                person:  v.id.0,
                kind:    v.kind.to_string(),
                x:       v.pos.x,
                floor:   v.pos.floor,
                state:   v.state.to_string(),
                visible: v.visible,
                stress:  v.stress,
            })
            .collect();
        self.record(|w| w.write_people(&people));
    }
}
