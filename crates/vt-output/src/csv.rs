//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `car_trace.csv`
//! - `person_trace.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CarTraceRow, OutputResult, PersonTraceRow, TickSummaryRow};
use crate::writer::TraceWriter;

/// Writes simulation traces to three CSV files.
pub struct CsvWriter {
    cars:      Writer<File>,
    people:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cars = Writer::from_path(dir.join("car_trace.csv"))?;
        cars.write_record(["tick", "car", "x", "floor", "state", "min_floor", "max_floor"])?;

        let mut people = Writer::from_path(dir.join("person_trace.csv"))?;
        people.write_record(["tick", "person", "kind", "x", "floor", "state", "visible", "stress"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "day",
            "tick_of_day",
            "population",
            "stuck_no_car",
            "abandoned_waits",
        ])?;

        Ok(Self {
            cars,
            people,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvWriter {
    fn write_cars(&mut self, rows: &[CarTraceRow]) -> OutputResult<()> {
        for row in rows {
            self.cars.write_record(&[
                row.tick.to_string(),
                row.car.to_string(),
                row.x.to_string(),
                row.floor.to_string(),
                row.state.clone(),
                row.min_floor.to_string(),
                row.max_floor.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_people(&mut self, rows: &[PersonTraceRow]) -> OutputResult<()> {
        for row in rows {
            self.people.write_record(&[
                row.tick.to_string(),
                row.person.to_string(),
                row.kind.clone(),
                row.x.to_string(),
                row.floor.to_string(),
                row.state.clone(),
                (row.visible as u8).to_string(),
                row.stress.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.day.to_string(),
            row.tick_of_day.to_string(),
            row.population.to_string(),
            row.stuck_no_car.to_string(),
            row.abandoned_waits.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cars.flush()?;
        self.people.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
