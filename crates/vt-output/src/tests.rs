//! Unit tests for vt-output.

use std::fs;

use vt_core::SimConfig;
use vt_plan::{CellKind, FloorPlan};
use vt_sim::SimBuilder;

use crate::{CarTraceRow, CsvWriter, PersonTraceRow, TickSummaryRow, TraceObserver, TraceWriter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car_row(tick: u64) -> CarTraceRow {
    CarTraceRow {
        tick,
        car: 0,
        x: 10,
        floor: 25.0,
        state: "idle".into(),
        min_floor: 5,
        max_floor: 25,
    }
}

fn person_row(tick: u64) -> PersonTraceRow {
    PersonTraceRow {
        tick,
        person: 0,
        kind: "worker".into(),
        x: 1.0,
        floor: 25.0,
        state: "walking".into(),
        visible: true,
        stress: 0.0,
    }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();

        w.write_cars(&[car_row(1), car_row(2)]).unwrap();
        w.write_people(&[person_row(1)]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 1,
            day: 1,
            tick_of_day: 1,
            population: 1,
            stuck_no_car: 0,
            abandoned_waits: 0,
        })
        .unwrap();
        w.finish().unwrap();

        let cars = fs::read_to_string(dir.path().join("car_trace.csv")).unwrap();
        let mut lines = cars.lines();
        assert_eq!(
            lines.next().unwrap(),
            "tick,car,x,floor,state,min_floor,max_floor"
        );
        assert_eq!(lines.count(), 2);

        let people = fs::read_to_string(dir.path().join("person_trace.csv")).unwrap();
        assert_eq!(people.lines().count(), 2); // header + 1 row

        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.lines().nth(1).unwrap().starts_with("1,1,1,1,"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── TraceObserver driving a real run ──────────────────────────────────────────

#[cfg(test)]
mod trace_observer {
    use super::*;

    #[test]
    fn records_a_short_run() {
        let mut plan = FloorPlan::new(40, 50);
        for floor in 20..=25 {
            plan.place_room(10, floor, CellKind::Elevator).unwrap();
        }

        let mut config = SimConfig::default();
        config.snapshot_interval_ticks = 5;
        let mut sim = SimBuilder::new(config).plan(plan).build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut observer = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_ticks(20, &mut observer);
        observer.finish().unwrap();

        // One summary per tick.
        let summaries = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.lines().count(), 21); // header + 20

        // One car row per snapshot (ticks 5, 10, 15, 20).
        let cars = fs::read_to_string(dir.path().join("car_trace.csv")).unwrap();
        assert_eq!(cars.lines().count(), 5); // header + 4

        // No agents were spawned, so the person trace is header-only.
        let people = fs::read_to_string(dir.path().join("person_trace.csv")).unwrap();
        assert_eq!(people.lines().count(), 1);
    }
}
