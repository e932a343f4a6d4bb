//! The shaft scanner: floor plan → contiguous vertical shaft runs.
//!
//! A shaft is a maximal run of consecutive elevator-root floors within one
//! column.  The scan is a full rebuild — it is re-run from scratch whenever
//! the floor plan changes, never patched incrementally.

use rustc_hash::FxHashMap;

use vt_core::Floor;
use vt_plan::FloorPlan;

/// One contiguous vertical run of elevator cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shaft {
    /// Grid column of the run.
    pub column: i32,
    /// Topmost storey of the run (smallest index).
    pub min_floor: Floor,
    /// Bottommost storey of the run (largest index).
    pub max_floor: Floor,
}

/// Derive every shaft in `plan`.
///
/// Elevator roots are bucketed by column, each column's floors sorted
/// ascending and split at gaps into maximal consecutive runs.  Columns are
/// emitted in ascending order so repeated scans of the same plan yield the
/// same shaft list — the dispatcher's roster order (and therefore car IDs)
/// depend on it.  A single-floor run is a valid shaft.
pub fn scan_shafts(plan: &FloorPlan) -> Vec<Shaft> {
    let mut columns: FxHashMap<i32, Vec<Floor>> = FxHashMap::default();
    for (x, floor) in plan.elevator_roots() {
        columns.entry(x).or_default().push(floor);
    }

    let mut ordered: Vec<i32> = columns.keys().copied().collect();
    ordered.sort_unstable();

    let mut shafts = Vec::new();
    for x in ordered {
        let Some(mut floors) = columns.remove(&x) else { continue };
        floors.sort_unstable();

        let mut start = floors[0];
        let mut prev = floors[0];
        for &floor in &floors[1..] {
            if floor != prev + 1 {
                shafts.push(Shaft { column: x, min_floor: start, max_floor: prev });
                start = floor;
            }
            prev = floor;
        }
        shafts.push(Shaft { column: x, min_floor: start, max_floor: prev });
    }
    shafts
}
