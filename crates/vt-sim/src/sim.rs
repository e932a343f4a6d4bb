//! The `Sim` struct and its tick loop.

use vt_agent::Population;
use vt_core::{DayClock, Floor, GridPos, RoomId, SimConfig};
use vt_plan::{CellKind, FloorPlan};
use vt_transit::Dispatcher;

use crate::{SimObserver, SimResult, TickReport};

/// The main simulation runner.
///
/// Owns the floor plan, the elevator fleet, and the agent population, and
/// drives the fixed cars-then-agents tick order.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Day clock — tick-of-day, day counter, weekend predicate.
    pub clock: DayClock,

    /// The building.  Mutated only through `place_room` and the agents'
    /// occupancy writes.
    pub plan: FloorPlan,

    /// The elevator fleet.
    pub transit: Dispatcher,

    /// The people.
    pub population: Population,
}

impl Sim {
    /// Where people enter and leave the building.
    #[inline]
    pub fn lobby_anchor(&self) -> GridPos {
        GridPos::new(self.config.lobby_anchor_x, self.config.lobby_floor as f32)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the whole simulation by one tick.
    pub fn advance_tick<O: SimObserver>(&mut self, observer: &mut O) {
        if self.clock.advance() {
            observer.on_day_end(self.clock.day - 1);
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // Cars first, then agents: boarding/exit checks see final car state.
        self.transit.advance();
        let lobby = self.lobby_anchor();
        self.population.advance(
            &self.clock,
            &self.config.schedule,
            lobby,
            &mut self.plan,
            &mut self.transit,
        );

        let report = TickReport {
            tick:        now,
            day:         self.clock.day,
            tick_of_day: self.clock.tick_of_day,
            population:  self.population.len(),
            stats:       *self.population.stats(),
        };
        observer.on_tick_end(&report);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.transit, &self.population);
        }
    }

    /// Run `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance_tick(observer);
        }
    }

    /// Run `n` simulated days.
    pub fn run_days<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        self.run_ticks(n * self.config.ticks_per_day as u64, observer);
    }

    // ── Plan mutation ─────────────────────────────────────────────────────

    /// Rebuild the elevator fleet from the current plan and release every
    /// agent's car binding.  Must be called whenever elevator cells change;
    /// `place_room` does so automatically.
    pub fn rescan(&mut self) {
        self.transit.rescan(&self.plan);
        self.population.on_fleet_rebuilt();
    }

    /// Place a room and run the side effects the building editor would:
    /// elevators trigger a full shaft rescan, condos roll for tenancy.
    pub fn place_room(&mut self, x: i32, floor: Floor, kind: CellKind) -> SimResult<RoomId> {
        let room = self.plan.place_room(x, floor, kind)?;
        match kind {
            CellKind::Elevator => self.rescan(),
            CellKind::Condo => self.population.register_condo(room, self.clock.day),
            _ => {}
        }
        Ok(room)
    }
}
