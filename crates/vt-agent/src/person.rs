//! The per-agent state machine.
//!
//! One `step` per tick.  The phase structure mirrors the elevator interlock:
//!
//! - `Riding` — position pinned to the bound car; exit when the car sits
//!   open at the destination storey.
//! - `WaitingForCar` — accumulate stress, keep the call posted, board when
//!   the bound car is open alongside; give up when stress crosses the red
//!   threshold.
//! - ambulatory states — the walk block: hail a car when the destination is
//!   on another storey, ease horizontally, detect arrival.
//! - everything else is parked (asleep, at a desk, despawned).
//!
//! A trip that needs a car stashes the real horizontal target in
//! `pending_horizontal_target` and the pre-hail state in `resume_state`;
//! both are restored when the agent steps out (or gives up), so a resident
//! heading home is still "heading home" after two rides and a transfer.

use vt_core::{CarId, DayClock, Floor, GridPos, PersonId, RoomId};
use vt_plan::{FloorPlan, Tenant};
use vt_transit::{CarState, Dispatcher};

use crate::{AgentTuning, PersonKind, PersonState, PopulationStats};

/// Per-tick inputs shared by every agent.
pub struct StepCtx<'a> {
    /// Where people enter and leave the building.
    pub lobby:  GridPos,
    pub tuning: &'a AgentTuning,
}

/// One pedestrian.
#[derive(Clone, Debug)]
pub struct Person {
    pub id:   PersonId,
    pub kind: PersonKind,

    pub pos:  GridPos,
    /// Target of the current leg.
    pub dest: GridPos,
    /// Horizontal target saved while a vertical leg is in progress.
    pub pending_horizontal_target: Option<f32>,
    /// Ambulatory state to resume after the current vertical leg.
    resume_state: Option<PersonState>,

    pub state: PersonState,
    /// Car being waited for or ridden.  `Some` only in those two states.
    pub bound_car: Option<CarId>,

    /// Owning condo (residents).
    pub home_room: Option<RoomId>,
    /// Destination office (workers).
    pub work_room: Option<RoomId>,
    /// Current leisure-trip destination (residents, weekends).
    pub leisure_room: Option<RoomId>,

    pub visible: bool,
    /// Accumulated wait impatience; reset to zero on boarding.
    pub stress: f32,
    /// Remaining ticks of a leisure dwell.
    pub dwell_left: u32,
}

impl Person {
    /// A new idle person standing at `pos`.
    pub fn new(id: PersonId, kind: PersonKind, pos: GridPos) -> Self {
        Self {
            id,
            kind,
            pos,
            dest: pos,
            pending_horizontal_target: None,
            resume_state: None,
            state: PersonState::Idle,
            bound_car: None,
            home_room: None,
            work_room: None,
            leisure_room: None,
            visible: true,
            stress: 0.0,
            dwell_left: 0,
        }
    }

    /// Send the agent walking toward `dest` in the given ambulatory state.
    pub fn walk_to(&mut self, dest: GridPos, state: PersonState) {
        debug_assert!(state.is_ambulatory());
        self.dest = dest;
        self.state = state;
        self.visible = true;
    }

    /// Drop any car binding and resume the interrupted leg.
    ///
    /// Used when the fleet is rebuilt under the agent: the position snaps to
    /// the nearest storey (an agent cannot hover mid-shaft) and the saved
    /// walk state/target are restored, so the next tick re-hails.
    pub fn release_car(&mut self) {
        self.bound_car = None;
        self.pos.floor = self.pos.floor.round();
        if let Some(x) = self.pending_horizontal_target.take() {
            self.dest.x = x;
        }
        self.state = self.resume_state.take().unwrap_or(PersonState::Walking);
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    pub fn step(
        &mut self,
        ctx:   &StepCtx<'_>,
        fleet: &mut Dispatcher,
        plan:  &mut FloorPlan,
        clock: &DayClock,
        stats: &mut PopulationStats,
    ) {
        debug_assert!(
            self.bound_car.is_none() || self.state.is_bound(),
            "car binding outside WaitingForCar/Riding"
        );

        match self.state {
            PersonState::Riding => self.step_riding(fleet),
            PersonState::WaitingForCar => self.step_waiting(ctx, fleet, stats),
            PersonState::Leisure => self.step_leisure(ctx, plan),
            s if s.is_ambulatory() => self.step_walking(ctx, fleet, plan, clock, stats),
            _ => {} // Working, Sleeping, WaitingAtLobby, Gone: parked
        }
    }

    fn step_riding(&mut self, fleet: &Dispatcher) {
        let Some(car) = self.bound_car.and_then(|id| fleet.car(id)) else {
            self.release_car();
            return;
        };

        self.pos.x = car.x as f32 + 0.5;
        self.pos.floor = car.position;

        let dest_floor = self.dest.floor.round() as Floor;
        if car.current_floor() == dest_floor && car.state == CarState::Open {
            self.bound_car = None;
            self.state = self.resume_state.take().unwrap_or(PersonState::Walking);
            if let Some(x) = self.pending_horizontal_target.take() {
                self.dest.x = x;
            }
        }
    }

    fn step_waiting(&mut self, ctx: &StepCtx<'_>, fleet: &mut Dispatcher, stats: &mut PopulationStats) {
        self.stress += ctx.tuning.stress_per_wait_tick;

        if let Some(car) = self.bound_car.and_then(|id| fleet.car_mut(id)) {
            // Keep the call posted — inserts are idempotent.
            let my_floor = self.pos.floor_index();
            car.add_request(my_floor);

            let dy = (self.pos.floor - car.position).abs();
            let dx = (self.pos.x - car.x as f32).abs();
            if dy < ctx.tuning.board_range_y && dx < ctx.tuning.board_range_x && car.state == CarState::Open {
                self.state = PersonState::Riding;
                self.stress = 0.0;
                car.add_request(self.dest.floor.round() as Floor);
                return;
            }
        }

        // Keep easing toward the call point; boarding needs the agent
        // within horizontal range of the shaft.
        let walk = self.dest.x - self.pos.x;
        if walk.abs() > ctx.tuning.walk_deadband {
            self.pos.x += walk.signum() * ctx.tuning.walk_speed;
        }

        if self.stress > ctx.tuning.stress_red {
            stats.abandoned_waits += 1;
            self.bound_car = None;
            self.resume_state = None;
            self.pending_horizontal_target = None;
            self.dest = ctx.lobby;
            self.state = PersonState::LeavingAngry;
        }
    }

    fn step_leisure(&mut self, ctx: &StepCtx<'_>, plan: &FloorPlan) {
        self.dwell_left = self.dwell_left.saturating_sub(1);
        if self.dwell_left > 0 {
            return;
        }
        self.leisure_room = None;
        match self.home_room.and_then(|r| plan.room(r)) {
            Some(home) => self.walk_to(home.anchor(), PersonState::GoingHome),
            None => self.walk_to(ctx.lobby, PersonState::GoingHome),
        }
    }

    /// The walk block.  Statement order matters and matches the reference
    /// behavior: the distances gating movement and arrival are sampled
    /// before the hail may retarget `dest.x` at the car's column.
    fn step_walking(
        &mut self,
        ctx:   &StepCtx<'_>,
        fleet: &mut Dispatcher,
        plan:  &mut FloorPlan,
        clock: &DayClock,
        stats: &mut PopulationStats,
    ) {
        let dist_y = (self.dest.floor - self.pos.floor).abs();
        let dist_x = (self.dest.x - self.pos.x).abs();

        // Another storey: hail a car before walking on.
        if dist_y > ctx.tuning.vertical_threshold && self.bound_car.is_none() {
            let from = self.pos.floor_index();
            let to = self.dest.floor.round() as Floor;
            match fleet.find_best_car(from, to, self.pos.x) {
                Some(id) => {
                    if let Some(car) = fleet.car_mut(id) {
                        self.resume_state = Some(self.state);
                        self.pending_horizontal_target = Some(self.dest.x);
                        self.dest.x = car.x as f32 + 0.5;
                        car.add_request(from);
                        self.bound_car = Some(id);
                        self.state = PersonState::WaitingForCar;
                    }
                }
                // No car serves this trip: no vertical progress this tick,
                // retried every tick until the fleet changes.
                None => stats.stuck_no_car += 1,
            }
        }

        if dist_x > ctx.tuning.walk_deadband {
            self.pos.x += (self.dest.x - self.pos.x).signum() * ctx.tuning.walk_speed;
        }

        if dist_x < ctx.tuning.arrive_eps && dist_y < ctx.tuning.arrive_eps {
            self.handle_arrival(ctx, plan, clock);
        }
    }

    // ── Arrival ───────────────────────────────────────────────────────────

    /// Reached the current destination on foot.
    fn handle_arrival(&mut self, ctx: &StepCtx<'_>, plan: &mut FloorPlan, clock: &DayClock) {
        // Leaving agents (and workers heading home) despawn at the lobby.
        if self.state.is_leaving()
            || (self.kind == PersonKind::Worker && self.state == PersonState::GoingHome)
        {
            self.state = PersonState::Gone;
            self.visible = false;
            return;
        }

        match self.kind {
            PersonKind::Worker => {
                if self.arrived_at(self.work_room, plan) {
                    self.state = PersonState::Working;
                    self.visible = false;
                } else {
                    self.state = PersonState::WaitingAtLobby;
                }
            }
            PersonKind::Resident => {
                if self.arrived_at(self.leisure_room, plan) {
                    self.state = PersonState::Leisure;
                    self.dwell_left = ctx.tuning.leisure_dwell_ticks;
                } else if self.arrived_at(self.home_room, plan) {
                    self.state = PersonState::Sleeping;
                    self.visible = false;
                    self.mark_home_occupied(plan, clock);
                } else {
                    self.state = PersonState::WaitingAtLobby;
                }
            }
        }
    }

    /// `true` if the current destination is `room`'s anchor.
    fn arrived_at(&self, room: Option<RoomId>, plan: &FloorPlan) -> bool {
        room.and_then(|r| plan.room(r)).is_some_and(|r| {
            let anchor = r.anchor();
            (self.dest.x - anchor.x).abs() < 0.01 && (self.dest.floor - anchor.floor).abs() < 0.01
        })
    }

    /// Record tenancy on the home room.  Occupied flag and tenant move
    /// together; an existing record (and its move-in day) is kept.
    fn mark_home_occupied(&self, plan: &mut FloorPlan, clock: &DayClock) {
        let Some(home) = self.home_room else { return };
        if !plan.is_occupied(home) {
            let tenant = Tenant { person: self.id, moved_in_day: clock.day };
            plan.set_occupied(home, tenant).ok();
        }
    }
}
