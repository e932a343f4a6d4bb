//! The population roster: spawning, schedule triggers, and the per-tick sweep.
//!
//! All stochastic decisions (worker spawns, tenancy rolls, leisure trips)
//! draw from one sequential `SimRng` in stable roster order, so a given seed
//! replays an identical population history.

use vt_core::{DayClock, DaySchedule, GridPos, PersonId, RoomId, SimRng};
use vt_plan::{CellKind, FloorPlan, RoomRef, Tenant};
use vt_transit::Dispatcher;

use crate::{AgentTuning, Person, PersonKind, PersonState, StepCtx};

/// Counters surfaced to the observer layer.
///
/// `stuck_no_car` in particular turns the "no car serves this trip" silent
/// no-op into a visible signal: a rising counter means part of the
/// population cannot reach its destination.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub spawned:         u64,
    pub despawned:       u64,
    /// Walk-block ticks in which no car could serve the requested trip.
    pub stuck_no_car:    u64,
    /// Waits abandoned after crossing the red stress threshold.
    pub abandoned_waits: u64,
}

/// Read-only per-agent state for the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PersonView {
    pub id:      PersonId,
    pub kind:    PersonKind,
    pub pos:     GridPos,
    pub visible: bool,
    pub state:   PersonState,
    pub stress:  f32,
}

/// A recorded future condo move-in.
#[derive(Copy, Clone, Debug)]
struct MoveIn {
    room: RoomId,
    day:  u32,
}

/// Owns every live agent plus the pending move-in ledger.
pub struct Population {
    people:   Vec<Person>,
    next_id:  u32,
    move_ins: Vec<MoveIn>,
    rng:      SimRng,
    tuning:   AgentTuning,
    stats:    PopulationStats,
}

impl Population {
    pub fn new(rng: SimRng, tuning: AgentTuning) -> Self {
        Self {
            people: Vec::new(),
            next_id: 0,
            move_ins: Vec::new(),
            rng,
            tuning,
            stats: PopulationStats::default(),
        }
    }

    // ── Roster access ─────────────────────────────────────────────────────

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Mutable roster access for host-driven edits (evictions, debugging).
    pub fn people_mut(&mut self) -> &mut Vec<Person> {
        &mut self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    /// Recorded move-ins that have not yet happened.
    pub fn pending_move_ins(&self) -> usize {
        self.move_ins.len()
    }

    /// Read-only agent states for the rendering layer.
    pub fn views(&self) -> impl Iterator<Item = PersonView> + '_ {
        self.people.iter().map(|p| PersonView {
            id:      p.id,
            kind:    p.kind,
            pos:     p.pos,
            visible: p.visible,
            state:   p.state,
            stress:  p.stress,
        })
    }

    /// Add a person to the roster at `pos` and return a handle for follow-up
    /// configuration (home/work rooms, destination).
    pub fn spawn(&mut self, kind: PersonKind, pos: GridPos) -> &mut Person {
        let id = self.alloc_id();
        let idx = self.people.len();
        self.people.push(Person::new(id, kind, pos));
        self.stats.spawned += 1;
        &mut self.people[idx]
    }

    fn alloc_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }

    // ── External events ───────────────────────────────────────────────────

    /// A condo was placed: roll for eventual tenancy and, on success, record
    /// a move-in one or two days out.
    pub fn register_condo(&mut self, room: RoomId, current_day: u32) {
        if self.rng.gen_bool(self.tuning.condo_tenancy_prob) {
            let delay: u32 = self.rng.gen_range(1..=2);
            self.move_ins.push(MoveIn { room, day: current_day + delay });
        }
    }

    /// The car roster was rebuilt: every outstanding `CarId` is dead.
    /// Bound agents fall back to walking and re-hail next tick.
    pub fn on_fleet_rebuilt(&mut self) {
        for person in &mut self.people {
            if person.bound_car.is_some() {
                person.release_car();
            }
        }
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance the whole population one tick.  Invoked after the dispatcher
    /// has advanced all cars, so boarding/exit checks see final car state.
    pub fn advance(
        &mut self,
        clock:    &DayClock,
        schedule: &DaySchedule,
        lobby:    GridPos,
        plan:     &mut FloorPlan,
        fleet:    &mut Dispatcher,
    ) {
        self.sweep_gone();
        self.process_move_ins(clock, plan);
        self.fire_triggers(clock, schedule, lobby, plan);
        self.leisure_trips(clock, schedule, plan);

        let Self { people, stats, tuning, .. } = self;
        let ctx = StepCtx { lobby, tuning };
        for person in people.iter_mut() {
            person.step(&ctx, fleet, plan, clock, stats);
        }
    }

    fn sweep_gone(&mut self) {
        let before = self.people.len();
        self.people.retain(|p| p.state != PersonState::Gone);
        self.stats.despawned += (before - self.people.len()) as u64;
    }

    /// Spawn the resident of every move-in whose day has arrived.
    fn process_move_ins(&mut self, clock: &DayClock, plan: &mut FloorPlan) {
        let mut due = Vec::new();
        self.move_ins.retain(|m| {
            if m.day <= clock.day {
                due.push(m.room);
                false
            } else {
                true
            }
        });

        for room in due {
            let Some(room_ref) = plan.room(room) else { continue };
            let day = clock.day;
            let person = self.spawn(PersonKind::Resident, room_ref.anchor());
            person.home_room = Some(room);
            person.state = PersonState::Sleeping;
            person.visible = false;
            let tenant = Tenant { person: person.id, moved_in_day: day };
            plan.set_occupied(room, tenant).ok();
        }
    }

    /// Population-wide reactions to the fixed tick-of-day instants.
    fn fire_triggers(
        &mut self,
        clock:    &DayClock,
        schedule: &DaySchedule,
        lobby:    GridPos,
        plan:     &FloorPlan,
    ) {
        let t = clock.tick_of_day;
        let weekend = clock.is_weekend();

        // Morning rush: each office may spawn its worker at the lobby.
        if t == schedule.rush_morning && !weekend {
            let offices: Vec<RoomRef> = plan.rooms(CellKind::Office).collect();
            for office in offices {
                if self.rng.gen_bool(self.tuning.worker_spawn_prob) {
                    let person = self.spawn(PersonKind::Worker, lobby);
                    person.work_room = Some(office.id);
                    person.walk_to(office.anchor(), PersonState::Walking);
                }
            }
        }

        // End of workday: everyone at a desk heads home.
        if t == schedule.work_end {
            for person in &mut self.people {
                if person.state != PersonState::Working {
                    continue;
                }
                let dest = match person.kind {
                    PersonKind::Worker => lobby,
                    PersonKind::Resident => person
                        .home_room
                        .and_then(|r| plan.room(r))
                        .map(|r| r.anchor())
                        .unwrap_or(lobby),
                };
                person.walk_to(dest, PersonState::GoingHome);
            }
        }

        // Weekday morning: residents leave for work elsewhere.
        if t == schedule.resident_leave && !weekend {
            for person in &mut self.people {
                if person.kind == PersonKind::Resident
                    && matches!(person.state, PersonState::Sleeping | PersonState::Idle)
                    && person.home_room.is_some()
                {
                    person.walk_to(lobby, PersonState::LeavingForWork);
                }
            }
        }

        // Weekday evening: absent residents reappear at the lobby and head
        // home; loiterers do the same.
        if t == schedule.resident_return && !weekend {
            let condos: Vec<RoomRef> = plan.rooms(CellKind::Condo).collect();
            for condo in condos {
                if !plan.is_occupied(condo.id) {
                    continue;
                }
                if self.people.iter().any(|p| p.home_room == Some(condo.id)) {
                    continue;
                }
                let person = self.spawn(PersonKind::Resident, lobby);
                person.home_room = Some(condo.id);
                person.walk_to(condo.anchor(), PersonState::GoingHome);
            }

            for i in 0..self.people.len() {
                let person = &self.people[i];
                if person.kind != PersonKind::Resident
                    || person.state != PersonState::WaitingAtLobby
                {
                    continue;
                }
                if let Some(anchor) =
                    person.home_room.and_then(|r| plan.room(r)).map(|r| r.anchor())
                {
                    self.people[i].walk_to(anchor, PersonState::GoingHome);
                }
            }
        }
    }

    /// Weekend leisure: sleeping residents occasionally visit a food,
    /// cinema, or retail room, returning after a tick-counted dwell.
    fn leisure_trips(&mut self, clock: &DayClock, schedule: &DaySchedule, plan: &FloorPlan) {
        if !clock.is_weekend() || !schedule.in_leisure_window(clock.tick_of_day) {
            return;
        }
        let venues = plan.leisure_rooms();
        if venues.is_empty() {
            return;
        }

        let Self { people, rng, tuning, .. } = self;
        for person in people.iter_mut() {
            if person.kind != PersonKind::Resident || person.state != PersonState::Sleeping {
                continue;
            }
            if !rng.gen_bool(tuning.leisure_trip_prob) {
                continue;
            }
            if let Some(venue) = rng.choose(&venues) {
                person.leisure_room = Some(venue.id);
                person.walk_to(venue.anchor(), PersonState::Walking);
            }
        }
    }
}
