//! The elevator car state machine.
//!
//! A car cycles through five states:
//!
//! ```text
//! IDLE ──pending──▶ MOVING ──at stop──▶ OPENING ──▶ OPEN ──▶ CLOSING
//!   ▲                  ▲                                        │
//!   └──── queue empty ─┴──────────── more pending ──────────────┘
//! ```
//!
//! Motion is continuous (`position` advances by `CarTiming::speed` per tick);
//! door phases are fixed countdowns.  Doors close on their timer regardless
//! of boarding activity — there is no re-extension.
//!
//! Floor indices grow downward, so `Direction::Up` means *decreasing*
//! `position` (see `vt_core::grid`).

use std::collections::BTreeSet;

use vt_core::{CarId, Floor};

/// Door/motion phase of a car.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarState {
    Idle,
    Moving,
    Opening,
    Open,
    Closing,
}

impl std::fmt::Display for CarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CarState::Idle => "idle",
            CarState::Moving => "moving",
            CarState::Opening => "opening",
            CarState::Open => "open",
            CarState::Closing => "closing",
        };
        f.write_str(name)
    }
}

/// Last committed travel direction.  Persists across door cycles and `Idle`;
/// reset to `Stop` only when the queue drains completely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward smaller floor indices (physically upward).
    Up,
    /// Toward larger floor indices (physically downward).
    Down,
    Stop,
}

impl Direction {
    /// Direction of travel implied by a position delta (`target − position`).
    #[inline]
    pub fn of(delta: f32) -> Direction {
        if delta < 0.0 {
            Direction::Up
        } else if delta > 0.0 {
            Direction::Down
        } else {
            Direction::Stop
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stop => "stop",
        })
    }
}

/// Motion and door-cycle constants, in floors/tick and ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarTiming {
    /// Floors travelled per tick while `Moving`.  Also the snap window: a
    /// car within one speed-step of a floor counts as at it.
    pub speed: f32,
    /// Ticks to open the doors.
    pub opening_ticks: u32,
    /// Ticks the doors hold open.
    pub open_ticks: u32,
    /// Ticks to close the doors.
    pub closing_ticks: u32,
}

impl Default for CarTiming {
    fn default() -> Self {
        Self {
            speed:         0.15,
            opening_ticks: 20,
            open_ticks:    60,
            closing_ticks: 30,
        }
    }
}

/// One elevator cabin serving a fixed floor range within its shaft.
#[derive(Clone, Debug)]
pub struct ElevatorCar {
    pub id: CarId,

    /// Shaft column (grid x of the shaft's root cells).
    pub x: i32,

    /// Continuous floor coordinate; integral means aligned with that storey.
    pub position: f32,

    /// Inclusive service range, fixed at creation from the shaft's run.
    /// `min_floor > max_floor` is representable and serves nothing.
    pub min_floor: Floor,
    pub max_floor: Floor,

    pub state:     CarState,
    pub direction: Direction,

    /// Floor currently being moved toward.  Always a member of `pending`
    /// while set; cleared when the car stops.
    pub target: Option<Floor>,

    /// Outstanding call/destination requests, ascending-ordered for
    /// deterministic tie-breaks in target selection.
    pending: BTreeSet<Floor>,

    /// Countdown for the current door phase.
    pub door_timer: u32,
}

impl ElevatorCar {
    /// A new car parked at the bottom of its shaft (`max_floor`, the
    /// highest index).
    pub fn new(id: CarId, x: i32, min_floor: Floor, max_floor: Floor) -> Self {
        Self {
            id,
            x,
            position: max_floor as f32,
            min_floor,
            max_floor,
            state: CarState::Idle,
            direction: Direction::Stop,
            target: None,
            pending: BTreeSet::new(),
            door_timer: 0,
        }
    }

    /// The storey the car currently rounds to.
    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.position.round() as Floor
    }

    /// `true` if `floor` is within this car's service range.
    #[inline]
    pub fn can_serve(&self, floor: Floor) -> bool {
        self.min_floor <= floor && floor <= self.max_floor
    }

    /// Queue a stop at `floor`.  Idempotent; floors outside the service
    /// range are ignored, upholding the pending-set invariant.
    pub fn add_request(&mut self, floor: Floor) {
        if self.can_serve(floor) {
            self.pending.insert(floor);
        }
    }

    /// The outstanding stop set, ascending.
    pub fn pending(&self) -> &BTreeSet<Floor> {
        &self.pending
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance the state machine by one tick.
    pub fn advance(&mut self, timing: &CarTiming) {
        match self.state {
            CarState::Idle => {
                if !self.pending.is_empty() {
                    self.decide_next_target();
                    if self.target.is_some() {
                        self.state = CarState::Moving;
                    }
                }
            }

            CarState::Moving => self.step_motion(timing),

            CarState::Opening => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    // The stop is serviced the moment the doors finish opening.
                    let here = self.current_floor();
                    self.pending.remove(&here);
                    self.state = CarState::Open;
                    self.door_timer = timing.open_ticks;
                }
            }

            CarState::Open => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    self.state = CarState::Closing;
                    self.door_timer = timing.closing_ticks;
                }
            }

            CarState::Closing => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    if !self.pending.is_empty() {
                        self.decide_next_target();
                        self.state = CarState::Moving;
                    } else {
                        self.state = CarState::Idle;
                        self.direction = Direction::Stop;
                    }
                }
            }
        }
    }

    /// One tick of travel toward `target`, with the drive-by check first:
    /// a car passing within one speed-step of a pending floor stops there
    /// even when it is not the target.
    fn step_motion(&mut self, timing: &CarTiming) {
        let Some(target) = self.target else {
            // No target while moving means the queue was cleared externally;
            // settle where we are.
            self.state = CarState::Idle;
            self.direction = Direction::Stop;
            return;
        };

        let here = self.current_floor();
        let dist = target as f32 - self.position;

        if (self.position - here as f32).abs() < timing.speed && self.pending.contains(&here) {
            self.stop_at(here, timing);
            return;
        }

        if dist.abs() < timing.speed {
            self.stop_at(target, timing);
        } else {
            self.position += dist.signum() * timing.speed;
            self.direction = Direction::of(dist);
        }
    }

    /// Snap to `floor` and begin the door cycle.
    fn stop_at(&mut self, floor: Floor, timing: &CarTiming) {
        self.position = floor as f32;
        self.target = None;
        self.state = CarState::Opening;
        self.door_timer = timing.opening_ticks;
    }

    // ── Target selection ──────────────────────────────────────────────────

    /// SCAN-style next-stop selection with an explicit reversal rule.
    ///
    /// Travelling `Up` (decreasing index): prefer the closest pending floor
    /// ahead (the largest index strictly below the current floor).  With
    /// nothing ahead, reverse to the **farthest** pending floor — the
    /// largest index overall.  `Down` is symmetric.  From `Stop`, pick the
    /// numerically nearest stop; ties resolve to the lower floor index via
    /// the set's ascending iteration.
    ///
    /// The committed direction is recomputed from the sign of the chosen
    /// target's offset.
    pub fn decide_next_target(&mut self) {
        if self.pending.is_empty() {
            self.target = None;
            return;
        }

        let here = self.current_floor();
        let next = match self.direction {
            Direction::Up => self
                .pending
                .iter()
                .copied()
                .filter(|&f| f < here)
                .max()
                .or_else(|| self.pending.iter().copied().max()),

            Direction::Down => self
                .pending
                .iter()
                .copied()
                .filter(|&f| f > here)
                .min()
                .or_else(|| self.pending.iter().copied().min()),

            Direction::Stop => {
                let mut nearest: Option<Floor> = None;
                for f in self.pending.iter().copied() {
                    match nearest {
                        Some(best) if (f - here).abs() >= (best - here).abs() => {}
                        _ => nearest = Some(f),
                    }
                }
                nearest
            }
        };

        self.target = next;
        if let Some(t) = next {
            self.direction = Direction::of(t as f32 - self.position);
        }
    }
}
