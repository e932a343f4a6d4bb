//! Movement, stress, and schedule-probability constants.

/// Coarse stress classification for display layers (calm → pink → red in the
/// original palette).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StressBand {
    Calm,
    Strained,
    Critical,
}

/// All agent-side constants, with defaults matching the reference behavior.
///
/// Distances are in grid cells (horizontal) and storeys (vertical); rates are
/// per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentTuning {
    /// Horizontal easing step per tick.
    pub walk_speed: f32,
    /// No horizontal movement when closer than this to the target x.
    pub walk_deadband: f32,
    /// Arrival window around the destination, both axes.
    pub arrive_eps: f32,
    /// Vertical distance beyond which a trip needs an elevator.
    pub vertical_threshold: f32,
    /// Boarding window: car must be within this many columns…
    pub board_range_x: f32,
    /// …and this many storeys of the agent.
    pub board_range_y: f32,

    /// Stress gained per tick spent waiting for a car.
    pub stress_per_wait_tick: f32,
    /// Display threshold: visibly unhappy.
    pub stress_pink: f32,
    /// Abandonment threshold: the wait is given up the tick stress first
    /// exceeds this.
    pub stress_red: f32,

    /// Chance an office spawns its worker at the morning rush.
    pub worker_spawn_prob: f64,
    /// Chance a placed condo eventually gains a tenant.
    pub condo_tenancy_prob: f64,
    /// Per-tick chance a sleeping resident starts a weekend leisure trip.
    pub leisure_trip_prob: f64,
    /// Ticks spent at the leisure room before heading home.
    pub leisure_dwell_ticks: u32,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            walk_speed:           0.15,
            walk_deadband:        0.1,
            arrive_eps:           0.2,
            vertical_threshold:   0.5,
            board_range_x:        3.0,
            board_range_y:        0.2,
            stress_per_wait_tick: 0.05,
            stress_pink:          80.0,
            stress_red:           120.0,
            worker_spawn_prob:    0.5,
            condo_tenancy_prob:   0.8,
            leisure_trip_prob:    0.002,
            leisure_dwell_ticks:  45,
        }
    }
}

impl AgentTuning {
    /// Classify a stress value against the display thresholds.
    pub fn stress_band(&self, stress: f32) -> StressBand {
        if stress > self.stress_red {
            StressBand::Critical
        } else if stress > self.stress_pink {
            StressBand::Strained
        } else {
            StressBand::Calm
        }
    }
}
