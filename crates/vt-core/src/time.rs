//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick advances all
//! elevator cars once and then all agents once; there is no finer-grained
//! unit anywhere in the system.
//!
//! On top of the raw counter sits `DayClock`, which folds ticks into a
//! repeating simulated day of `ticks_per_day` ticks.  The day-of-week cycle
//! drives the schedule: days 6 and 0 of each 7-day cycle are the weekend.
//! `DaySchedule` holds the fixed tick-of-day instants (morning rush, end of
//! workday, …) that the agent population reacts to.
//!
//! Using an integer tick as the canonical unit means all schedule arithmetic
//! is exact (no floating-point drift) and comparisons are O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at the default 300 ticks per simulated
/// day, a u64 lasts far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// Folds the absolute tick counter into a repeating simulated day.
///
/// `DayClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayClock {
    /// Ticks in one simulated day.
    pub ticks_per_day: u32,
    /// Current day, starting at 1.
    pub day: u32,
    /// Tick within the current day, in `0..ticks_per_day`.
    pub tick_of_day: u32,
    /// Absolute tick counter across all days.
    pub current_tick: Tick,
}

impl DayClock {
    /// Create a clock at day 1, tick-of-day 0.
    pub fn new(ticks_per_day: u32) -> Self {
        Self {
            ticks_per_day,
            day: 1,
            tick_of_day: 0,
            current_tick: Tick::ZERO,
        }
    }

    /// Start partway into a day (e.g. mid-morning on day 1).
    pub fn with_start(mut self, day: u32, tick_of_day: u32) -> Self {
        self.day = day;
        self.tick_of_day = tick_of_day.min(self.ticks_per_day.saturating_sub(1));
        self
    }

    /// Advance the clock by one tick.  Returns `true` when the day rolled
    /// over (the returned tick-of-day is 0 of the *new* day).
    pub fn advance(&mut self) -> bool {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.tick_of_day += 1;
        if self.tick_of_day >= self.ticks_per_day {
            self.tick_of_day = 0;
            self.day += 1;
            return true;
        }
        false
    }

    /// Days 6 and 0 of every 7-day cycle are the weekend.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        let d = self.day % 7;
        d == 0 || d == 6
    }

    /// Wall-clock rendering of the current tick-of-day on a 24-hour dial,
    /// for logs and traces.
    pub fn hhmm(&self) -> (u32, u32) {
        let total_minutes = (self.tick_of_day as u64 * 1_440) / self.ticks_per_day as u64;
        ((total_minutes / 60) as u32, (total_minutes % 60) as u32)
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.hhmm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, self.day, h, m)
    }
}

// ── DaySchedule ───────────────────────────────────────────────────────────────

/// The fixed tick-of-day instants the agent population reacts to.
///
/// Defaults assume a 300-tick day.  `resident_return` deliberately coincides
/// with `work_end`: the evening rush is one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySchedule {
    /// Start of the weekend leisure window.
    pub dawn: u32,
    /// Residents leave for work (weekdays).
    pub resident_leave: u32,
    /// Office workers arrive at the lobby (weekdays).
    pub rush_morning: u32,
    /// Workday ends: working agents head home.
    pub work_end: u32,
    /// Residents who left in the morning reappear at the lobby (weekdays).
    pub resident_return: u32,
    /// End of the weekend leisure window.
    pub retail_close: u32,
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            dawn:            60,
            resident_leave:  85,
            rush_morning:    112,
            work_end:        212,
            resident_return: 212,
            retail_close:    262,
        }
    }
}

impl DaySchedule {
    /// `true` while the weekend leisure window is open.
    #[inline]
    pub fn in_leisure_window(&self, tick_of_day: u32) -> bool {
        (self.dawn..self.retail_close).contains(&tick_of_day)
    }

    /// Every instant must fall inside the day.
    pub fn validate(&self, ticks_per_day: u32) -> CoreResult<()> {
        let instants = [
            self.dawn,
            self.resident_leave,
            self.rush_morning,
            self.work_end,
            self.resident_return,
            self.retail_close,
        ];
        for t in instants {
            if t >= ticks_per_day {
                return Err(CoreError::Config(format!(
                    "schedule instant {t} outside day of {ticks_per_day} ticks"
                )));
            }
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Ticks in one simulated day.
    pub ticks_per_day: u32,

    /// Storey row of the ground-level lobby.
    pub lobby_floor: i32,

    /// Horizontal coordinate where people enter and leave the building.
    pub lobby_anchor_x: f32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Tick-of-day instants for the population schedule.
    pub schedule: DaySchedule,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_day:           300,
            lobby_floor:             25,
            lobby_anchor_x:          1.0,
            seed:                    0,
            snapshot_interval_ticks: 0,
            schedule:                DaySchedule::default(),
        }
    }
}

impl SimConfig {
    /// Construct a `DayClock` pre-configured for this run.
    pub fn make_clock(&self) -> DayClock {
        DayClock::new(self.ticks_per_day)
    }

    /// Reject configurations the tick loop cannot honor.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ticks_per_day == 0 {
            return Err(CoreError::Config("ticks_per_day must be positive".into()));
        }
        if self.lobby_floor < 0 {
            return Err(CoreError::Config(format!(
                "lobby floor {} is above the grid",
                self.lobby_floor
            )));
        }
        self.schedule.validate(self.ticks_per_day)
    }
}
