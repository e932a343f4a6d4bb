//! Fluent builder for constructing a [`Sim`].

use vt_agent::{AgentTuning, Population};
use vt_core::{SimConfig, SimRng};
use vt_plan::FloorPlan;
use vt_transit::{CarTiming, Dispatcher};

use crate::{Sim, SimError, SimResult};

/// Default grid dimensions when no plan is supplied.
const DEFAULT_GRID: (usize, usize) = (40, 50);

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                         |
/// |-----------------|---------------------------------|
/// | `.plan(p)`      | empty 40×50 grid                |
/// | `.car_timing(t)`| `CarTiming::default()`          |
/// | `.tuning(t)`    | `AgentTuning::default()`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default()).plan(plan).build()?;
/// sim.run_days(7, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    plan:       Option<FloorPlan>,
    car_timing: CarTiming,
    tuning:     AgentTuning,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            plan: None,
            car_timing: CarTiming::default(),
            tuning: AgentTuning::default(),
        }
    }

    /// Supply the building.  The initial shaft scan runs against it during
    /// `build`, so elevators present in the plan get cars immediately.
    pub fn plan(mut self, plan: FloorPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn car_timing(mut self, timing: CarTiming) -> Self {
        self.car_timing = timing;
        self
    }

    pub fn tuning(mut self, tuning: AgentTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Validate the configuration, run the initial shaft scan, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let plan = self
            .plan
            .unwrap_or_else(|| FloorPlan::new(DEFAULT_GRID.0, DEFAULT_GRID.1));

        if self.config.lobby_floor as usize >= plan.height() {
            return Err(SimError::Config(format!(
                "lobby floor {} outside a {}-storey plan",
                self.config.lobby_floor,
                plan.height()
            )));
        }

        let mut transit = Dispatcher::new(self.car_timing);
        transit.rescan(&plan);

        let population = Population::new(SimRng::new(self.config.seed), self.tuning);

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            plan,
            transit,
            population,
        })
    }
}
