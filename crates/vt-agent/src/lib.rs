//! `vt-agent` — pedestrian agents: the people who call, board, ride, and
//! leave elevators.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `PersonKind`, `PersonState` — closed state enums           |
//! | [`tuning`]     | `AgentTuning` — movement, stress, and schedule constants   |
//! | [`person`]     | `Person` — the per-agent state machine                     |
//! | [`population`] | `Population` — roster, schedule triggers, move-ins, stats  |
//!
//! # Interlock with the elevator fleet
//!
//! Agents reference cars only by `CarId`, resolved through the dispatcher's
//! roster each tick.  The tick loop advances all cars before any agent, so
//! an agent's boarding/exit check always observes that tick's final car
//! state.  When a shaft rescan rebuilds the fleet,
//! [`Population::on_fleet_rebuilt`] releases every outstanding binding.
//!
//! Failure is modeled as degraded state, not errors: an agent with no car
//! able to serve its trip simply makes no vertical progress that tick and
//! retries the next — counted in [`PopulationStats`] so stuck populations
//! are visible instead of silent.

pub mod person;
pub mod population;
pub mod state;
pub mod tuning;


pub use person::{Person, StepCtx};
pub use population::{PersonView, Population, PopulationStats};
pub use state::{PersonKind, PersonState};
pub use tuning::{AgentTuning, StressBand};
