//! `vt-sim` — tick loop orchestrator for the towersim simulator.
//!
//! # The tick
//!
//! ```text
//! advance_tick:
//!   ① Clock    — advance tick-of-day / day counters.
//!   ② Transit  — every elevator car advances once, roster order.
//!   ③ Agents   — every person advances once, roster order; boarding and
//!                exit checks therefore observe this tick's *final* car
//!                state.
//!   ④ Observer — tick report, optional position snapshot.
//! ```
//!
//! The whole loop is single-threaded and cooperative: every operation
//! completes within the tick that invoked it, and there are no suspension
//! points.  Cars never read each other, so phase ② order is cosmetic; it is
//! still fixed (ascending `CarId`) so runs replay identically.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_core::SimConfig;
//! use vt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).plan(plan).build()?;
//! sim.run_days(7, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
