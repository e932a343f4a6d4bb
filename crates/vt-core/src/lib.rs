//! `vt-core` — foundational types for the `towersim` vertical-transport
//! simulator.
//!
//! This crate is a dependency of every other `vt-*` crate.  It intentionally
//! has no `vt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `CarId`, `BankId`, `PersonId`, `RoomId`              |
//! | [`grid`]    | `Floor`, `GridPos` — the building coordinate system  |
//! | [`time`]    | `Tick`, `DayClock`, `DaySchedule`, `SimConfig`       |
//! | [`rng`]     | `SimRng` — the deterministic simulation RNG          |
//! | [`error`]   | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Floor, GridPos};
pub use ids::{BankId, CarId, PersonId, RoomId};
pub use rng::SimRng;
pub use time::{DayClock, DaySchedule, SimConfig, Tick};
