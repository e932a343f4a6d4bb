//! `vt-plan` — the floor-plan model the simulation core runs against.
//!
//! The plan is a dense cell grid (see [`vt_core::grid`] for the coordinate
//! convention).  Rooms occupy one or more horizontally adjacent cells: the
//! leftmost cell is the **root** and carries all room state; the remainder
//! are `Taken` markers pointing back at the root.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`cell`]  | `CellKind`, `Cell`, `Tenant`                            |
//! | [`plan`]  | `FloorPlan` — placement, room queries, occupancy writes |
//! | [`error`] | `PlanError`, `PlanResult<T>`                            |
//!
//! Everything the transit and agent crates consume is read-only except the
//! occupancy write path (`set_occupied` / `clear_occupied`), which always
//! changes the `occupied` flag and the tenant record together.

pub mod cell;
pub mod error;
pub mod plan;

#[cfg(test)]
mod tests;

pub use cell::{Cell, CellKind, Tenant};
pub use error::{PlanError, PlanResult};
pub use plan::{FloorPlan, RoomRef};
