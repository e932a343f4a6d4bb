use thiserror::Error;

use vt_core::{Floor, RoomId};

use crate::CellKind;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("cell ({x}, {floor}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x:      i32,
        floor:  Floor,
        width:  usize,
        height: usize,
    },

    #[error("cell ({x}, {floor}) is already occupied by another room")]
    CellTaken { x: i32, floor: Floor },

    #[error("{0} cannot be placed as a room")]
    NotPlaceable(CellKind),

    #[error("{0} is not a room root")]
    NotARoom(RoomId),
}

pub type PlanResult<T> = Result<T, PlanError>;
