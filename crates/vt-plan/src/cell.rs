//! Cell records and room kinds.

use vt_core::{PersonId, RoomId};

/// What a grid cell contains.
///
/// `Taken` marks the non-root cells of a multi-cell room; every other
/// variant names the room kind of a root cell (or `Empty` space).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Empty,
    Lobby,
    Office,
    Condo,
    Hotel,
    Food,
    Retail,
    Cinema,
    Parking,
    Stairs,
    Elevator,
    SkyLobby,
    /// Non-root cell of a room; `Cell::owner` points at the root.
    Taken,
}

impl CellKind {
    /// Width in cells when placed as a room.  `None` for kinds that cannot
    /// be placed (`Empty`, `Taken`).
    pub fn width(self) -> Option<u8> {
        match self {
            CellKind::Lobby => Some(1),
            CellKind::Office | CellKind::Condo | CellKind::Hotel => Some(2),
            CellKind::Retail | CellKind::Stairs | CellKind::Elevator => Some(2),
            CellKind::Food | CellKind::Cinema | CellKind::Parking => Some(3),
            CellKind::SkyLobby => Some(4),
            CellKind::Empty | CellKind::Taken => None,
        }
    }

    /// Rooms residents visit on weekend leisure trips.
    #[inline]
    pub fn is_leisure(self) -> bool {
        matches!(self, CellKind::Food | CellKind::Cinema | CellKind::Retail)
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Lobby => "lobby",
            CellKind::Office => "office",
            CellKind::Condo => "condo",
            CellKind::Hotel => "hotel",
            CellKind::Food => "food",
            CellKind::Retail => "retail",
            CellKind::Cinema => "cinema",
            CellKind::Parking => "parking",
            CellKind::Stairs => "stairs",
            CellKind::Elevator => "elevator",
            CellKind::SkyLobby => "sky-lobby",
            CellKind::Taken => "taken",
        };
        f.write_str(name)
    }
}

/// Occupancy record on a residential room's root cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tenant {
    pub person:       PersonId,
    pub moved_in_day: u32,
}

/// One grid cell.
///
/// The `occupied` flag and `tenant` record change only through the plan's
/// occupancy write path, which sets both together.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind:     CellKind,
    pub is_root:  bool,
    /// For `Taken` cells, the room whose root owns this cell.
    pub owner:    Option<RoomId>,
    pub occupied: bool,
    pub tenant:   Option<Tenant>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind:     CellKind::Empty,
        is_root:  false,
        owner:    None,
        occupied: false,
        tenant:   None,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}
