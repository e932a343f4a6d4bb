//! The `FloorPlan` grid: placement, room queries, and occupancy writes.

use vt_core::{Floor, GridPos, RoomId};

use crate::{Cell, CellKind, PlanError, PlanResult, Tenant};

/// A placed room's root cell, as yielded by the query iterators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoomRef {
    pub id:    RoomId,
    pub kind:  CellKind,
    pub x:     i32,
    pub floor: Floor,
}

impl RoomRef {
    /// Where an agent stands when "at" this room: horizontally centered on
    /// the root cell, vertically on the room's storey.
    #[inline]
    pub fn anchor(&self) -> GridPos {
        GridPos::new(self.x as f32 + 0.5, self.floor as f32)
    }
}

/// The dense cell grid of the building.
///
/// Cells are stored row-major (`floor * width + x`); a `RoomId` is the linear
/// index of the room's root cell.
pub struct FloorPlan {
    width:  usize,
    height: usize,
    cells:  Vec<Cell>,
}

impl FloorPlan {
    /// An empty grid of `width` columns and `height` storeys.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: i32, floor: Floor) -> usize {
        floor as usize * self.width + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: i32, floor: Floor) -> bool {
        x >= 0 && (x as usize) < self.width && floor >= 0 && (floor as usize) < self.height
    }

    /// Read access to one cell, `None` outside the grid.
    pub fn cell(&self, x: i32, floor: Floor) -> Option<&Cell> {
        self.in_bounds(x, floor).then(|| &self.cells[self.idx(x, floor)])
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Place a room with its root at `(x, floor)`.
    ///
    /// Validates bounds and overlap across the room's full width, then fills
    /// the root cell and `Taken` markers.  Returns the new room's ID.
    pub fn place_room(&mut self, x: i32, floor: Floor, kind: CellKind) -> PlanResult<RoomId> {
        let width = kind.width().ok_or(PlanError::NotPlaceable(kind))? as i32;

        if !self.in_bounds(x, floor) || !self.in_bounds(x + width - 1, floor) {
            return Err(PlanError::OutOfBounds {
                x,
                floor,
                width: self.width,
                height: self.height,
            });
        }
        for i in 0..width {
            if self.cells[self.idx(x + i, floor)].kind != CellKind::Empty {
                return Err(PlanError::CellTaken { x: x + i, floor });
            }
        }

        let root = RoomId(self.idx(x, floor) as u32);
        for i in 0..width {
            let cell_idx = self.idx(x + i, floor);
            let cell = &mut self.cells[cell_idx];
            *cell = Cell {
                kind:     if i == 0 { kind } else { CellKind::Taken },
                is_root:  i == 0,
                owner:    (i != 0).then_some(root),
                occupied: false,
                tenant:   None,
            };
        }
        Ok(root)
    }

    // ── Room queries ──────────────────────────────────────────────────────

    fn room_ref_at(&self, idx: usize) -> RoomRef {
        RoomRef {
            id:    RoomId(idx as u32),
            kind:  self.cells[idx].kind,
            x:     (idx % self.width) as i32,
            floor: (idx / self.width) as Floor,
        }
    }

    /// All root cells of `kind`, in row-major (top-to-bottom, left-to-right)
    /// order.  The order is part of the crate's determinism contract.
    pub fn rooms(&self, kind: CellKind) -> impl Iterator<Item = RoomRef> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.is_root && c.kind == kind)
            .map(|(i, _)| self.room_ref_at(i))
    }

    /// Root cells of every leisure kind (food, cinema, retail), row-major.
    pub fn leisure_rooms(&self) -> Vec<RoomRef> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_root && c.kind.is_leisure())
            .map(|(i, _)| self.room_ref_at(i))
            .collect()
    }

    /// Resolve a room ID back to its root reference.
    pub fn room(&self, id: RoomId) -> Option<RoomRef> {
        let idx = id.index();
        (idx < self.cells.len() && self.cells[idx].is_root).then(|| self.room_ref_at(idx))
    }

    /// `(column, floor)` of every elevator root, row-major.  Input to the
    /// shaft scanner.
    pub fn elevator_roots(&self) -> impl Iterator<Item = (i32, Floor)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_root && c.kind == CellKind::Elevator)
            .map(|(i, _)| ((i % self.width) as i32, (i / self.width) as Floor))
    }

    // ── Occupancy write path ──────────────────────────────────────────────
    //
    // The `occupied` flag and the tenant record always change together; no
    // caller can observe one updated without the other.

    /// Mark `room` occupied by `tenant`.
    pub fn set_occupied(&mut self, room: RoomId, tenant: Tenant) -> PlanResult<()> {
        let cell = self.root_cell_mut(room)?;
        cell.occupied = true;
        cell.tenant = Some(tenant);
        Ok(())
    }

    /// Mark `room` vacant.
    pub fn clear_occupied(&mut self, room: RoomId) -> PlanResult<()> {
        let cell = self.root_cell_mut(room)?;
        cell.occupied = false;
        cell.tenant = None;
        Ok(())
    }

    pub fn is_occupied(&self, room: RoomId) -> bool {
        self.cells
            .get(room.index())
            .is_some_and(|c| c.is_root && c.occupied)
    }

    pub fn tenant(&self, room: RoomId) -> Option<Tenant> {
        self.cells
            .get(room.index())
            .filter(|c| c.is_root)
            .and_then(|c| c.tenant)
    }

    fn root_cell_mut(&mut self, room: RoomId) -> PlanResult<&mut Cell> {
        let idx = room.index();
        if idx >= self.cells.len() || !self.cells[idx].is_root {
            return Err(PlanError::NotARoom(room));
        }
        Ok(&mut self.cells[idx])
    }
}
