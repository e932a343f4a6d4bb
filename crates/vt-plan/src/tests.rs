//! Unit tests for vt-plan.

use vt_core::{PersonId, RoomId};

use crate::{CellKind, FloorPlan, PlanError, Tenant};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plan() -> FloorPlan {
    FloorPlan::new(10, 8)
}

fn tenant(person: u32) -> Tenant {
    Tenant {
        person:       PersonId(person),
        moved_in_day: 1,
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use super::*;

    #[test]
    fn root_and_taken_fill() {
        let mut p = plan();
        let id = p.place_room(2, 3, CellKind::Office).unwrap();

        let root = p.cell(2, 3).unwrap();
        assert_eq!(root.kind, CellKind::Office);
        assert!(root.is_root);

        let taken = p.cell(3, 3).unwrap();
        assert_eq!(taken.kind, CellKind::Taken);
        assert!(!taken.is_root);
        assert_eq!(taken.owner, Some(id));
    }

    #[test]
    fn overlap_rejected_and_grid_untouched() {
        let mut p = plan();
        p.place_room(2, 3, CellKind::Office).unwrap();

        // A food court at x=0 would span cells 0..3 and collide at x=2.
        let err = p.place_room(0, 3, CellKind::Food).unwrap_err();
        assert!(matches!(err, PlanError::CellTaken { x: 2, floor: 3 }));

        // Validation happens before any write: cells 0 and 1 stay empty.
        assert_eq!(p.cell(0, 3).unwrap().kind, CellKind::Empty);
        assert_eq!(p.cell(1, 3).unwrap().kind, CellKind::Empty);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut p = plan();
        // Width-4 sky lobby does not fit at x=7 of a 10-wide grid.
        assert!(matches!(
            p.place_room(7, 0, CellKind::SkyLobby),
            Err(PlanError::OutOfBounds { .. })
        ));
        assert!(matches!(
            p.place_room(-1, 0, CellKind::Office),
            Err(PlanError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_and_taken_not_placeable() {
        let mut p = plan();
        assert!(matches!(
            p.place_room(0, 0, CellKind::Empty),
            Err(PlanError::NotPlaceable(CellKind::Empty))
        ));
        assert!(matches!(
            p.place_room(0, 0, CellKind::Taken),
            Err(PlanError::NotPlaceable(CellKind::Taken))
        ));
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn rooms_in_row_major_order() {
        let mut p = plan();
        let low = p.place_room(4, 5, CellKind::Office).unwrap();
        let high = p.place_room(0, 1, CellKind::Office).unwrap();
        let mid = p.place_room(6, 1, CellKind::Office).unwrap();

        let ids: Vec<RoomId> = p.rooms(CellKind::Office).map(|r| r.id).collect();
        assert_eq!(ids, vec![high, mid, low]);
    }

    #[test]
    fn anchor_is_centered_on_root_storey() {
        let mut p = plan();
        let id = p.place_room(4, 5, CellKind::Condo).unwrap();
        let anchor = p.room(id).unwrap().anchor();
        assert_eq!(anchor.x, 4.5);
        assert_eq!(anchor.floor, 5.0);
    }

    #[test]
    fn leisure_rooms_span_kinds() {
        let mut p = plan();
        p.place_room(0, 0, CellKind::Food).unwrap();
        p.place_room(0, 1, CellKind::Cinema).unwrap();
        p.place_room(0, 2, CellKind::Retail).unwrap();
        p.place_room(0, 3, CellKind::Office).unwrap();
        assert_eq!(p.leisure_rooms().len(), 3);
    }

    #[test]
    fn elevator_roots_listed() {
        let mut p = plan();
        p.place_room(2, 1, CellKind::Elevator).unwrap();
        p.place_room(2, 2, CellKind::Elevator).unwrap();
        let roots: Vec<_> = p.elevator_roots().collect();
        assert_eq!(roots, vec![(2, 1), (2, 2)]);
    }

    #[test]
    fn room_rejects_non_roots() {
        let mut p = plan();
        let id = p.place_room(2, 3, CellKind::Office).unwrap();
        assert!(p.room(id).is_some());
        // The Taken cell next to the root is not a room.
        assert!(p.room(RoomId(id.0 + 1)).is_none());
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn flag_and_tenant_move_together() {
        let mut p = plan();
        let id = p.place_room(0, 0, CellKind::Condo).unwrap();
        assert!(!p.is_occupied(id));
        assert!(p.tenant(id).is_none());

        p.set_occupied(id, tenant(9)).unwrap();
        assert!(p.is_occupied(id));
        assert_eq!(p.tenant(id).unwrap().person, PersonId(9));

        p.clear_occupied(id).unwrap();
        assert!(!p.is_occupied(id));
        assert!(p.tenant(id).is_none());
    }

    #[test]
    fn occupancy_write_needs_a_root() {
        let mut p = plan();
        let id = p.place_room(0, 0, CellKind::Condo).unwrap();
        let not_a_room = RoomId(id.0 + 1); // the Taken cell
        assert!(matches!(
            p.set_occupied(not_a_room, tenant(1)),
            Err(PlanError::NotARoom(_))
        ));
    }
}
