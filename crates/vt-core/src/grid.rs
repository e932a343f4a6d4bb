//! The building coordinate system.
//!
//! The building is a dense cell grid: `x` counts columns left to right and
//! `floor` counts rows **top to bottom** — floor 0 is the highest storey and
//! larger indices are lower in the building.  The lobby sits at a configured
//! row in the middle of the grid (floors above it are above ground).
//!
//! "Up" travel therefore *decreases* the floor index.  Everything downstream
//! (car direction logic, SCAN target selection) is written against this
//! convention; flipping it would silently invert every elevator.
//!
//! Positions are continuous `f32` pairs: an integral `floor` value means
//! "aligned with that storey" (a car flush with its landing, a person standing
//! on the slab).

/// A storey index.  Signed so that target-selection arithmetic
/// (`target - current`) can carry direction in its sign.
pub type Floor = i32;

/// A continuous position in the building: horizontal cell coordinate and
/// storey row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x:     f32,
    pub floor: f32,
}

impl GridPos {
    #[inline]
    pub fn new(x: f32, floor: f32) -> Self {
        Self { x, floor }
    }

    /// The storey this position rounds to.
    #[inline]
    pub fn floor_index(self) -> Floor {
        self.floor.round() as Floor
    }

    /// Horizontal distance to `other`, in cells.
    #[inline]
    pub fn dx(self, other: GridPos) -> f32 {
        (other.x - self.x).abs()
    }

    /// Vertical distance to `other`, in storeys.
    #[inline]
    pub fn dy(self, other: GridPos) -> f32 {
        (other.floor - self.floor).abs()
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.floor)
    }
}
