//! Strongly typed, zero-cost identifier wrappers.
//!
//! All cross-references between simulation objects (person → car, bank → car,
//! person → room) are these IDs resolved through the owning roster, never
//! object references.  Rosters are rebuilt wholesale (a shaft rescan replaces
//! every car), so an ID is only as durable as its roster — holders are
//! released explicitly when a roster is rebuilt.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into roster `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a roster index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an elevator car in the dispatcher's roster.
    ///
    /// Car IDs are only valid until the next shaft rescan — the rescan
    /// rebuilds the roster from scratch and every outstanding `CarId` must be
    /// released by its holder.
    pub struct CarId(u32);
}

typed_id! {
    /// Index of an elevator bank (a horizontal-locality grouping of cars).
    pub struct BankId(u32);
}

typed_id! {
    /// Identity of a pedestrian agent.  Monotonically assigned at spawn and
    /// never reused within a run, so trace rows stay unambiguous even as the
    /// population churns.
    pub struct PersonId(u32);
}

typed_id! {
    /// Identity of a room: the linear cell index of the room's root cell in
    /// the floor plan.  Stable for the life of the placement.
    pub struct RoomId(u32);
}
