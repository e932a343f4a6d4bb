//! Agent kind and state enums.

/// What kind of person this is.  Workers commute in from the lobby each
/// weekday morning; residents live in condos and commute out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersonKind {
    Worker,
    Resident,
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PersonKind::Worker => "worker",
            PersonKind::Resident => "resident",
        })
    }
}

/// The agent state machine.
///
/// Movement happens in the *ambulatory* states; `WaitingForCar` and `Riding`
/// are the elevator interlock; the rest are parked states (asleep at home,
/// at a desk, loitering in the lobby, or despawned).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersonState {
    /// Freshly spawned, destination not yet assigned.
    Idle,
    /// En route to the current destination.
    Walking,
    /// Standing at a call point, bound to a car.
    WaitingForCar,
    /// Inside a car, position pinned to it.
    Riding,
    /// At the workplace, invisible until the evening trigger.
    Working,
    /// At home, invisible until a schedule trigger.
    Sleeping,
    /// Heading home (residents: condo; workers: lobby, then despawn).
    GoingHome,
    /// Resident heading to the lobby for the workday.
    LeavingForWork,
    /// Dwelling at a leisure room on a weekend trip.
    Leisure,
    /// Gave up waiting; heading for the lobby to despawn.
    LeavingAngry,
    /// At the lobby with nowhere to be.
    WaitingAtLobby,
    /// Despawned; swept from the roster next tick.
    Gone,
}

impl PersonState {
    /// States in which the walk block runs (horizontal easing, elevator
    /// hailing, arrival detection).
    #[inline]
    pub fn is_ambulatory(self) -> bool {
        matches!(
            self,
            PersonState::Idle
                | PersonState::Walking
                | PersonState::GoingHome
                | PersonState::LeavingForWork
                | PersonState::LeavingAngry
        )
    }

    /// States whose walk ends in a lobby despawn.
    #[inline]
    pub fn is_leaving(self) -> bool {
        matches!(self, PersonState::LeavingForWork | PersonState::LeavingAngry)
    }

    /// States in which the agent is bound to a car.
    #[inline]
    pub fn is_bound(self) -> bool {
        matches!(self, PersonState::WaitingForCar | PersonState::Riding)
    }
}

impl std::fmt::Display for PersonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PersonState::Idle => "idle",
            PersonState::Walking => "walking",
            PersonState::WaitingForCar => "waiting-for-car",
            PersonState::Riding => "riding",
            PersonState::Working => "working",
            PersonState::Sleeping => "sleeping",
            PersonState::GoingHome => "going-home",
            PersonState::LeavingForWork => "leaving-for-work",
            PersonState::Leisure => "leisure",
            PersonState::LeavingAngry => "leaving-angry",
            PersonState::WaitingAtLobby => "waiting-at-lobby",
            PersonState::Gone => "gone",
        };
        f.write_str(name)
    }
}
