//! The dispatcher: car roster, per-tick advancement, and car-to-trip matching.

use vt_core::{BankId, CarId, Floor};
use vt_plan::FloorPlan;

use crate::{ADJACENT_COLUMNS, CarState, CarTiming, ElevatorBank, ElevatorCar, Shaft, scan_shafts};

/// Read-only per-car state for the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarView {
    pub id:        CarId,
    pub x:         i32,
    pub position:  f32,
    pub state:     CarState,
    pub min_floor: Floor,
    pub max_floor: Floor,
}

/// Owns the full car and bank roster.
///
/// Cars never interact with each other, so roster update order cannot change
/// outcomes — but it is kept stable (ascending `CarId`) anyway so runs are
/// reproducible tick-for-tick.
#[derive(Default)]
pub struct Dispatcher {
    timing: CarTiming,
    cars:   Vec<ElevatorCar>,
    banks:  Vec<ElevatorBank>,
}

impl Dispatcher {
    pub fn new(timing: CarTiming) -> Self {
        Self {
            timing,
            cars: Vec::new(),
            banks: Vec::new(),
        }
    }

    /// Rebuild the entire roster from the current floor plan.
    ///
    /// Every existing car and bank is discarded; one fresh car is created per
    /// shaft, parked at the shaft's bottom.  All previously issued `CarId`s
    /// are invalidated — holders must be released by the caller (see
    /// `Population::on_fleet_rebuilt`).
    pub fn rescan(&mut self, plan: &FloorPlan) {
        self.cars.clear();
        self.banks.clear();
        for Shaft { column, min_floor, max_floor } in scan_shafts(plan) {
            let id = CarId(self.cars.len() as u32);
            self.register_bank(id, column);
            self.cars.push(ElevatorCar::new(id, column, min_floor, max_floor));
        }
    }

    /// First-fit bank registration: the new car joins the first bank with a
    /// member within [`ADJACENT_COLUMNS`]; otherwise it seeds a new bank.
    fn register_bank(&mut self, car: CarId, x: i32) {
        let found = self.banks.iter().position(|bank| {
            bank.cars
                .iter()
                .any(|&member| (self.cars[member.index()].x - x).abs() <= ADJACENT_COLUMNS)
        });
        match found {
            Some(i) => self.banks[i].add_car(car),
            None => {
                let id = BankId(self.banks.len() as u32);
                self.banks.push(ElevatorBank::new(id, car));
            }
        }
    }

    /// Advance every car one tick, in roster order.
    pub fn advance(&mut self) {
        for car in &mut self.cars {
            car.advance(&self.timing);
        }
    }

    /// Greedy nearest-capable-car matching for a trip request.
    ///
    /// Filters the roster to cars serving both endpoints, then returns the
    /// one horizontally closest to the caller (first-wins on ties).  Known
    /// limitation, preserved deliberately: current direction, queue depth,
    /// and door state are all ignored.
    pub fn find_best_car(&self, from_floor: Floor, to_floor: Floor, from_x: f32) -> Option<CarId> {
        let mut best: Option<(CarId, f32)> = None;
        for car in &self.cars {
            if !(car.can_serve(from_floor) && car.can_serve(to_floor)) {
                continue;
            }
            let distance = (car.x as f32 - from_x).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((car.id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    // ── Roster access ─────────────────────────────────────────────────────

    pub fn car(&self, id: CarId) -> Option<&ElevatorCar> {
        self.cars.get(id.index())
    }

    pub fn car_mut(&mut self, id: CarId) -> Option<&mut ElevatorCar> {
        self.cars.get_mut(id.index())
    }

    pub fn cars(&self) -> &[ElevatorCar] {
        &self.cars
    }

    pub fn banks(&self) -> &[ElevatorBank] {
        &self.banks
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Read-only car states for the rendering layer.
    pub fn views(&self) -> impl Iterator<Item = CarView> + '_ {
        self.cars.iter().map(|car| CarView {
            id:        car.id,
            x:         car.x,
            position:  car.position,
            state:     car.state,
            min_floor: car.min_floor,
            max_floor: car.max_floor,
        })
    }
}
