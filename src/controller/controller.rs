/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::LimitsConfig;
use crate::elevator::{advance, select_elevator};
use crate::shared::{Arrival, ElevatorSnapshot, ElevatorState, SimulationError};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the fleet and runs the simulation one command at a time.
 *
 * The controller starts out empty. `initialize` builds the fleet, after which
 * hall calls are assigned with `assign_call` and time is advanced with `step`.
 * Every rejected operation leaves the state exactly as it was.
 *
 * # Fields
 * - `limits`:      Upper bounds accepted by `initialize`.
 * - `n_floors`:    Number of floors in the building, 0 until initialized.
 * - `fleet`:       The cars, indexed by their id.
 * - `steps`:       Number of completed time steps.
 */
pub struct SimulationController {
    limits: LimitsConfig,
    n_floors: u8,
    fleet: Vec<ElevatorState>,
    steps: u64,
}

impl SimulationController {
    pub fn new(limits: LimitsConfig) -> SimulationController {
        SimulationController {
            limits,
            n_floors: 0,
            fleet: Vec::new(),
            steps: 0,
        }
    }

    /// Builds a fleet of `n_elevators` idle cars on floor 0 in a building with `n_floors` floors.
    pub fn initialize(&mut self, n_floors: i32, n_elevators: i32) -> Result<(), SimulationError> {
        let counts = self.validate_floor_count(n_floors).and_then(|floors| {
            self.validate_elevator_count(n_elevators)
                .map(|elevators| (floors, elevators))
        });

        let (floor_count, elevator_count) = match counts {
            Ok(counts) => counts,
            Err(e) => {
                warn!("Rejected initialization: {}", e);
                return Err(e);
            }
        };

        self.n_floors = floor_count;
        self.fleet = (0..usize::from(elevator_count)).map(ElevatorState::new).collect();
        self.steps = 0;

        info!(
            "Initialized {} elevators in a building with {} floors",
            elevator_count, floor_count
        );
        Ok(())
    }

    /// Hands a hall call at `floor` to the best car and returns that car's id.
    pub fn assign_call(&mut self, floor: i32) -> Result<usize, SimulationError> {
        if self.fleet.is_empty() {
            warn!("Hall call at floor {} before initialization", floor);
            return Err(SimulationError::NoFleet);
        }

        let requested_floor = self.validate_floor(floor).map_err(|e| {
            warn!("Rejected hall call: {}", e);
            e
        })?;

        let index = select_elevator(&self.fleet, requested_floor)?;
        let elevator = &mut self.fleet[index];
        if let Some(previous) = elevator.target {
            debug!("Lift {} drops target {} for floor {}", elevator.id(), previous, requested_floor);
        }
        elevator.target = Some(requested_floor);

        info!(
            "Hall call at floor {} assigned to lift {} ({})",
            requested_floor,
            elevator.id(),
            elevator.direction()
        );
        Ok(elevator.id())
    }

    /// Moves every car one floor and returns the arrivals of this step.
    pub fn step(&mut self) -> Vec<Arrival> {
        let arrivals = advance(&mut self.fleet);
        self.steps += 1;

        debug!("Completed step {}", self.steps);
        for arrival in arrivals.iter() {
            info!("Lift {} reached floor {}", arrival.elevator_id, arrival.floor);
        }
        arrivals
    }

    pub fn snapshot(&self) -> Vec<ElevatorSnapshot> {
        self.fleet.iter().map(ElevatorSnapshot::from).collect()
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Checks a building size against `2..=limits.max_floors`.
    pub fn validate_floor_count(&self, n_floors: i32) -> Result<u8, SimulationError> {
        u8::try_from(n_floors)
            .ok()
            .filter(|count| (2..=self.limits.max_floors).contains(count))
            .ok_or(SimulationError::InvalidFloorCount {
                requested: n_floors,
                max: self.limits.max_floors,
            })
    }

    pub fn validate_elevator_count(&self, n_elevators: i32) -> Result<u8, SimulationError> {
        u8::try_from(n_elevators)
            .ok()
            .filter(|count| (1..=self.limits.max_elevators).contains(count))
            .ok_or(SimulationError::InvalidElevatorCount {
                requested: n_elevators,
                max: self.limits.max_elevators,
            })
    }

    fn validate_floor(&self, floor: i32) -> Result<u8, SimulationError> {
        u8::try_from(floor)
            .ok()
            .filter(|floor| *floor < self.n_floors)
            .ok_or(SimulationError::FloorOutOfRange {
                floor,
                n_floors: self.n_floors,
            })
    }
}
