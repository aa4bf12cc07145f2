/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("invalid number of floors {requested}, expected 2 to {max}")]
    InvalidFloorCount { requested: i32, max: u8 },

    #[error("invalid number of elevators {requested}, expected 1 to {max}")]
    InvalidElevatorCount { requested: i32, max: u8 },

    #[error("floor {floor} is outside a building with {n_floors} floors")]
    FloorOutOfRange { floor: i32, n_floors: u8 },

    #[error("no elevators in the fleet, initialize the simulation first")]
    NoFleet,
}

impl SimulationError {
    /// True for rejected input, false for precondition violations.
    pub fn is_validation(&self) -> bool {
        !matches!(self, SimulationError::NoFleet)
    }
}
