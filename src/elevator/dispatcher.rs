/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorState, SimulationError};

/***************************************/
/*             Constants               */
/***************************************/
/// Extra cost, in floors, charged to a car that already has a target.
pub const BUSY_PENALTY: u32 = 5;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Picks the car that should serve a hall call at `requested_floor`.
 *
 * Every car costs its distance to the requested floor, plus `BUSY_PENALTY` if
 * it is already heading somewhere. The cheapest car wins and ties go to the
 * lowest index. The fleet is not modified.
 *
 * # Errors
 * `SimulationError::NoFleet` if `fleet` is empty.
 */
pub fn select_elevator(
    fleet: &[ElevatorState],
    requested_floor: u8,
) -> Result<usize, SimulationError> {
    let mut best: Option<(usize, u32)> = None;

    for (index, elevator) in fleet.iter().enumerate() {
        let cost = call_cost(elevator, requested_floor);

        // Strict comparison keeps the first car seen on a tie
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((index, cost)),
        }
    }

    best.map(|(index, _)| index).ok_or(SimulationError::NoFleet)
}

/// Cost of sending `elevator` to `requested_floor`.
pub fn call_cost(elevator: &ElevatorState, requested_floor: u8) -> u32 {
    let distance = u32::from(elevator.current_floor.abs_diff(requested_floor));

    if elevator.is_busy() {
        distance + BUSY_PENALTY
    } else {
        distance
    }
}
