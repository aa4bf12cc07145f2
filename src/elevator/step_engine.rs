/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::cmp::Ordering;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Arrival, ElevatorState};

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Advances every car in the fleet by one time step.
 *
 * Cars are handled in index order and independently of each other. A car with
 * a target moves one floor towards it. A car already standing on its target
 * arrives instead: the target is cleared and an `Arrival` is reported. Moving
 * and arriving never happen in the same step, so every trip yields exactly one
 * arrival. Idle cars are left alone.
 *
 * # Returns
 * The arrivals of this step in fleet order, possibly none.
 */
pub fn advance(fleet: &mut [ElevatorState]) -> Vec<Arrival> {
    let mut arrivals = Vec::new();

    for elevator in fleet.iter_mut() {
        let target = match elevator.target {
            Some(target) => target,
            None => continue,
        };

        match elevator.current_floor.cmp(&target) {
            Ordering::Less => {
                elevator.current_floor += 1;
                debug!("Lift {} moved up to floor {}", elevator.id(), elevator.current_floor);
            }
            Ordering::Greater => {
                elevator.current_floor -= 1;
                debug!("Lift {} moved down to floor {}", elevator.id(), elevator.current_floor);
            }
            Ordering::Equal => {
                elevator.target = None;
                arrivals.push(Arrival {
                    elevator_id: elevator.id(),
                    floor: elevator.current_floor,
                });
            }
        }
    }

    arrivals
}
