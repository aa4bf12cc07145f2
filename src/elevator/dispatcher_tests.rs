/*
 * Unit tests for the dispatcher
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_select_nearest_idle
 * - test_select_tie_goes_to_lowest_index
 * - test_select_idle_over_busy_within_penalty
 * - test_select_busy_when_gap_exceeds_penalty
 * - test_select_gap_equal_to_penalty
 * - test_select_empty_fleet
 * - test_select_does_not_mutate
 * - test_call_cost
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::elevator::dispatcher::{call_cost, select_elevator, BUSY_PENALTY};
    use crate::shared::{ElevatorState, SimulationError};

    fn fleet_at(floors: &[(u8, Option<u8>)]) -> Vec<ElevatorState> {
        floors
            .iter()
            .enumerate()
            .map(|(id, &(current_floor, target))| {
                let mut elevator = ElevatorState::new(id);
                elevator.current_floor = current_floor;
                elevator.target = target;
                elevator
            })
            .collect()
    }

    #[test]
    fn test_select_nearest_idle() {
        // Purpose: Verify that the closest idle car is chosen

        // Arrange
        let fleet = fleet_at(&[(0, None), (7, None), (3, None)]);

        // Act
        let chosen = select_elevator(&fleet, 6);

        // Assert
        assert_eq!(chosen, Ok(1));
    }

    #[test]
    fn test_select_tie_goes_to_lowest_index() {
        // Purpose: Verify that two idle cars at equal distance resolve to the lower index

        // Arrange
        let fleet = fleet_at(&[(2, None), (6, None), (2, None)]);

        // Act
        let chosen = select_elevator(&fleet, 4);

        // Assert
        assert_eq!(chosen, Ok(0));
    }

    #[test]
    fn test_select_idle_over_busy_within_penalty() {
        // Purpose: Verify that a busy car on the requested floor loses to an idle car 4 floors away

        // Arrange
        let fleet = fleet_at(&[(5, Some(9)), (1, None)]);

        // Act
        let chosen = select_elevator(&fleet, 5);

        // Assert
        assert_eq!(chosen, Ok(1));
    }

    #[test]
    fn test_select_busy_when_gap_exceeds_penalty() {
        // Purpose: Verify that a busy car still wins when the idle car is more than the penalty further away

        // Arrange
        let fleet = fleet_at(&[(0, None), (10, Some(12))]);

        // Act
        let chosen = select_elevator(&fleet, 10);

        // Assert
        assert_eq!(chosen, Ok(1));
    }

    #[test]
    fn test_select_gap_equal_to_penalty() {
        // Purpose: Verify that equal cost after the penalty falls back to the lower index

        // Arrange
        let fleet = fleet_at(&[(3, Some(0)), (8, None)]);

        // Act
        let chosen = select_elevator(&fleet, 3);

        // Assert
        assert_eq!(chosen, Ok(0));
    }

    #[test]
    fn test_select_empty_fleet() {
        // Purpose: Verify that an empty fleet is reported instead of panicking

        // Arrange
        let fleet: Vec<ElevatorState> = Vec::new();

        // Act
        let chosen = select_elevator(&fleet, 0);

        // Assert
        assert_eq!(chosen, Err(SimulationError::NoFleet));
    }

    #[test]
    fn test_select_does_not_mutate() {
        // Purpose: Verify that selection leaves the fleet untouched

        // Arrange
        let fleet = fleet_at(&[(4, None), (2, Some(6))]);
        let before = fleet.clone();

        // Act
        let _ = select_elevator(&fleet, 1);

        // Assert
        assert_eq!(fleet, before);
    }

    #[test]
    fn test_call_cost() {
        // Purpose: Verify the cost formula for idle and busy cars

        // Arrange
        let fleet = fleet_at(&[(9, None), (2, Some(3))]);

        // Act
        let idle_cost = call_cost(&fleet[0], 4);
        let busy_cost = call_cost(&fleet[1], 4);

        // Assert
        assert_eq!(idle_cost, 5);
        assert_eq!(busy_cost, 2 + BUSY_PENALTY);
    }
}
