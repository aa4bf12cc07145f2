/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Arrival, ElevatorSnapshot};

/***************************************/
/*             Public API              */
/***************************************/

/// Status table, one line per lift. A missing target is shown as `--`.
pub fn status_text(snapshot: &[ElevatorSnapshot], n_floors: u8, steps: u64) -> String {
    let mut text = String::from("\n===== SYSTEM STATUS =====\n");
    text.push_str(&format!(
        "Floors: 0 to {} | Step: {}\n",
        n_floors.saturating_sub(1),
        steps
    ));

    for elevator in snapshot {
        let target = match elevator.target {
            Some(floor) => floor.to_string(),
            None => "--".to_string(),
        };
        text.push_str(&format!(
            "Lift {} | Floor: {:>2} | Target: {:>2} | Dir: {}\n",
            elevator.id, elevator.current_floor, target, elevator.direction
        ));
    }

    text.push_str("=========================\n\n");
    text
}

pub fn status_json(snapshot: &[ElevatorSnapshot]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

pub fn arrival_text(arrival: &Arrival) -> String {
    format!(
        "Lift {} reached floor {}. Door opens.",
        arrival.elevator_id, arrival.floor
    )
}
