/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn between(from: u8, to: u8) -> Direction {
        match from.cmp(&to) {
            Ordering::Less => Direction::Up,
            Ordering::Greater => Direction::Down,
            Ordering::Equal => Direction::Idle,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Idle => write!(f, "IDLE"),
        }
    }
}

/**
 * State of a single car.
 *
 * The direction is not stored; it is computed from `current_floor` and `target`
 * whenever it is read, so it always agrees with them.
 *
 * # Fields
 * - `id`:              Ordinal position in the fleet, fixed at creation.
 * - `current_floor`:   Floor the car is on, always below the building's floor count.
 * - `target`:          Floor the car is heading for, `None` when idle.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    id: usize,
    pub current_floor: u8,
    pub target: Option<u8>,
}

impl ElevatorState {
    pub fn new(id: usize) -> ElevatorState {
        ElevatorState {
            id,
            current_floor: 0,
            target: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_busy(&self) -> bool {
        self.target.is_some()
    }

    pub fn direction(&self) -> Direction {
        match self.target {
            Some(target) => Direction::between(self.current_floor, target),
            None => Direction::Idle,
        }
    }
}

/// A car reaching its target floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub elevator_id: usize,
    pub floor: u8,
}

/// Read-only copy of one car, as handed out for status rendering.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id: usize,
    #[serde(rename = "currentFloor")]
    pub current_floor: u8,
    pub target: Option<u8>,
    pub direction: Direction,
}

impl From<&ElevatorState> for ElevatorSnapshot {
    fn from(state: &ElevatorState) -> Self {
        ElevatorSnapshot {
            id: state.id(),
            current_floor: state.current_floor,
            target: state.target,
            direction: state.direction(),
        }
    }
}
