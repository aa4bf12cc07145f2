pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimulationError;
pub use structs::Arrival;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::ElevatorState;
