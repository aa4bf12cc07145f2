/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::controller::SimulationController;
use crate::shared::SimulationError;
use crate::shell::render;

/***************************************/
/*               Enums                 */
/***************************************/
enum Input {
    Number(i32),
    Invalid,
    Closed,
}

enum MenuChoice {
    HallCall,
    Step,
    Status,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(choice: i32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(MenuChoice::HallCall),
            2 => Ok(MenuChoice::Step),
            3 => Ok(MenuChoice::Status),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Interactive operator loop around a `SimulationController`.
 *
 * Reads operator input from a channel, runs one command at a time against the
 * controller and writes the human readable result to `out`.
 *
 * # Fields
 * - `controller`:  The simulation, owned exclusively by the shell.
 * - `input_rx`:    Receives operator input, one line per message.
 * - `out`:         Destination for prompts, status and results.
 * - `json_status`: Render status as JSON instead of the text table.
 */
pub struct Shell<W: Write> {
    controller: SimulationController,
    input_rx: cbc::Receiver<String>,
    out: W,
    json_status: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(
        controller: SimulationController,
        input_rx: cbc::Receiver<String>,
        out: W,
        json_status: bool,
    ) -> Shell<W> {
        Shell {
            controller,
            input_rx,
            out,
            json_status,
        }
    }

    /**
     * Initializes the simulation, asking the operator for any count not given.
     *
     * # Returns
     * `Ok(false)` if the operator supplied counts the controller rejects.
     */
    pub fn setup(&mut self, n_floors: Option<i32>, n_elevators: Option<i32>) -> io::Result<bool> {
        writeln!(self.out, "=== Simple Multi-Elevator Scheduling System ===")?;

        let max_floors = self.controller.limits().max_floors;
        let n_floors = match n_floors {
            Some(n_floors) => Some(n_floors),
            None => self.prompt_number(&format!("Enter number of floors (max {}): ", max_floors))?,
        };
        // A bad floor count ends setup before the elevator prompt
        let n_floors = match n_floors {
            Some(n_floors) if self.controller.validate_floor_count(n_floors).is_ok() => n_floors,
            _ => {
                writeln!(self.out, "Invalid number of floors.")?;
                return Ok(false);
            }
        };

        let max_elevators = self.controller.limits().max_elevators;
        let n_elevators = match n_elevators {
            Some(n_elevators) => Some(n_elevators),
            None => self.prompt_number(&format!(
                "Enter number of elevators (max {}): ",
                max_elevators
            ))?,
        };
        let n_elevators = match n_elevators {
            Some(n_elevators) => n_elevators,
            None => {
                writeln!(self.out, "Invalid number of elevators.")?;
                return Ok(false);
            }
        };

        match self.controller.initialize(n_floors, n_elevators) {
            Ok(()) => {
                writeln!(
                    self.out,
                    "\nSystem initialized with {} floors (0 to {}) and {} elevators.\n",
                    n_floors,
                    n_floors - 1,
                    n_elevators
                )?;
                Ok(true)
            }
            Err(SimulationError::InvalidElevatorCount { .. }) => {
                writeln!(self.out, "Invalid number of elevators.")?;
                Ok(false)
            }
            Err(_) => {
                writeln!(self.out, "Invalid number of floors.")?;
                Ok(false)
            }
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_status()?;
            self.print_menu()?;

            let choice = match self.read_input() {
                Input::Number(choice) => MenuChoice::try_from(choice),
                Input::Invalid => {
                    writeln!(self.out, "Invalid input. Exiting.")?;
                    break;
                }
                Input::Closed => {
                    writeln!(self.out, "\nEnd of input. Exiting.")?;
                    break;
                }
            };

            match choice {
                Ok(MenuChoice::HallCall) => {
                    if !self.hall_call()? {
                        break;
                    }
                }
                Ok(MenuChoice::Step) => self.step()?,
                Ok(MenuChoice::Status) => self.print_status()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.out, "Exiting.")?;
                    break;
                }
                Err(other) => {
                    warn!("Unknown menu choice {}", other);
                    writeln!(self.out, "Invalid choice.")?;
                }
            }
        }

        self.out.flush()
    }

    pub fn controller(&self) -> &SimulationController {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.out
    }

    // Returns false when the operator input ends the session
    fn hall_call(&mut self) -> io::Result<bool> {
        let prompt = format!(
            "Enter floor for hall call (0 - {}): ",
            self.controller.n_floors().saturating_sub(1)
        );
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let floor = match self.read_input() {
            Input::Number(floor) => floor,
            Input::Invalid | Input::Closed => {
                writeln!(self.out, "Invalid input.")?;
                return Ok(false);
            }
        };

        match self.controller.assign_call(floor) {
            Ok(id) => writeln!(self.out, "Hall call at floor {} assigned to Lift {}.", floor, id)?,
            Err(e) if e.is_validation() => writeln!(self.out, "Invalid floor.")?,
            Err(_) => writeln!(self.out, "No elevator available.")?,
        }
        Ok(true)
    }

    fn step(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- Advancing one time step ---")?;
        for arrival in self.controller.step() {
            writeln!(self.out, "{}", render::arrival_text(&arrival))?;
        }
        writeln!(self.out, "--- Time step complete ---\n")
    }

    fn print_status(&mut self) -> io::Result<()> {
        let snapshot = self.controller.snapshot();
        if self.json_status {
            writeln!(self.out, "{}", render::status_json(&snapshot)?)
        } else {
            let text = render::status_text(
                &snapshot,
                self.controller.n_floors(),
                self.controller.steps(),
            );
            write!(self.out, "{}", text)
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "1. Add hall call (someone calls lift from a floor)")?;
        writeln!(self.out, "2. Advance one time step")?;
        writeln!(self.out, "3. Show status")?;
        writeln!(self.out, "4. Exit")?;
        write!(self.out, "Select option: ")?;
        self.out.flush()
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        match self.read_input() {
            Input::Number(value) => Ok(Some(value)),
            Input::Invalid | Input::Closed => Ok(None),
        }
    }

    fn read_input(&self) -> Input {
        match self.input_rx.recv() {
            Ok(line) => match line.trim().parse::<i32>() {
                Ok(value) => Input::Number(value),
                Err(_) => Input::Invalid,
            },
            Err(_) => Input::Closed,
        }
    }
}
