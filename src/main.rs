/* 3rd party libraries */
use clap::{value_parser, Arg, Command};
use log::info;
use std::io;
use std::path::Path;

/* Custom libraries */
use controller::SimulationController;
use shell::Shell;

/* Modules */
mod config;
mod controller;
mod elevator;
mod shared;
mod shell;

/* Command line */
fn cli() -> Command<'static> {
    Command::new("elevator-sim")
        .about("Turn-based simulation of a bank of elevators")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .value_parser(value_parser!(i32))
                .help("Number of floors, overrides the configuration file"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .value_parser(value_parser!(i32))
                .help("Number of elevators, overrides the configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status as JSON"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .takes_value(true)
                .help("Log filter, e.g. info or debug"),
        )
}

/* Main */
fn main() -> io::Result<()> {
    let matches = cli().get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config_result = config::load_config(Path::new(config_path));

    // Logging comes up before reporting configuration problems so they are visible
    let log_level = match (matches.value_of("log-level"), &config_result) {
        (Some(level), _) => level.to_string(),
        (None, Ok(config)) => config.logging.level.clone(),
        (None, Err(_)) => "warn".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = unwrap_or_exit!(config_result);

    let n_floors = matches.get_one::<i32>("floors").copied().or(config.simulation.n_floors);
    let n_elevators = matches
        .get_one::<i32>("elevators")
        .copied()
        .or(config.simulation.n_elevators);
    let json_status = matches.is_present("json") || config.shell.json_status;

    // Start the operator input thread
    let input_rx = shell::spawn_stdin_reader()?;

    // Run the simulation
    let controller = SimulationController::new(config.limits.clone());
    let mut shell = Shell::new(controller, input_rx, io::stdout(), json_status);

    if !shell.setup(n_floors, n_elevators)? {
        info!("Simulation not started");
        return Ok(());
    }

    shell.run()?;
    info!("Simulation finished after {} steps", shell.controller().steps());
    Ok(())
}
