use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use coordkit::utils::config::{CliConfig, DEFAULT_CONFIG_FILE};
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Parse, convert and route geographic coordinates")
        .arg(
            Arg::new("coordinate")
                .help("Coordinate text, latitude first (e.g. \"45.699750,-69.733722\")")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Render the coordinate in a notation (dd, dm, dms)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Second coordinate for distance, bearing and midpoint")
                .value_name("COORDINATE")
                .required(false),
        )
        .arg(
            Arg::new("travel")
                .long("travel")
                .help("Distance to travel in kilometers (requires --heading)")
                .value_name("KM")
                .required(false),
        )
        .arg(
            Arg::new("heading")
                .long("heading")
                .help("Compass bearing in degrees for --travel")
                .value_name("DEGREES")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a configuration file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE);

    let config = match CliConfig::load_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logger = match Logger::new(&config.log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("coordkit-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger, &config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
