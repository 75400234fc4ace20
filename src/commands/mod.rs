//! CLI command implementations
//!
//! One command type per coordinate operation, selected by a factory
//! that inspects which flags were given.

pub mod command_traits;
pub mod parse_command;
pub mod convert_command;
pub mod distance_command;
pub mod project_command;

pub use command_traits::{Command, CommandFactory};
pub use parse_command::ParseCommand;
pub use convert_command::ConvertCommand;
pub use distance_command::DistanceCommand;
pub use project_command::ProjectCommand;

use clap::ArgMatches;
use crate::geo::errors::GeoResult;
use crate::utils::config::CliConfig;
use crate::utils::logger::Logger;

/// Factory choosing a command from the given CLI flags
///
/// `--to` selects the route command, `--travel` the projection
/// command, `--format` the conversion command; with none of those the
/// coordinate is simply parsed and reported.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
        config: &CliConfig,
    ) -> GeoResult<Box<dyn Command + 'a>> {
        // Flag inspection decides the operation
        if args.get_one::<String>("to").is_some() {
            Ok(Box::new(DistanceCommand::new(args, logger)?))
        } else if args.get_one::<String>("travel").is_some() {
            Ok(Box::new(ProjectCommand::new(args, logger)?))
        } else if args.get_one::<String>("format").is_some() {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else {
            // Default to the parse command
            Ok(Box::new(ParseCommand::new(args, logger, config.default_format)?))
        }
    }
}
