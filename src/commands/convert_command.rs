//! Notation conversion command
//!
//! This module implements the command for re-rendering a coordinate
//! in a different notation.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::{Format, FormatFactory};
use crate::geo::point::Point;
use crate::utils::logger::Logger;

/// Command for converting a coordinate between notations
pub struct ConvertCommand<'a> {
    /// Raw coordinate text from the CLI
    coordinate: String,
    /// Target notation
    target_format: Format,
    /// Logger the command reports through
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Argument matches from clap
    /// * `logger` - Logger the command reports through
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let coordinate = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();

        let target_format = match args.get_one::<String>("format") {
            Some(name) => FormatFactory::from_name(name)?,
            None => {
                return Err(GeoError::GenericError(
                    "Missing format specification. Use --format with dd, dm or dms".to_string(),
                ))
            }
        };

        Ok(ConvertCommand {
            coordinate,
            target_format,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!(
            "Converting coordinate {} to {}",
            self.coordinate,
            self.target_format.name()
        );

        let point = Point::parse(&self.coordinate)?;
        let converted = point.format(self.target_format)?;

        info!("  {}", converted);

        info!("Notation conversion successful");
        self.logger.log("Notation conversion successful")?;

        Ok(())
    }
}
