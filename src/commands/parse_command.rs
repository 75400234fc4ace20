//! Coordinate parsing command
//!
//! This module implements the default command: parse the given
//! coordinate text and report the point it describes.

use clap::ArgMatches;
use log::{debug, info};

use crate::codec::json;
use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::Format;
use crate::geo::point::Point;
use crate::utils::logger::Logger;

/// Command for parsing coordinate text
pub struct ParseCommand<'a> {
    /// Raw coordinate text from the CLI
    coordinate: String,
    /// Notation used for the formatted report line
    display_format: Format,
    /// Whether to report every notation
    verbose: bool,
    /// Logger the command reports through
    logger: &'a Logger,
}

impl<'a> ParseCommand<'a> {
    /// Create a new parse command
    ///
    /// # Arguments
    /// * `args` - Argument matches from clap
    /// * `logger` - Logger the command reports through
    /// * `display_format` - Notation for the formatted report line
    ///
    /// # Returns
    /// A new ParseCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger, display_format: Format) -> GeoResult<Self> {
        let coordinate = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(ParseCommand {
            coordinate,
            display_format,
            verbose,
            logger,
        })
    }

    /// Display the parsed point values
    fn display_point_summary(&self, point: &Point) -> GeoResult<()> {
        info!("Parsed point:");
        info!("  Latitude: {:.6}", point.latitude());
        info!("  Longitude: {:.6}", point.longitude());
        info!("  Formatted: {}", point.format(self.display_format)?);
        Ok(())
    }

    /// Display the point in every notation plus its JSON form
    fn display_all_notations(&self, point: &Point) -> GeoResult<()> {
        info!("  Decimal degrees: {}", point.format(Format::DecimalDegrees)?);
        info!("  Decimal minutes: {}", point.format(Format::DecimalMinutes)?);
        info!("  Decimal seconds: {}", point.format(Format::DecimalSeconds)?);
        info!("  JSON: {}", json::encode(point)?);
        Ok(())
    }
}

impl<'a> Command for ParseCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Parsing coordinate: {}", self.coordinate);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let point = Point::parse(&self.coordinate)?;

        self.display_point_summary(&point)?;

        if self.verbose {
            self.display_all_notations(&point)?;
        }

        debug!("Parse completed successfully");
        self.logger.log("Parse completed successfully")?;

        Ok(())
    }
}
