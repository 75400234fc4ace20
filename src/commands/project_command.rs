//! Point projection command
//!
//! This module implements the command for projecting a coordinate to
//! the destination reached by travelling a distance on a compass
//! bearing.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::Format;
use crate::geo::point::Point;
use crate::utils::logger::Logger;

/// Command for projecting a coordinate along a bearing
pub struct ProjectCommand<'a> {
    /// Origin coordinate text
    origin: String,
    /// Distance to travel in kilometers
    distance_km: f64,
    /// Compass bearing in degrees
    bearing_deg: f64,
    /// Logger the command reports through
    logger: &'a Logger,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - Argument matches from clap
    /// * `logger` - Logger the command reports through
    ///
    /// # Returns
    /// A new ProjectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let origin = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();

        let distance_km = match args.get_one::<String>("travel") {
            Some(text) => text
                .parse::<f64>()
                .map_err(|_| GeoError::GenericError(format!("Invalid distance: {}", text)))?,
            None => return Err(GeoError::GenericError("Missing travel distance".to_string())),
        };

        let bearing_deg = match args.get_one::<String>("heading") {
            Some(text) => text
                .parse::<f64>()
                .map_err(|_| GeoError::GenericError(format!("Invalid heading: {}", text)))?,
            None => {
                return Err(GeoError::GenericError(
                    "Missing heading. Use --heading with --travel".to_string(),
                ))
            }
        };

        Ok(ProjectCommand {
            origin,
            distance_km,
            bearing_deg,
            logger,
        })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!(
            "Projecting {} by {} km at {} degrees",
            self.origin, self.distance_km, self.bearing_deg
        );

        let origin = Point::parse(&self.origin)?;
        let destination = origin.point_at_distance_and_bearing(self.distance_km, self.bearing_deg);

        info!("Projection results:");
        info!(
            "  Destination: {}",
            destination.format(Format::DecimalDegrees)?
        );
        info!(
            "  Destination (seconds): {}",
            destination.format(Format::DecimalSeconds)?
        );

        self.logger.log("Projection successful")?;

        Ok(())
    }
}
