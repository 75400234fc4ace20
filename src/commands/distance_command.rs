//! Route computation command
//!
//! This module implements the command for computing the great-circle
//! distance, initial bearing and midpoint between two coordinates.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::Format;
use crate::geo::point::Point;
use crate::utils::logger::Logger;

/// Command for computing the route between two coordinates
pub struct DistanceCommand<'a> {
    /// Origin coordinate text
    origin: String,
    /// Target coordinate text
    target: String,
    /// Logger the command reports through
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Argument matches from clap
    /// * `logger` - Logger the command reports through
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let origin = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();

        let target = args
            .get_one::<String>("to")
            .ok_or_else(|| GeoError::GenericError("Missing target coordinate".to_string()))?
            .clone();

        Ok(DistanceCommand {
            origin,
            target,
            logger,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Computing route from {} to {}", self.origin, self.target);

        let origin = Point::parse(&self.origin)?;
        let target = Point::parse(&self.target)?;

        debug!(
            "Origin {:.6},{:.6} target {:.6},{:.6}",
            origin.latitude(),
            origin.longitude(),
            target.latitude(),
            target.longitude()
        );

        let distance = origin.great_circle_distance(&target);
        let bearing = origin.bearing_to(&target);
        let midpoint = origin.midpoint_to(&target);

        info!("Route results:");
        info!("  Distance: {:.3} km", distance);
        info!("  Initial bearing: {:.3} degrees", bearing);
        info!("  Midpoint: {}", midpoint.format(Format::DecimalDegrees)?);

        self.logger.log("Route computation successful")?;

        Ok(())
    }
}
