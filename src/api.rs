use log::{debug, info};

use crate::codec::{binary, json};
use crate::geo::errors::GeoResult;
use crate::geo::format::Format;
use crate::geo::point::Point;
use crate::utils::logger::Logger;

/// Main interface to the CoordKit library
pub struct CoordKit {
    logger: Logger,
}

impl CoordKit {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "coordkit.log"
    ///
    /// # Returns
    /// A CoordKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> GeoResult<Self> {
        let log_path = log_file.unwrap_or("coordkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CoordKit { logger })
    }

    /// Parse coordinate text in any supported notation
    ///
    /// # Arguments
    /// * `text` - Coordinate text, latitude first
    ///
    /// # Returns
    /// The parsed point or an error when the text matches no notation
    pub fn parse(&self, text: &str) -> GeoResult<Point> {
        debug!("Parsing coordinate text '{}'", text);
        let point = Point::parse(text)?;

        self.logger.log(&format!(
            "Parsed '{}' as {:.6},{:.6}",
            text,
            point.latitude(),
            point.longitude()
        ))?;
        Ok(point)
    }

    /// Render a point in the requested notation
    ///
    /// # Arguments
    /// * `point` - The point to render
    /// * `format` - Target notation
    ///
    /// # Returns
    /// The rendered text or an error
    pub fn format(&self, point: &Point, format: Format) -> GeoResult<String> {
        debug!("Rendering point as {}", format.name());
        point.format(format)
    }

    /// Re-render coordinate text in another notation
    ///
    /// # Arguments
    /// * `text` - Coordinate text in any supported notation
    /// * `format` - Target notation
    ///
    /// # Returns
    /// The converted text or an error
    pub fn convert(&self, text: &str, format: Format) -> GeoResult<String> {
        let point = self.parse(text)?;
        let converted = point.format(format)?;

        self.logger.log(&format!(
            "Converted '{}' to {}: {}",
            text,
            format.name(),
            converted
        ))?;
        Ok(converted)
    }

    /// Haversine distance between two points in kilometers
    pub fn distance(&self, from: &Point, to: &Point) -> f64 {
        let distance = from.great_circle_distance(to);
        info!("Distance: {:.3} km", distance);
        distance
    }

    /// Initial bearing from one point towards another in degrees
    pub fn bearing(&self, from: &Point, to: &Point) -> f64 {
        let bearing = from.bearing_to(to);
        info!("Initial bearing: {:.3} degrees", bearing);
        bearing
    }

    /// Great-circle midpoint between two points
    pub fn midpoint(&self, a: &Point, b: &Point) -> Point {
        a.midpoint_to(b)
    }

    /// Destination point after travelling a distance (km) on a compass
    /// bearing (degrees)
    pub fn destination(&self, origin: &Point, distance_km: f64, bearing_deg: f64) -> Point {
        debug!(
            "Projecting {:.3} km at {:.3} degrees",
            distance_km, bearing_deg
        );
        origin.point_at_distance_and_bearing(distance_km, bearing_deg)
    }

    /// Encode a point into its 16-byte binary form
    pub fn encode_binary(&self, point: &Point) -> GeoResult<Vec<u8>> {
        binary::encode(point)
    }

    /// Decode a point from its 16-byte binary form
    pub fn decode_binary(&self, data: &[u8]) -> GeoResult<Point> {
        binary::decode(data)
    }

    /// Encode a point as compact JSON
    pub fn encode_json(&self, point: &Point) -> GeoResult<String> {
        json::encode(point)
    }

    /// Decode a point from JSON text
    pub fn decode_json(&self, text: &str) -> GeoResult<Point> {
        json::decode(text)
    }
}
