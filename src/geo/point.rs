//! Point structure for representing geographic coordinates

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::format::Format;
use crate::geodesy::sphere;
use crate::notation::{parser, renderer};

/// A geographic point as latitude and longitude in decimal degrees
///
/// North and east are positive. Values are carried as given; no
/// range validation is applied. All transforming operations return
/// a new point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a new point from decimal degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    /// Parse coordinate text in any supported notation
    ///
    /// # Arguments
    ///
    /// * `text` - Coordinate text, e.g. "45.699750,-69.733722" or
    ///   "N 45 41 59.1, W 69 44 1.4"
    ///
    /// # Returns
    ///
    /// The parsed point, or an error when the text matches no notation
    pub fn parse(text: &str) -> GeoResult<Self> {
        parser::parse(text)
    }

    /// Render this point in the given notation
    pub fn format(&self, format: Format) -> GeoResult<String> {
        renderer::render(self, format)
    }

    /// Latitude in decimal degrees, north positive
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, east positive
    pub fn longitude(&self) -> f64 {
        self.lng
    }

    /// Haversine distance to another point in kilometers
    pub fn great_circle_distance(&self, other: &Point) -> f64 {
        sphere::great_circle_distance(self, other)
    }

    /// Initial bearing towards another point, in degrees from north
    pub fn bearing_to(&self, other: &Point) -> f64 {
        sphere::initial_bearing(self, other)
    }

    /// Great-circle midpoint between this point and another
    pub fn midpoint_to(&self, other: &Point) -> Point {
        sphere::midpoint(self, other)
    }

    /// Destination point after travelling a distance (in kilometers)
    /// on a compass bearing (in degrees)
    pub fn point_at_distance_and_bearing(&self, distance_km: f64, bearing_deg: f64) -> Point {
        sphere::destination(self, distance_km, bearing_deg)
    }
}

impl FromStr for Point {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
