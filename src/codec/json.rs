//! JSON point interchange
//!
//! A point travels as `{"lat":<number>,"lng":<number>}`. Both keys
//! must be present and numeric on the way in; unknown keys are
//! ignored.

use crate::geo::errors::GeoResult;
use crate::geo::point::Point;

/// Encode a point as compact JSON
pub fn encode(point: &Point) -> GeoResult<String> {
    Ok(serde_json::to_string(point)?)
}

/// Decode a point from JSON text
pub fn decode(text: &str) -> GeoResult<Point> {
    Ok(serde_json::from_str(text)?)
}
