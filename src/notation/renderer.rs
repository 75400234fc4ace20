//! Coordinate text rendering
//!
//! Renders a point back into any of the supported notations. Degree
//! and minute magnitudes are decomposed from the absolute value; the
//! hemisphere letter carries the sign.

use crate::geo::errors::GeoResult;
use crate::geo::format::Format;
use crate::geo::point::Point;

/// Render a point in the requested notation
pub fn render(point: &Point, format: Format) -> GeoResult<String> {
    let text = match format {
        Format::DecimalDegrees => decimal_degrees(point),
        Format::DecimalMinutes => decimal_minutes(point),
        Format::DecimalSeconds => decimal_seconds(point),
    };
    Ok(text)
}

/// Hemisphere letter for a latitude, north when non-negative
fn ns_hemisphere(lat: f64) -> &'static str {
    if lat < 0.0 {
        "S"
    } else {
        "N"
    }
}

/// Hemisphere letter for a longitude, east when non-negative
fn ew_hemisphere(lng: f64) -> &'static str {
    if lng < 0.0 {
        "W"
    } else {
        "E"
    }
}

/// Split a coordinate into whole degrees and decimal minutes
fn degrees_minutes(value: f64) -> (i64, f64) {
    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let minutes = (magnitude - degrees) * 60.0;
    (degrees as i64, minutes)
}

/// Split a coordinate into whole degrees, whole minutes and decimal
/// seconds
fn degrees_minutes_seconds(value: f64) -> (i64, i64, f64) {
    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let total_minutes = (magnitude - degrees) * 60.0;
    let minutes = total_minutes.trunc();
    let seconds = (total_minutes - minutes) * 60.0;
    (degrees as i64, minutes as i64, seconds)
}

fn decimal_degrees(point: &Point) -> String {
    format!("{:.6},{:.6}", point.latitude(), point.longitude())
}

fn decimal_minutes(point: &Point) -> String {
    let (lat_deg, lat_min) = degrees_minutes(point.latitude());
    let (lng_deg, lng_min) = degrees_minutes(point.longitude());

    format!(
        "{} {} {:.3}, {} {} {:.3}",
        ns_hemisphere(point.latitude()),
        lat_deg,
        lat_min,
        ew_hemisphere(point.longitude()),
        lng_deg,
        lng_min,
    )
}

fn decimal_seconds(point: &Point) -> String {
    let (lat_deg, lat_min, lat_sec) = degrees_minutes_seconds(point.latitude());
    let (lng_deg, lng_min, lng_sec) = degrees_minutes_seconds(point.longitude());

    format!(
        "{} {} {} {:.3}, {} {} {} {:.3}",
        ns_hemisphere(point.latitude()),
        lat_deg,
        lat_min,
        lat_sec,
        ew_hemisphere(point.longitude()),
        lng_deg,
        lng_min,
        lng_sec,
    )
}
