//! Coordinate text parsing
//!
//! Turns human-written latitude/longitude text into a point. The
//! grammar captures, per axis, an optional sign or hemisphere prefix,
//! one to three magnitude tokens and an optional hemisphere suffix;
//! the magnitudes combine positionally in base 60.

use regex::Captures;

use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::point::Point;
use crate::notation::grammar;

/// Capture group names that make up one axis of a notation
struct AxisGroups {
    /// Sign or hemisphere prefix group
    prefix: &'static str,
    /// Magnitude groups in positional order; names a notation lacks
    /// simply never capture
    magnitudes: [&'static str; 3],
    /// Hemisphere suffix group
    suffix: &'static str,
}

/// Latitude half of every notation
const LAT_GROUPS: AxisGroups = AxisGroups {
    prefix: "ns",
    magnitudes: ["lat_deg", "lat_min", "lat_sec"],
    suffix: "ns2",
};

/// Longitude half of every notation
const LNG_GROUPS: AxisGroups = AxisGroups {
    prefix: "ew",
    magnitudes: ["lon_deg", "lon_min", "lon_sec"],
    suffix: "ew2",
};

/// Sign markers and magnitude tokens captured for one axis
struct AxisTokens<'t> {
    prefix: &'t str,
    magnitudes: Vec<&'t str>,
    suffix: &'t str,
}

impl<'t> AxisTokens<'t> {
    /// Collect the participating captures for one axis
    fn from_captures(caps: &Captures<'t>, groups: &AxisGroups) -> Self {
        let magnitudes = groups
            .magnitudes
            .iter()
            .filter_map(|name| caps.name(name))
            .map(|m| m.as_str())
            .collect();

        AxisTokens {
            prefix: caps.name(groups.prefix).map_or("", |m| m.as_str()),
            magnitudes,
            suffix: caps.name(groups.suffix).map_or("", |m| m.as_str()),
        }
    }

    /// An axis is negative when any southern, western or minus marker
    /// appears around its digits, before or after.
    fn is_negative(&self) -> bool {
        matches!(self.prefix, "S" | "W" | "-") || matches!(self.suffix, "S" | "W")
    }

    /// Combine the magnitude tokens positionally in base 60: degrees,
    /// then minutes, then seconds, each divided by a further factor
    /// of 60.
    fn reduce(&self) -> GeoResult<f64> {
        let mut value = 0.0;
        let mut divisor = 1.0;

        for token in &self.magnitudes {
            let magnitude: f64 = token
                .parse()
                .map_err(|_| GeoError::NumericConversion(token.to_string()))?;
            value += magnitude / divisor;
            divisor *= 60.0;
        }

        if self.is_negative() {
            value = -value;
        }
        Ok(value)
    }
}

/// Parse latitude/longitude text in any supported notation
///
/// The latitude always comes first. Text that fits none of the
/// notations yields a `MalformedCoordinate` error carrying the
/// offending input.
pub fn parse(text: &str) -> GeoResult<Point> {
    let caps = grammar::match_notation(text)
        .ok_or_else(|| GeoError::MalformedCoordinate(text.to_string()))?;

    let lat = AxisTokens::from_captures(&caps, &LAT_GROUPS).reduce()?;
    let lng = AxisTokens::from_captures(&caps, &LNG_GROUPS).reduce()?;

    Ok(Point::new(lat, lng))
}
