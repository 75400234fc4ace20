//! Coordinate notation grammars
//!
//! Three anchored patterns cover the supported notations. Each one is
//! compiled once on first use; candidates are tried in a fixed order,
//! so the first notation that structurally matches the whole input
//! wins.
//!
//! Per axis, every notation allows an optional sign or hemisphere
//! prefix, an optional hemisphere suffix, and optional unit glyphs
//! after the magnitude tokens. Only the last magnitude token of a
//! notation may carry a fractional part. The axes are separated by
//! whitespace or a comma.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Decimal degrees, e.g. 45.699958,-69.733729 or N 45.699958 W 69.733729
    static ref DECIMAL_DEGREES: Regex = Regex::new(
        r#"^\s*(?P<ns>[NS+-]?)\s*(?P<lat_deg>\d{1,2}(?:\.\d*)?)°?\s*(?P<ns2>[NS]?)(?:\s+|\s*,\s*)(?P<ew>[EW+-]?)\s*(?P<lon_deg>\d{1,3}(?:\.\d*)?)°?\s*(?P<ew2>[EW]?)\s*$"#
    ).unwrap();

    /// Decimal minutes, e.g. 45 41.997, -69 44.024 or N 45 41.997 W 69 44.024
    static ref DECIMAL_MINUTES: Regex = Regex::new(
        r#"^\s*(?P<ns>[NS+-]?)\s*(?P<lat_deg>\d{1,2})°?\s+(?P<lat_min>\d{1,2}(?:\.\d*)?)'?\s*(?P<ns2>[NS]?)(?:\s+|\s*,\s*)(?P<ew>[EW+-]?)\s*(?P<lon_deg>\d{1,3})°?\s+(?P<lon_min>\d{1,2}(?:\.\d*)?)'?\s*(?P<ew2>[EW]?)\s*$"#
    ).unwrap();

    /// Decimal seconds, e.g. 45 41 59.85, -69 44 01.42 or N 45 41 59.85, W 69 44 01.42
    static ref DECIMAL_SECONDS: Regex = Regex::new(
        r#"^\s*(?P<ns>[NS+-]?)\s*(?P<lat_deg>\d{1,2})°?\s+(?P<lat_min>\d{1,2})'?\s+(?P<lat_sec>\d{1,2}(?:\.\d*)?)"?\s*(?P<ns2>[NS]?)(?:\s+|\s*,\s*)(?P<ew>[EW+-]?)\s*(?P<lon_deg>\d{1,3})°?\s+(?P<lon_min>\d{1,2})'?\s+(?P<lon_sec>\d{1,2}(?:\.\d*)?)"?\s*(?P<ew2>[EW]?)\s*$"#
    ).unwrap();
}

/// Match coordinate text against the supported notations
///
/// Returns the captures of the first notation that matches, or
/// `None` when the text fits none of them.
pub(crate) fn match_notation(text: &str) -> Option<Captures<'_>> {
    DECIMAL_DEGREES
        .captures(text)
        .or_else(|| DECIMAL_MINUTES.captures(text))
        .or_else(|| DECIMAL_SECONDS.captures(text))
}
