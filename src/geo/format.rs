//! Output notation selection

use crate::geo::errors::{GeoError, GeoResult};

/// Identifier for the supported text notations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Decimal degrees, e.g. 45.699750,-69.733722
    DecimalDegrees,
    /// Decimal minutes, e.g. N 45 41.985, W 69 44.023
    DecimalMinutes,
    /// Decimal seconds, e.g. N 45 41 59.100, W 69 44 1.399
    DecimalSeconds,
}

impl Format {
    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            Format::DecimalDegrees => "decimal degrees",
            Format::DecimalMinutes => "decimal minutes",
            Format::DecimalSeconds => "decimal seconds",
        }
    }
}

/// Factory for resolving formats from user-supplied names
pub struct FormatFactory;

impl FormatFactory {
    /// Parse a format from a string (e.g. "dd", "minutes", "dms")
    pub fn from_name(name: &str) -> GeoResult<Format> {
        match name.trim().to_lowercase().as_str() {
            "dd" | "degrees" | "decimal-degrees" => Ok(Format::DecimalDegrees),
            "dm" | "minutes" | "decimal-minutes" => Ok(Format::DecimalMinutes),
            "dms" | "seconds" | "decimal-seconds" => Ok(Format::DecimalSeconds),
            _ => Err(GeoError::UnsupportedFormat(name.to_string())),
        }
    }
}
